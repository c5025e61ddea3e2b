//! courseware-domain — lesson content records.
//!
//! The entities of the authoring API: lessons and the material attached to
//! them (graphics, drawings, speeches, embeddings, musics), with their
//! closed enumerations and merge schemas. Partial updates from clients are
//! applied through `courseware-merge` under the allow-lists in [`policy`].
//!
//! Wire names are camelCase with an uppercase `ID` suffix on identifier
//! fields (`graphicID`, `avatarID`); the serde attributes and the merge
//! schemas agree on them.

pub mod lesson;
pub mod material;
pub mod voice;
pub mod graphic;
pub mod drawing;
pub mod speech;
pub mod embedding;
pub mod music;
pub mod policy;

pub use lesson::{Lesson, LessonReference, LessonStatus};
pub use material::LessonMaterial;
pub use voice::VoiceSynthesisConfig;
pub use graphic::{GraphicAction, LessonGraphic};
pub use drawing::{
    DrawingAction, DrawingStroke, DrawingUnit, DrawingUnitAction, LessonDrawing, StrokePosition,
};
pub use speech::{LessonSpeech, SpeechCaption};
pub use embedding::{EmbeddingAction, LessonEmbedding};
pub use music::{LessonMusic, MusicAction};
