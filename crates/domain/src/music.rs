//! Background music cues.

use courseware_merge::{Field, LabelEnum, Mergeable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MusicAction {
    #[default]
    Start,
    Stop,
}

impl LabelEnum for MusicAction {
    const NAME: &'static str = "music action";
    const TABLE: &'static [(&'static str, Self)] = &[("start", Self::Start), ("stop", Self::Stop)];

    fn as_label(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonMusic {
    pub action: MusicAction,
    #[serde(rename = "backgroundMusicID")]
    pub background_music_id: String,
    pub volume: f64,
    pub is_fading: bool,
    pub is_loop: bool,
}

impl Mergeable for LessonMusic {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<LessonMusic>] = &[
            Field::label(
                "action",
                |m, v| {
                    m.action = MusicAction::from_label(v)?;
                    Ok(())
                },
                |m| m.action = MusicAction::Start,
            ),
            Field::str("backgroundMusicID", |m| &mut m.background_music_id),
            Field::f64("volume", |m| &mut m.volume),
            Field::bool("isFading", |m| &mut m.is_fading),
            Field::bool("isLoop", |m| &mut m.is_loop),
        ];
        FIELDS
    }
}
