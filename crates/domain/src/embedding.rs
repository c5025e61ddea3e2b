//! Embedded external content (videos, slides) timed into a lesson.

use courseware_merge::{Field, LabelEnum, Mergeable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbeddingAction {
    #[default]
    Show,
    Hide,
}

impl LabelEnum for EmbeddingAction {
    const NAME: &'static str = "embedding action";
    const TABLE: &'static [(&'static str, Self)] = &[("show", Self::Show), ("hide", Self::Hide)];

    fn as_label(self) -> &'static str {
        match self {
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonEmbedding {
    pub action: EmbeddingAction,
    #[serde(rename = "contentID")]
    pub content_id: String,
    pub service_name: String,
    pub start_at_sec: f32,
}

impl Mergeable for LessonEmbedding {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<LessonEmbedding>] = &[
            Field::label(
                "action",
                |e, v| {
                    e.action = EmbeddingAction::from_label(v)?;
                    Ok(())
                },
                |e| e.action = EmbeddingAction::Show,
            ),
            Field::str("contentID", |e| &mut e.content_id),
            Field::str("serviceName", |e| &mut e.service_name),
            Field::f32("startAtSec", |e| &mut e.start_at_sec),
        ];
        FIELDS
    }
}
