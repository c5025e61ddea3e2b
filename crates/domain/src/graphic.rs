//! Graphics shown during a lesson.

use courseware_merge::{Field, LabelEnum, Mergeable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphicAction {
    #[default]
    Show,
    Hide,
}

impl LabelEnum for GraphicAction {
    const NAME: &'static str = "graphic action";
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
pub struct LessonGraphic {
    #[serde(rename = "graphicID")]
    pub graphic_id: String,
    pub action: GraphicAction,
}

impl Mergeable for LessonGraphic {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<LessonGraphic>] = &[
            Field::str("graphicID", |g| &mut g.graphic_id),
            Field::label(
                "action",
                |g, v| {
                    g.action = GraphicAction::from_label(v)?;
                    Ok(())
                },
                |g| g.action = GraphicAction::Show,
            ),
        ];
        FIELDS
    }
}
