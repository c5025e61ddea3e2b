//! Blackboard drawings: timed strokes grouped into units.

use courseware_merge::{merge_into, rebuild_records, Field, LabelEnum, Mergeable};
use serde::{Deserialize, Serialize};

/// What a drawing entry does to the board as a whole.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingAction {
    #[default]
    Draw,
    Clear,
    Show,
    Hide,
}

impl LabelEnum for DrawingAction {
    const NAME: &'static str = "drawing action";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("draw", Self::Draw),
        ("clear", Self::Clear),
        ("show", Self::Show),
        ("hide", Self::Hide),
    ];

    fn as_label(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Clear => "clear",
            Self::Show => "show",
            Self::Hide => "hide",
        }
    }
}

/// What a single unit within a drawing entry does.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawingUnitAction {
    #[default]
    Draw,
    Undo,
}

impl LabelEnum for DrawingUnitAction {
    const NAME: &'static str = "drawing unit action";
    const TABLE: &'static [(&'static str, Self)] = &[("draw", Self::Draw), ("undo", Self::Undo)];

    fn as_label(self) -> &'static str {
        match self {
            Self::Draw => "draw",
            Self::Undo => "undo",
        }
    }
}

/// A point on the board, in normalized coordinates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StrokePosition {
    pub x: f64,
    pub y: f64,
}

impl Mergeable for StrokePosition {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<StrokePosition>] = &[
            Field::f64("x", |p| &mut p.x),
            Field::f64("y", |p| &mut p.y),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawingStroke {
    pub eraser: bool,
    pub color: String,
    pub line_width: f64,
    pub positions: Vec<StrokePosition>,
}

impl Mergeable for DrawingStroke {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<DrawingStroke>] = &[
            Field::bool("eraser", |s| &mut s.eraser),
            Field::str("color", |s| &mut s.color),
            Field::f64("lineWidth", |s| &mut s.line_width),
            Field::records(
                "positions",
                |s, field, items, opts| {
                    s.positions = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |s| s.positions.clear(),
            ),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DrawingUnit {
    pub action: DrawingUnitAction,
    pub duration_sec: f32,
    pub stroke: DrawingStroke,
}

impl Mergeable for DrawingUnit {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<DrawingUnit>] = &[
            Field::label(
                "action",
                |u, v| {
                    u.action = DrawingUnitAction::from_label(v)?;
                    Ok(())
                },
                |u| u.action = DrawingUnitAction::Draw,
            ),
            Field::f32("durationSec", |u| &mut u.duration_sec),
            Field::object(
                "stroke",
                |u, diff, opts| merge_into(&mut u.stroke, diff, opts),
                |u| u.stroke = DrawingStroke::default(),
            ),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonDrawing {
    pub action: DrawingAction,
    pub duration_sec: f32,
    pub units: Vec<DrawingUnit>,
}

impl Mergeable for LessonDrawing {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<LessonDrawing>] = &[
            Field::label(
                "action",
                |d, v| {
                    d.action = DrawingAction::from_label(v)?;
                    Ok(())
                },
                |d| d.action = DrawingAction::Draw,
            ),
            Field::f32("durationSec", |d| &mut d.duration_sec),
            Field::records(
                "units",
                |d, field, items, opts| {
                    d.units = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |d| d.units.clear(),
            ),
        ];
        FIELDS
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn action_labels_round_trip() {
        for (label, value) in DrawingAction::TABLE {
            assert_eq!(DrawingAction::from_label(label), Ok(*value));
            assert_eq!(value.as_label(), *label);
        }
        for (label, value) in DrawingUnitAction::TABLE {
            assert_eq!(DrawingUnitAction::from_label(label), Ok(*value));
            assert_eq!(value.as_label(), *label);
        }
    }

    #[test]
    fn undo_is_not_a_board_level_action() {
        assert!(DrawingAction::from_label("undo").is_err());
    }
}
