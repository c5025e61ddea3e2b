//! Lessons and their book references.

use chrono::{DateTime, Utc};
use courseware_merge::{rebuild_records, Field, LabelEnum, Mergeable};
use serde::{Deserialize, Serialize};

use crate::graphic::LessonGraphic;

/// Publication state of a lesson.
///
/// `limited` lessons are reachable by link but not listed publicly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    #[default]
    Draft,
    Limited,
    Public,
}

impl LabelEnum for LessonStatus {
    const NAME: &'static str = "lesson status";
    const TABLE: &'static [(&'static str, Self)] = &[
        ("draft", Self::Draft),
        ("limited", Self::Limited),
        ("public", Self::Public),
    ];

    fn as_label(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Limited => "limited",
            Self::Public => "public",
        }
    }
}

/// A book the lesson refers to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonReference {
    pub isbn: String,
    pub name: String,
}

impl Mergeable for LessonReference {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<LessonReference>] = &[
            Field::str("isbn", |r| &mut r.isbn),
            Field::str("name", |r| &mut r.name),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Lesson {
    pub id: String,
    pub status: LessonStatus,
    pub title: String,
    pub description: String,
    pub duration_sec: f32,
    pub view_count: u32,
    pub version: i64,
    pub references: Vec<LessonReference>,
    pub graphics: Vec<LessonGraphic>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl Mergeable for Lesson {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<Lesson>] = &[
            Field::opaque("id"),
            Field::label(
                "status",
                |l, v| {
                    l.status = LessonStatus::from_label(v)?;
                    Ok(())
                },
                |l| l.status = LessonStatus::Draft,
            ),
            Field::str("title", |l| &mut l.title),
            Field::str("description", |l| &mut l.description),
            Field::f32("durationSec", |l| &mut l.duration_sec),
            Field::u32("viewCount", |l| &mut l.view_count),
            Field::i64("version", |l| &mut l.version),
            Field::records(
                "references",
                |l, field, items, opts| {
                    l.references = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |l| l.references.clear(),
            ),
            Field::records(
                "graphics",
                |l, field, items, opts| {
                    l.graphics = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |l| l.graphics.clear(),
            ),
            Field::opaque("created"),
            Field::opaque("updated"),
        ];
        FIELDS
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
