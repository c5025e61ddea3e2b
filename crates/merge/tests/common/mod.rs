//! Shared fixture records for the integration suites.

use courseware_merge::{
    merge_into, rebuild_records, Field, LabelEnum, MergeError, Mergeable,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CardState {
    #[default]
    Open,
    Archived,
}

impl LabelEnum for CardState {
    const NAME: &'static str = "card state";
    const TABLE: &'static [(&'static str, Self)] =
        &[("open", Self::Open), ("archived", Self::Archived)];

    fn as_label(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Theme {
    pub color: String,
    pub opacity: f64,
}

impl Mergeable for Theme {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<Theme>] = &[
            Field::str("color", |t| &mut t.color),
            Field::f64("opacity", |t| &mut t.opacity),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tag {
    pub name: String,
    pub weight: u32,
}

impl Mergeable for Tag {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<Tag>] = &[
            Field::str("name", |t| &mut t.name),
            Field::u32("weight", |t| &mut t.weight),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Card {
    pub title: String,
    pub state: CardState,
    pub starred: bool,
    pub views: u32,
    pub theme: Theme,
    pub tags: Vec<Tag>,
}

impl Mergeable for Card {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<Card>] = &[
            Field::opaque("id"),
            Field::str("title", |c| &mut c.title),
            Field::label(
                "state",
                |c, v| {
                    c.state = CardState::from_label(v)?;
                    Ok(())
                },
                |c| c.state = CardState::Open,
            ),
            Field::bool("starred", |c| &mut c.starred),
            Field::u32("views", |c| &mut c.views),
            Field::object(
                "theme",
                |c, diff, opts| merge_into(&mut c.theme, diff, opts),
                |c| c.theme = Theme::default(),
            ),
            Field::records(
                "tags",
                |c, field, items, opts| {
                    c.tags = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |c| c.tags.clear(),
            ),
            Field::opaque("updated"),
        ];
        FIELDS
    }
}

#[allow(dead_code)]
pub fn sample_card() -> Card {
    Card {
        title: "syllabus".to_string(),
        state: CardState::Open,
        starred: true,
        views: 41,
        theme: Theme {
            color: "teal".to_string(),
            opacity: 0.8,
        },
        tags: vec![
            Tag {
                name: "algebra".to_string(),
                weight: 2,
            },
            Tag {
                name: "geometry".to_string(),
                weight: 5,
            },
        ],
    }
}

#[allow(dead_code)]
pub fn expect_type_mismatch(err: MergeError, field: &str, expected: &str) {
    match err {
        MergeError::TypeMismatch {
            field: f,
            expected: e,
            ..
        } => {
            assert_eq!(f, field);
            assert_eq!(e, expected);
        }
        other => panic!("expected TypeMismatch, got {other:?}"),
    }
}
