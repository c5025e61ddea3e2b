//! Lesson material: everything played back alongside the avatar.

use chrono::{DateTime, Utc};
use courseware_merge::{merge_into, rebuild_records, Field, Mergeable};
use serde::{Deserialize, Serialize};

use crate::drawing::LessonDrawing;
use crate::embedding::LessonEmbedding;
use crate::graphic::LessonGraphic;
use crate::music::LessonMusic;
use crate::speech::LessonSpeech;
use crate::voice::VoiceSynthesisConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonMaterial {
    pub id: String,
    #[serde(rename = "lessonID")]
    pub lesson_id: String,
    pub duration_sec: f32,
    #[serde(rename = "avatarID")]
    pub avatar_id: String,
    pub avatar_light_color: String,
    #[serde(rename = "backgroundImageID")]
    pub background_image_id: String,
    pub voice_synthesis_config: VoiceSynthesisConfig,
    pub graphics: Vec<LessonGraphic>,
    pub drawings: Vec<LessonDrawing>,
    pub speeches: Vec<LessonSpeech>,
    pub embeddings: Vec<LessonEmbedding>,
    pub musics: Vec<LessonMusic>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
}

impl Mergeable for LessonMaterial {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<LessonMaterial>] = &[
            Field::opaque("id"),
            Field::opaque("lessonID"),
            Field::f32("durationSec", |m| &mut m.duration_sec),
            Field::str("avatarID", |m| &mut m.avatar_id),
            Field::str("avatarLightColor", |m| &mut m.avatar_light_color),
            Field::str("backgroundImageID", |m| &mut m.background_image_id),
            Field::object(
                "voiceSynthesisConfig",
                |m, diff, opts| merge_into(&mut m.voice_synthesis_config, diff, opts),
                |m| m.voice_synthesis_config = VoiceSynthesisConfig::default(),
            ),
            Field::records(
                "graphics",
                |m, field, items, opts| {
                    m.graphics = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |m| m.graphics.clear(),
            ),
            Field::records(
                "drawings",
                |m, field, items, opts| {
                    m.drawings = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |m| m.drawings.clear(),
            ),
            Field::records(
                "speeches",
                |m, field, items, opts| {
                    m.speeches = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |m| m.speeches.clear(),
            ),
            Field::records(
                "embeddings",
                |m, field, items, opts| {
                    m.embeddings = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |m| m.embeddings.clear(),
            ),
            Field::records(
                "musics",
                |m, field, items, opts| {
                    m.musics = rebuild_records(field, items, opts)?;
                    Ok(())
                },
                |m| m.musics.clear(),
            ),
            Field::opaque("created"),
            Field::opaque("updated"),
        ];
        FIELDS
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
