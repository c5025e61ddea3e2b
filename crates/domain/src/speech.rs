//! Spoken lines: subtitles, captions, and their synthesis settings.

use courseware_merge::{merge_into, Field, Mergeable};
use serde::{Deserialize, Serialize};

use crate::voice::VoiceSynthesisConfig;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechCaption {
    pub body: String,
    pub color: String,
}

impl Mergeable for SpeechCaption {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<SpeechCaption>] = &[
            Field::str("body", |c| &mut c.body),
            Field::str("color", |c| &mut c.color),
        ];
        FIELDS
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LessonSpeech {
    pub duration_sec: f32,
    #[serde(rename = "voiceID")]
    pub voice_id: String,
    pub subtitle: String,
    pub caption: SpeechCaption,
    pub voice_synthesis_config: VoiceSynthesisConfig,
}

impl Mergeable for LessonSpeech {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<LessonSpeech>] = &[
            Field::f32("durationSec", |s| &mut s.duration_sec),
            Field::str("voiceID", |s| &mut s.voice_id),
            Field::str("subtitle", |s| &mut s.subtitle),
            Field::object(
                "caption",
                |s, diff, opts| merge_into(&mut s.caption, diff, opts),
                |s| s.caption = SpeechCaption::default(),
            ),
            Field::object(
                "voiceSynthesisConfig",
                |s, diff, opts| merge_into(&mut s.voice_synthesis_config, diff, opts),
                |s| s.voice_synthesis_config = VoiceSynthesisConfig::default(),
            ),
        ];
        FIELDS
    }
}
