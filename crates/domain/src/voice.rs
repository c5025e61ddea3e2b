//! Synthesized-voice configuration shared by materials and speeches.

use courseware_merge::{Field, Mergeable};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VoiceSynthesisConfig {
    pub language_code: String,
    pub name: String,
    pub speaking_rate: f64,
    pub pitch: f64,
    pub volume_gain_db: f64,
}

impl Mergeable for VoiceSynthesisConfig {
    fn fields() -> &'static [Field<Self>] {
        const FIELDS: &[Field<VoiceSynthesisConfig>] = &[
            Field::str("languageCode", |c| &mut c.language_code),
            Field::str("name", |c| &mut c.name),
            Field::f64("speakingRate", |c| &mut c.speaking_rate),
            Field::f64("pitch", |c| &mut c.pitch),
            Field::f64("volumeGainDb", |c| &mut c.volume_gain_db),
        ];
        FIELDS
    }
}
