//! Client-writability policy.
//!
//! The allow-lists the API layer hands to the merge engine for each entity.
//! Store-managed fields (ids, timestamps) and server-computed counters
//! (`viewCount`, `version`) are deliberately absent: clients can never
//! write them, whatever the request body says. The merge engine itself
//! treats these lists as opaque input.

/// Lesson fields a client may set through the authoring API.
///
/// `status` additionally requires the caller to be the lesson owner; that
/// check happens before the list is passed down, not here.
pub const LESSON_CLIENT_WRITABLE: &[&str] = &[
    "status",
    "title",
    "description",
    "durationSec",
    "references",
    "graphics",
];

/// Material fields a client may set through the authoring API.
pub const MATERIAL_CLIENT_WRITABLE: &[&str] = &[
    "durationSec",
    "avatarID",
    "avatarLightColor",
    "backgroundImageID",
    "voiceSynthesisConfig",
    "graphics",
    "drawings",
    "speeches",
    "embeddings",
    "musics",
];

// ── Tests ─────────────────────────────────────────────────────────────────
