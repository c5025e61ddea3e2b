//! String-backed closed enumerations.
//!
//! Each enum declares its label table once; decoding is a single generic
//! table scan shared by every enum, and encoding is the enum's own
//! infallible inverse. The two must round-trip exactly.

use crate::types::MergeError;

/// A closed enumeration encoded as a fixed set of string labels.
pub trait LabelEnum: Copy + Default + PartialEq + Sized + 'static {
    /// Enum name used in `InvalidLabel` errors.
    const NAME: &'static str;

    /// Label ↔ value pairs, one per variant.
    const TABLE: &'static [(&'static str, Self)];

    /// The label for this value. Exact inverse of [`from_label`].
    ///
    /// [`from_label`]: LabelEnum::from_label
    fn as_label(self) -> &'static str;

    /// Decodes a label through the table; unknown labels fail.
    fn from_label(label: &str) -> Result<Self, MergeError> {
        Self::TABLE
            .iter()
            .find(|(name, _)| *name == label)
            .map(|(_, value)| *value)
            .ok_or_else(|| MergeError::InvalidLabel {
                label: label.to_string(),
                enum_name: Self::NAME,
            })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
