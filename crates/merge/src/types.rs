//! Core types for the merge engine.

use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

/// Failure produced while applying a diff to a record.
///
/// All variants are synchronous and non-retryable: they indicate either a
/// malformed client payload (`TypeMismatch`, `InvalidLabel`) or a
/// schema-registration gap (`UnsupportedField`). A failing merge never
/// leaves the target partially updated.
#[derive(Debug, Error, PartialEq)]
pub enum MergeError {
    #[error("field {field:?}: expected {expected}, got {found}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
    #[error("unknown {enum_name} label {label:?}")]
    InvalidLabel {
        label: String,
        enum_name: &'static str,
    },
    #[error("field {field:?} has no merge rule")]
    UnsupportedField { field: String },
}

impl MergeError {
    pub(crate) fn type_mismatch(
        field: &str,
        expected: &'static str,
        value: &serde_json::Value,
    ) -> Self {
        MergeError::TypeMismatch {
            field: field.to_string(),
            expected,
            found: crate::coerce::shape_of(value),
        }
    }
}

// ── Allow-list ────────────────────────────────────────────────────────────

/// Names a diff is permitted to touch.
///
/// Callers pass [`AllowList::Only`] computed from their business rules.
/// [`AllowList::All`] is used when recursing into a nested value object:
/// authorizing the parent field authorizes all of its internals.
#[derive(Debug, Clone, Copy)]
pub enum AllowList<'a> {
    All,
    Only(&'a [&'a str]),
}

impl AllowList<'_> {
    pub fn allows(&self, name: &str) -> bool {
        match self {
            AllowList::All => true,
            AllowList::Only(names) => names.iter().any(|n| *n == name),
        }
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Options for [`merge_with`](crate::apply::merge_with).
#[derive(Debug, Clone)]
pub struct MergeOptions {
    /// If true, a fractional JSON number assigned to an integer field is a
    /// `TypeMismatch` instead of being truncated toward zero.
    pub reject_fractional: bool,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Self {
            reject_fractional: false,
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
