//! The merge orchestrator.
//!
//! Walks a decoded diff and dispatches each entry on the target field's
//! [`Slot`]: scalar coercion, label decode, recursive merge into a nested
//! object, or wholesale replacement of a record sequence. Keys absent from
//! the schema or the allow-list are skipped without error. Changes are
//! staged on a draft and committed only when every entry succeeds.

use serde_json::{Map, Value};

use crate::coerce;
use crate::schema::{Field, Mergeable, Slot};
use crate::types::{AllowList, MergeError, MergeOptions};

/// Applies `diff` to `target` under `allow` with default options.
pub fn merge<T: Mergeable>(
    target: &mut T,
    diff: &Map<String, Value>,
    allow: &AllowList<'_>,
) -> Result<(), MergeError> {
    merge_with(target, diff, allow, &MergeOptions::default())
}

/// Applies `diff` to `target` under `allow`.
///
/// Atomic: on any failure `target` is left exactly as it was.
pub fn merge_with<T: Mergeable>(
    target: &mut T,
    diff: &Map<String, Value>,
    allow: &AllowList<'_>,
    opts: &MergeOptions,
) -> Result<(), MergeError> {
    let mut draft = target.clone();
    for (name, value) in diff {
        let Some(field) = T::field(name) else {
            tracing::debug!(field = %name, "diff key absent from schema, skipping");
            continue;
        };
        if !allow.allows(name) {
            tracing::debug!(field = %name, "diff key not in allow-list, skipping");
            continue;
        }
        apply_field(&mut draft, field, value, opts)?;
    }
    *target = draft;
    Ok(())
}

/// Merges a diff into a nested record with every field allowed.
///
/// Used by `Slot::Object` mutators when recursing (the parent field was
/// already authorized as a whole), and by create flows merging into a
/// zero-valued record.
pub fn merge_into<T: Mergeable>(
    target: &mut T,
    diff: &Map<String, Value>,
    opts: &MergeOptions,
) -> Result<(), MergeError> {
    merge_with(target, diff, &AllowList::All, opts)
}

/// Builds a fresh record sequence from diff elements.
///
/// Each element must be a JSON object and is merged into a zero-valued
/// record; the existing sequence plays no part in the result.
pub fn rebuild_records<E: Mergeable>(
    field: &str,
    items: &[Value],
    opts: &MergeOptions,
) -> Result<Vec<E>, MergeError> {
    let mut records = Vec::with_capacity(items.len());
    for item in items {
        let diff = item
            .as_object()
            .ok_or_else(|| MergeError::type_mismatch(field, "object", item))?;
        let mut record = E::default();
        merge_into(&mut record, diff, opts)?;
        records.push(record);
    }
    Ok(records)
}

// ── Per-field dispatch ────────────────────────────────────────────────────

fn apply_field<T: Mergeable>(
    target: &mut T,
    field: &Field<T>,
    value: &Value,
    opts: &MergeOptions,
) -> Result<(), MergeError> {
    if value.is_null() {
        return clear_field(target, field);
    }
    match &field.slot {
        Slot::Bool(get) => *get(target) = coerce::to_bool(field.name, value)?,
        Slot::U32(get) => *get(target) = coerce::to_integer(field.name, value, opts)? as u32,
        Slot::I64(get) => *get(target) = coerce::to_integer(field.name, value, opts)? as i64,
        Slot::F32(get) => *get(target) = coerce::to_f64(field.name, value)? as f32,
        Slot::F64(get) => *get(target) = coerce::to_f64(field.name, value)?,
        Slot::Str(get) => *get(target) = coerce::to_string(field.name, value)?,
        Slot::Label(slot) => {
            let label = value
                .as_str()
                .ok_or_else(|| MergeError::type_mismatch(field.name, "string", value))?;
            (slot.set)(target, label)?;
        }
        Slot::Object(slot) => {
            let diff = value
                .as_object()
                .ok_or_else(|| MergeError::type_mismatch(field.name, "object", value))?;
            (slot.merge)(target, diff, opts)?;
        }
        Slot::Records(slot) => {
            let items = value
                .as_array()
                .ok_or_else(|| MergeError::type_mismatch(field.name, "array", value))?;
            (slot.replace)(target, field.name, items, opts)?;
        }
        Slot::Opaque => {
            return Err(MergeError::UnsupportedField {
                field: field.name.to_string(),
            })
        }
    }
    Ok(())
}

/// A null diff value zeroes the field, whatever its kind.
///
/// Opaque fields have no mutator, so addressing one with null is the same
/// schema-coverage failure as any other value.
fn clear_field<T: Mergeable>(target: &mut T, field: &Field<T>) -> Result<(), MergeError> {
    match &field.slot {
        Slot::Bool(get) => *get(target) = false,
        Slot::U32(get) => *get(target) = 0,
        Slot::I64(get) => *get(target) = 0,
        Slot::F32(get) => *get(target) = 0.0,
        Slot::F64(get) => *get(target) = 0.0,
        Slot::Str(get) => get(target).clear(),
        Slot::Label(slot) => (slot.clear)(target),
        Slot::Object(slot) => (slot.clear)(target),
        Slot::Records(slot) => (slot.clear)(target),
        Slot::Opaque => {
            return Err(MergeError::UnsupportedField {
                field: field.name.to_string(),
            })
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
