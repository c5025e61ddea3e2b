//! Scalar coercion from JSON shapes into primitive field targets.
//!
//! JSON numbers always decode as floating point, so integer targets are
//! narrowed here. The default policy truncates toward zero;
//! [`MergeOptions::reject_fractional`] switches to rejecting non-integral
//! input instead.

use serde_json::Value;

use crate::types::{MergeError, MergeOptions};

/// Shape name of a JSON value, as reported in `TypeMismatch` errors.
pub fn shape_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn to_bool(field: &str, value: &Value) -> Result<bool, MergeError> {
    value
        .as_bool()
        .ok_or_else(|| MergeError::type_mismatch(field, "boolean", value))
}

pub(crate) fn to_f64(field: &str, value: &Value) -> Result<f64, MergeError> {
    value
        .as_f64()
        .ok_or_else(|| MergeError::type_mismatch(field, "number", value))
}

pub(crate) fn to_string(field: &str, value: &Value) -> Result<String, MergeError> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| MergeError::type_mismatch(field, "string", value))
}

/// Narrows a JSON number to an integer representation, applying the
/// configured fractional policy. Returns the truncated value as `f64`; the
/// caller casts to the target width.
pub(crate) fn to_integer(
    field: &str,
    value: &Value,
    opts: &MergeOptions,
) -> Result<f64, MergeError> {
    let n = to_f64(field, value)?;
    if opts.reject_fractional && n.fract() != 0.0 {
        return Err(MergeError::type_mismatch(field, "integer", value));
    }
    Ok(n.trunc())
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn shape_names_cover_every_json_kind() {
        assert_eq!(shape_of(&json!(null)), "null");
        assert_eq!(shape_of(&json!(true)), "boolean");
        assert_eq!(shape_of(&json!(1.5)), "number");
        assert_eq!(shape_of(&json!("x")), "string");
        assert_eq!(shape_of(&json!([])), "array");
        assert_eq!(shape_of(&json!({})), "object");
    }

    #[test]
    fn bool_accepts_only_booleans() {
        assert_eq!(to_bool("f", &json!(true)), Ok(true));
        assert!(to_bool("f", &json!("true")).is_err());
        assert!(to_bool("f", &json!(1)).is_err());
    }

    #[test]
    fn string_rejects_numbers() {
        assert_eq!(to_string("f", &json!("hi")), Ok("hi".to_string()));
        assert!(to_string("f", &json!(3)).is_err());
    }

    #[test]
    fn integer_truncates_toward_zero_by_default() {
        let opts = MergeOptions::default();
        assert_eq!(to_integer("f", &json!(5.0), &opts), Ok(5.0));
        assert_eq!(to_integer("f", &json!(5.7), &opts), Ok(5.0));
        assert_eq!(to_integer("f", &json!(-5.7), &opts), Ok(-5.0));
    }

    #[test]
    fn integer_strict_mode_rejects_fractional() {
        let opts = MergeOptions {
            reject_fractional: true,
        };
        assert_eq!(to_integer("f", &json!(5.0), &opts), Ok(5.0));
        let err = to_integer("f", &json!(5.7), &opts).unwrap_err();
        assert_eq!(
            err,
            MergeError::TypeMismatch {
                field: "f".to_string(),
                expected: "integer",
                found: "number",
            }
        );
    }

    #[test]
    fn integer_rejects_non_numbers() {
        let opts = MergeOptions::default();
        assert!(to_integer("f", &json!("5"), &opts).is_err());
        assert!(to_integer("f", &json!([5]), &opts).is_err());
    }
}
