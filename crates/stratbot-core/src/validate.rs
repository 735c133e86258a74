//! Response validation: raw text -> JSON -> shape check -> typed value.

use serde_json::Value;

use crate::error::{ValidationError, ValidationIssue};
use crate::schema::{Presence, Schema, Shape};

/// Parse `text` as JSON and validate it against `T`'s declared shape.
///
/// Either the whole payload conforms and is returned typed, or every
/// mismatch is reported; no partial result is produced.
pub fn parse_response<T: Schema>(text: &str) -> Result<T, ValidationError> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| ValidationError::single("$", format!("invalid JSON: {e}")))?;
    validate_value::<T>(value)
}

/// Validate an already-parsed JSON value against `T`'s declared shape.
pub fn validate_value<T: Schema>(value: Value) -> Result<T, ValidationError> {
    let mut issues = Vec::new();
    check(&value, &T::shape(), "$", &mut issues);
    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    let typed: T =
        serde_json::from_value(value).map_err(|e| ValidationError::single("$", e.to_string()))?;
    let issues = typed.invariants();
    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }
    Ok(typed)
}

fn check(value: &Value, shape: &Shape, path: &str, issues: &mut Vec<ValidationIssue>) {
    match (shape, value) {
        (Shape::Nullable(_), Value::Null) => {}
        (Shape::Nullable(inner), _) => check(value, inner, path, issues),
        (Shape::String, Value::String(_)) => {}
        (Shape::Number, Value::Number(_)) => {}
        (Shape::NumberOrString, Value::Number(_) | Value::String(_)) => {}
        (Shape::Array(items), Value::Array(values)) => {
            for (index, item) in values.iter().enumerate() {
                check(item, items, &format!("{path}[{index}]"), issues);
            }
        }
        (Shape::Tuple(positions), Value::Array(values)) => {
            if values.len() != positions.len() {
                issues.push(ValidationIssue::new(
                    path,
                    format!(
                        "expected tuple of {} elements, found {}",
                        positions.len(),
                        values.len()
                    ),
                ));
            }
            for (index, (item, position)) in values.iter().zip(positions).enumerate() {
                check(item, position, &format!("{path}[{index}]"), issues);
            }
        }
        (Shape::Object(fields), Value::Object(map)) => {
            for field in fields {
                let field_path = format!("{path}.{}", field.name);
                match (map.get(field.name), field.presence) {
                    (Some(field_value), _) => check(field_value, &field.shape, &field_path, issues),
                    (None, Presence::Required) => issues.push(ValidationIssue::new(
                        field_path,
                        format!("required field '{}' is missing", field.name),
                    )),
                    (None, Presence::Defaulted) => {}
                }
            }
        }
        _ => issues.push(ValidationIssue::new(
            path,
            format!(
                "expected {}, found {}",
                expected_name(shape),
                value_type_name(value)
            ),
        )),
    }
}

fn expected_name(shape: &Shape) -> String {
    match shape {
        Shape::Nullable(inner) => format!("{} or null", expected_name(inner)),
        other => other.describe().to_owned(),
    }
}

fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
