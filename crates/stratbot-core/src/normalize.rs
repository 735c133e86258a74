//! Collapses flexible caller inputs into the single wire-format string the
//! World Bank API expects in paths and query strings.

use serde::{Deserialize, Serialize};

/// Separator for topic and country identifier lists (`USA;CAN`).
pub const LIST_SEPARATOR: char = ';';
/// Separator for date ranges (`2010:2020`).
pub const RANGE_SEPARATOR: char = ':';
/// Fallback key meaning "every topic" / "every country" / "every date".
pub const ALL: &str = "all";

/// A caller-supplied value that may be a single string or a list of strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    One(String),
    Many(Vec<String>),
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::One(value.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for ParamValue {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.into_iter().map(str::to_owned).collect())
    }
}

/// Normalize an optional value into its wire form.
///
/// Absent input and empty lists fall back to `default`; a bare string is
/// returned unchanged; a non-empty list is joined with `separator`.
pub fn normalize(value: Option<&ParamValue>, default: Option<&str>, separator: char) -> Option<String> {
    match value {
        None => default.map(str::to_owned),
        Some(ParamValue::One(value)) => Some(value.clone()),
        Some(ParamValue::Many(values)) if values.is_empty() => default.map(str::to_owned),
        Some(ParamValue::Many(values)) => {
            let mut buf = [0_u8; 4];
            Some(values.join(&*separator.encode_utf8(&mut buf)))
        }
    }
}

/// Percent-encode each identifier of a normalized key, keeping the separators intact.
pub(crate) fn encode_segment(key: &str, separator: char) -> String {
    key.split(separator)
        .map(|part| urlencoding::encode(part).into_owned())
        .collect::<Vec<_>>()
        .join(separator.to_string().as_str())
}
