use std::fmt::{Display, Formatter};

use serde::{Deserialize, Deserializer, Serialize};

use super::{Field, Schema, Shape};
use crate::error::ValidationIssue;

/// Pagination counter that upstream sends either as a number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(serde_json::Number),
    Text(String),
}

impl NumberOrString {
    /// Interpret the value as a non-negative count, whichever form it arrived in.
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(number) => number.as_u64().or_else(|| {
                number
                    .as_f64()
                    .filter(|value| value.fract() == 0.0 && *value >= 0.0)
                    .map(|value| value as u64)
            }),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

impl From<u64> for NumberOrString {
    fn from(value: u64) -> Self {
        Self::Number(value.into())
    }
}

impl Display for NumberOrString {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// Pagination and metadata header of every list response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationMeta {
    pub page: NumberOrString,
    pub pages: NumberOrString,
    pub per_page: NumberOrString,
    pub total: NumberOrString,
    #[serde(default)]
    pub sourceid: Option<String>,
    #[serde(default)]
    pub lastupdated: Option<String>,
}

impl Schema for PaginationMeta {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("page", Shape::NumberOrString),
            Field::required("pages", Shape::NumberOrString),
            Field::required("per_page", Shape::NumberOrString),
            Field::required("total", Shape::NumberOrString),
            Field::defaulted("sourceid", Shape::nullable(Shape::String)),
            Field::defaulted("lastupdated", Shape::nullable(Shape::String)),
        ])
    }
}

/// Decoded `[meta, records]` wire tuple.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaginatedResponse<T> {
    pub meta: PaginationMeta,
    pub records: Vec<T>,
}

impl<'de, T> Deserialize<'de> for PaginatedResponse<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (meta, records) = <(PaginationMeta, Vec<T>)>::deserialize(deserializer)?;
        Ok(Self { meta, records })
    }
}

impl<T: Schema> Schema for PaginatedResponse<T> {
    fn shape() -> Shape {
        Shape::Tuple(vec![PaginationMeta::shape(), Shape::array(T::shape())])
    }

    /// A page never holds more records than `per_page`.
    fn invariants(&self) -> Vec<ValidationIssue> {
        match self.meta.per_page.as_u64() {
            Some(per_page) if self.records.len() as u64 > per_page => vec![ValidationIssue::new(
                "$[1]",
                format!(
                    "page holds {} records but per_page is {per_page}",
                    self.records.len()
                ),
            )],
            _ => Vec::new(),
        }
    }
}
