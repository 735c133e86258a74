//! # Schema Layer
//!
//! Structural contracts for the World Bank resources.
//!
//! Every resource declares its [`Shape`] as data. The validator in
//! [`crate::validate`] walks raw JSON against that shape, collecting every
//! failing path, before `serde` turns the value into the typed struct with
//! field defaults applied.
//!
//! | Type | Upstream shape |
//! |------|----------------|
//! | [`Topic`] | `{id, value, sourceNote}` |
//! | [`Indicator`] | `{id, name, unit?, source?, sourceNote?, sourceOrganization?, topics?}` |
//! | [`DataRecord`] | `{indicator, country, countryiso3code, date, value, unit, obs_status, decimal}` |
//! | [`PaginationMeta`] | `{page, pages, per_page, total, sourceid?, lastupdated?}` |
//! | [`PaginatedResponse`] | `[PaginationMeta, [T]]` |

mod data;
mod indicator;
mod pagination;
mod topic;

use serde::de::DeserializeOwned;

use crate::error::ValidationIssue;

pub use data::{DataRecord, DataResponse};
pub use indicator::{Indicator, IndicatorsResponse};
pub use pagination::{NumberOrString, PaginatedResponse, PaginationMeta};
pub use topic::{Topic, TopicRef, TopicsResponse};

/// Declarative description of a JSON value.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    Number,
    /// A JSON number or a string; the original representation is kept.
    NumberOrString,
    Nullable(Box<Shape>),
    Array(Box<Shape>),
    Object(Vec<Field>),
    /// Fixed-length positional array.
    Tuple(Vec<Shape>),
}

impl Shape {
    pub fn nullable(inner: Shape) -> Self {
        Self::Nullable(Box::new(inner))
    }

    pub fn array(items: Shape) -> Self {
        Self::Array(Box::new(items))
    }

    pub const fn describe(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::NumberOrString => "number or string",
            Self::Nullable(_) => "nullable value",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
            Self::Tuple(_) => "tuple",
        }
    }
}

/// Whether an object field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    /// May be omitted; the typed struct supplies a default.
    Defaulted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: &'static str,
    pub shape: Shape,
    pub presence: Presence,
}

impl Field {
    pub fn required(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Required,
        }
    }

    pub fn defaulted(name: &'static str, shape: Shape) -> Self {
        Self {
            name,
            shape,
            presence: Presence::Defaulted,
        }
    }
}

/// A typed resource with a declared structural contract.
pub trait Schema: DeserializeOwned {
    fn shape() -> Shape;

    /// Cross-field rules checked once the value matches its shape.
    fn invariants(&self) -> Vec<ValidationIssue> {
        Vec::new()
    }
}
