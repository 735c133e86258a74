use serde::{Deserialize, Serialize};

use super::{Field, PaginatedResponse, Schema, Shape, TopicRef};

/// Metadata describing a measurable series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indicator {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub source: Option<TopicRef>,
    #[serde(rename = "sourceNote", default)]
    pub source_note: String,
    #[serde(rename = "sourceOrganization", default)]
    pub source_organization: String,
    /// Denormalized topic references; an indicator may belong to several topics.
    #[serde(default)]
    pub topics: Vec<TopicRef>,
}

impl Schema for Indicator {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("id", Shape::String),
            Field::required("name", Shape::String),
            Field::defaulted("unit", Shape::String),
            Field::defaulted("source", Shape::nullable(TopicRef::shape())),
            Field::defaulted("sourceNote", Shape::String),
            Field::defaulted("sourceOrganization", Shape::String),
            Field::defaulted("topics", Shape::array(TopicRef::shape())),
        ])
    }
}

pub type IndicatorsResponse = PaginatedResponse<Indicator>;
