use serde::{Deserialize, Serialize};

use super::{Field, PaginatedResponse, Schema, Shape};

/// World Bank subject-matter category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: String,
    pub value: String,
    #[serde(rename = "sourceNote")]
    pub source_note: String,
}

impl Schema for Topic {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("id", Shape::String),
            Field::required("value", Shape::String),
            Field::required("sourceNote", Shape::String),
        ])
    }
}

/// `{id, value}` reference embedded in other resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicRef {
    pub id: String,
    pub value: String,
}

impl TopicRef {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }
}

impl Schema for TopicRef {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("id", Shape::String),
            Field::required("value", Shape::String),
        ])
    }
}

pub type TopicsResponse = PaginatedResponse<Topic>;
