use serde::{Deserialize, Serialize};

use super::{Field, PaginatedResponse, Schema, Shape, TopicRef};

/// One observation of an indicator for a country and date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataRecord {
    pub indicator: TopicRef,
    pub country: TopicRef,
    pub countryiso3code: String,
    /// Year or quarter, e.g. `2020` or `2020Q3`.
    pub date: String,
    /// `None` is an explicit missing measurement.
    pub value: Option<f64>,
    pub unit: String,
    pub obs_status: String,
    pub decimal: f64,
}

impl Schema for DataRecord {
    fn shape() -> Shape {
        Shape::Object(vec![
            Field::required("indicator", TopicRef::shape()),
            Field::required("country", TopicRef::shape()),
            Field::required("countryiso3code", Shape::String),
            Field::required("date", Shape::String),
            Field::required("value", Shape::nullable(Shape::Number)),
            Field::required("unit", Shape::String),
            Field::required("obs_status", Shape::String),
            Field::required("decimal", Shape::Number),
        ])
    }
}

pub type DataResponse = PaginatedResponse<DataRecord>;
