//! World Bank tools backed by a shared [`WorldBankClient`].
//!
//! All three tools hold the same client so topic and indicator caches are
//! shared across tool calls within a session.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};
use stratbot_core::{DataQuery, ParamValue, WorldBankClient, ALL};
use tracing::debug;

use crate::error::ToolError;
use crate::tool::{Tool, ToolArgs, ToolOutput};

pub const TOPICS_TOOL: &str = "get_world_bank_api_topics";
pub const INDICATORS_TOOL: &str = "get_world_bank_api_indicators_by_topic";
pub const DATASET_TOOL: &str = "get_world_bank_api_dataset_by_indicator";

/// Lists every World Bank topic.
pub struct TopicsTool {
    client: Arc<WorldBankClient>,
}

impl TopicsTool {
    pub fn new(client: Arc<WorldBankClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for TopicsTool {
    fn name(&self) -> &str {
        TOPICS_TOOL
    }

    fn description(&self) -> &str {
        "Get a list of topics from the World Bank API."
    }

    fn input_schema(&self) -> Value {
        json!({"type": "object", "properties": {}})
    }

    async fn execute(&self, _args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let topics = self.client.get_topics().await?;
        ToolOutput::json(&topics)
    }
}

/// Lists the indicators filed under one topic.
pub struct IndicatorsByTopicTool {
    client: Arc<WorldBankClient>,
}

impl IndicatorsByTopicTool {
    pub fn new(client: Arc<WorldBankClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Tool for IndicatorsByTopicTool {
    fn name(&self) -> &str {
        INDICATORS_TOOL
    }

    fn description(&self) -> &str {
        "Get a list of indicators for a given topic from the World Bank API."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "topicId": {
                    "type": "string",
                    "description": "The ID of the topic to get indicators for."
                }
            },
            "required": ["topicId"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let topic_id = args.get_string("topicId")?;
        debug!(topic_id = %topic_id, "fetching indicators for topic");

        let indicators = self
            .client
            .get_indicators_by_topic_id(Some(ParamValue::One(topic_id)))
            .await?;
        ToolOutput::json(&indicators)
    }
}

/// Fetches observations for an indicator, optionally by country and date.
pub struct DatasetByIndicatorTool {
    client: Arc<WorldBankClient>,
}

impl DatasetByIndicatorTool {
    pub fn new(client: Arc<WorldBankClient>) -> Self {
        Self { client }
    }

    fn query_from_args(args: &ToolArgs) -> Result<DataQuery, ToolError> {
        let indicator_id = args.get_string("indicatorId")?;

        let country_code = args
            .get_opt::<ParamValue>("countryCode")?
            .unwrap_or_else(|| ParamValue::Many(vec![ALL.to_owned()]));

        let date = args.get_opt::<ParamValue>("date")?;
        if let Some(ParamValue::Many(range)) = &date {
            if range.len() > 2 {
                return Err(ToolError::invalid(
                    "date",
                    format!("expected a date or a [start, end] range, found {} entries", range.len()),
                ));
            }
        }

        Ok(DataQuery {
            indicator_id: ParamValue::One(indicator_id),
            country_code: Some(country_code),
            date,
        })
    }
}

#[async_trait]
impl Tool for DatasetByIndicatorTool {
    fn name(&self) -> &str {
        DATASET_TOOL
    }

    fn description(&self) -> &str {
        "Get dataset for a given indicator from the World Bank API."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "indicatorId": {
                    "type": "string",
                    "description": "The ID of the indicator to get dataset for."
                },
                "countryCode": {
                    "anyOf": [
                        {"type": "string"},
                        {"type": "array", "items": {"type": "string"}}
                    ],
                    "default": ["all"],
                    "description": "The country ISO2 or ISO3 code or all to filter the dataset."
                },
                "date": {
                    "anyOf": [
                        {"type": "string"},
                        {"type": "array", "items": {"type": "string"}, "maxItems": 2},
                        {"type": "null"}
                    ],
                    "default": null,
                    "description": "The date or date range (as [start, end]) to filter the dataset."
                }
            },
            "required": ["indicatorId"]
        })
    }

    async fn execute(&self, args: ToolArgs) -> Result<ToolOutput, ToolError> {
        let query = Self::query_from_args(&args)?;
        let records = self.client.fetch_data_for_indicator(&query).await?;
        ToolOutput::json(&records)
    }
}
