//! Built-in tools.

mod world_bank;

pub use world_bank::{
    DatasetByIndicatorTool, IndicatorsByTopicTool, TopicsTool, DATASET_TOOL, INDICATORS_TOOL,
    TOPICS_TOOL,
};
