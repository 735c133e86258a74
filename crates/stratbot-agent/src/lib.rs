//! # stratbot-agent
//!
//! Tools through which the StratBot conversational agent reaches the World
//! Bank API.
//!
//! The agent loop itself lives outside this crate: a hosted language model
//! chooses a tool from the advertised [`ToolDefinition`]s, and the
//! [`ToolRegistry`] executes the call and hands back JSON text.
//!
//! ## Tools
//!
//! | Name | Arguments | Result |
//! |------|-----------|--------|
//! | `get_world_bank_api_topics` | none | topic list |
//! | `get_world_bank_api_indicators_by_topic` | `topicId` | indicator list |
//! | `get_world_bank_api_dataset_by_indicator` | `indicatorId`, `countryCode?`, `date?` | data records |
//!
//! ## Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use serde_json::json;
//! use stratbot_agent::world_bank_registry;
//! use stratbot_core::WorldBankClient;
//!
//! let registry = world_bank_registry(Arc::new(WorldBankClient::default()));
//! let output = registry
//!     .execute("get_world_bank_api_dataset_by_indicator", json!({
//!         "indicatorId": "NY.GDP.MKTP.CD",
//!         "countryCode": ["USA", "CAN"],
//!         "date": ["2010", "2020"]
//!     }))
//!     .await?;
//! println!("{}", output.content);
//! ```

mod error;
mod registry;
mod tool;
pub mod tools;

use std::sync::Arc;

use stratbot_core::WorldBankClient;

pub use error::ToolError;
pub use registry::ToolRegistry;
pub use tool::{Tool, ToolArgs, ToolDefinition, ToolOutput};
pub use tools::{DatasetByIndicatorTool, IndicatorsByTopicTool, TopicsTool};

pub use async_trait::async_trait;

/// Registry with the three World Bank tools sharing one client.
pub fn world_bank_registry(client: Arc<WorldBankClient>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(TopicsTool::new(Arc::clone(&client)));
    registry.register(IndicatorsByTopicTool::new(Arc::clone(&client)));
    registry.register(DatasetByIndicatorTool::new(client));
    registry
}
