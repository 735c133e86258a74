//! # Stratbot Core
//!
//! Typed, caching client for the World Bank indicators API.
//!
//! ## Overview
//!
//! The World Bank API answers every list endpoint with a two-element JSON
//! array `[pagination, records]`, reports counters as numbers or numeric
//! strings, and expects multi-value parameters joined into a single path
//! segment (`USA;CAN`, `2010:2020`). This crate hides those quirks:
//!
//! - **Schema layer** declaring the structure of topics, indicators, data
//!   records and pagination metadata
//! - **Parameter normalization** from single values or lists into wire keys
//! - **Response validation** that reports every failing JSON path
//! - **Caching client** with a two-phase indicator fetch
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`cache`] | Per-client topic and indicator caches |
//! | [`client`] | [`WorldBankClient`] and [`DataQuery`] |
//! | [`config`] | Base URL, user agent and timeout settings |
//! | [`error`] | [`WorldBankError`] and [`ValidationError`] |
//! | [`http_client`] | Transport abstraction (reqwest or test doubles) |
//! | [`normalize`] | Flexible parameter normalization |
//! | [`schema`] | Resource types and their declared shapes |
//! | [`validate`] | JSON parsing and structural validation |
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use stratbot_core::{DataQuery, WorldBankClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = WorldBankClient::default();
//!
//!     let topics = client.get_topics().await?;
//!     let indicators = client.get_indicators_by_topic_id(Some("3".into())).await?;
//!
//!     let query = DataQuery::new("NY.GDP.MKTP.CD")
//!         .with_country_code(["USA", "CAN"])
//!         .with_date(["2010", "2020"]);
//!     let records = client.fetch_data_for_indicator(&query).await?;
//!
//!     println!("{} topics, {} indicators, {} records", topics.len(), indicators.len(), records.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use stratbot_core::WorldBankError;
//!
//! fn describe(error: &WorldBankError) -> &'static str {
//!     match error {
//!         WorldBankError::Validation(_) => "upstream contract changed",
//!         WorldBankError::NotFound { .. } => "unknown topic",
//!         WorldBankError::Transport(_) => "network or HTTP status failure",
//!         WorldBankError::InvalidParameter { .. } => "bad input",
//!     }
//! }
//! ```
//!
//! Nothing is retried; every failure is returned to the caller as-is.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod http_client;
pub mod normalize;
pub mod schema;
pub mod validate;

pub use cache::WorldBankCache;
pub use client::{DataQuery, WorldBankClient};
pub use config::{ClientConfig, ConfigError};
pub use error::{ValidationError, ValidationIssue, WorldBankError};
pub use http_client::{HttpClient, HttpError, HttpRequest, HttpResponse, ReqwestHttpClient};
pub use normalize::{normalize, ParamValue, ALL, LIST_SEPARATOR, RANGE_SEPARATOR};
pub use schema::{
    DataRecord, Indicator, NumberOrString, PaginatedResponse, PaginationMeta, Schema, Shape,
    Topic, TopicRef,
};
pub use validate::parse_response;
