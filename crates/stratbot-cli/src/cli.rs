//! CLI argument definitions for stratbot.
//!
//! # Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `topics` | List every World Bank topic |
//! | `topic` | Show a single topic |
//! | `indicators` | List indicators for one or more topics |
//! | `data` | Fetch observations for an indicator |
//! | `tools` | List agent tool definitions |
//! | `call` | Invoke an agent tool with JSON arguments |
//!
//! # Examples
//!
//! ```bash
//! stratbot topics --pretty
//! stratbot indicators 3 8
//! stratbot data NY.GDP.MKTP.CD --country USA --country CAN --date 2010 --date 2020
//! stratbot call get_world_bank_api_indicators_by_topic --args '{"topicId": "3"}'
//! ```

use clap::{Args, Parser, Subcommand};

/// StratBot - World Bank indicators from the command line
#[derive(Debug, Parser)]
#[command(
    name = "stratbot",
    author,
    version,
    about = "Query World Bank topics, indicators and datasets"
)]
pub struct Cli {
    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Request timeout in milliseconds (overrides STRATBOT_HTTP_TIMEOUT_MS).
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// World Bank API base URL (overrides STRATBOT_WORLD_BANK_BASE_URL).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every World Bank topic.
    Topics,

    /// Show a single topic by ID.
    Topic(TopicArgs),

    /// List indicators for the given topics (all topics when none are given).
    ///
    /// # Examples
    ///
    ///   stratbot indicators
    ///   stratbot indicators 3
    ///   stratbot indicators 3 8
    Indicators(IndicatorsArgs),

    /// Fetch observations for an indicator.
    ///
    /// # Examples
    ///
    ///   stratbot data SP.POP.TOTL --country BR
    ///   stratbot data NY.GDP.MKTP.CD --country USA --country CAN --date 2010 --date 2020
    Data(DataArgs),

    /// List the tool definitions advertised to the agent.
    Tools,

    /// Invoke an agent tool by name.
    Call(CallArgs),
}

#[derive(Debug, Args)]
pub struct TopicArgs {
    /// Topic ID (e.g., 3 for Economy & Growth).
    pub id: String,
}

#[derive(Debug, Args)]
pub struct IndicatorsArgs {
    /// Topic IDs; several are joined into one request.
    pub topic_ids: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DataArgs {
    /// Indicator ID (e.g., NY.GDP.MKTP.CD).
    pub indicator: String,

    /// Country ISO2/ISO3 code; repeat for several countries.
    #[arg(long = "country")]
    pub countries: Vec<String>,

    /// A year, or repeat twice for a [start, end] range.
    #[arg(long = "date", num_args = 1, action = clap::ArgAction::Append)]
    pub dates: Vec<String>,
}

#[derive(Debug, Args)]
pub struct CallArgs {
    /// Tool name (see `stratbot tools`).
    pub name: String,

    /// Tool arguments as a JSON object.
    #[arg(long, default_value = "{}")]
    pub args: String,
}
