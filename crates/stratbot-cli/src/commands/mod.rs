mod data;
mod indicators;
mod tools;
mod topics;

use std::sync::Arc;

use serde_json::Value;
use stratbot_core::{ClientConfig, WorldBankClient};
use tracing::debug;

use crate::cli::{Cli, Command};
use crate::error::CliError;

pub async fn run(cli: &Cli) -> Result<Value, CliError> {
    let client = Arc::new(WorldBankClient::new(client_config(cli)?));

    match &cli.command {
        Command::Topics => topics::list(&client).await,
        Command::Topic(args) => topics::show(args, &client).await,
        Command::Indicators(args) => indicators::run(args, &client).await,
        Command::Data(args) => data::run(args, &client).await,
        Command::Tools => tools::list(client),
        Command::Call(args) => tools::call(args, client).await,
    }
}

fn client_config(cli: &Cli) -> Result<ClientConfig, CliError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.as_str())?;
    }
    if cli.timeout_ms.is_some() {
        config = config.with_timeout_ms(cli.timeout_ms);
    }
    debug!(base_url = %config.base_url, timeout_ms = ?config.timeout_ms, "client configured");
    Ok(config)
}
