use std::sync::Arc;

use serde_json::Value;
use stratbot_agent::world_bank_registry;
use stratbot_core::WorldBankClient;

use crate::cli::CallArgs;
use crate::error::CliError;

pub fn list(client: Arc<WorldBankClient>) -> Result<Value, CliError> {
    let registry = world_bank_registry(client);
    Ok(serde_json::to_value(registry.definitions())?)
}

/// Runs the tool and re-parses its JSON text so output formatting stays uniform.
pub async fn call(args: &CallArgs, client: Arc<WorldBankClient>) -> Result<Value, CliError> {
    let registry = world_bank_registry(client);
    let output = registry.execute_json(&args.name, &args.args).await?;
    Ok(serde_json::from_str(&output.content)?)
}
