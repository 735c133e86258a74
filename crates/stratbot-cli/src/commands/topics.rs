use serde_json::Value;
use stratbot_core::{WorldBankClient, WorldBankError};

use crate::cli::TopicArgs;
use crate::error::CliError;

pub async fn list(client: &WorldBankClient) -> Result<Value, CliError> {
    let topics = client.get_topics().await?;
    Ok(serde_json::to_value(topics)?)
}

pub async fn show(args: &TopicArgs, client: &WorldBankClient) -> Result<Value, CliError> {
    let id = args.id.trim();
    if id.is_empty() {
        return Err(CliError::Command(String::from("topic ID must not be empty")));
    }

    match client.get_topic_by_id(id).await? {
        Some(topic) => Ok(serde_json::to_value(topic)?),
        None => Err(WorldBankError::not_found(id).into()),
    }
}
