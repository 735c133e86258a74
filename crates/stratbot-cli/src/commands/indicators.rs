use serde_json::Value;
use stratbot_core::{ParamValue, WorldBankClient};

use crate::cli::IndicatorsArgs;
use crate::error::CliError;

pub async fn run(args: &IndicatorsArgs, client: &WorldBankClient) -> Result<Value, CliError> {
    let topic_id = match args.topic_ids.as_slice() {
        [] => None,
        [single] => Some(ParamValue::One(single.clone())),
        many => Some(ParamValue::Many(many.to_vec())),
    };

    let indicators = client.get_indicators_by_topic_id(topic_id).await?;
    Ok(serde_json::to_value(indicators)?)
}
