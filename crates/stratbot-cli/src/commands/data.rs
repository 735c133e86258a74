use serde_json::Value;
use stratbot_core::{DataQuery, WorldBankClient};

use crate::cli::DataArgs;
use crate::error::CliError;

pub async fn run(args: &DataArgs, client: &WorldBankClient) -> Result<Value, CliError> {
    if args.dates.len() > 2 {
        return Err(CliError::Command(String::from(
            "--date accepts a single year or a start and end year",
        )));
    }

    let mut query = DataQuery::new(args.indicator.as_str());
    if !args.countries.is_empty() {
        query = query.with_country_code(args.countries.clone());
    }
    query = match args.dates.as_slice() {
        [] => query,
        [single] => query.with_date(single.as_str()),
        range => query.with_date(range.to_vec()),
    };

    let records = client.fetch_data_for_indicator(&query).await?;
    Ok(serde_json::to_value(records)?)
}
