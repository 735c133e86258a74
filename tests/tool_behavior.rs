//! Behaviour tests for the agent-facing World Bank tools.

use std::sync::Arc;

use serde_json::{json, Value};
use stratbot_agent::tools::{
    DATASET_TOOL as DATASET, INDICATORS_TOOL as INDICATORS, TOPICS_TOOL as TOPICS,
};
use stratbot_agent::{world_bank_registry, ToolError};
use stratbot_tests::*;

#[tokio::test]
async fn registry_advertises_the_three_tools_with_schemas() {
    let http = Arc::new(ScriptedHttpClient::new());
    let registry = world_bank_registry(Arc::new(client_with(http.clone())));

    let definitions = registry.definitions();
    let names = definitions.iter().map(|d| d.name.as_str()).collect::<Vec<_>>();
    assert_eq!(names, vec![DATASET, INDICATORS, TOPICS]);

    let dataset = &definitions[0];
    assert_eq!(dataset.input_schema["required"], json!(["indicatorId"]));
    assert_eq!(dataset.input_schema["properties"]["countryCode"]["default"], json!(["all"]));

    let indicators = &definitions[1];
    assert_eq!(indicators.input_schema["required"], json!(["topicId"]));
    assert_eq!(http.request_count(), 0, "listing tools is offline");
}

#[tokio::test]
async fn topics_tool_returns_serialized_topics() {
    let http = Arc::new(
        ScriptedHttpClient::new().route("/topic", topics_page(vec![topic("1", "Agriculture")])),
    );
    let registry = world_bank_registry(Arc::new(client_with(http)));

    let output = registry.execute(TOPICS, json!({})).await.expect("topics");

    assert!(output.success);
    let parsed: Value = serde_json::from_str(&output.content).expect("JSON output");
    assert_eq!(parsed, json!([{"id": "1", "value": "Agriculture", "sourceNote": "About Agriculture."}]));
}

#[tokio::test]
async fn tools_share_one_client_cache() {
    let http = Arc::new(with_indicator_pages(
        ScriptedHttpClient::new().route("/topic", topics_page(vec![topic("3", "Economy & Growth")])),
        "3",
        indicators("EG", "3", 5),
    ));
    let registry = world_bank_registry(Arc::new(client_with(http.clone())));

    registry.execute(TOPICS, Value::Null).await.expect("topics");
    registry
        .execute(INDICATORS, json!({"topicId": "3"}))
        .await
        .expect("first indicators call");
    let output = registry
        .execute(INDICATORS, json!({"topicId": "3"}))
        .await
        .expect("cached indicators call");

    let parsed: Vec<Value> = serde_json::from_str(&output.content).expect("JSON list");
    assert_eq!(parsed.len(), 5);
    assert_eq!(http.request_count(), 3, "topics + two indicator phases");

    let error = registry
        .execute(INDICATORS, json!({"topicId": "404"}))
        .await
        .expect_err("unknown topic");
    assert!(matches!(
        error,
        ToolError::WorldBank(WorldBankError::NotFound { .. })
    ));
    assert_eq!(http.request_count(), 3);
}

#[tokio::test]
async fn dataset_tool_builds_composite_path_and_range() {
    let path = "/country/USA;CAN/indicator/NY.GDP.MKTP.CD";
    let http = Arc::new(ScriptedHttpClient::new().route(
        path,
        json!([meta(1, 50), [data_record("US", "USA", "2015", Some(1.5))]]),
    ));
    let registry = world_bank_registry(Arc::new(client_with(http.clone())));

    let output = registry
        .execute(
            DATASET,
            json!({
                "indicatorId": "NY.GDP.MKTP.CD",
                "countryCode": ["USA", "CAN"],
                "date": ["2010", "2020"]
            }),
        )
        .await
        .expect("dataset");

    let parsed: Vec<Value> = serde_json::from_str(&output.content).expect("JSON list");
    assert_eq!(parsed[0]["countryiso3code"], json!("USA"));
    assert_eq!(http.paths(), vec![path]);
    assert_eq!(http.requests()[0].query_param("date"), Some("2010:2020"));
}

#[tokio::test]
async fn dataset_tool_defaults_country_to_all() {
    let path = "/country/all/indicator/SP.POP.TOTL";
    let http = Arc::new(ScriptedHttpClient::new().route(path, json!([meta(0, 50), []])));
    let registry = world_bank_registry(Arc::new(client_with(http.clone())));

    let output = registry
        .execute_json(DATASET, r#"{"indicatorId": "SP.POP.TOTL", "date": null}"#)
        .await
        .expect("dataset");

    assert_eq!(output.content, "[]");
    assert_eq!(http.requests()[0].query_param("date"), Some("all"));
}

#[tokio::test]
async fn validation_failures_surface_through_tools() {
    let http = Arc::new(ScriptedHttpClient::new().route(
        "/topic",
        json!([meta(1, 50), [{"id": "1", "value": "Agriculture"}]]),
    ));
    let registry = world_bank_registry(Arc::new(client_with(http)));

    let error = registry.execute(TOPICS, json!({})).await.expect_err("missing sourceNote");

    match error {
        ToolError::WorldBank(WorldBankError::Validation(validation)) => {
            assert_eq!(validation.paths(), vec!["$[1][0].sourceNote"]);
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_required_argument_is_reported_before_any_request() {
    let http = Arc::new(ScriptedHttpClient::new());
    let registry = world_bank_registry(Arc::new(client_with(http.clone())));

    let error = registry
        .execute(INDICATORS, json!({}))
        .await
        .expect_err("topicId is required");

    assert!(matches!(error, ToolError::MissingParameter(ref name) if name == "topicId"));
    assert_eq!(http.request_count(), 0);
}

#[tokio::test]
async fn empty_indicator_argument_is_rejected_before_any_request() {
    let http = Arc::new(ScriptedHttpClient::new());
    let registry = world_bank_registry(Arc::new(client_with(http.clone())));

    let error = registry
        .execute(DATASET, json!({"indicatorId": ""}))
        .await
        .expect_err("empty indicatorId");

    assert!(matches!(
        error,
        ToolError::WorldBank(WorldBankError::InvalidParameter { name: "indicatorId", .. })
    ));
    assert_eq!(http.request_count(), 0);
}
