//! Caching World Bank API client.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::cache::WorldBankCache;
use crate::config::ClientConfig;
use crate::error::{ValidationError, WorldBankError};
use crate::http_client::{HttpClient, HttpError, HttpRequest, ReqwestHttpClient};
use crate::normalize::{encode_segment, normalize, ParamValue, ALL, LIST_SEPARATOR, RANGE_SEPARATOR};
use crate::schema::{
    DataRecord, DataResponse, Indicator, IndicatorsResponse, Schema, Topic, TopicsResponse,
};
use crate::validate::parse_response;

/// Parameters for [`WorldBankClient::fetch_data_for_indicator`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQuery {
    pub indicator_id: ParamValue,
    #[serde(default)]
    pub country_code: Option<ParamValue>,
    #[serde(default)]
    pub date: Option<ParamValue>,
}

impl DataQuery {
    pub fn new(indicator_id: impl Into<ParamValue>) -> Self {
        Self {
            indicator_id: indicator_id.into(),
            country_code: None,
            date: None,
        }
    }

    pub fn with_country_code(mut self, country_code: impl Into<ParamValue>) -> Self {
        self.country_code = Some(country_code.into());
        self
    }

    /// A single date (`"2020"`) or a `[start, end]` range.
    pub fn with_date(mut self, date: impl Into<ParamValue>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// World Bank API client with per-instance topic and indicator caches.
///
/// Topics are fetched at most once per instance; indicators are cached per
/// normalized topic key. Data records are never cached. No call is retried.
#[derive(Clone)]
pub struct WorldBankClient {
    http_client: Arc<dyn HttpClient>,
    config: ClientConfig,
    cache: WorldBankCache,
}

impl Default for WorldBankClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

impl std::fmt::Debug for WorldBankClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WorldBankClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl WorldBankClient {
    pub fn new(config: ClientConfig) -> Self {
        let http_client = Arc::new(ReqwestHttpClient::new(&config.user_agent));
        Self::with_http_client(http_client, config)
    }

    pub fn with_http_client(http_client: Arc<dyn HttpClient>, config: ClientConfig) -> Self {
        Self {
            http_client,
            config,
            cache: WorldBankCache::new(),
        }
    }

    pub fn cache(&self) -> &WorldBankCache {
        &self.cache
    }

    /// Every topic; fetched once, then served from the cache.
    pub async fn get_topics(&self) -> Result<Vec<Topic>, WorldBankError> {
        if let Some(topics) = self.cache.topics().await {
            debug!(count = topics.len(), "topics cache hit");
            return Ok(topics);
        }

        let response: TopicsResponse = self.fetch(self.request("/topic")).await?;
        self.cache.put_topics(response.records.clone()).await;
        Ok(response.records)
    }

    /// One topic by identifier.
    ///
    /// Resolved from the cached collection when available; otherwise only
    /// `/topic/{id}` is requested, never the whole collection.
    pub async fn get_topic_by_id(&self, id: &str) -> Result<Option<Topic>, WorldBankError> {
        // `/topic/` with no id is the collection endpoint.
        if id.trim().is_empty() {
            return Ok(None);
        }

        if let Some(found) = self.cache.find_topic(id).await {
            debug!(topic_id = id, found = found.is_some(), "topic resolved from cache");
            return Ok(found);
        }

        let path = format!("/topic/{}", urlencoding::encode(id));
        let response: TopicsResponse = self.fetch(self.request(&path)).await?;
        Ok(response.records.into_iter().next())
    }

    /// Indicators for one topic, several topics, or all topics (`None`).
    pub async fn get_indicators_by_topic_id(
        &self,
        topic_id: Option<ParamValue>,
    ) -> Result<Vec<Indicator>, WorldBankError> {
        let key = normalize(topic_id.as_ref(), Some(ALL), LIST_SEPARATOR)
            .unwrap_or_else(|| ALL.to_owned());
        if has_blank_part(&key) {
            return Err(WorldBankError::InvalidParameter {
                name: "topicId",
                reason: String::from("topic IDs must be non-empty"),
            });
        }

        if let Some(indicators) = self.cache.indicators(&key).await {
            debug!(key = %key, count = indicators.len(), "indicators cache hit");
            return Ok(indicators);
        }

        if let Some(ParamValue::Many(ids)) = &topic_id {
            if !ids.is_empty() {
                let ids = ids.iter().map(String::as_str).collect::<Vec<_>>();
                if let Some(merged) = self.cache.concat_indicators(&ids).await {
                    debug!(key = %key, count = merged.len(), "indicators assembled from per-topic cache");
                    return Ok(merged);
                }
            }
        }

        if key != ALL {
            let ids = key.split(LIST_SEPARATOR).collect::<Vec<_>>();
            if let Some(unknown) = self.cache.unknown_topic_ids(&ids).await.first() {
                return Err(WorldBankError::not_found(*unknown));
            }
        }

        let path = format!("/topic/{}/indicator", encode_segment(&key, LIST_SEPARATOR));

        let first: IndicatorsResponse = self
            .fetch(self.request(&path).with_query("per_page", "1"))
            .await?;
        let total = first.meta.total.as_u64().ok_or_else(|| {
            ValidationError::single(
                "$[0].total",
                format!("expected a non-negative record count, found '{}'", first.meta.total),
            )
        })?;

        let indicators = if total == 0 {
            Vec::new()
        } else {
            let page: IndicatorsResponse = self
                .fetch(self.request(&path).with_query("per_page", total.to_string()))
                .await?;
            if page.records.len() as u64 != total {
                warn!(
                    key = %key,
                    expected = total,
                    received = page.records.len(),
                    "indicator count differs from reported total"
                );
            }
            page.records
        };

        self.cache.put_indicators(key, indicators.clone()).await;
        Ok(indicators)
    }

    /// Observations for an indicator, optionally filtered by country and date.
    ///
    /// Country and date default to `all`; a date range is joined with `:`.
    pub async fn fetch_data_for_indicator(
        &self,
        query: &DataQuery,
    ) -> Result<Vec<DataRecord>, WorldBankError> {
        let indicator = normalize(Some(&query.indicator_id), None, LIST_SEPARATOR)
            .filter(|key| !has_blank_part(key))
            .ok_or_else(|| WorldBankError::InvalidParameter {
                name: "indicatorId",
                reason: String::from("at least one non-empty indicator ID is required"),
            })?;
        let country = normalize(query.country_code.as_ref(), Some(ALL), LIST_SEPARATOR)
            .unwrap_or_else(|| ALL.to_owned());
        let date = normalize(query.date.as_ref(), Some(ALL), RANGE_SEPARATOR)
            .unwrap_or_else(|| ALL.to_owned());

        let path = format!(
            "/country/{}/indicator/{}",
            encode_segment(&country, LIST_SEPARATOR),
            encode_segment(&indicator, LIST_SEPARATOR)
        );

        let response: DataResponse = self
            .fetch(self.request(&path).with_query("date", date))
            .await?;
        Ok(response.records)
    }

    fn request(&self, path: &str) -> HttpRequest {
        HttpRequest::get(format!("{}{path}", self.config.base_url))
            .with_query("format", "json")
            .with_header("accept", "application/json")
            .with_timeout_ms(self.config.timeout_ms)
    }

    async fn fetch<T: Schema>(&self, request: HttpRequest) -> Result<T, WorldBankError> {
        debug!(url = %request.url, query = ?request.query, "world bank request");
        let url = request.url.clone();

        let response = self.http_client.execute(request).await?;
        if !response.is_success() {
            warn!(url = %url, status = response.status, "world bank returned non-success status");
            return Err(HttpError::status(response.status, &url).into());
        }

        Ok(parse_response(&response.body)?)
    }
}

fn has_blank_part(key: &str) -> bool {
    key.split(LIST_SEPARATOR).any(|part| part.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http_client::HttpResponse;
    use serde_json::json;
    use std::future::Future;
    use std::pin::Pin;
    use std::sync::Mutex;

    #[derive(Debug)]
    struct RecordingHttpClient {
        response: Result<HttpResponse, HttpError>,
        requests: Mutex<Vec<HttpRequest>>,
    }

    impl RecordingHttpClient {
        fn returning(response: Result<HttpResponse, HttpError>) -> Self {
            Self {
                response,
                requests: Mutex::new(Vec::new()),
            }
        }

        fn recorded_requests(&self) -> Vec<HttpRequest> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .clone()
        }
    }

    impl HttpClient for RecordingHttpClient {
        fn execute<'a>(
            &'a self,
            request: HttpRequest,
        ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
            self.requests
                .lock()
                .expect("request store should not be poisoned")
                .push(request);
            let response = self.response.clone();
            Box::pin(async move { response })
        }
    }

    fn client_with(http: Arc<RecordingHttpClient>) -> WorldBankClient {
        let config = ClientConfig::default()
            .with_base_url("https://wb.test/v2")
            .expect("valid base url")
            .with_timeout_ms(Some(1_500));
        WorldBankClient::with_http_client(http, config)
    }

    #[tokio::test]
    async fn every_request_asks_for_json_with_configured_timeout() {
        let body = json!([{"page": 1, "pages": 1, "per_page": 50, "total": 0}, []]).to_string();
        let http = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::ok_json(body))));
        let client = client_with(http.clone());

        let topics = client.get_topics().await.expect("empty topic list is valid");
        assert!(topics.is_empty());

        let requests = http.recorded_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].url, "https://wb.test/v2/topic");
        assert_eq!(requests[0].query_param("format"), Some("json"));
        assert_eq!(requests[0].timeout_ms, Some(1_500));
    }

    #[tokio::test]
    async fn non_success_status_is_a_transport_error() {
        let http = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse {
            status: 502,
            body: String::from("bad gateway"),
        })));
        let client = client_with(http);

        let error = client.get_topics().await.expect_err("502 must fail");
        match error {
            WorldBankError::Transport(inner) => assert_eq!(inner.status_code(), Some(502)),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(!client.cache().has_topics().await);
    }

    #[tokio::test]
    async fn transport_failure_propagates_unchanged() {
        let http = Arc::new(RecordingHttpClient::returning(Err(HttpError::new(
            "connection failed: refused",
        ))));
        let client = client_with(http.clone());

        let error = client
            .fetch_data_for_indicator(&DataQuery::new("SP.POP.TOTL"))
            .await
            .expect_err("transport failure");
        assert!(error.to_string().contains("connection failed"));
        assert_eq!(http.recorded_requests().len(), 1);
    }

    #[tokio::test]
    async fn empty_indicator_list_is_rejected_before_any_request() {
        let http = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::ok_json("[]"))));
        let client = client_with(http.clone());

        let query = DataQuery::new(Vec::<String>::new());
        let error = client
            .fetch_data_for_indicator(&query)
            .await
            .expect_err("indicator is required");
        assert_eq!(error.code(), "worldbank.invalid_parameter");
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn blank_indicator_ids_are_rejected_before_any_request() {
        let http = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::ok_json("[]"))));
        let client = client_with(http.clone());

        for query in [
            DataQuery::new(""),
            DataQuery::new("  "),
            DataQuery::new(["", ""]),
            DataQuery::new(["NY.GDP.MKTP.CD", ""]),
        ] {
            let error = client
                .fetch_data_for_indicator(&query)
                .await
                .expect_err("blank indicator ID");
            assert!(matches!(
                error,
                WorldBankError::InvalidParameter { name: "indicatorId", .. }
            ));
        }
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn blank_topic_id_resolves_without_request() {
        let http = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::ok_json("[]"))));
        let client = client_with(http.clone());

        assert_eq!(client.get_topic_by_id("").await.expect("no lookup"), None);
        assert_eq!(client.get_topic_by_id(" ").await.expect("no lookup"), None);

        let error = client
            .get_indicators_by_topic_id(Some(ParamValue::from("")))
            .await
            .expect_err("blank topic key");
        assert_eq!(error.code(), "worldbank.invalid_parameter");
        assert!(http.recorded_requests().is_empty());
    }

    #[tokio::test]
    async fn date_range_is_joined_with_colon() {
        let body = json!([{"page": 1, "pages": 1, "per_page": 50, "total": 0}, []]).to_string();
        let http = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::ok_json(body))));
        let client = client_with(http.clone());

        let query = DataQuery::new("SP.POP.TOTL")
            .with_country_code("BR")
            .with_date(["2010", "2020"]);
        client
            .fetch_data_for_indicator(&query)
            .await
            .expect("empty data page is valid");

        let request = &http.recorded_requests()[0];
        assert_eq!(request.url, "https://wb.test/v2/country/BR/indicator/SP.POP.TOTL");
        assert_eq!(request.query_param("date"), Some("2010:2020"));
    }

    #[tokio::test]
    async fn zero_total_skips_second_page_and_caches_empty_list() {
        let body = json!([{"page": 0, "pages": 0, "per_page": "1", "total": "0"}, []]).to_string();
        let http = Arc::new(RecordingHttpClient::returning(Ok(HttpResponse::ok_json(body))));
        let client = client_with(http.clone());

        let indicators = client
            .get_indicators_by_topic_id(Some(ParamValue::from("21")))
            .await
            .expect("empty topic");
        assert!(indicators.is_empty());
        assert_eq!(http.recorded_requests().len(), 1);
        assert_eq!(client.cache().indicator_keys().await, vec!["21"]);
    }

    #[test]
    fn data_query_deserializes_tool_input() {
        let query: DataQuery = serde_json::from_value(json!({
            "indicatorId": "NY.GDP.MKTP.CD",
            "countryCode": ["USA", "CAN"],
            "date": null
        }))
        .expect("tool input shape");

        assert_eq!(query.indicator_id, ParamValue::from("NY.GDP.MKTP.CD"));
        assert_eq!(query.country_code, Some(ParamValue::from(["USA", "CAN"])));
        assert_eq!(query.date, None);
    }
}
