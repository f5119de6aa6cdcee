//! Integration tests for the API clients against a local mock server.

use dp_client::DataPulseClient;
use dp_core::Config;
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_config(server_uri: &str) -> Config {
    let mut config = Config::default_with_keys("av_test_key".to_string(), "news_test_key".to_string());
    config.alpha_vantage_url = server_uri.to_string();
    config.news_api_url = server_uri.to_string();
    config.open_data_url = server_uri.to_string();
    config
}

fn delay_records(start_id: i64, count: i64) -> Vec<Value> {
    (start_id..start_id + count)
        .map(|n| {
            json!({
                "_id": n,
                "Day": "Monday",
                "Date": "2024-01-15T00:00:00",
                "Time": "08:30",
                "Bound": "N",
                "Route": 36,
                "Min Gap": 20,
                "Station": "FINCH STATION",
                "Vehicle": 8421,
                "Incident": "Mechanical",
                "Min Delay": 10
            })
        })
        .collect()
}

fn search_page(total: i64, records: Vec<Value>) -> Value {
    json!({
        "success": true,
        "result": { "total": total, "records": records }
    })
}

#[tokio::test]
async fn daily_time_series_round_trip() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .and(query_param("function", "TIME_SERIES_DAILY"))
        .and(query_param("symbol", "AAPL"))
        .and(query_param("apikey", "av_test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "Meta Data": {
                "1. Information": "Daily Prices (open, high, low, close) and Volumes",
                "2. Symbol": "AAPL",
                "3. Last Refreshed": "2024-03-15"
            },
            "Time Series (Daily)": {
                "2024-03-15": {
                    "1. open": "171.17",
                    "2. high": "172.62",
                    "3. low": "170.29",
                    "4. close": "172.62",
                    "5. volume": "121752700"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    let daily = client.time_series().daily("AAPL").await.unwrap();
    assert_eq!(daily.meta_data.symbol, "AAPL");
    assert_eq!(daily.time_series["2024-03-15"].close, "172.62");
}

#[tokio::test]
async fn missing_series_key_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"Meta Data": {"1. Information": "x", "2. Symbol": "ZZZZ", "3. Last Refreshed": "2024-03-15"}})),
        )
        .mount(&server)
        .await;

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    assert!(client.time_series().daily("ZZZZ").await.is_err());
}

#[tokio::test]
async fn news_search_sends_expected_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/everything"))
        .and(query_param("q", "Tesla"))
        .and(query_param("language", "en"))
        .and(query_param("sortBy", "publishedAt"))
        .and(query_param("pageSize", "5"))
        .and(query_param("apiKey", "news_test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "totalResults": 1,
            "articles": [{
                "source": {"id": null, "name": "Reuters"},
                "title": "Tesla expands factory output",
                "publishedAt": "2024-03-15T08:30:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    let news = client.news().everything("Tesla").await.unwrap();
    assert_eq!(news.articles.len(), 1);
    assert_eq!(news.articles[0].source.name, "Reuters");
}

#[tokio::test]
async fn pagination_walks_offsets_until_total() {
    let server = MockServer::start().await;
    let total = 2500;

    for (offset, count) in [(0, 1000), (1000, 1000), (2000, 500)] {
        Mock::given(method("GET"))
            .and(path("/api/3/action/datastore_search"))
            .and(query_param("id", "res-a"))
            .and(query_param("limit", "1000"))
            .and(query_param("offset", offset.to_string()))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(search_page(total, delay_records(offset + 1, count))),
            )
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    let records = client.open_data().datastore_records("res-a").await.unwrap();
    // stops once offset >= total; no request for offset 3000
    assert_eq!(records.len(), 2500);
}

#[tokio::test]
async fn pagination_stops_on_empty_batch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/action/datastore_search"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_page(5000, delay_records(1, 1000))),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/3/action/datastore_search"))
        .and(query_param("offset", "1000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(5000, vec![])))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    let records = client.open_data().datastore_records("res-a").await.unwrap();
    assert_eq!(records.len(), 1000);
}

#[tokio::test]
async fn pagination_soft_fails_on_unsuccessful_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/action/datastore_search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": false})))
        .expect(1)
        .mount(&server)
        .await;

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    let records = client.open_data().datastore_records("res-a").await.unwrap();
    assert!(records.is_empty());
}

#[tokio::test]
async fn pagination_soft_fails_on_http_error_returning_partial_set() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/action/datastore_search"))
        .and(query_param("offset", "0"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_page(3000, delay_records(1, 1000))),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/3/action/datastore_search"))
        .and(query_param("offset", "1000"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    let records = client.open_data().datastore_records("res-a").await.unwrap();
    // truncated, not an error
    assert_eq!(records.len(), 1000);
}

#[tokio::test]
async fn only_datastore_active_resources_are_queried() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/3/action/package_show"))
        .and(query_param("id", "ttc-bus-delay-data"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "result": {
                "name": "ttc-bus-delay-data",
                "resources": [
                    {"id": "a", "datastore_active": true},
                    {"id": "b", "datastore_active": false}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/3/action/datastore_search"))
        .and(query_param("id", "a"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(search_page(1, delay_records(1, 1))),
        )
        .expect(1)
        .mount(&server)
        .await;

    // resource "b" must never be queried
    Mock::given(method("GET"))
        .and(path("/api/3/action/datastore_search"))
        .and(query_param("id", "b"))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_page(0, vec![])))
        .expect(0)
        .mount(&server)
        .await;

    let client = DataPulseClient::new(test_config(&server.uri())).unwrap();
    let package = client.open_data().package_show("ttc-bus-delay-data").await.unwrap();

    let mut fetched = 0;
    for resource in package.result.resources.iter().filter(|r| r.datastore_active) {
        let records = client.open_data().datastore_records(&resource.id).await.unwrap();
        fetched += records.len();
    }
    assert_eq!(fetched, 1);
}
