use municipal_api::types::AmountType;
use municipal_api::{AvailableItemsQuery, Client, Error, MunicipalityDataQuery};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn load_fixture(name: &str) -> String {
    std::fs::read_to_string(format!("tests/fixtures/{}", name)).unwrap()
}

#[tokio::test]
async fn get_municipality_data_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("municipality_data.json");

    Mock::given(method("GET"))
        .and(path("/api/municipality-data"))
        .and(query_param("municipality", "CPT"))
        .and(query_param("year", "2023"))
        .and(query_param("amount_type", "AUDA"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client
        .get_municipality_data(&MunicipalityDataQuery::new("CPT", 2023))
        .await;
    assert!(result.is_ok());

    let resp = result.unwrap();
    assert_eq!(resp.cells.len(), 1);
    assert_eq!(resp.cells[0].item_code.as_deref(), Some("2800"));
    assert_eq!(resp.cells[0].municipality_name.as_deref(), Some("Cape Town"));
}

#[tokio::test]
async fn get_municipality_data_sends_optional_filters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/municipality-data"))
        .and(query_param("amount_type", "ORGB"))
        .and(query_param("financial_period", "3"))
        .and(query_param("item_codes", "0200,0400"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"cells": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let query = MunicipalityDataQuery::new("JHB", 2022)
        .with_amount_type(AmountType::OriginalBudget)
        .with_financial_period(3)
        .with_item_codes(&["0200".to_string(), "0400".to_string()]);
    let resp = client.get_municipality_data(&query).await.unwrap();
    assert!(resp.is_empty());
}

#[tokio::test]
async fn get_municipality_data_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/municipality-data"))
        .respond_with(
            ResponseTemplate::new(404).set_body_string(r#"{"error": "Municipality not found"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get_municipality_data(&MunicipalityDataQuery::new("XXX", 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Server { status: 404, .. }));
    assert_eq!(err.user_message(), "Municipality not found");
}

#[tokio::test]
async fn get_municipality_data_server_error_without_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/municipality-data"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client
        .get_municipality_data(&MunicipalityDataQuery::new("CPT", 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::HttpStatus { status: 500, .. }));
    assert_eq!(err.user_message(), municipal_api::GENERIC_FAILURE_MESSAGE);
}

#[tokio::test]
async fn get_municipality_data_malformed_json() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/municipality-data"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{not valid json}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let result = client
        .get_municipality_data(&MunicipalityDataQuery::new("CPT", 2023))
        .await;
    assert!(matches!(result, Err(Error::Decode(_))));
}

#[tokio::test]
async fn network_failure_is_distinct() {
    // Non-pooled server: dropping it actually closes the listener.
    let mock_server = MockServer::builder().start().await;
    let uri = mock_server.uri();
    drop(mock_server);

    let client = Client::with_base_url(&uri);
    let err = client
        .get_municipality_data(&MunicipalityDataQuery::new("CPT", 2023))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::RequestFailed));
    assert_eq!(err.status(), None);
    assert_ne!(err.user_message(), "undefined");
    assert!(!err.user_message().is_empty());
}

#[tokio::test]
async fn get_available_items_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("available_items.json");

    Mock::given(method("GET"))
        .and(path("/api/available-items"))
        .and(query_param("municipality", "CPT"))
        .and(query_param("year", "2023"))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let items = client
        .get_available_items(&AvailableItemsQuery::new("CPT", 2023))
        .await
        .unwrap();
    assert_eq!(items.codes().collect::<Vec<_>>(), vec!["0200", "0400", "2800"]);
    assert_eq!(items.label("0200"), Some("Property rates"));
}

#[tokio::test]
async fn post_query_accepts_facts_rows() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("query_facts.json");

    Mock::given(method("POST"))
        .and(path("/api/query"))
        .and(body_json(serde_json::json!({"user_request": "operating revenue in 2020"})))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let resp = client.post_query("operating revenue in 2020").await.unwrap();
    assert_eq!(resp.len(), 1);
    assert_eq!(resp.cells[0].item_code.as_deref(), Some("0100"));
    assert_eq!(resp.cells[0].amount(), 98000.0);
}

#[tokio::test]
async fn post_query_server_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/query"))
        .respond_with(
            ResponseTemplate::new(400).set_body_string(r#"{"error": "user_request missing"}"#),
        )
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let err = client.post_query("").await.unwrap_err();
    assert_eq!(err.user_message(), "user_request missing");
}

#[tokio::test]
async fn get_forecast_success() {
    let mock_server = MockServer::start().await;
    let body = load_fixture("forecast.json");

    Mock::given(method("POST"))
        .and(path("/api/forecast"))
        .and(body_json(serde_json::json!({"nl_data": [{"time": "2023-01-01", "item_id": "Water", "target": 10}]})))
        .respond_with(ResponseTemplate::new(200).set_body_string(&body))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let rows = vec![serde_json::json!({"time": "2023-01-01", "item_id": "Water", "target": 10})];
    let forecast = client.get_forecast(&rows).await.unwrap();
    assert_eq!(forecast.len(), 2);
    assert_eq!(forecast[0].key(), "Water");
    assert_eq!(forecast[1].key(), "Roads");
}

#[tokio::test]
async fn get_forecast_missing_field_is_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .mount(&mock_server)
        .await;

    let client = Client::with_base_url(&mock_server.uri());
    let forecast = client.get_forecast(&[]).await.unwrap();
    assert!(forecast.is_empty());
}
