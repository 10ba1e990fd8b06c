use super::*;
use httpmock::prelude::*;
use serde_json::json;

fn site_request() -> CostAnalysisRequest {
    CostAnalysisRequest {
        latitude: "35.6".to_string(),
        longitude: "139.7".to_string(),
        energy_consumption: "42.5".to_string(),
    }
}

#[tokio::test]
async fn fetch_cost_analysis_returns_payload() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET)
            .path("/solar")
            .query_param("latitude", "35.6")
            .query_param("longitude", "139.7")
            .query_param("energyConsumption", "42.5");
        then.status(200).json_body(json!({
            "oldSystem": { "totalCost": 1200.0 },
            "newSystem": { "totalCost": 800.0 }
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let payload = client
        .fetch_cost_analysis(&site_request())
        .await
        .expect("analysis payload");
    assert_eq!(payload["newSystem"]["totalCost"], json!(800.0));
}

#[tokio::test]
async fn fetch_cost_analysis_decodes_error_envelope() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/solar");
        then.status(422).json_body(json!({
            "error": "latitude out of range",
            "code": "INVALID_SITE"
        }));
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client
        .fetch_cost_analysis(&site_request())
        .await
        .expect_err("error envelope");
    assert_eq!(err.code, "INVALID_SITE");
    assert_eq!(err.error, "latitude out of range");
}

#[tokio::test]
async fn fetch_cost_analysis_maps_non_json_errors() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(GET).path("/solar");
        then.status(503).body("analysis service unavailable");
    });

    let client = ApiClient::new_with_base_url(server.base_url());
    let err = client
        .fetch_cost_analysis(&site_request())
        .await
        .expect_err("status error");
    assert_eq!(err.code, "REQUEST_FAILED");
    assert!(err.error.contains("503"));
}

#[test]
fn cost_analysis_request_serializes_camel_case() {
    let encoded = serde_json::to_value(site_request()).expect("serialize request");
    assert_eq!(
        encoded,
        json!({
            "latitude": "35.6",
            "longitude": "139.7",
            "energyConsumption": "42.5"
        })
    );
}
