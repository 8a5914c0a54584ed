// Integration tests for `ApiClient` using wiremock.

use chrono::{TimeZone, Utc};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use cellwatch_api::types::TimeStep;
use cellwatch_api::{ApiClient, Error, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri());
    let client = ApiClient::new(
        base.parse().expect("mock server URI should parse"),
        &TransportConfig::default(),
    )
    .expect("client should build");
    (server, client)
}

fn hour() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2013, 11, 4, 10, 0, 0).single().expect("valid timestamp")
}

const HOUR_RFC3339: &str = "2013-11-04T10:00:00+00:00";

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn heatmap_decodes_and_passes_datetime() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "cellId": 4259,
            "totalActivity": 812.5,
            "squareId": 42,
            "latitude": 45.464,
            "longitude": 9.19,
            "smsIn": 10.0,
            "internetTraffic": 700.0
        },
        { "cellId": 5060, "totalActivity": 12.25, "lat": 45.07, "lon": 7.69 }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/traffic/heatmap"))
        .and(query_param("datetime", HOUR_RFC3339))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let cells = client.heatmap(hour()).await.expect("heatmap should succeed");

    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0].cell_id, 4259);
    assert_eq!(cells[0].latitude, Some(45.464));
    assert_eq!(cells[0].lat, None);
    // Second row uses the short coordinate field names
    assert_eq!(cells[1].lat, Some(45.07));
    assert_eq!(cells[1].latitude, None);
}

#[tokio::test]
async fn top_cells_passes_hour_and_limit() {
    let (server, client) = setup().await;

    let body = json!([
        { "cellId": 1, "totalActivity": 99.0, "hour": HOUR_RFC3339 },
        { "cellId": 2, "totalActivity": 42.0 }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/traffic/top-cells"))
        .and(query_param("hour", HOUR_RFC3339))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let top = client
        .top_cells(hour(), 5)
        .await
        .expect("top-cells should succeed");
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].cell_id, 1);
}

#[tokio::test]
async fn cell_timeseries_builds_nested_path() {
    let (server, client) = setup().await;

    let body = json!([
        { "timestamp": HOUR_RFC3339, "value": 10.0, "metric": "total" }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/traffic/cells/4259/timeseries"))
        .and(query_param("step", "hour"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let series = client
        .cell_timeseries(4259, hour(), hour(), TimeStep::Hour)
        .await
        .expect("timeseries should succeed");
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].value, 10.0);
}

#[tokio::test]
async fn congestion_passes_thresholds() {
    let (server, client) = setup().await;

    let body = json!([
        { "cellId": 9, "totalActivity": 1500.0, "score": 93.5, "severity": "critical" }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/traffic/congestion"))
        .and(query_param("warn", "70"))
        .and(query_param("crit", "90"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let cells = client
        .congestion(hour(), 100, 70.0, 90.0)
        .await
        .expect("congestion should succeed");
    assert_eq!(cells[0].score, 93.5);
    assert_eq!(cells[0].severity.as_deref(), Some("critical"));
}

#[tokio::test]
async fn alerts_since_is_optional() {
    let (server, client) = setup().await;

    let body = json!([
        {
            "id": "a-1",
            "cellId": 4259,
            "type": "overload",
            "severity": "high",
            "message": "sustained overload",
            "timestamp": HOUR_RFC3339,
            "resolved": false
        }
    ]);

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let alerts = client.alerts(None).await.expect("alerts should succeed");
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type.as_deref(), Some("overload"));
    assert!(!alerts[0].resolved);
}

#[tokio::test]
async fn resolve_alert_posts_to_resolve_path() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/api/alerts/a-7/resolve"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .resolve_alert("a-7")
        .await
        .expect("resolve should succeed");
}

#[tokio::test]
async fn stream_slot_decodes_ingest_receipt() {
    let (server, client) = setup().await;

    let body = json!({ "slotDatetime": HOUR_RFC3339, "sentEvents": 1432 });

    Mock::given(method("POST"))
        .and(path("/api/stream/slot"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let receipt = client
        .stream_slot(None)
        .await
        .expect("stream slot should succeed");
    assert_eq!(receipt.sent_events, 1432);
}

// ── Error mapping ───────────────────────────────────────────────────

#[tokio::test]
async fn server_error_maps_to_api_error_with_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(500).set_body_string("aggregation failed"))
        .mount(&server)
        .await;

    let err = client.network_stats().await.expect_err("should fail");
    match err {
        Error::Api { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "aggregation failed");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_maps_to_dedicated_variant() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/alerts"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let err = client.alerts(None).await.expect_err("should fail");
    assert!(matches!(err, Error::Unauthorized { .. }));
}

#[tokio::test]
async fn undecodable_body_preserves_raw_text() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = client.network_stats().await.expect_err("should fail");
    match err {
        Error::Deserialization { body, .. } => assert!(body.contains("not json")),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

#[tokio::test]
async fn not_found_is_detectable() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/api/cells/999999"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such cell"))
        .mount(&server)
        .await;

    let err = client.cell_details(999_999).await.expect_err("should fail");
    assert!(err.is_not_found());
}
