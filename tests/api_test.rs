use axum::body::Body;
use axum::http::{Request, StatusCode};
use parcel_tracker::carriers::CarrierApi;
use parcel_tracker::config::ServerConfig;
use parcel_tracker::domain::{CarrierId, TrackingResult};
use parcel_tracker::error::{Result, TrackingError};
use parcel_tracker::registry::CarrierRegistry;
use parcel_tracker::server::create_server;
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> axum::Router {
    app_with(CarrierRegistry::new())
}

fn app_with(registry: CarrierRegistry) -> axum::Router {
    create_server(Arc::new(registry), &ServerConfig::default())
}

async fn send(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
    let json = serde_json::from_slice(&body).unwrap();
    (status, json)
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    send(app(), uri).await
}

/// Carrier whose upstream is down: every lookup fails operationally.
struct OutageCarrier;

#[async_trait::async_trait]
impl CarrierApi for OutageCarrier {
    fn carrier_id(&self) -> CarrierId {
        CarrierId::AusPost
    }

    fn carrier_name(&self) -> &'static str {
        "Australia Post"
    }

    async fn track(&self, _tracking_number: &str) -> Result<TrackingResult> {
        Err(TrackingError::Carrier {
            message: "upstream tracking API unavailable".to_string(),
        })
    }
}

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let (status, json) = get_json("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn track_endpoint_returns_camel_case_tracking_result() {
    let (status, json) = get_json("/api/track/EM123456789AU").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["carrier"], "Australia Post");
    assert_eq!(json["trackingNumber"], "EM123456789AU");
    assert_eq!(json["status"], "In Transit");
    assert_eq!(json["estimatedDelivery"], "2026-02-18");
    assert_eq!(json["events"].as_array().unwrap().len(), 2);
    assert_eq!(json["events"][0]["time"], "2026-02-14 09:00");
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn track_endpoint_routes_digit_formats_to_fedex() {
    let (status, json) = get_json("/api/track/123456789012").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["carrier"], "FedEx");
    assert_eq!(json["status"], "Delivered");
}

#[tokio::test]
async fn carrier_failure_maps_to_generic_500() {
    // A failing track operation is the operational error tier, distinct from
    // the "Not Found" business result.
    let registry = CarrierRegistry::with_carriers(vec![Arc::new(OutageCarrier)]);
    let (status, json) = send(app_with(registry), "/api/track/EM123456789AU").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json, serde_json::json!({ "error": "Failed to track parcel" }));
}

#[tokio::test]
async fn unrecognized_number_still_returns_a_tracking_result() {
    // Detector fallback policy: unmatched formats default to Australia Post.
    let (status, json) = get_json("/api/track/1Z999AA10123456784").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["carrier"], "Australia Post");
    assert_eq!(json["trackingNumber"], "1Z999AA10123456784");
}
