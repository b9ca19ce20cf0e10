use super::*;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{header, HeaderMap, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Json, Router as HttpRouter,
};
use serde_json::json;
use shared::domain::BookingId;
use tokio::net::TcpListener;

use crate::outcome::{NETWORK_ERROR_MESSAGE, UNKNOWN_ERROR_DETAIL};

#[derive(Debug, Clone)]
struct CapturedRequest {
    method: Method,
    booking_id: String,
    content_type: Option<String>,
    body_len: usize,
}

#[derive(Clone, Default)]
struct MockState {
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn handle_cancel(
    State(state): State<MockState>,
    method: Method,
    Path(booking_id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    state
        .captured
        .lock()
        .expect("capture lock")
        .push(CapturedRequest {
            method,
            booking_id: booking_id.clone(),
            content_type: headers
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .map(str::to_string),
            body_len: body.len(),
        });

    match booking_id.as_str() {
        "BK123" => Json(json!({"status": "Cancelled", "booking_id": "BK123"})).into_response(),
        "BK999" => (
            StatusCode::NOT_FOUND,
            Json(json!({"status": "Booking not found"})),
        )
            .into_response(),
        "GONE" => (
            StatusCode::NOT_FOUND,
            Json(json!({"detail": "Booking not found"})),
        )
            .into_response(),
        "HTML" => (StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").into_response(),
        "SLOW" => {
            tokio::time::sleep(Duration::from_secs(3)).await;
            Json(json!({"status": "cancelled"})).into_response()
        }
        other => Json(json!({
            "booking_id": other,
            "status": "partially_cancelled",
            "total_segments_cancelled": 4,
            "total_segments_freed": 3,
            "regions": {
                "ireland": {"status": "success", "segments_cancelled": 4, "segments_freed": 3},
                "london": {"status": "failed", "message": "Status code: 500"}
            }
        }))
        .into_response(),
    }
}

async fn spawn_mock_booking_server() -> anyhow::Result<(String, MockState)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let state = MockState::default();
    let app = HttpRouter::new()
        .route("/cancel_booking/:booking_id", any(handle_cancel))
        .with_state(state.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), state))
}

fn service_for(base_url: &str) -> HttpBookingService {
    let settings = ClientSettings {
        base_url: base_url.to_string(),
        request_timeout_secs: None,
    };
    HttpBookingService::new(&settings).expect("service")
}

async fn submit(service: &HttpBookingService, input: &str) -> CancellationController {
    let mut controller = CancellationController::new();
    controller.update_identifier(input);
    controller.submit_cancellation(service).await;
    controller
}

#[tokio::test]
async fn posts_to_path_embedded_endpoint_with_json_header_and_empty_body() {
    let (base_url, state) = spawn_mock_booking_server().await.expect("server");
    let service = service_for(&base_url);

    let controller = submit(&service, " BK123 ").await;
    let receipt = controller.success_dialog().expect("success");
    assert_eq!(receipt.status, "Cancelled");
    assert_eq!(receipt.booking_id.as_deref(), Some("BK123"));

    let captured = state.captured.lock().expect("capture lock").clone();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].method, Method::POST);
    assert_eq!(captured[0].booking_id, "BK123");
    assert_eq!(captured[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(captured[0].body_len, 0);
}

#[tokio::test]
async fn not_found_with_status_field_is_http_error() {
    let (base_url, _state) = spawn_mock_booking_server().await.expect("server");
    let controller = submit(&service_for(&base_url), "BK999").await;

    assert_eq!(
        controller.error_dialog(),
        Some(&CancellationOutcome::HttpError {
            status_code: 404,
            detail: "Booking not found".to_string(),
        })
    );
}

#[tokio::test]
async fn not_found_with_only_detail_field_uses_fallback() {
    let (base_url, _state) = spawn_mock_booking_server().await.expect("server");
    let controller = submit(&service_for(&base_url), "GONE").await;

    assert_eq!(
        controller.error_dialog(),
        Some(&CancellationOutcome::HttpError {
            status_code: 404,
            detail: UNKNOWN_ERROR_DETAIL.to_string(),
        })
    );
}

#[tokio::test]
async fn non_json_error_body_is_network_error() {
    let (base_url, _state) = spawn_mock_booking_server().await.expect("server");
    let controller = submit(&service_for(&base_url), "HTML").await;

    assert_eq!(
        controller.active_outcome(),
        Some(&CancellationOutcome::NetworkError {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        })
    );
}

#[tokio::test]
async fn regional_summary_is_surfaced_on_success() {
    let (base_url, _state) = spawn_mock_booking_server().await.expect("server");
    let controller = submit(&service_for(&base_url), "BK-MULTI").await;

    let receipt = controller.success_dialog().expect("success");
    assert_eq!(receipt.status, "partially_cancelled");
    assert_eq!(receipt.total_segments_cancelled, Some(4));
    assert_eq!(receipt.total_segments_freed, Some(3));
    assert_eq!(receipt.regions.len(), 2);
    assert!(receipt.cancellation_status().is_partial());
}

#[tokio::test]
async fn refused_connection_is_network_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let controller = submit(&service_for(&format!("http://{addr}")), "BK1").await;
    assert_eq!(
        controller.active_outcome(),
        Some(&CancellationOutcome::NetworkError {
            message: NETWORK_ERROR_MESSAGE.to_string(),
        })
    );
}

#[tokio::test]
async fn configured_timeout_classifies_as_network_error() {
    let (base_url, _state) = spawn_mock_booking_server().await.expect("server");
    let settings = ClientSettings {
        base_url,
        request_timeout_secs: Some(1),
    };
    let service = HttpBookingService::new(&settings).expect("service");

    let controller = submit(&service, "SLOW").await;
    assert_eq!(
        controller.active_outcome(),
        Some(&CancellationOutcome::network_failed())
    );
}

#[test]
fn cancel_url_encodes_identifier_as_one_segment() {
    let service = service_for("http://127.0.0.1:8000");
    let url = service
        .cancel_url(&BookingId::parse("BK 1/2").expect("id"))
        .expect("url");
    assert_eq!(url.as_str(), "http://127.0.0.1:8000/cancel_booking/BK%201%2F2");
}

#[test]
fn cancel_url_keeps_base_path_prefix() {
    let service = service_for("http://gateway.local/api/");
    let url = service
        .cancel_url(&BookingId::parse("BK1").expect("id"))
        .expect("url");
    assert_eq!(url.as_str(), "http://gateway.local/api/cancel_booking/BK1");
}

#[test]
fn rejects_base_url_that_cannot_hold_paths() {
    let settings = ClientSettings {
        base_url: "mailto:ops@example.com".to_string(),
        request_timeout_secs: None,
    };
    assert!(matches!(
        HttpBookingService::new(&settings),
        Err(ServiceError::InvalidBaseUrl(_))
    ));
}
