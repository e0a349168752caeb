//! Tests for `AppError` → HTTP response mapping.
//!
//! Every error is rendered as HTTP 222 carrying the real outcome in the
//! envelope's `status` field. These tests call `IntoResponse` directly and
//! need no database.

use autocatalog_api::error::AppError;
use autocatalog_core::error::CoreError;
use axum::response::IntoResponse;
use http_body_util::BodyExt;

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (u16, serde_json::Value) {
    let response = err.into_response();
    let status = response.status().as_u16();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Client errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_maps_to_400_envelope() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Person",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, 222);
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "Person with id 42 not found");
}

#[tokio::test]
async fn validation_maps_to_400_envelope() {
    let err = AppError::Core(CoreError::Validation {
        field: "year".into(),
        message: "year must be after 1885".into(),
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, 222);
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "year: year must be after 1885");
}

#[tokio::test]
async fn owner_not_found_maps_to_400_envelope() {
    let (_, json) = error_to_response(AppError::Core(CoreError::OwnerNotFound { owner_id: 3 })).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn bad_request_keeps_its_message() {
    let (status, json) = error_to_response(AppError::BadRequest("Missing id query parameter".into())).await;

    assert_eq!(status, 222);
    assert_eq!(json["status"], 400);
    assert_eq!(json["error"], "Missing id query parameter");
}

// ---------------------------------------------------------------------------
// Server errors
// ---------------------------------------------------------------------------

#[tokio::test]
async fn database_error_is_sanitized() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolClosed)).await;

    assert_eq!(status, 222);
    assert_eq!(json["status"], 500);
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn internal_core_error_is_sanitized() {
    let err = AppError::Core(CoreError::Internal("secret detail".into()));

    let (_, json) = error_to_response(err).await;

    assert_eq!(json["status"], 500);
    assert!(!json["error"].as_str().unwrap().contains("secret"));
}

// ---------------------------------------------------------------------------
// Extractor failures and timeouts
// ---------------------------------------------------------------------------

#[tokio::test]
async fn timeout_maps_to_500_envelope_with_reason() {
    let (status, json) = error_to_response(AppError::Timeout).await;

    assert_eq!(status, 222);
    assert_eq!(json["status"], 500);
    assert_eq!(json["error"], "Request timed out");
}
