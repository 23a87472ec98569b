use crate::ApiError;

use am_core::CoreError;
use am_store::StoreError;
use am_warranty::WarrantyError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn into_parts(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_json_body() {
    let (status, json) = into_parts(ApiError::unauthorized("Invalid email or password")).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Invalid email or password");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_core_validation_error_returns_400_with_field() {
    let error = ApiError::from(CoreError::validation(
        "date_purchased",
        "Purchase date cannot be in the future",
    ));

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "date_purchased");
    assert_eq!(
        json["error"]["message"],
        "Purchase date cannot be in the future"
    );
}

#[tokio::test]
async fn test_store_api_error_returns_502() {
    let error = ApiError::from(StoreError::api(500, "PGRST000", "connection refused"));

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "STORE_ERROR");
}

#[tokio::test]
async fn test_store_unique_violation_returns_409() {
    let error = ApiError::from(StoreError::api(409, "23505", "duplicate key value"));

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn test_store_not_found_returns_404() {
    let error = ApiError::from(StoreError::not_found("assets", Uuid::new_v4()));

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_warranty_token_expired_returns_401() {
    let (status, json) = into_parts(ApiError::from(WarrantyError::token_expired())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["message"], "Session expired. Please login again.");
}

#[tokio::test]
async fn test_warranty_api_error_returns_502_with_extracted_message() {
    let error = ApiError::from(WarrantyError::Api {
        status: 400,
        message: "Serial already registered".into(),
        location: ErrorLocation::from(Location::caller()),
    });

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(json["error"]["code"], "WARRANTY_ERROR");
    assert_eq!(json["error"]["message"], "Serial already registered");
}

#[tokio::test]
async fn test_invalid_uuid_returns_validation_error() {
    let error = ApiError::from(Uuid::parse_str("not-a-uuid").unwrap_err());

    let (status, json) = into_parts(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert!(
        json["error"]["message"]
            .as_str()
            .unwrap()
            .contains("Invalid UUID")
    );
}
