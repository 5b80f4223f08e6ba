use crate::api::error::ApiError;

use hr_db::DbError;

use std::panic::Location;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_email_unique_violation_maps_to_registered_conflict() {
    let db_error = DbError::UniqueViolation {
        constraint: "UNIQUE constraint failed: users.email".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "User already registered");
}

#[tokio::test]
async fn test_storage_errors_are_not_leaked() {
    let db_error = DbError::Corrupt {
        message: "invalid UUID in users.id: oops".to_string(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, body) = body_json(ApiError::from(db_error)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Database operation failed");
    assert!(
        !body["error"]
            .as_str()
            .unwrap()
            .contains("invalid UUID")
    );
}

#[tokio::test]
async fn test_status_codes_per_variant() {
    let cases = [
        (ApiError::validation("bad input"), StatusCode::BAD_REQUEST),
        (ApiError::conflict("duplicate"), StatusCode::BAD_REQUEST),
        (ApiError::unauthorized("no token"), StatusCode::UNAUTHORIZED),
        (ApiError::not_found("missing"), StatusCode::NOT_FOUND),
        (
            ApiError::internal("broken"),
            StatusCode::INTERNAL_SERVER_ERROR,
        ),
    ];

    for (error, expected) in cases {
        let (status, body) = body_json(error).await;
        assert_eq!(status, expected);
        assert_eq!(body["success"], false);
    }
}
