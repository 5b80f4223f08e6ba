//! Integration tests for leave request endpoints
mod common;

use crate::common::{create_test_app, get_request, json_request, multipart_body, seed_session, send};

use axum::http::StatusCode;
use serde_json::json;

const ANN: &[(&str, &str)] = &[
    ("name", "Ann"),
    ("email", "ann@x.com"),
    ("employeeId", "E1"),
    ("password", "pw123"),
];

/// Creates Ann and returns (employee id, user id).
async fn seed_ann(app: &common::TestApp, token: &str) -> (String, String) {
    let (_, created) = send(app.router(), multipart_body(ANN, None)).await;
    let employee_id = created["employee"]["id"].as_str().unwrap().to_string();

    let (_, body) = send(
        app.router(),
        get_request(&format!("/api/employee/{}", employee_id), Some(token)),
    )
    .await;
    let user_id = body["employee"]["userId"].as_str().unwrap().to_string();

    (employee_id, user_id)
}

fn leave_body(user_id: &str) -> serde_json::Value {
    json!({
        "userId": user_id,
        "leaveType": "annual",
        "startDate": "2025-03-03",
        "endDate": "2025-03-07",
        "reason": "Family visit",
    })
}

#[tokio::test]
async fn test_add_leave_resolves_employee_from_user_id() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;
    let (employee_id, user_id) = seed_ann(&app, &token).await;

    let (status, body) = send(
        app.router(),
        json_request("POST", "/api/leave/add", Some(&token), leave_body(&user_id)),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["success"], true);

    let (status, body) = send(
        app.router(),
        get_request(&format!("/api/leave/{}", employee_id), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["leaves"][0]["status"], "pending");
    assert_eq!(body["leaves"][0]["leaveType"], "annual");
}

#[tokio::test]
async fn test_leave_history_id_is_polymorphic() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;
    let (employee_id, user_id) = seed_ann(&app, &token).await;

    send(
        app.router(),
        json_request("POST", "/api/leave/add", Some(&token), leave_body(&user_id)),
    )
    .await;

    let (_, by_employee) = send(
        app.router(),
        get_request(&format!("/api/leave/{}", employee_id), Some(&token)),
    )
    .await;
    let (_, by_user) = send(
        app.router(),
        get_request(&format!("/api/leave/{}", user_id), Some(&token)),
    )
    .await;

    assert_eq!(by_employee["count"], 1);
    assert_eq!(by_user["count"], 1);
    assert_eq!(by_employee["leaves"][0]["id"], by_user["leaves"][0]["id"]);
}

#[tokio::test]
async fn test_add_leave_rejects_inverted_dates() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;
    let (_, user_id) = seed_ann(&app, &token).await;

    let mut body = leave_body(&user_id);
    body["startDate"] = json!("2025-03-07");
    body["endDate"] = json!("2025-03-03");

    let (status, _) = send(
        app.router(),
        json_request("POST", "/api/leave/add", Some(&token), body),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_add_leave_for_unknown_user_is_not_found() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;

    let (status, _) = send(
        app.router(),
        json_request(
            "POST",
            "/api/leave/add",
            Some(&token),
            leave_body(&uuid::Uuid::new_v4().to_string()),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_review_listing_and_status_update() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;
    let (_, user_id) = seed_ann(&app, &token).await;

    send(
        app.router(),
        json_request("POST", "/api/leave/add", Some(&token), leave_body(&user_id)),
    )
    .await;

    let (status, body) = send(app.router(), get_request("/api/leave/", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["leaves"][0]["employee"]["email"], "ann@x.com");
    let leave_id = body["leaves"][0]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        app.router(),
        json_request(
            "PUT",
            &format!("/api/leave/{}", leave_id),
            Some(&token),
            json!({"status": "approved"}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, detail) = send(
        app.router(),
        get_request(&format!("/api/leave/detail/{}", leave_id), Some(&token)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["leave"]["status"], "approved");
    assert_eq!(detail["leave"]["employee"]["name"], "Ann");
}

#[tokio::test]
async fn test_status_update_rejects_unknown_status() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;
    let (_, user_id) = seed_ann(&app, &token).await;

    send(
        app.router(),
        json_request("POST", "/api/leave/add", Some(&token), leave_body(&user_id)),
    )
    .await;
    let (_, listing) = send(app.router(), get_request("/api/leave/", Some(&token))).await;
    let leave_id = listing["leaves"][0]["id"].as_str().unwrap().to_string();

    let (status, _) = send(
        app.router(),
        json_request(
            "PUT",
            &format!("/api/leave/{}", leave_id),
            Some(&token),
            json!({"status": "cancelled"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_status_update_unknown_leave_is_not_found() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;

    let (status, _) = send(
        app.router(),
        json_request(
            "PUT",
            &format!("/api/leave/{}", uuid::Uuid::new_v4()),
            Some(&token),
            json!({"status": "approved"}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
