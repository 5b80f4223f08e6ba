//! Integration tests for the dashboard summary
mod common;

use crate::common::{create_test_app, get_request, json_request, multipart_body, seed_session, send};

use axum::http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_summary_on_empty_database() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;

    let (status, body) = send(
        app.router(),
        get_request("/api/dashboard/summary", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalEmployees"], 0);
    assert_eq!(body["totalDepartments"], 0);
    assert_eq!(body["totalSalary"], 0.0);
    assert_eq!(body["leaveSummary"]["appliedFor"], 0);
}

#[tokio::test]
async fn test_summary_reflects_created_records() {
    let app = create_test_app().await;
    let (_, token) = seed_session(&app.state).await;

    send(
        app.router(),
        json_request(
            "POST",
            "/api/department/add",
            Some(&token),
            json!({"name": "Engineering"}),
        ),
    )
    .await;

    let ann: &[(&str, &str)] = &[
        ("name", "Ann"),
        ("email", "ann@x.com"),
        ("employeeId", "E1"),
        ("password", "pw123"),
        ("salary", "4200"),
    ];
    let (_, created) = send(app.router(), multipart_body(ann, None)).await;
    let employee_id = created["employee"]["id"].as_str().unwrap().to_string();

    let (_, profile) = send(
        app.router(),
        get_request(&format!("/api/employee/{}", employee_id), Some(&token)),
    )
    .await;
    let user_id = profile["employee"]["userId"].as_str().unwrap().to_string();

    send(
        app.router(),
        json_request(
            "POST",
            "/api/leave/add",
            Some(&token),
            json!({
                "userId": user_id,
                "leaveType": "annual",
                "startDate": "2025-03-03",
                "endDate": "2025-03-07",
                "reason": "Family visit",
            }),
        ),
    )
    .await;

    let (status, body) = send(
        app.router(),
        get_request("/api/dashboard/summary", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["totalEmployees"], 1);
    assert_eq!(body["totalDepartments"], 1);
    assert_eq!(body["totalSalary"], 4200.0);
    assert_eq!(body["leaveSummary"]["appliedFor"], 1);
    assert_eq!(body["leaveSummary"]["pending"], 1);
    assert_eq!(body["leaveSummary"]["approved"], 0);
}

#[tokio::test]
async fn test_summary_requires_session() {
    let app = create_test_app().await;

    let (status, _) = send(app.router(), get_request("/api/dashboard/summary", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
