use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::TestContext;

fn new_drive_body(submit: bool) -> Value {
    json!({
        "company_name": "Nimbus Labs",
        "role": "Platform Engineer",
        "ctc": 1_800_000,
        "mode": "on_campus",
        "location": "Pune",
        "description": "Build the internal developer platform.",
        "process": ["Online Test", "Technical Interview"],
        "eligibility": {
            "min_cgpa": 7.0,
            "allowed_branches": ["B.Tech - CSE"],
            "allowed_years": [2025],
            "max_backlogs": 0
        },
        "deadline": Utc::now() + Duration::days(10),
        "created_by": "recruiter1",
        "submit": submit
    })
}

#[tokio::test]
async fn test_list_published_drives_with_eligibility() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/drives")
        .add_query_param("status", "published")
        .add_query_param("student_id", "student1")
        .await;

    response.assert_status_ok();
    let drives: Vec<Value> = response.json();
    assert_eq!(drives.len(), 3);

    let verdict = |company: &str| {
        drives
            .iter()
            .find(|d| d["company_name"] == company)
            .map(|d| d["eligibility"]["eligible"].clone())
            .unwrap()
    };
    assert_eq!(verdict("TechCorp Solutions"), json!(true));
    assert_eq!(verdict("DataWave Analytics"), json!(true));
    // Graduating in 2025, InnovateSoft only takes 2024
    assert_eq!(verdict("InnovateSoft"), json!(false));
}

#[tokio::test]
async fn test_list_drives_without_student_has_no_verdict() {
    let ctx = TestContext::new();

    let drives: Vec<Value> = ctx.server.get("/api/drives").await.json();

    assert_eq!(drives.len(), 5);
    assert!(drives.iter().all(|d| d.get("eligibility").is_none()));
}

#[tokio::test]
async fn test_list_drives_unknown_student_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get("/api/drives")
        .add_query_param("student_id", "nobody")
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_unknown_drive_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&format!("/api/drives/{}", Uuid::new_v4()))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_drive_review_lifecycle() {
    let ctx = TestContext::new();

    let created = ctx.server.post("/api/drives").json(&new_drive_body(true)).await;
    created.assert_status(StatusCode::CREATED);
    let drive: Value = created.json();
    assert_eq!(drive["status"], "pending_review");
    let actions = format!("/api/drives/{}/actions", drive["id"].as_str().unwrap());

    let sent_back = ctx
        .server
        .post(&actions)
        .json(&json!({ "action": "request_changes", "comments": "Add the bond details" }))
        .await;
    sent_back.assert_status_ok();
    let body: Value = sent_back.json();
    assert_eq!(body["status"], "draft");
    assert_eq!(body["review_comments"], "Add the bond details");

    ctx.server
        .post(&actions)
        .json(&json!({ "action": "submit" }))
        .await
        .assert_status_ok();
    let approved: Value = ctx
        .server
        .post(&actions)
        .json(&json!({ "action": "approve" }))
        .await
        .json();
    assert_eq!(approved["status"], "published");

    let again = ctx
        .server
        .post(&actions)
        .json(&json!({ "action": "approve" }))
        .await;
    again.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_drive_as_draft() {
    let ctx = TestContext::new();

    let drive: Value = ctx
        .server
        .post("/api/drives")
        .json(&new_drive_body(false))
        .await
        .json();

    assert_eq!(drive["status"], "draft");
    assert_eq!(drive["created_by"], "recruiter1");
}

#[tokio::test]
async fn test_request_changes_without_comments_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&ctx.drive_path("CloudTech Industries", "/actions"))
        .json(&json!({ "action": "request_changes" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_check_eligibility_lists_reasons() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .get(&ctx.drive_path("FinanceFlow", "/eligibility/student1"))
        .await;

    response.assert_status_ok();
    let verdict: Value = response.json();
    assert_eq!(verdict["eligible"], false);
    assert_eq!(verdict["reasons"][0]["rule"], "year_not_allowed");
}

#[tokio::test]
async fn test_health_reports_published_drives() {
    let ctx = TestContext::new();

    let response = ctx.server.get("/health").await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(
        body,
        json!({ "status": "ok", "published_drives": 3, "default_timezone": "UTC" })
    );
}
