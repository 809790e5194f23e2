use axum::http::StatusCode;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use uuid::Uuid;

use crate::test_utils::TestContext;

/// Creates and approves a drive that student1 qualifies for.
async fn open_drive(ctx: &TestContext) -> String {
    let drive: Value = ctx
        .server
        .post("/api/drives")
        .json(&json!({
            "company_name": "Nimbus Labs",
            "role": "Platform Engineer",
            "ctc": 1_800_000,
            "mode": "virtual",
            "location": null,
            "eligibility": {
                "min_cgpa": 7.0,
                "allowed_branches": ["B.Tech - CSE"],
                "allowed_years": [2025],
                "max_backlogs": 0
            },
            "deadline": Utc::now() + Duration::days(10),
            "created_by": "recruiter1",
            "submit": true
        }))
        .await
        .json();
    let id = drive["id"].as_str().unwrap().to_string();

    ctx.server
        .post(&format!("/api/drives/{}/actions", id))
        .json(&json!({ "action": "approve" }))
        .await
        .assert_status_ok();
    id
}

#[tokio::test]
async fn test_register_eligible_student() {
    let ctx = TestContext::new();
    let drive_id = open_drive(&ctx).await;
    let path = format!("/api/drives/{}/applications", drive_id);

    let response = ctx
        .server
        .post(&path)
        .json(&json!({ "student_id": "student1", "resume_url": "/resume.pdf" }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["application"]["status"], "registered");
    assert_eq!(body["application"]["drive_id"], drive_id);
    assert_eq!(body["eligibility"]["eligible"], true);

    let duplicate = ctx
        .server
        .post(&path)
        .json(&json!({ "student_id": "student1" }))
        .await;
    duplicate.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_ineligible_student_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&ctx.drive_path("InnovateSoft", "/applications"))
        .json(&json!({ "student_id": "student1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Validation error: Student student1 is not eligible: graduation year 2025 is not eligible"
    );
}

#[tokio::test]
async fn test_register_for_draft_drive_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&ctx.drive_path("FinanceFlow", "/applications"))
        .json(&json!({ "student_id": "student1" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_register_unknown_student_is_not_found() {
    let ctx = TestContext::new();
    let drive_id = open_drive(&ctx).await;

    let response = ctx
        .server
        .post(&format!("/api/drives/{}/applications", drive_id))
        .json(&json!({ "student_id": "nobody" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_student_applications_newest_first() {
    let ctx = TestContext::new();

    let applications: Vec<Value> = ctx
        .server
        .get("/api/students/student1/applications")
        .await
        .json();

    let statuses: Vec<&str> = applications
        .iter()
        .map(|a| a["status"].as_str().unwrap())
        .collect();
    assert_eq!(statuses, vec!["registered", "shortlisted", "offered"]);
}

#[tokio::test]
async fn test_accepting_offer_updates_application() {
    let ctx = TestContext::new();

    let offers: Vec<Value> = ctx.server.get("/api/students/student1/offers").await.json();
    assert_eq!(offers.len(), 1);
    assert_eq!(offers[0]["status"], "pending");
    let respond = format!("/api/offers/{}/respond", offers[0]["id"].as_str().unwrap());

    let accepted = ctx
        .server
        .post(&respond)
        .json(&json!({ "decision": "accept" }))
        .await;
    accepted.assert_status_ok();
    let body: Value = accepted.json();
    assert_eq!(body["status"], "accepted");

    let applications: Vec<Value> = ctx
        .server
        .get("/api/students/student1/applications")
        .await
        .json();
    let innovatesoft = ctx.drive("InnovateSoft").id.to_string();
    let application = applications
        .iter()
        .find(|a| a["drive_id"] == innovatesoft.as_str())
        .unwrap();
    assert_eq!(application["status"], "accepted");

    let again = ctx
        .server
        .post(&respond)
        .json(&json!({ "decision": "decline" }))
        .await;
    again.assert_status(StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_respond_unknown_offer_is_not_found() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post(&format!("/api/offers/{}/respond", Uuid::new_v4()))
        .json(&json!({ "decision": "accept" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
