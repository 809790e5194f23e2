//! # Drive Handlers
//!
//! Drive browsing for students, drive creation for recruiters and the review
//! actions of the placement cell.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use placement_core::{
    eligibility::EligibilityVerdict,
    models::drive::{CreateDriveRequest, Drive, DriveActionRequest, DriveStatus},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::{require_drive, require_student};
use crate::{
    ApiState,
    middleware::error_handling::{AppError, AppJson},
};

#[derive(Debug, Deserialize)]
pub struct DriveListQuery {
    pub status: Option<DriveStatus>,
    /// Annotate each drive with this student's eligibility
    pub student_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DriveSummary {
    #[serde(flatten)]
    pub drive: Drive,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<EligibilityVerdict>,
}

/// Lists drives, optionally filtered by status
///
/// # Endpoint
///
/// ```text
/// GET /api/drives?status=published&student_id=student1
/// ```
///
/// When `student_id` is given each drive carries that student's verdict.
#[axum::debug_handler]
pub async fn list_drives(
    State(state): State<Arc<ApiState>>,
    Query(query): Query<DriveListQuery>,
) -> Result<Json<Vec<DriveSummary>>, AppError> {
    let student = match &query.student_id {
        Some(id) => Some(require_student(&state, id).await?),
        None => None,
    };

    let drives = state.drives.list_drives(query.status).await?;
    let summaries = drives
        .into_iter()
        .map(|drive| {
            let eligibility = student
                .as_ref()
                .map(|s| state.eligibility.evaluate(&drive.eligibility, s));
            DriveSummary { drive, eligibility }
        })
        .collect();

    Ok(Json(summaries))
}

#[axum::debug_handler]
pub async fn create_drive(
    State(state): State<Arc<ApiState>>,
    AppJson(payload): AppJson<CreateDriveRequest>,
) -> Result<(StatusCode, Json<Drive>), AppError> {
    let drive = state.drives.create_drive(payload).await?;
    Ok((StatusCode::CREATED, Json(drive)))
}

#[axum::debug_handler]
pub async fn get_drive(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Drive>, AppError> {
    Ok(Json(require_drive(&state, id).await?))
}

/// Applies a lifecycle action (submit, approve, request_changes, close)
#[axum::debug_handler]
pub async fn apply_drive_action(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<DriveActionRequest>,
) -> Result<Json<Drive>, AppError> {
    let drive = state
        .drives
        .apply_action(id, payload.action, payload.comments)
        .await?;

    if drive.status == DriveStatus::Published {
        info!(drive_id = %drive.id, company = %drive.company_name, "Drive approved and published");
    }

    Ok(Json(drive))
}

#[axum::debug_handler]
pub async fn check_eligibility(
    State(state): State<Arc<ApiState>>,
    Path((id, student_id)): Path<(Uuid, String)>,
) -> Result<Json<EligibilityVerdict>, AppError> {
    let drive = require_drive(&state, id).await?;
    let student = require_student(&state, &student_id).await?;
    Ok(Json(state.eligibility.evaluate(&drive.eligibility, &student)))
}
