use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::Utc;
use placement_core::{
    errors::PlacementError,
    models::application::{Application, NewApplication, RegisterRequest, RegisterResponse},
};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::{require_drive, require_student};
use crate::{
    ApiState,
    middleware::error_handling::{AppError, AppJson},
};

/// Registers a student for a drive
///
/// Registration needs a published drive whose deadline has not passed and a
/// student who meets every eligibility criterion.
#[axum::debug_handler]
pub async fn register(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let drive = require_drive(&state, id).await?;
    if !drive.is_open_for_registration(Utc::now()) {
        return Err(AppError(PlacementError::Validation(format!(
            "{} is not open for registration",
            drive.company_name
        ))));
    }

    let student = require_student(&state, &payload.student_id).await?;
    let eligibility = state.eligibility.evaluate(&drive.eligibility, &student);
    if !eligibility.eligible {
        return Err(AppError(PlacementError::Validation(format!(
            "Student {} is not eligible: {}",
            student.id,
            eligibility.summary()
        ))));
    }

    let application = state
        .applications
        .register(NewApplication::from_request(id, payload))
        .await?;
    info!(
        drive_id = %id,
        student_id = %application.student_id,
        "Registration submitted successfully"
    );

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            application,
            eligibility,
        }),
    ))
}

#[axum::debug_handler]
pub async fn list_student_applications(
    State(state): State<Arc<ApiState>>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<Application>>, AppError> {
    require_student(&state, &student_id).await?;
    Ok(Json(
        state
            .applications
            .applications_for_student(&student_id)
            .await?,
    ))
}
