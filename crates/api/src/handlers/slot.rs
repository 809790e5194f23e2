//! # Interview Slot Handlers
//!
//! The presentation-side caller of the slot generator. The placement cell
//! previews a generation, publishes it once satisfied, and students then book
//! individual slots.
//!
//! ## Flow
//!
//! 1. `POST /api/drives/:id/slots/preview` generates slots without storing them
//! 2. `POST /api/drives/:id/slots` generates the same slots and publishes them;
//!    publishing an identical request twice is rejected as a conflict
//! 3. `POST /api/drives/:id/slots/:slot_id/book` books one slot for a student
//! 4. `GET /api/drives/:id/slots/:slot_id/calendar.ics` exports it

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Utc;
use placement_core::{
    calendar::{CalendarEvent, google_calendar_url, to_ics},
    errors::PlacementError,
    models::{
        application::ApplicationStatus,
        drive::DriveStatus,
        slot::{DriveSlot, Slot, SlotRequest, SlotStatus},
    },
    slots::generate_slots_in,
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

#[derive(Debug, Serialize, Deserialize)]
pub struct SlotPreviewResponse {
    pub drive_id: Uuid,
    pub count: usize,
    pub slots: Vec<Slot>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PublishSlotsResponse {
    pub drive_id: Uuid,
    pub published: usize,
    pub slots: Vec<DriveSlot>,
}

#[derive(Debug, Deserialize)]
pub struct SlotListQuery {
    pub status: Option<SlotStatus>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub student_id: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BookSlotResponse {
    pub slot: DriveSlot,
    /// Link that opens the interview in Google Calendar
    pub calendar_url: String,
}

/// Generates slots for a drive without storing them
#[axum::debug_handler]
pub async fn preview_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<SlotRequest>,
) -> Result<Json<SlotPreviewResponse>, AppError> {
    require_drive(&state, id).await?;

    let slots = generate_slots_in(&request, state.default_timezone)?;
    info!(drive_id = %id, count = slots.len(), "Generated slot preview");

    Ok(Json(SlotPreviewResponse {
        drive_id: id,
        count: slots.len(),
        slots,
    }))
}

/// Generates and publishes slots for a published drive
///
/// # Errors
///
/// * `PlacementError::InvalidRange` - The date or time range is missing or inverted
/// * `PlacementError::Validation` - The drive is not published, or no slot fits the window
/// * `PlacementError::Conflict` - Some of the slots were already published
#[axum::debug_handler]
pub async fn publish_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    AppJson(request): AppJson<SlotRequest>,
) -> Result<(StatusCode, Json<PublishSlotsResponse>), AppError> {
    let drive = require_drive(&state, id).await?;
    if drive.status != DriveStatus::Published {
        return Err(AppError(PlacementError::Validation(format!(
            "Slots can only be published for a published drive (drive is {:?})",
            drive.status
        ))));
    }

    let slots = generate_slots_in(&request, state.default_timezone)?;
    if slots.is_empty() {
        return Err(AppError(PlacementError::Validation(
            "No slot of the requested duration fits in the time range".to_string(),
        )));
    }

    let published = state.slots.publish_slots(id, slots).await?;
    info!(drive_id = %id, count = published.len(), "Slots published successfully");

    Ok((
        StatusCode::CREATED,
        Json(PublishSlotsResponse {
            drive_id: id,
            published: published.len(),
            slots: published,
        }),
    ))
}

#[axum::debug_handler]
pub async fn list_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<SlotListQuery>,
) -> Result<Json<Vec<DriveSlot>>, AppError> {
    require_drive(&state, id).await?;
    Ok(Json(state.slots.list_slots(id, query.status).await?))
}

/// Books a slot for a student registered for the drive
#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path((id, slot_id)): Path<(Uuid, String)>,
    AppJson(payload): AppJson<BookSlotRequest>,
) -> Result<Json<BookSlotResponse>, AppError> {
    let drive = require_drive(&state, id).await?;
    if drive.status != DriveStatus::Published {
        return Err(AppError(PlacementError::Validation(
            "Interview slots can only be booked on a published drive".to_string(),
        )));
    }

    let student = require_student(&state, &payload.student_id).await?;
    let registered = state
        .applications
        .applications_for_student(&student.id)
        .await?
        .iter()
        .any(|a| {
            a.drive_id == id
                && !matches!(
                    a.status,
                    ApplicationStatus::Rejected | ApplicationStatus::Withdrawn
                )
        });
    if !registered {
        return Err(AppError(PlacementError::Validation(format!(
            "Student {} has no active application for this drive",
            student.id
        ))));
    }

    let booked = state.slots.book_slot(id, &slot_id, &student.id).await?;
    let calendar_url = google_calendar_url(&CalendarEvent::for_slot(&drive, &booked.slot));
    info!(drive_id = %id, slot_id = %slot_id, student_id = %student.id, "Interview slot confirmed");

    Ok(Json(BookSlotResponse {
        slot: booked,
        calendar_url,
    }))
}

/// Downloads a slot as an iCalendar file
#[axum::debug_handler]
pub async fn slot_calendar(
    State(state): State<Arc<ApiState>>,
    Path((id, slot_id)): Path<(Uuid, String)>,
) -> Result<impl IntoResponse, AppError> {
    let drive = require_drive(&state, id).await?;
    let slot = state
        .slots
        .get_slot(id, &slot_id)
        .await?
        .ok_or_else(|| AppError(PlacementError::NotFound(format!("Slot {} not found", slot_id))))?;

    let event = CalendarEvent::for_slot(&drive, &slot.slot);
    let body = to_ics(&event, Utc::now());
    let disposition = format!("attachment; filename=\"{}\"", event.file_name());

    Ok((
        [
            (header::CONTENT_TYPE, "text/calendar; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    ))
}
