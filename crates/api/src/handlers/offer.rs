use axum::{
    Json,
    extract::{Path, State},
};
use placement_core::models::application::{Offer, RespondOfferRequest};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use super::require_student;
use crate::{
    ApiState,
    middleware::error_handling::{AppError, AppJson},
};

#[axum::debug_handler]
pub async fn list_student_offers(
    State(state): State<Arc<ApiState>>,
    Path(student_id): Path<String>,
) -> Result<Json<Vec<Offer>>, AppError> {
    require_student(&state, &student_id).await?;
    Ok(Json(state.offers.offers_for_student(&student_id).await?))
}

#[axum::debug_handler]
pub async fn respond_offer(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    AppJson(payload): AppJson<RespondOfferRequest>,
) -> Result<Json<Offer>, AppError> {
    let offer = state.offers.respond(id, payload.decision).await?;
    info!(offer_id = %id, company = %offer.company_name, status = ?offer.status, "Student responded to offer");
    Ok(Json(offer))
}
