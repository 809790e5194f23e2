use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/drives/:id/slots",
            get(handlers::slot::list_slots).post(handlers::slot::publish_slots),
        )
        .route(
            "/api/drives/:id/slots/preview",
            post(handlers::slot::preview_slots),
        )
        .route(
            "/api/drives/:id/slots/:slot_id/book",
            post(handlers::slot::book_slot),
        )
        .route(
            "/api/drives/:id/slots/:slot_id/calendar.ics",
            get(handlers::slot::slot_calendar),
        )
}
