use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/students/:id/applications",
            get(handlers::application::list_student_applications),
        )
        .route(
            "/api/students/:id/offers",
            get(handlers::offer::list_student_offers),
        )
        .route(
            "/api/offers/:id/respond",
            post(handlers::offer::respond_offer),
        )
}
