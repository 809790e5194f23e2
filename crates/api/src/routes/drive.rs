use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/drives",
            get(handlers::drive::list_drives).post(handlers::drive::create_drive),
        )
        .route("/api/drives/:id", get(handlers::drive::get_drive))
        .route(
            "/api/drives/:id/actions",
            post(handlers::drive::apply_drive_action),
        )
        .route(
            "/api/drives/:id/eligibility/:student_id",
            get(handlers::drive::check_eligibility),
        )
        .route(
            "/api/drives/:id/applications",
            post(handlers::application::register),
        )
}
