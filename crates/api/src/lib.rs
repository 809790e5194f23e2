//! # Placement API
//!
//! HTTP surface of the placement portal. It is the caller of the slot
//! generator: it previews and publishes interview slots, lets students book
//! them, and exposes the drive, application and offer flows around them.
//!
//! ## Architecture
//!
//! - **Routes**: Define API endpoints and URL structure
//! - **Handlers**: Implement request processing logic
//! - **Middleware**: Error mapping shared by every handler
//! - **Config**: Handle environment and application configuration
//!
//! Storage is reached only through the repository traits of
//! `placement-store`, injected via [`ApiState`].

/// Configuration module for API settings
pub mod config;
/// Request handlers that implement business logic
pub mod handlers;
/// Middleware for error handling
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use chrono_tz::Tz;
use eyre::Result;
use placement_core::eligibility::{CriteriaPolicy, EligibilityPolicy};
use placement_store::{
    InMemoryStore,
    repositories::{
        application::ApplicationRepository, drive::DriveRepository, offer::OfferRepository,
        slot::SlotRepository, student::StudentRepository,
    },
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::{info, warn};

/// Shared application state that is accessible to all request handlers
///
/// Every collaborator is a trait object so tests can substitute mocks for
/// the in-memory store.
pub struct ApiState {
    pub drives: Arc<dyn DriveRepository>,
    pub slots: Arc<dyn SlotRepository>,
    pub students: Arc<dyn StudentRepository>,
    pub applications: Arc<dyn ApplicationRepository>,
    pub offers: Arc<dyn OfferRepository>,
    pub eligibility: Arc<dyn EligibilityPolicy>,
    /// Zone for slot requests that name none
    pub default_timezone: Tz,
}

impl ApiState {
    /// State where every repository is served by the same store.
    pub fn from_store(store: Arc<InMemoryStore>, default_timezone: Tz) -> Self {
        Self {
            drives: store.clone(),
            slots: store.clone(),
            students: store.clone(),
            applications: store.clone(),
            offers: store,
            eligibility: Arc::new(CriteriaPolicy),
            default_timezone,
        }
    }
}

/// Builds the application router with all routes and no outer layers.
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        // Health check endpoints
        .merge(routes::health::routes())
        // Drive lifecycle, eligibility and registration endpoints
        .merge(routes::drive::routes())
        // Interview slot generation, publishing and booking endpoints
        .merge(routes::slot::routes())
        // Student-facing application and offer endpoints
        .merge(routes::student::routes())
        .with_state(state)
}

/// Starts the API server with the provided configuration and state
///
/// Wraps the router with request tracing, a request timeout and, when
/// origins are configured, CORS.
pub async fn start_server(config: config::ApiConfig, state: ApiState) -> Result<()> {
    let app = router(Arc::new(state));

    // Apply CORS configuration if origins are specified
    let app = if let Some(origins) = &config.cors_origins {
        let allowed: Vec<HeaderValue> = origins
            .iter()
            .filter_map(|origin| match origin.parse() {
                Ok(value) => Some(value),
                Err(_) => {
                    warn!(%origin, "Ignoring invalid CORS origin");
                    None
                }
            })
            .collect();

        let cors = CorsLayer::new()
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
            .allow_origin(allowed);

        app.layer(cors)
    } else {
        app
    };

    let app = app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout))),
    );

    // Start the HTTP server
    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on http://{}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
