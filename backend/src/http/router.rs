//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only API, any origin may call it
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_v1 = Router::new()
        // Page chrome
        .route("/navigation", get(handlers::get_navigation))
        .route("/filters", get(handlers::get_filter_options))
        // Views
        .route("/monatsansicht", get(handlers::get_month_view))
        .route("/wochenansicht", get(handlers::get_week_view))
        .route("/tagesansicht", get(handlers::get_day_view))
        .route("/schichtdetails", get(handlers::get_shift_detail))
        // Query interface
        .route("/shifts", get(handlers::list_shifts))
        .route("/leads", get(handlers::list_leads))
        .route("/sectors", get(handlers::list_sectors))
        .route("/shift-types", get(handlers::list_shift_types))
        .route("/integrity", get(handlers::get_integrity_report));

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
