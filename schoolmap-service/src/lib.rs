//! Schoolmap Service Library
//!
//! HTTP handlers and types for the school directory service.
//! This library is used by both the schoolmap-service binary and integration
//! tests.

pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use schoolmap::SchoolStore;

/// Application state shared across handlers.
pub struct AppState {
    /// Store handle for the school database.
    pub store: SchoolStore,
}

/// Build the API router over the given state.
///
/// Middleware layers and the Swagger UI mount are added by the binary; tests
/// exercise the bare API surface.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/addSchool", post(handlers::add_school))
        .route("/listSchools", get(handlers::list_schools))
        .route("/health", get(handlers::health_check))
        .route("/stats", get(handlers::get_stats))
        .with_state(state)
}

// Re-export commonly used types for convenience
pub use handlers::{
    AddSchoolRequest, AddSchoolResponse, ErrorResponse, HealthResponse, ListSchoolsQuery,
    SchoolRecord, StatsResponse,
};
