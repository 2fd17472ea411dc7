//! Schoolmap Service - HTTP microservice for a school directory.
//!
//! A small REST API for registering schools and listing them ordered by
//! distance from a caller-supplied coordinate.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `SCHOOLMAP_DB_PATH` | Path to the SQLite database file | `schools.db` |
//! | `SCHOOLMAP_PORT` | HTTP server port | 3000 |
//! | `RUST_LOG` | Log level (e.g., "info", "debug") | "info" |
//!
//! ## Endpoints
//!
//! - `POST /addSchool` - Register a school
//! - `GET /listSchools?latitude=X&longitude=Y` - List schools by distance
//! - `GET /health` - Health check
//! - `GET /stats` - Directory statistics
//! - `GET /docs` - OpenAPI documentation (Swagger UI)

use std::net::SocketAddr;
use std::sync::Arc;

use schoolmap::SchoolStore;
use schoolmap_service::{handlers, router, AppState};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// OpenAPI documentation for the schoolmap service.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Schoolmap Service",
        version = "0.1.0",
        description = "REST API for registering schools and listing them by distance.",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    paths(
        handlers::add_school,
        handlers::list_schools,
        handlers::health_check,
        handlers::get_stats,
    ),
    components(
        schemas(
            handlers::AddSchoolRequest,
            handlers::AddSchoolResponse,
            handlers::SchoolRecord,
            handlers::ErrorResponse,
            handlers::HealthResponse,
            handlers::StatsResponse,
        )
    ),
    tags(
        (name = "schools", description = "School registration and listing endpoints"),
        (name = "system", description = "System and health endpoints")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schoolmap_service=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let db_path =
        std::env::var("SCHOOLMAP_DB_PATH").unwrap_or_else(|_| "schools.db".to_string());
    let port: u16 = std::env::var("SCHOOLMAP_PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(3000);

    let store = SchoolStore::open(&db_path)?;
    let schools = store.count()?;

    tracing::info!(
        db_path = %db_path,
        schools = schools,
        port = port,
        "Starting schoolmap service"
    );

    let state = Arc::new(AppState { store });

    // Build router
    let app = router(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
