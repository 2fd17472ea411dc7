//! HTTP request handlers for the school directory service.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use schoolmap::{rank_by_distance, validate_school, RankedSchool};

use crate::AppState;

/// Registration request body.
///
/// Incoming bodies are accepted as raw JSON and checked field by field so
/// that each failure reports its specific reason; this type documents the
/// expected shape.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AddSchoolRequest {
    /// School name (non-empty).
    pub name: String,
    /// Street address (non-empty).
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
}

/// Successful registration response.
#[derive(Debug, Serialize, ToSchema)]
pub struct AddSchoolResponse {
    /// Confirmation message.
    pub message: String,
    /// Identifier assigned to the new record.
    pub id: i64,
}

/// Query parameters for the listing endpoint.
///
/// Both parameters are accepted as raw strings and parsed by hand so that
/// missing and non-numeric values share one client-error response.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListSchoolsQuery {
    /// Reference latitude in decimal degrees.
    pub latitude: Option<String>,
    /// Reference longitude in decimal degrees.
    pub longitude: Option<String>,
}

impl ListSchoolsQuery {
    /// The reference coordinate, if both parameters are finite numbers.
    fn reference(&self) -> Option<(f64, f64)> {
        let lat: f64 = self.latitude.as_deref()?.parse().ok()?;
        let lon: f64 = self.longitude.as_deref()?.parse().ok()?;
        (lat.is_finite() && lon.is_finite()).then_some((lat, lon))
    }
}

/// A school record in a listing response, annotated with its distance from
/// the reference coordinate.
#[derive(Debug, Serialize, ToSchema)]
pub struct SchoolRecord {
    /// Record identifier.
    pub id: i64,
    /// School name.
    pub name: String,
    /// Street address.
    pub address: String,
    /// Latitude in decimal degrees.
    pub latitude: f64,
    /// Longitude in decimal degrees.
    pub longitude: f64,
    /// Distance from the reference coordinate, in kilometers.
    pub distance: f64,
}

impl From<RankedSchool> for SchoolRecord {
    fn from(ranked: RankedSchool) -> Self {
        Self {
            id: ranked.id,
            name: ranked.name,
            address: ranked.address,
            latitude: ranked.latitude,
            longitude: ranked.longitude,
            distance: ranked.distance,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message.
    pub error: String,
    /// Diagnostic detail from the underlying driver, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Service version.
    pub version: String,
}

/// Directory statistics response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of registered schools.
    pub schools: u64,
}

/// Register a school.
///
/// # Request Body
///
/// JSON object with `name`, `address`, `latitude`, `longitude`. Fields are
/// validated in that order; the first failure is reported. Coordinates are
/// not range-checked.
///
/// # Returns
///
/// - `200 OK` with the assigned id on success
/// - `400 Bad Request` with the validation reason
/// - `500 Internal Server Error` with driver detail on storage failure
#[utoipa::path(
    post,
    path = "/addSchool",
    tag = "schools",
    request_body = AddSchoolRequest,
    responses(
        (status = 200, description = "School registered", body = AddSchoolResponse),
        (status = 400, description = "Invalid record", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn add_school(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    let school = match validate_school(&body) {
        Ok(school) => school,
        Err(reason) => {
            tracing::debug!(%reason, "rejected school payload");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(reason.to_string())),
            )
                .into_response();
        }
    };

    match state.store.insert(&school) {
        Ok(id) => {
            tracing::info!(id, name = %school.name, "school registered");
            (
                StatusCode::OK,
                Json(AddSchoolResponse {
                    message: "School added successfully".to_string(),
                    id,
                }),
            )
                .into_response()
        }
        Err(e) => storage_error(e),
    }
}

/// List all schools ordered by distance from a reference coordinate.
///
/// # Query Parameters
///
/// - `latitude`: reference latitude in decimal degrees
/// - `longitude`: reference longitude in decimal degrees
///
/// # Returns
///
/// - `200 OK` with the full collection sorted ascending by `distance`
/// - `400 Bad Request` if either parameter is missing or non-numeric
/// - `500 Internal Server Error` with driver detail on storage failure
#[utoipa::path(
    get,
    path = "/listSchools",
    tag = "schools",
    params(ListSchoolsQuery),
    responses(
        (status = 200, description = "Schools sorted by distance", body = Vec<SchoolRecord>),
        (status = 400, description = "Invalid reference coordinate", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
#[axum::debug_handler]
pub async fn list_schools(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListSchoolsQuery>,
) -> impl IntoResponse {
    // Reject before touching storage
    let Some((lat, lon)) = query.reference() else {
        tracing::debug!(
            latitude = query.latitude.as_deref(),
            longitude = query.longitude.as_deref(),
            "rejected listing query"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "Invalid or missing latitude/longitude parameters",
            )),
        )
            .into_response();
    };

    match state.store.list_all() {
        Ok(schools) => {
            let records: Vec<SchoolRecord> = rank_by_distance(schools, lat, lon)
                .into_iter()
                .map(SchoolRecord::from)
                .collect();
            tracing::info!(lat, lon, count = records.len(), "schools listed");
            (StatusCode::OK, Json(records)).into_response()
        }
        Err(e) => storage_error(e),
    }
}

/// Create a server-error response carrying the driver message.
fn storage_error(e: schoolmap::Error) -> axum::response::Response {
    tracing::error!(error = %e, "database operation failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: "Database error".to_string(),
            details: Some(e.to_string()),
        }),
    )
        .into_response()
}

/// Health check endpoint.
///
/// Returns service status and version.
#[utoipa::path(
    get,
    path = "/health",
    tag = "system",
    responses((status = 200, description = "Service is healthy", body = HealthResponse))
)]
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Get directory statistics.
///
/// Returns the number of registered schools.
#[utoipa::path(
    get,
    path = "/stats",
    tag = "system",
    responses(
        (status = 200, description = "Directory statistics", body = StatsResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse),
    )
)]
pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.store.count() {
        Ok(schools) => (StatusCode::OK, Json(StatsResponse { schools })).into_response(),
        Err(e) => storage_error(e),
    }
}
