//! HTTP request handlers for the record API.
//!
//! # Endpoints
//!
//! - `GET /data` - All records, in file order
//! - `GET /data/{id}` - A single record by integer id
//! - `GET /health` - Health check endpoint

use std::sync::Arc;

use axum::{
    extract::{rejection::PathRejection, Path, Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, error, warn};

use crate::error::StoreError;
use crate::record::{find_by_id, Record};
use crate::store::RecordSource;

// =============================================================================
// Application State
// =============================================================================

/// Shared application state containing the record source.
///
/// This is passed to all handlers via Axum's State extractor.
pub struct AppState<S: RecordSource> {
    /// Where records are loaded from on every request
    pub source: Arc<S>,
}

impl<S: RecordSource> AppState<S> {
    pub fn new(source: S) -> Self {
        Self {
            source: Arc::new(source),
        }
    }
}

impl<S: RecordSource> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
        }
    }
}

// =============================================================================
// Response Types
// =============================================================================

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service version
    pub version: String,
}

/// Plain-text error response whose body is the status reason phrase.
pub fn plain_error(status: StatusCode) -> Response {
    (status, status.canonical_reason().unwrap_or("Error")).into_response()
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Errors raised while serving a data route.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `{id}` path segment is not an integer
    #[error("Invalid record id: {raw:?}")]
    InvalidId { raw: String },

    /// The store loaded but no record carries the id
    #[error("Record not found: {id}")]
    NotFound { id: i64 },

    /// The backing store could not be loaded
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Convert ApiError to HTTP response.
///
/// The body never says more than the reason phrase; in particular a store
/// failure does not reveal whether the file was missing or malformed. The
/// detail goes to the log instead:
/// - 5xx errors are logged at ERROR level
/// - 404s at DEBUG, other 4xx at WARN
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::InvalidId { .. } => (StatusCode::BAD_REQUEST, "invalid_id"),
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Store(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.kind()),
        };

        if status.is_server_error() {
            error!(
                error_type = error_type,
                status = status.as_u16(),
                "Server error: {}",
                self
            );
        } else if status == StatusCode::NOT_FOUND {
            debug!(
                error_type = error_type,
                status = status.as_u16(),
                "Resource not found: {}",
                self
            );
        } else {
            warn!(
                error_type = error_type,
                status = status.as_u16(),
                "Client error: {}",
                self
            );
        }

        plain_error(status)
    }
}

/// Parse the `{id}` path segment.
///
/// Accepts an optional sign followed by decimal digits, within `i64` range.
pub fn parse_record_id(raw: &str) -> Result<i64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidId {
        raw: raw.to_string(),
    })
}

/// Take the raw `{id}` segment out of a path extraction.
///
/// A segment axum cannot decode (e.g. `%FF`, not UTF-8) is an invalid id like
/// any other, so it gets the same plain `400` body and log line.
fn raw_id(path: Result<Path<String>, PathRejection>) -> Result<String, ApiError> {
    match path {
        Ok(Path(raw)) => Ok(raw),
        Err(rejection) => Err(ApiError::InvalidId {
            raw: rejection.body_text(),
        }),
    }
}

/// Route middleware rejecting a malformed `{id}` with `400 Bad Request`.
///
/// Layered outside the auth check on the item route: an identifier that
/// cannot name any record is refused whatever credential came with it.
pub async fn reject_malformed_id(
    path: Result<Path<String>, PathRejection>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    parse_record_id(&raw_id(path)?)?;
    Ok(next.run(request).await)
}

// =============================================================================
// Handlers
// =============================================================================

/// Handle collection requests.
///
/// # Endpoint
///
/// `GET /data`
///
/// # Response
///
/// `200 OK` with a JSON array of every record in file order:
/// ```json
/// [
///   {
///     "id": 1,
///     "jpg": "https://example.com/1.jpg",
///     "name": "Mustermann",
///     "vorname": "Erika",
///     "adresse": "Heidestrasse 17, 51147 Koeln",
///     "pan_card_number": "ABCDE1234F",
///     "expiration_date": "2030-12-31"
///   }
/// ]
/// ```
///
/// # Errors
///
/// - `403 Forbidden`: Missing or wrong credential (auth middleware)
/// - `500 Internal Server Error`: Backing file unreadable or malformed
pub async fn list_records_handler<S: RecordSource>(
    State(state): State<AppState<S>>,
) -> Result<Json<Vec<Record>>, ApiError> {
    let records = state.source.load_all().await?;
    Ok(Json(records))
}

/// Handle single record requests.
///
/// # Endpoint
///
/// `GET /data/{id}`
///
/// # Path Parameters
///
/// - `id`: Integer record id
///
/// # Response
///
/// `200 OK` with the first record whose `id` matches, as a JSON object.
///
/// # Errors
///
/// - `400 Bad Request`: `id` is not an integer (checked before any load)
/// - `403 Forbidden`: Missing or wrong credential (auth middleware)
/// - `404 Not Found`: No record has this id
/// - `500 Internal Server Error`: Backing file unreadable or malformed
pub async fn record_by_id_handler<S: RecordSource>(
    State(state): State<AppState<S>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Record>, ApiError> {
    let id = parse_record_id(&raw_id(path)?)?;

    let records = state.source.load_all().await?;

    let record = find_by_id(&records, id).ok_or(ApiError::NotFound { id })?;
    Ok(Json(record.clone()))
}

/// Handle health check requests.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// `200 OK` with JSON body:
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0"
/// }
/// ```
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
