//! Router configuration for the record API.
//!
//! This module defines the HTTP routes and applies middleware for
//! authentication, id validation, CORS and tracing.
//!
//! # Route Structure
//!
//! ```text
//! /health       - Health check (public)
//! /data         - All records (protected)
//! /data/{id}    - One record (id validated, then protected)
//! ```
//!
//! # Example
//!
//! ```ignore
//! use record_server::server::routes::{create_router, RouterConfig};
//! use record_server::store::FileRecordStore;
//!
//! let store = FileRecordStore::new("user.json");
//! let config = RouterConfig::new("my-secret")
//!     .with_cors_origins(vec!["https://example.com".to_string()]);
//!
//! let router = create_router(store, config);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//! axum::serve(listener, router).await?;
//! ```

use std::time::Duration;

use axum::{middleware, routing::get, Router};
use http::header::{AUTHORIZATION, CONTENT_TYPE};
use http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::auth::{auth_middleware, SharedSecretAuth};
use super::handlers::{
    health_handler, list_records_handler, record_by_id_handler, reject_malformed_id, AppState,
};
use crate::store::RecordSource;

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Clone)]
pub struct RouterConfig {
    /// Shared secret expected in the `Authorization` header
    pub auth_token: String,

    /// Allowed CORS origins (None = allow any origin)
    pub cors_origins: Option<Vec<String>>,

    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a new router configuration with the given shared secret.
    ///
    /// By default CORS allows any origin and tracing is enabled.
    pub fn new(auth_token: impl Into<String>) -> Self {
        Self {
            auth_token: auth_token.into(),
            cors_origins: None,
            enable_tracing: true,
        }
    }

    /// Set specific allowed CORS origins.
    ///
    /// Pass an empty vec to disallow all cross-origin requests.
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_origins = Some(origins);
        self
    }

    /// Allow any CORS origin.
    pub fn with_cors_any_origin(mut self) -> Self {
        self.cors_origins = None;
        self
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl std::fmt::Debug for RouterConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouterConfig")
            .field("auth_token", &"<redacted>")
            .field("cors_origins", &self.cors_origins)
            .field("enable_tracing", &self.enable_tracing)
            .finish()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// Create the main application router.
///
/// This function builds the complete Axum router with:
/// - Public routes (health check)
/// - Protected data routes behind the shared-secret check
/// - CORS configuration
/// - Request tracing (optional)
pub fn create_router<S>(source: S, config: RouterConfig) -> Router
where
    S: RecordSource + 'static,
{
    let app_state = AppState::new(source);
    let auth = SharedSecretAuth::new(&config.auth_token);
    let cors = build_cors_layer(&config);

    let router = build_data_router(app_state, auth)
        .merge(Router::new().route("/health", get(health_handler)))
        .layer(cors);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

/// Build the data routes.
///
/// `route_layer` only wraps matched routes, so unknown paths still fall
/// through to the default 404. The last layer added runs first: on the item
/// route the id check precedes the credential check.
fn build_data_router<S>(app_state: AppState<S>, auth: SharedSecretAuth) -> Router
where
    S: RecordSource + 'static,
{
    let collection_routes = Router::new()
        .route("/data", get(list_records_handler::<S>))
        .route_layer(middleware::from_fn_with_state(
            auth.clone(),
            auth_middleware,
        ))
        .with_state(app_state.clone());

    let item_routes = Router::new()
        .route("/data/{id}", get(record_by_id_handler::<S>))
        .route_layer(middleware::from_fn_with_state(auth, auth_middleware))
        .route_layer(middleware::from_fn(reject_malformed_id))
        .with_state(app_state);

    Router::new().merge(collection_routes).merge(item_routes)
}

/// Build the CORS layer based on configuration.
fn build_cors_layer(config: &RouterConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE])
        .max_age(Duration::from_secs(86400)); // 24 hours

    match &config.cors_origins {
        None => cors.allow_origin(Any),
        Some(origins) if origins.is_empty() => cors,
        Some(origins) => {
            let parsed_origins: Vec<_> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            cors.allow_origin(parsed_origins)
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
