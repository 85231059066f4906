//! # Record Server
//!
//! A read-only HTTP API over a collection of person records kept in a JSON
//! file, guarded by a shared-secret `Authorization` header.
//!
//! ## Features
//!
//! - **Live data**: the backing file is re-read on every request, so edits
//!   are served without a restart
//! - **Uniform authentication**: one shared secret protects every data route
//! - **Plain status semantics**: 400 / 403 / 404 / 500 with reason-phrase bodies
//!
//! ## Architecture
//!
//! - [`record`] - The record type and lookup
//! - [`store`] - Record sources (JSON file)
//! - [`server`] - Axum-based HTTP server and routes
//! - [`config`] - CLI and configuration types
//!
//! ## Example
//!
//! ```rust,no_run
//! use record_server::{create_router, FileRecordStore, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let store = FileRecordStore::new("user.json");
//!     let router = create_router(store, RouterConfig::new("my-secret"));
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
//!     axum::serve(listener, router).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod record;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::StoreError;
pub use record::{find_by_id, Record};
pub use server::{
    auth_middleware, create_router, health_handler, list_records_handler, record_by_id_handler,
    ApiError, AppState, AuthError, HealthResponse, RouterConfig, SharedSecretAuth,
};
pub use store::{FileRecordStore, RecordSource};
