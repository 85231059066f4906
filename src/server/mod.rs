//! HTTP server layer for the record API.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │                 GET /data    GET /data/{id}                     │
//! │                                                                 │
//! │  ┌─────────────┐  ┌──────────────┐  ┌────────────────────────┐  │
//! │  │  handlers   │  │     auth     │  │        routes          │  │
//! │  │ (requests)  │  │(shared secret│  │   (router config)      │  │
//! │  └─────────────┘  └──────────────┘  └────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod handlers;
pub mod routes;

pub use auth::{auth_middleware, AuthError, SharedSecretAuth};
pub use handlers::{
    health_handler, list_records_handler, parse_record_id, plain_error, record_by_id_handler,
    reject_malformed_id, ApiError, AppState, HealthResponse,
};
pub use routes::{create_router, RouterConfig};
