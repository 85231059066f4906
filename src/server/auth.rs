//! Shared-secret authentication for the record API.
//!
//! Every data route is guarded by the same check: the `Authorization` header
//! must be exactly equal to the configured secret. There is no scheme prefix
//! and no token parsing.
//!
//! ```text
//! GET /data/1
//! Authorization: <shared secret>
//! ```
//!
//! # Security Properties
//!
//! - **Exact match**: no trimming, case folding or prefix handling
//! - **Uniform**: the same secret protects the collection and item routes
//! - **Constant-time comparison**: the value is compared with `subtle`
//!
//! # Example
//!
//! ```rust
//! use record_server::server::auth::SharedSecretAuth;
//!
//! let auth = SharedSecretAuth::new("my-secret");
//! assert!(auth.verify(Some("my-secret".as_bytes())).is_ok());
//! assert!(auth.verify(Some("Bearer my-secret".as_bytes())).is_err());
//! assert!(auth.verify(None).is_err());
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use subtle::ConstantTimeEq;
use tracing::{debug, warn};

use super::handlers::plain_error;

// =============================================================================
// Types
// =============================================================================

/// Authentication error types.
///
/// Both variants answer `403 Forbidden`; the distinction only shows in logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No `Authorization` header on the request
    MissingCredential,

    /// Header present but not equal to the shared secret
    InvalidCredential,
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingCredential => write!(f, "Missing credential header"),
            AuthError::InvalidCredential => write!(f, "Invalid credential"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::FORBIDDEN;

        // A wrong secret is more interesting than a client that sent none
        match &self {
            AuthError::InvalidCredential => {
                warn!(status = status.as_u16(), "Authentication failed: {}", self);
            }
            AuthError::MissingCredential => {
                debug!(status = status.as_u16(), "Authentication failed: {}", self);
            }
        }

        plain_error(status)
    }
}

// =============================================================================
// Shared Secret Authentication
// =============================================================================

/// Authenticator comparing the credential header against a static secret.
#[derive(Clone)]
pub struct SharedSecretAuth {
    secret: Arc<[u8]>,
}

impl SharedSecretAuth {
    /// Create a new authenticator with the given secret.
    ///
    /// An empty secret never authorizes anything.
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
        }
    }

    /// Verify a presented credential value.
    pub fn verify(&self, presented: Option<&[u8]>) -> Result<(), AuthError> {
        let presented = presented.ok_or(AuthError::MissingCredential)?;

        if self.secret.is_empty() {
            return Err(AuthError::InvalidCredential);
        }

        if presented.ct_eq(&self.secret[..]).into() {
            Ok(())
        } else {
            Err(AuthError::InvalidCredential)
        }
    }

    /// Verify the `Authorization` header of a request.
    ///
    /// If the header is repeated, only the first value is considered.
    pub fn verify_headers(&self, headers: &HeaderMap) -> Result<(), AuthError> {
        self.verify(headers.get(AUTHORIZATION).map(|value| value.as_bytes()))
    }
}

impl std::fmt::Debug for SharedSecretAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedSecretAuth")
            .field("secret", &"<redacted>")
            .finish()
    }
}

// =============================================================================
// Axum Middleware
// =============================================================================

/// Axum middleware rejecting requests without the shared secret.
///
/// Rejected requests get `403 Forbidden` and never reach the handler.
/// Accepted requests are forwarded unchanged.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, middleware, routing::get};
/// use record_server::server::auth::{SharedSecretAuth, auth_middleware};
///
/// let auth = SharedSecretAuth::new("secret");
/// let app = Router::new()
///     .route("/data", get(list_records_handler))
///     .route_layer(middleware::from_fn_with_state(auth, auth_middleware));
/// ```
pub async fn auth_middleware(
    State(auth): State<SharedSecretAuth>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    auth.verify_headers(request.headers())?;
    Ok(next.run(request).await)
}

// =============================================================================
// Tests
// =============================================================================
