//! Test utilities for integration tests.
//!
//! This module provides a temporary backing file and helpers for driving the
//! router with in-process requests.

use std::path::PathBuf;

use axum::body::{Body, Bytes};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use record_server::{create_router, FileRecordStore, RouterConfig};

/// Shared secret used by the routers built here.
pub const TEST_TOKEN: &str = "robel";

/// Two records with ids 1 and 2, in that order.
pub const SAMPLE_RECORDS: &str = r#"[
  {
    "id": 1,
    "jpg": "https://example.com/images/1.jpg",
    "name": "Mustermann",
    "vorname": "Erika",
    "adresse": "Heidestrasse 17, 51147 Koeln",
    "pan_card_number": "ABCDE1234F",
    "expiration_date": "2030-12-31"
  },
  {
    "id": 2,
    "jpg": "https://example.com/images/2.jpg",
    "name": "Musterfrau",
    "vorname": "Max",
    "adresse": "Hauptstrasse 1, 10115 Berlin",
    "pan_card_number": "FGHIJ5678K",
    "expiration_date": "2029-06-30"
  }
]"#;

// =============================================================================
// Temporary Backing File
// =============================================================================

/// A backing file inside its own temporary directory.
///
/// The file can be rewritten or deleted while a router is serving it.
pub struct DataFile {
    dir: TempDir,
}

impl DataFile {
    /// Create a data file with the given contents.
    pub fn with_contents(contents: &str) -> Self {
        let file = Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        };
        file.write(contents);
        file
    }

    /// Create a data file holding [`SAMPLE_RECORDS`].
    pub fn sample() -> Self {
        Self::with_contents(SAMPLE_RECORDS)
    }

    /// Create a handle whose file does not exist yet.
    pub fn missing() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> PathBuf {
        self.dir.path().join("user.json")
    }

    pub fn write(&self, contents: &str) {
        std::fs::write(self.path(), contents).expect("Failed to write data file");
    }

    pub fn remove(&self) {
        std::fs::remove_file(self.path()).expect("Failed to remove data file");
    }

    /// Build a router serving this file with [`TEST_TOKEN`].
    pub fn router(&self) -> Router {
        self.router_with(RouterConfig::new(TEST_TOKEN).with_tracing(false))
    }

    /// Build a router serving this file with a custom configuration.
    pub fn router_with(&self, config: RouterConfig) -> Router {
        create_router(FileRecordStore::new(self.path()), config)
    }
}

// =============================================================================
// Request Helpers
// =============================================================================

/// Response parts collected from a one-shot request.
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8(self.body.to_vec()).expect("Body should be UTF-8")
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("Body should be JSON")
    }

    pub fn content_type(&self) -> &str {
        self.header("content-type").unwrap_or("")
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Send a GET request, optionally with an `Authorization` header.
pub async fn get(router: &Router, uri: &str, token: Option<&str>) -> TestResponse {
    let mut builder = Request::builder().uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", token);
    }
    send(router, builder.body(Body::empty()).unwrap()).await
}

/// Send an arbitrary request and collect the response.
pub async fn send(router: &Router, request: Request<Body>) -> TestResponse {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    TestResponse {
        status,
        headers,
        body,
    }
}

/// Send an authorized GET request.
pub async fn get_authorized(router: &Router, uri: &str) -> TestResponse {
    get(router, uri, Some(TEST_TOKEN)).await
}
