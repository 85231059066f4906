//! Authentication integration tests.
//!
//! Tests verify:
//! - The shared secret unlocks both data routes
//! - Missing and wrong credentials are rejected with 403
//! - Rejected requests never reach the store
//! - Malformed ids are refused with 400 whatever the credential

use axum::http::StatusCode;

use record_server::{create_router, FileRecordStore, RouterConfig};

use super::test_utils::{get, get_authorized, DataFile, TEST_TOKEN};

// =============================================================================
// Valid Credential
// =============================================================================

#[tokio::test]
async fn test_valid_token_on_both_routes() {
    let data = DataFile::sample();
    let router = data.router();

    assert_eq!(get(&router, "/data", Some(TEST_TOKEN)).await.status, StatusCode::OK);
    assert_eq!(
        get(&router, "/data/2", Some(TEST_TOKEN)).await.status,
        StatusCode::OK
    );
}

#[tokio::test]
async fn test_custom_secret() {
    let data = DataFile::sample();
    let router = create_router(
        FileRecordStore::new(data.path()),
        RouterConfig::new("another-secret").with_tracing(false),
    );

    assert_eq!(
        get(&router, "/data", Some("another-secret")).await.status,
        StatusCode::OK
    );
    assert_eq!(
        get(&router, "/data", Some(TEST_TOKEN)).await.status,
        StatusCode::FORBIDDEN
    );
}

// =============================================================================
// Rejected Credentials
// =============================================================================

#[tokio::test]
async fn test_missing_token_forbidden() {
    let data = DataFile::sample();
    let router = data.router();

    for uri in ["/data", "/data/1", "/data/999"] {
        let response = get(&router, uri, None).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "uri: {}", uri);
        assert!(response.content_type().starts_with("text/plain"));
        assert_eq!(response.text(), "Forbidden");
    }
}

#[tokio::test]
async fn test_wrong_token_forbidden() {
    let data = DataFile::sample();
    let router = data.router();

    for token in ["wrong", "Robel", "robel ", "Bearer robel", ""] {
        for uri in ["/data", "/data/1"] {
            let response = get(&router, uri, Some(token)).await;
            assert_eq!(
                response.status,
                StatusCode::FORBIDDEN,
                "token {:?} on {}",
                token,
                uri
            );
        }
    }
}

#[tokio::test]
async fn test_bearer_token_not_accepted_on_item_route() {
    // One scheme for every route: a bearer value is just a wrong secret
    let data = DataFile::sample();
    let router = data.router();

    let response = get(&router, "/data/1", Some("Bearer your_generated_token")).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_rejected_request_does_not_touch_store() {
    // A store access would answer 500; auth must answer first
    let data = DataFile::missing();
    let router = data.router();

    assert_eq!(get(&router, "/data", None).await.status, StatusCode::FORBIDDEN);
    assert_eq!(
        get(&router, "/data/1", Some("wrong")).await.status,
        StatusCode::FORBIDDEN
    );
}

// =============================================================================
// Id Validation vs. Auth
// =============================================================================

#[tokio::test]
async fn test_malformed_id_bad_request_regardless_of_credential() {
    let data = DataFile::sample();
    let router = data.router();

    assert_eq!(
        get_authorized(&router, "/data/x").await.status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        get(&router, "/data/x", None).await.status,
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        get(&router, "/data/x", Some("wrong")).await.status,
        StatusCode::BAD_REQUEST
    );
}

#[tokio::test]
async fn test_well_formed_unknown_id_still_requires_auth() {
    let data = DataFile::sample();
    let router = data.router();

    assert_eq!(
        get(&router, "/data/999", None).await.status,
        StatusCode::FORBIDDEN
    );
    assert_eq!(
        get_authorized(&router, "/data/999").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_health_needs_no_token() {
    let data = DataFile::sample();
    let router = data.router();

    assert_eq!(get(&router, "/health", None).await.status, StatusCode::OK);
    assert_eq!(
        get(&router, "/health", Some("wrong")).await.status,
        StatusCode::OK
    );
}
