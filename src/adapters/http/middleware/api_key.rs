//! Shared-secret authentication middleware.
//!
//! Every request must carry an `X-API-Key` header equal to the configured
//! secret. Anything else is answered with 401 before routing happens.
//!
//! ```text
//! Request → api_key_middleware ─ mismatch → 401 "API key missing or invalid"
//!                  │
//!                  └─ match → router → session handlers
//! ```
//!
//! # Example
//!
//! ```ignore
//! use axum::{middleware, routing::get, Router};
//!
//! let gate = ApiKeyGate::new(SecretString::new("s3cret".into()));
//!
//! let app = Router::new()
//!     .route("/sessions", get(list_sessions))
//!     .layer(middleware::from_fn_with_state(gate, api_key_middleware));
//! ```

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use secrecy::{ExposeSecret, SecretString};
use subtle::ConstantTimeEq;

/// Header carrying the shared secret. Header names are case-insensitive.
pub const API_KEY_HEADER: &str = "x-api-key";

const REJECTION_BODY: &str = "API key missing or invalid";

/// Holds the expected secret. Cheap to clone, immutable after construction.
#[derive(Clone)]
pub struct ApiKeyGate {
    expected: Arc<SecretString>,
}

impl ApiKeyGate {
    pub fn new(expected: SecretString) -> Self {
        Self {
            expected: Arc::new(expected),
        }
    }

    /// Checks the request headers against the expected secret.
    ///
    /// Equality is exact, byte for byte, and evaluated in constant time.
    /// The header must appear exactly once; a repeated header never matches.
    pub fn check(&self, headers: &HeaderMap) -> Result<(), ApiKeyRejection> {
        let mut values = headers.get_all(API_KEY_HEADER).iter();
        let provided = values.next().ok_or(ApiKeyRejection::Missing)?;
        if values.next().is_some() {
            return Err(ApiKeyRejection::Invalid);
        }

        let expected = self.expected.expose_secret().as_bytes();
        let matches: bool = provided.as_bytes().ct_eq(expected).into();
        if matches {
            Ok(())
        } else {
            Err(ApiKeyRejection::Invalid)
        }
    }
}

/// Rejects the request with 401 unless it carries the expected API key.
pub async fn api_key_middleware(
    State(gate): State<ApiKeyGate>,
    request: Request,
    next: Next,
) -> Response {
    match gate.check(request.headers()) {
        Ok(()) => next.run(request).await,
        Err(rejection) => {
            tracing::debug!(
                reason = ?rejection,
                method = %request.method(),
                path = %request.uri().path(),
                "Rejected unauthenticated request"
            );
            rejection.into_response()
        }
    }
}

/// Why the gate refused a request. Both cases produce the same response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiKeyRejection {
    /// No `X-API-Key` header at all.
    Missing,
    /// Header not equal to the secret, or sent more than once.
    Invalid,
}

impl IntoResponse for ApiKeyRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, REJECTION_BODY).into_response()
    }
}
