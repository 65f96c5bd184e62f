//! HTTP adapters - REST API implementations.
//!
//! The session endpoints sit behind the API key gate. The gate wraps the
//! fallback too, so unknown paths answer 401 to unauthenticated callers.

pub mod middleware;
pub mod session;

use axum::{http::StatusCode, middleware::from_fn_with_state, response::IntoResponse, Json, Router};

pub use middleware::{api_key_middleware, ApiKeyGate, ApiKeyRejection, API_KEY_HEADER};
pub use session::{session_routes, ErrorResponse, SessionHandlers};

/// Builds the full API: session routes, a JSON 404 fallback, and the gate.
pub fn api_router(handlers: SessionHandlers, gate: ApiKeyGate) -> Router {
    session_routes(handlers)
        .fallback(route_not_found)
        .layer(from_fn_with_state(gate, api_key_middleware))
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            code: "NOT_FOUND".to_string(),
            message: "Route not found".to_string(),
            details: None,
        }),
    )
}
