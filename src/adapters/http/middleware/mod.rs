//! HTTP middleware for axum.
//!
//! This module contains middleware layers for cross-cutting concerns:
//!
//! - `api_key` - Shared-secret gate in front of every route

pub mod api_key;

pub use api_key::{api_key_middleware, ApiKeyGate, ApiKeyRejection, API_KEY_HEADER};
