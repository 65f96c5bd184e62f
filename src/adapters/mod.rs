//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - axum routes, DTOs and the API key gate
//! - `memory` - Process-local session store
//! - `postgres` - PostgreSQL session store and pool setup

pub mod http;
pub mod memory;
pub mod postgres;

pub use http::{api_router, ApiKeyGate, SessionHandlers};
pub use memory::InMemorySessionRepository;
pub use postgres::PostgresSessionRepository;
