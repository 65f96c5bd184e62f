//! In-memory adapters - Process-local implementations of repository ports.
//!
//! Used by the test suites and for running the service without a database.

mod session_repository;

pub use session_repository::InMemorySessionRepository;
