//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application layer and the outside world. Adapters implement these ports.
//!
//! - `SessionRepository` - Durable keyed storage for conference sessions

mod session_repository;

pub use session_repository::SessionRepository;
