//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers (create, update, delete) write through the session
//! repository; query handlers (get, list) only read from it.

pub mod handlers;

pub use handlers::session::{
    CreateSessionCommand, CreateSessionHandler, DeleteSessionCommand, DeleteSessionHandler,
    GetSessionHandler, GetSessionQuery, ListSessionsHandler, ListSessionsQuery,
    UpdateSessionCommand, UpdateSessionHandler,
};
