//! Session repository port.
//!
//! Defines the contract between the session handlers and whatever stores the
//! sessions. The handlers rely on these exact semantics:
//!
//! - `insert` assigns the id; ids increase monotonically and are never reused
//! - `find_paginated` orders by ascending id before slicing
//! - `update` and `delete` are silent no-ops for unknown ids; callers that
//!   need a not-found outcome check existence first

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{Session, SessionDetails};
use async_trait::async_trait;

/// Repository port for session persistence.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Persist a new session and return its freshly assigned id.
    ///
    /// # Errors
    ///
    /// - `DatabaseError` on persistence failure
    async fn insert(&self, details: &SessionDetails) -> Result<SessionId, DomainError>;

    /// Find a session by its id.
    ///
    /// Returns `None` if not found.
    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError>;

    /// List sessions ordered by ascending id, skipping the first `offset`
    /// and returning at most `limit`.
    async fn find_paginated(&self, offset: i64, limit: i64) -> Result<Vec<Session>, DomainError>;

    /// Replace every field of the session with the same id.
    ///
    /// Does nothing if no such session exists.
    async fn update(&self, session: &Session) -> Result<(), DomainError>;

    /// Remove a session permanently. Does nothing if it does not exist.
    async fn delete(&self, id: SessionId) -> Result<(), DomainError>;

    /// Total number of stored sessions.
    async fn count_all(&self) -> Result<i64, DomainError>;
}
