//! ListSessionsHandler - Query handler for paginated session listing.

use std::sync::Arc;

use crate::domain::foundation::ValidationError;
use crate::domain::session::{Session, SessionError};
use crate::ports::SessionRepository;

/// Offset used when the client does not send one.
pub const DEFAULT_OFFSET: i64 = 0;
/// Page size used when the client does not send one.
pub const DEFAULT_LIMIT: i64 = 10;

/// Query to list sessions.
///
/// Negative bounds are rejected; anything else, however large, is passed to
/// the store unchanged.
#[derive(Debug, Clone, Default)]
pub struct ListSessionsQuery {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl ListSessionsQuery {
    pub fn page(offset: i64, limit: i64) -> Self {
        Self {
            offset: Some(offset),
            limit: Some(limit),
        }
    }

    /// Applies defaults and checks bounds.
    fn resolve(&self) -> Result<(i64, i64), SessionError> {
        let offset = self.offset.unwrap_or(DEFAULT_OFFSET);
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);

        let mut violations = Vec::new();
        if offset < 0 {
            violations.push(ValidationError::below_minimum("offset", 0, offset));
        }
        if limit < 0 {
            violations.push(ValidationError::below_minimum("limit", 0, limit));
        }

        if violations.is_empty() {
            Ok((offset, limit))
        } else {
            Err(SessionError::validation(violations))
        }
    }
}

/// Handler for listing sessions.
pub struct ListSessionsHandler {
    repository: Arc<dyn SessionRepository>,
}

impl ListSessionsHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    pub async fn handle(&self, query: ListSessionsQuery) -> Result<Vec<Session>, SessionError> {
        let (offset, limit) = query.resolve()?;
        tracing::debug!(offset, limit, "Fetching sessions");

        let sessions = self.repository.find_paginated(offset, limit).await?;
        Ok(sessions)
    }
}
