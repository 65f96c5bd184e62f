//! CreateSessionHandler - Command handler for creating new sessions.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionDraft, SessionError};
use crate::ports::SessionRepository;

/// Command to create a new session.
#[derive(Debug, Clone)]
pub struct CreateSessionCommand {
    pub draft: SessionDraft,
}

/// Handler for creating sessions.
pub struct CreateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl CreateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Validates the draft, then inserts it and returns the assigned id.
    pub async fn handle(&self, cmd: CreateSessionCommand) -> Result<SessionId, SessionError> {
        let details = cmd.draft.validate().map_err(SessionError::validation)?;

        let id = self.repository.insert(&details).await?;
        tracing::info!(session_id = %id, "Created session with ID: {}", id);

        Ok(id)
    }
}
