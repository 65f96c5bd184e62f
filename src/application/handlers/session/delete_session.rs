//! DeleteSessionHandler - Command handler for removing a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{SessionAction, SessionError};
use crate::ports::SessionRepository;

use super::existence::require_existing_session;

/// Command to delete a session permanently.
#[derive(Debug, Clone)]
pub struct DeleteSessionCommand {
    pub session_id: SessionId,
}

/// Handler for deleting sessions.
pub struct DeleteSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl DeleteSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Deleting an unknown or already deleted id fails with not-found.
    pub async fn handle(&self, cmd: DeleteSessionCommand) -> Result<(), SessionError> {
        require_existing_session(self.repository.as_ref(), cmd.session_id, SessionAction::Delete)
            .await?;

        self.repository.delete(cmd.session_id).await?;
        tracing::info!(session_id = %cmd.session_id, "Session with ID {} deleted successfully", cmd.session_id);

        Ok(())
    }
}
