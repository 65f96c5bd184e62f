//! UpdateSessionHandler - Command handler for replacing a session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionAction, SessionDraft, SessionError};
use crate::ports::SessionRepository;

use super::existence::require_existing_session;

/// Command to replace every field of an existing session.
#[derive(Debug, Clone)]
pub struct UpdateSessionCommand {
    /// Id from the request path; always wins over anything in the payload.
    pub session_id: SessionId,
    pub draft: SessionDraft,
}

/// Handler for updating sessions.
pub struct UpdateSessionHandler {
    repository: Arc<dyn SessionRepository>,
}

impl UpdateSessionHandler {
    pub fn new(repository: Arc<dyn SessionRepository>) -> Self {
        Self { repository }
    }

    /// Validates, checks existence, then writes the full record.
    ///
    /// The existence check and the write are separate store calls with no
    /// lock between them. A concurrent delete can land in between, in which
    /// case the write is a no-op and the update still reports success.
    pub async fn handle(&self, cmd: UpdateSessionCommand) -> Result<(), SessionError> {
        let details = cmd.draft.validate().map_err(SessionError::validation)?;

        require_existing_session(self.repository.as_ref(), cmd.session_id, SessionAction::Update)
            .await?;

        let session = Session::from_details(cmd.session_id, details);
        self.repository.update(&session).await?;
        tracing::info!(session_id = %cmd.session_id, "Session with ID {} updated successfully", cmd.session_id);

        Ok(())
    }
}
