//! Read-before-write guard shared by update and delete.

use crate::domain::foundation::SessionId;
use crate::domain::session::{Session, SessionAction, SessionError};
use crate::ports::SessionRepository;

/// Fetches the session or fails with a not-found naming `action`.
///
/// This is a plain read: nothing prevents the row from changing between this
/// check and the caller's write.
pub(super) async fn require_existing_session(
    repository: &dyn SessionRepository,
    id: SessionId,
    action: SessionAction,
) -> Result<Session, SessionError> {
    match repository.find_by_id(id).await? {
        Some(session) => Ok(session),
        None => {
            tracing::warn!(
                session_id = %id,
                action = %action,
                "Failed to {}. Session not found",
                action
            );
            Err(SessionError::not_found_for(id, action))
        }
    }
}
