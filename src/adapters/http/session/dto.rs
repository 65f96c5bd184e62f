//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.
//! Field names on the wire are camelCase.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::foundation::{ErrorCode, SessionId, ValidationError};
use crate::domain::session::{Session, SessionDraft};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Body of create and update requests.
///
/// Every field is optional at this layer so that a missing title surfaces as
/// a validation error rather than a parse error. Any `id` in the body is
/// ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub speaker_name: Option<String>,
    #[serde(default)]
    pub file_upload_url: Option<String>,
}

impl From<SessionRequest> for SessionDraft {
    fn from(req: SessionRequest) -> Self {
        SessionDraft {
            title: req.title,
            description: req.description,
            speaker_name: req.speaker_name,
            file_upload_url: req.file_upload_url,
        }
    }
}

/// Query parameters for listing sessions.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSessionsParams {
    #[serde(default)]
    pub offset: Option<i64>,
    #[serde(default)]
    pub limit: Option<i64>,
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Session as returned to clients. Absent optional fields serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub id: SessionId,
    pub title: String,
    pub description: Option<String>,
    pub speaker_name: Option<String>,
    pub file_upload_url: Option<String>,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        Self {
            id: session.id,
            title: session.title,
            description: session.description,
            speaker_name: session.speaker_name,
            file_upload_url: session.file_upload_url,
        }
    }
}

/// Response for a successful create.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    pub id: SessionId,
}

/// Standard error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Lists every violated constraint under `details`.
    pub fn with_violations(mut self, violations: &[ValidationError]) -> Self {
        let details = violations
            .iter()
            .map(|v| json!({ "field": v.field(), "message": v.to_string() }))
            .collect();
        self.details = Some(serde_json::Value::Array(details));
        self
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
