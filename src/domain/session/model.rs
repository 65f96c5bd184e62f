//! The conference session record and its payload validation.

use crate::domain::foundation::{SessionId, ValidationError};

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 255;
/// Longest accepted speaker name, in characters.
pub const SPEAKER_NAME_MAX_CHARS: usize = 255;
/// Longest accepted upload reference, in characters.
pub const FILE_UPLOAD_URL_MAX_CHARS: usize = 2048;

/// A persisted conference session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: SessionId,
    pub title: String,
    pub description: Option<String>,
    pub speaker_name: Option<String>,
    /// Reference to an uploaded file, never the file content itself.
    pub file_upload_url: Option<String>,
}

impl Session {
    /// Binds validated details to an id.
    ///
    /// Used both for rows coming back from the store and for updates, where
    /// the id always comes from the request path.
    pub fn from_details(id: SessionId, details: SessionDetails) -> Self {
        Self {
            id,
            title: details.title,
            description: details.description,
            speaker_name: details.speaker_name,
            file_upload_url: details.file_upload_url,
        }
    }
}

/// Unvalidated session payload as received from a client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionDraft {
    pub title: Option<String>,
    pub description: Option<String>,
    pub speaker_name: Option<String>,
    pub file_upload_url: Option<String>,
}

impl SessionDraft {
    /// Draft with only a title set.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Checks every constraint and reports all violations at once.
    ///
    /// # Errors
    ///
    /// Returns the full list of violated constraints when the title is missing
    /// or empty, or when any field exceeds its column width.
    pub fn validate(self) -> Result<SessionDetails, Vec<ValidationError>> {
        let mut violations = Vec::new();

        let title = match self.title {
            Some(title) if !title.is_empty() => {
                check_length("title", &title, TITLE_MAX_CHARS, &mut violations);
                Some(title)
            }
            _ => {
                violations.push(ValidationError::empty_field("title"));
                None
            }
        };
        if let Some(speaker_name) = &self.speaker_name {
            check_length("speakerName", speaker_name, SPEAKER_NAME_MAX_CHARS, &mut violations);
        }
        if let Some(url) = &self.file_upload_url {
            check_length("fileUploadUrl", url, FILE_UPLOAD_URL_MAX_CHARS, &mut violations);
        }

        match title {
            Some(title) if violations.is_empty() => Ok(SessionDetails {
                title,
                description: self.description,
                speaker_name: self.speaker_name,
                file_upload_url: self.file_upload_url,
            }),
            _ => Err(violations),
        }
    }
}

fn check_length(field: &str, value: &str, max: usize, violations: &mut Vec<ValidationError>) {
    let actual = value.chars().count();
    if actual > max {
        violations.push(ValidationError::too_long(field, max, actual));
    }
}

/// Session fields that passed validation.
///
/// Only obtainable through [`SessionDraft::validate`], so holding one proves
/// the title is present and every field fits its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionDetails {
    title: String,
    description: Option<String>,
    speaker_name: Option<String>,
    file_upload_url: Option<String>,
}

impl SessionDetails {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn speaker_name(&self) -> Option<&str> {
        self.speaker_name.as_deref()
    }

    pub fn file_upload_url(&self) -> Option<&str> {
        self.file_upload_url.as_deref()
    }
}
