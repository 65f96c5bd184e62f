//! Session domain module.
//!
//! A session is one conference talk: title, optional description, speaker
//! and a reference to uploaded material. Clients submit a [`SessionDraft`];
//! only drafts that pass [`SessionDraft::validate`] reach the store.

mod errors;
mod model;

pub use errors::{SessionAction, SessionError};
pub use model::{
    Session, SessionDetails, SessionDraft, FILE_UPLOAD_URL_MAX_CHARS, SPEAKER_NAME_MAX_CHARS,
    TITLE_MAX_CHARS,
};
