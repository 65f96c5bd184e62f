//! Domain layer containing the session catalog's types and rules.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers, errors)
//! - `session` - The conference session record and its validation

pub mod foundation;
pub mod session;
