//! Session Catalog - Conference session metadata over HTTP.
//!
//! A small CRUD service for conference talks, gated by a shared API key and
//! backed by PostgreSQL. Layout follows ports and adapters: the domain and
//! application layers know only the [`ports::SessionRepository`] trait.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod server;
pub mod telemetry;
