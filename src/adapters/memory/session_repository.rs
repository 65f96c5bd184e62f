//! In-memory implementation of SessionRepository.
//!
//! Rows live in a `BTreeMap` keyed by id, so iteration order is already the
//! ascending-id order that pagination requires.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{Session, SessionDetails};
use crate::ports::SessionRepository;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<SessionId, Session>,
    last_id: i64,
}

/// In-memory session store.
///
/// Ids start at 1 and keep increasing across deletes, matching a database
/// sequence. Clones share the same table.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all stored sessions in id order (test helper).
    pub async fn all(&self) -> Vec<Session> {
        self.table.read().await.rows.values().cloned().collect()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, details: &SessionDetails) -> Result<SessionId, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;
        let id = SessionId::new(table.last_id);
        table
            .rows
            .insert(id, Session::from_details(id, details.clone()));
        Ok(id)
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn find_paginated(&self, offset: i64, limit: i64) -> Result<Vec<Session>, DomainError> {
        // negative bounds behave as zero
        let offset = usize::try_from(offset).unwrap_or(0);
        let limit = usize::try_from(limit).unwrap_or(0);

        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        let mut table = self.table.write().await;
        if let Some(row) = table.rows.get_mut(&session.id) {
            *row = session.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: SessionId) -> Result<(), DomainError> {
        self.table.write().await.rows.remove(&id);
        Ok(())
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        Ok(self.table.read().await.rows.len() as i64)
    }
}
