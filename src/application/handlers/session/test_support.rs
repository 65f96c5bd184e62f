//! Repository doubles shared by the session handler tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::adapters::memory::InMemorySessionRepository;
use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::{Session, SessionDetails, SessionDraft};
use crate::ports::SessionRepository;

/// In-memory repository that records every call made to it.
#[derive(Default)]
pub struct RecordingRepository {
    inner: InMemorySessionRepository,
    calls: Mutex<Vec<String>>,
    writes: AtomicUsize,
}

impl RecordingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn with_titles(titles: &[&str]) -> Self {
        let repo = Self::new();
        for title in titles {
            let details = SessionDraft::titled(*title).validate().unwrap();
            repo.inner.insert(&details).await.unwrap();
        }
        repo
    }

    pub fn call_log(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub async fn stored(&self, id: i64) -> Option<Session> {
        self.inner.find_by_id(SessionId::new(id)).await.unwrap()
    }

    fn record(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }

    fn record_write(&self, call: String) {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.record(call);
    }
}

#[async_trait]
impl SessionRepository for RecordingRepository {
    async fn insert(&self, details: &SessionDetails) -> Result<SessionId, DomainError> {
        self.record_write(format!("insert({})", details.title()));
        self.inner.insert(details).await
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        self.record(format!("find_by_id({})", id));
        self.inner.find_by_id(id).await
    }

    async fn find_paginated(&self, offset: i64, limit: i64) -> Result<Vec<Session>, DomainError> {
        self.record(format!("find_paginated({}, {})", offset, limit));
        self.inner.find_paginated(offset, limit).await
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        self.record_write(format!("update({})", session.id));
        self.inner.update(session).await
    }

    async fn delete(&self, id: SessionId) -> Result<(), DomainError> {
        self.record_write(format!("delete({})", id));
        self.inner.delete(id).await
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        self.record("count_all()".to_string());
        self.inner.count_all().await
    }
}

/// Repository whose every operation fails like a lost database connection.
pub struct FailingRepository;

fn unavailable() -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, "Simulated connection failure")
}

#[async_trait]
impl SessionRepository for FailingRepository {
    async fn insert(&self, _details: &SessionDetails) -> Result<SessionId, DomainError> {
        Err(unavailable())
    }

    async fn find_by_id(&self, _id: SessionId) -> Result<Option<Session>, DomainError> {
        Err(unavailable())
    }

    async fn find_paginated(&self, _offset: i64, _limit: i64) -> Result<Vec<Session>, DomainError> {
        Err(unavailable())
    }

    async fn update(&self, _session: &Session) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: SessionId) -> Result<(), DomainError> {
        Err(unavailable())
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        Err(unavailable())
    }
}
