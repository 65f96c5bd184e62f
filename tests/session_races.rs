//! Concurrency tests for the unlocked check-then-write in update and delete.
//!
//! `PausingRepository` parks the first `update` call between the existence
//! check and the write, which lets a test interleave a second request at
//! exactly that point.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use secrecy::SecretString;
use serde_json::{json, Value};
use tokio::sync::Notify;
use tower::ServiceExt;

use session_catalog::adapters::http::{api_router, ApiKeyGate, SessionHandlers};
use session_catalog::adapters::memory::InMemorySessionRepository;
use session_catalog::domain::foundation::{DomainError, SessionId};
use session_catalog::domain::session::{Session, SessionDetails};
use session_catalog::ports::SessionRepository;

const API_KEY: &str = "conference-2024";

// =============================================================================
// Test Infrastructure
// =============================================================================

#[derive(Default)]
struct PausingRepository {
    inner: InMemorySessionRepository,
    armed: AtomicBool,
    update_reached: Notify,
    resume: Notify,
}

impl PausingRepository {
    fn armed() -> Self {
        let repo = Self::default();
        repo.armed.store(true, Ordering::SeqCst);
        repo
    }
}

#[async_trait]
impl SessionRepository for PausingRepository {
    async fn insert(&self, details: &SessionDetails) -> Result<SessionId, DomainError> {
        self.inner.insert(details).await
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        self.inner.find_by_id(id).await
    }

    async fn find_paginated(&self, offset: i64, limit: i64) -> Result<Vec<Session>, DomainError> {
        self.inner.find_paginated(offset, limit).await
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        if self.armed.swap(false, Ordering::SeqCst) {
            self.update_reached.notify_one();
            self.resume.notified().await;
        }
        self.inner.update(session).await
    }

    async fn delete(&self, id: SessionId) -> Result<(), DomainError> {
        self.inner.delete(id).await
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        self.inner.count_all().await
    }
}

fn app_with(repo: Arc<dyn SessionRepository>) -> Router {
    let gate = ApiKeyGate::new(SecretString::new(API_KEY.to_string()));
    api_router(SessionHandlers::new(repo), gate)
}

fn request(method: &str, uri: &str, body: Option<Value>) -> Request<Body> {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("X-API-Key", API_KEY);
    match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    app.clone().oneshot(request(method, uri, body)).await.unwrap()
}

async fn title_of(app: &Router, id: i64) -> String {
    let response = send(app, "GET", &format!("/sessions/{}", id), None).await;
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    body["title"].as_str().unwrap().to_string()
}

// =============================================================================
// Races
// =============================================================================

#[tokio::test]
async fn update_racing_delete_reports_success_and_row_stays_deleted() {
    let repo = Arc::new(PausingRepository::armed());
    let app = app_with(repo.clone());
    send(&app, "POST", "/sessions", Some(json!({ "title": "Keynote" }))).await;

    let pending_update = {
        let app = app.clone();
        tokio::spawn(async move {
            send(&app, "PUT", "/sessions/1", Some(json!({ "title": "Too Late" }))).await
        })
    };

    // The update has passed its existence check and is parked before writing.
    repo.update_reached.notified().await;

    let deleted = send(&app, "DELETE", "/sessions/1", None).await;
    assert_eq!(deleted.status(), StatusCode::NO_CONTENT);

    repo.resume.notify_one();
    let updated = pending_update.await.unwrap();
    assert_eq!(updated.status(), StatusCode::OK);

    let fetched = send(&app, "GET", "/sessions/1", None).await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
    assert_eq!(repo.count_all().await.unwrap(), 0);
}

#[tokio::test]
async fn interleaved_updates_both_succeed_and_last_write_wins() {
    let repo = Arc::new(PausingRepository::armed());
    let app = app_with(repo.clone());
    send(&app, "POST", "/sessions", Some(json!({ "title": "Keynote" }))).await;

    let first = {
        let app = app.clone();
        tokio::spawn(async move {
            send(&app, "PUT", "/sessions/1", Some(json!({ "title": "First" }))).await
        })
    };
    repo.update_reached.notified().await;

    // Second update runs start to finish while the first is parked.
    let second = send(&app, "PUT", "/sessions/1", Some(json!({ "title": "Second" }))).await;
    assert_eq!(second.status(), StatusCode::OK);
    assert_eq!(title_of(&app, 1).await, "Second");

    repo.resume.notify_one();
    assert_eq!(first.await.unwrap().status(), StatusCode::OK);

    assert_eq!(title_of(&app, 1).await, "First");
}

#[tokio::test]
async fn concurrent_updates_leave_one_complete_record() {
    let repo = InMemorySessionRepository::new();
    let app = app_with(Arc::new(repo.clone()));
    send(&app, "POST", "/sessions", Some(json!({ "title": "Keynote" }))).await;

    let (a, b) = tokio::join!(
        send(
            &app,
            "PUT",
            "/sessions/1",
            Some(json!({ "title": "Morning", "speakerName": "Ada" }))
        ),
        send(
            &app,
            "PUT",
            "/sessions/1",
            Some(json!({ "title": "Evening", "speakerName": "Grace" }))
        ),
    );
    assert_eq!(a.status(), StatusCode::OK);
    assert_eq!(b.status(), StatusCode::OK);

    let stored = repo.all().await;
    assert_eq!(stored.len(), 1);
    let pair = (stored[0].title.as_str(), stored[0].speaker_name.as_deref());
    assert!(
        pair == ("Morning", Some("Ada")) || pair == ("Evening", Some("Grace")),
        "fields from different writes were mixed: {:?}",
        pair
    );
}
