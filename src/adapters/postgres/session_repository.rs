//! PostgreSQL implementation of SessionRepository.
//!
//! Every statement is parameterized; rows are mapped to [`Session`] by
//! [`row_to_session`].

use async_trait::async_trait;
use sqlx::{postgres::PgRow, PgPool, Row};

use crate::domain::foundation::{DomainError, SessionId};
use crate::domain::session::{Session, SessionDetails};
use crate::ports::SessionRepository;

/// PostgreSQL implementation of SessionRepository.
#[derive(Clone)]
pub struct PostgresSessionRepository {
    pool: PgPool,
}

impl PostgresSessionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
    async fn insert(&self, details: &SessionDetails) -> Result<SessionId, DomainError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO sessions (title, description, speaker_name, file_upload_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(details.title())
        .bind(details.description())
        .bind(details.speaker_name())
        .bind(details.file_upload_url())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::database("insert session", e))?;

        Ok(SessionId::new(id))
    }

    async fn find_by_id(&self, id: SessionId) -> Result<Option<Session>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, title, description, speaker_name, file_upload_url
            FROM sessions
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::database("fetch session", e))?;

        row.map(row_to_session).transpose()
    }

    async fn find_paginated(&self, offset: i64, limit: i64) -> Result<Vec<Session>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, title, description, speaker_name, file_upload_url
            FROM sessions
            ORDER BY id
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::database("list sessions", e))?;

        rows.into_iter().map(row_to_session).collect()
    }

    async fn update(&self, session: &Session) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            UPDATE sessions SET
                title = $2,
                description = $3,
                speaker_name = $4,
                file_upload_url = $5
            WHERE id = $1
            "#,
        )
        .bind(session.id.as_i64())
        .bind(session.title.as_str())
        .bind(session.description.as_deref())
        .bind(session.speaker_name.as_deref())
        .bind(session.file_upload_url.as_deref())
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::database("update session", e))?;

        Ok(())
    }

    async fn delete(&self, id: SessionId) -> Result<(), DomainError> {
        sqlx::query("DELETE FROM sessions WHERE id = $1")
            .bind(id.as_i64())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::database("delete session", e))?;

        Ok(())
    }

    async fn count_all(&self) -> Result<i64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM sessions")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::database("count sessions", e))?;

        Ok(count)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Row mapping
// ════════════════════════════════════════════════════════════════════════════

fn row_to_session(row: PgRow) -> Result<Session, DomainError> {
    let column_error = |column: &str, e: sqlx::Error| {
        DomainError::database(&format!("read column {}", column), e)
    };

    let id: i64 = row.try_get("id").map_err(|e| column_error("id", e))?;
    let title: String = row.try_get("title").map_err(|e| column_error("title", e))?;
    let description: Option<String> = row
        .try_get("description")
        .map_err(|e| column_error("description", e))?;
    let speaker_name: Option<String> = row
        .try_get("speaker_name")
        .map_err(|e| column_error("speaker_name", e))?;
    let file_upload_url: Option<String> = row
        .try_get("file_upload_url")
        .map_err(|e| column_error("file_upload_url", e))?;

    Ok(Session {
        id: SessionId::new(id),
        title,
        description,
        speaker_name,
        file_upload_url,
    })
}
