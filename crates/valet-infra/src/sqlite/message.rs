//! SQLite conversation log implementation.
//!
//! Implements `MessageRepository` from `valet-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, RFC 3339 text
//! timestamps.

use chrono::{DateTime, Utc};
use sqlx::Row;

use valet_core::memory::repository::MessageRepository;
use valet_types::error::RepositoryError;
use valet_types::llm::MessageRole;
use valet_types::message::StoredMessage;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `MessageRepository`.
pub struct SqliteMessageRepository {
    pool: DatabasePool,
}

impl SqliteMessageRepository {
    /// Create a new repository backed by the given database pool.
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to domain StoredMessage.
struct MessageRow {
    id: i64,
    role: String,
    content: String,
    created_at: String,
}

impl MessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            role: row.try_get("role")?,
            content: row.try_get("content")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_message(self) -> Result<StoredMessage, RepositoryError> {
        let role: MessageRole = self
            .role
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(StoredMessage {
            id: self.id,
            role,
            content: self.content,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

impl MessageRepository for SqliteMessageRepository {
    async fn append(
        &self,
        role: MessageRole,
        content: &str,
    ) -> Result<StoredMessage, RepositoryError> {
        let created_at = Utc::now();

        let result = sqlx::query(
            "INSERT INTO messages (role, content, created_at) VALUES (?, ?, ?)",
        )
        .bind(role.to_string())
        .bind(content)
        .bind(format_datetime(&created_at))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(StoredMessage {
            id: result.last_insert_rowid(),
            role,
            content: content.to_string(),
            created_at,
        })
    }

    async fn recent_history(&self, turns: u32) -> Result<Vec<StoredMessage>, RepositoryError> {
        // *2 because each turn is expected to contribute a user and an
        // assistant row. Rows come back newest first; reverse to oldest-first.
        let rows = sqlx::query(
            "SELECT id, role, content, created_at FROM messages ORDER BY id DESC LIMIT ?",
        )
        .bind(2 * i64::from(turns))
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let mut messages = rows
            .iter()
            .map(|row| {
                MessageRow::from_row(row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?
                    .into_message()
            })
            .collect::<Result<Vec<_>, _>>()?;

        messages.reverse();
        Ok(messages)
    }
}
