//! MessageRepository trait definition.
//!
//! The conversation log is append-only: insert and ordered read, never
//! update or delete.

use valet_types::error::RepositoryError;
use valet_types::llm::MessageRole;
use valet_types::message::StoredMessage;

/// Repository trait for the persisted conversation log.
///
/// Implementations live in valet-infra (e.g., `SqliteMessageRepository`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait MessageRepository: Send + Sync {
    /// Insert a new message with a fresh increasing id and the current
    /// timestamp. Returns the stored row including its assigned id.
    fn append(
        &self,
        role: MessageRole,
        content: &str,
    ) -> impl std::future::Future<Output = Result<StoredMessage, RepositoryError>> + Send;

    /// Return the most recent `turns` conversational turns, oldest first.
    ///
    /// A turn is approximated by fetching the most recent `2 * turns` rows
    /// (each turn is expected to contribute one user and one assistant row)
    /// and reversing them into chronological order. If rows are unevenly
    /// interleaved -- e.g. a user message left unanswered by a failed
    /// completion -- the window can contain an odd mix of roles.
    fn recent_history(
        &self,
        turns: u32,
    ) -> impl std::future::Future<Output = Result<Vec<StoredMessage>, RepositoryError>> + Send;
}
