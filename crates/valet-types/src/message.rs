//! Persisted conversation log entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::{Message, MessageRole};

/// A row in the conversation log.
///
/// Messages are immutable once written. `id` is assigned by the store at
/// insertion, strictly increasing, and is the sole ordering authority;
/// `created_at` is informational only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: i64,
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<StoredMessage> for Message {
    fn from(stored: StoredMessage) -> Self {
        Message {
            role: stored.role,
            content: stored.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stored_message_to_wire_message_drops_storage_fields() {
        let stored = StoredMessage {
            id: 42,
            role: MessageRole::User,
            content: "remind me to water the plants".to_string(),
            created_at: Utc::now(),
        };
        let wire: Message = stored.into();
        assert_eq!(wire.role, MessageRole::User);
        assert_eq!(wire.content, "remind me to water the plants");
        let json = serde_json::to_string(&wire).unwrap();
        assert!(!json.contains("\"id\""));
        assert!(!json.contains("created_at"));
    }
}
