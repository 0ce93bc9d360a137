//! Chat service orchestrating message persistence and completion calls.
//!
//! Turns one inbound user message into one assistant reply, with memory
//! continuity: persist the user turn, assemble a bounded context window,
//! delegate to the completion provider, persist and return the reply.

use tracing::{debug, warn};

use valet_types::error::ChatError;
use valet_types::llm::{CompletionRequest, Message, MessageRole};
use valet_types::message::StoredMessage;

use crate::llm::provider::CompletionProvider;
use crate::memory::repository::MessageRepository;

/// Fixed assistant persona sent as the first message of every request.
const SYSTEM_PROMPT: &str = "You are a helpful personal assistant for a user. \
    Be concise, polite, and ask clarifying questions only if absolutely necessary. \
    Your responses should be actionable and safe.";

/// Bounded output length per completion.
const MAX_COMPLETION_TOKENS: u32 = 500;

/// Near-deterministic generation.
const TEMPERATURE: f64 = 0.2;

/// Orchestrates the chat request lifecycle.
///
/// Generic over `MessageRepository` and `CompletionProvider` to maintain
/// clean architecture (valet-core never depends on valet-infra).
pub struct ChatService<R: MessageRepository, P: CompletionProvider> {
    repository: R,
    provider: P,
    model: String,
    max_history: u32,
}

impl<R: MessageRepository, P: CompletionProvider> ChatService<R, P> {
    /// Create a new chat service with the given repository and provider.
    pub fn new(repository: R, provider: P, model: String, max_history: u32) -> Self {
        Self {
            repository,
            provider,
            model,
            max_history,
        }
    }

    /// Handle one inbound user message and return the assistant reply.
    ///
    /// The user message is persisted before the provider is called, so a
    /// failed completion leaves an unanswered user row behind. Provider
    /// errors are returned to the caller and are never written to the
    /// conversation log.
    pub async fn handle_chat(&self, user_message: &str) -> Result<String, ChatError> {
        let trimmed = user_message.trim();
        if trimmed.is_empty() {
            return Err(ChatError::EmptyMessage);
        }

        self.repository.append(MessageRole::User, trimmed).await?;

        // The window is fetched after the insert, so it already ends with
        // the row just written; the current message is still appended as
        // the explicit final entry, matching the documented request shape.
        let history = self.repository.recent_history(self.max_history).await?;

        let mut messages = Vec::with_capacity(history.len() + 2);
        messages.push(Message {
            role: MessageRole::System,
            content: SYSTEM_PROMPT.to_string(),
        });
        messages.extend(history.into_iter().map(Message::from));
        messages.push(Message {
            role: MessageRole::User,
            content: trimmed.to_string(),
        });

        let request = CompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: MAX_COMPLETION_TOKENS,
            temperature: Some(TEMPERATURE),
        };

        debug!(
            provider = self.provider.name(),
            model = %request.model,
            context_messages = request.messages.len(),
            "requesting completion"
        );

        let response = match self.provider.complete(&request).await {
            Ok(response) => response,
            Err(err) => {
                warn!(
                    provider = self.provider.name(),
                    error = %err,
                    "completion request failed; no assistant row written"
                );
                return Err(ChatError::Completion(err));
            }
        };

        let reply = response.content.trim().to_string();
        self.repository
            .append(MessageRole::Assistant, &reply)
            .await?;

        Ok(reply)
    }

    /// Return the recent conversation window, oldest first, for display.
    pub async fn history(&self) -> Result<Vec<StoredMessage>, ChatError> {
        Ok(self.repository.recent_history(self.max_history).await?)
    }
}
