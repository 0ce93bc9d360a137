//! CompletionProvider trait definition.
//!
//! The completion service is an opaque synchronous request/response
//! dependency: one request, one reply or one error. No streaming.

use valet_types::llm::{CompletionRequest, CompletionResponse, LlmError};

/// Trait for completion-service backends.
///
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
/// Implementations live in valet-infra (e.g., `OpenAiProvider`).
pub trait CompletionProvider: Send + Sync {
    /// Human-readable provider name (e.g., "openai").
    fn name(&self) -> &str;

    /// Send a completion request and receive the full response.
    ///
    /// Single attempt: implementations must not retry internally.
    fn complete(
        &self,
        request: &CompletionRequest,
    ) -> impl std::future::Future<Output = Result<CompletionResponse, LlmError>> + Send;
}
