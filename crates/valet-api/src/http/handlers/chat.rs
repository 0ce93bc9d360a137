//! Chat and history HTTP handlers.
//!
//! - `POST /api/chat`    - body `{"message": "..."}`, returns `{"reply": "..."}`
//! - `GET  /api/history` - returns `{"history": [{"role", "content"}, ...]}`,
//!   oldest first, at most two rows per configured turn.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use valet_types::llm::Message;

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body for the chat endpoint.
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// The user message. Missing or empty is rejected with 400.
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body for the chat endpoint.
#[derive(Debug, Serialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Response body for the history endpoint.
#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub history: Vec<Message>,
}

/// POST /api/chat - turn one user message into one assistant reply.
pub async fn chat(
    State(state): State<AppState>,
    Json(body): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let message = body.message.unwrap_or_default();
    let reply = state.chat_service.handle_chat(&message).await?;
    Ok(Json(ChatReply { reply }))
}

/// GET /api/history - the recent conversation window for display.
pub async fn history(State(state): State<AppState>) -> Result<Json<HistoryResponse>, AppError> {
    let messages = state.chat_service.history().await?;
    Ok(Json(HistoryResponse {
        history: messages.into_iter().map(Message::from).collect(),
    }))
}
