//! Application state wiring the service to its concrete implementations.
//!
//! `ChatService` is generic over repository/provider traits; AppState pins
//! it to the SQLite repository and the OpenAI provider.

use std::sync::Arc;

use secrecy::ExposeSecret;

use valet_core::chat::service::ChatService;
use valet_infra::llm::openai::OpenAiProvider;
use valet_infra::sqlite::message::SqliteMessageRepository;
use valet_infra::sqlite::pool::{database_url, DatabasePool};
use valet_types::config::AppConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService = ChatService<SqliteMessageRepository, OpenAiProvider>;

/// Shared application state handed to every request handler.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
}

impl AppState {
    /// Initialize the application state: open the database, wire the service.
    ///
    /// Fails (and the process does not start) if the store cannot be
    /// opened or migrated.
    pub async fn init(config: &AppConfig) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(&database_url(&config.database)).await?;
        let repository = SqliteMessageRepository::new(db_pool);

        let api_key = config.openai_api_key.expose_secret();
        let provider = match &config.base_url {
            Some(base_url) => OpenAiProvider::with_base_url(api_key, &config.model, base_url),
            None => OpenAiProvider::openai(api_key, &config.model),
        };

        let chat_service = ChatService::new(
            repository,
            provider,
            config.model.clone(),
            config.max_history,
        );

        Ok(Self {
            chat_service: Arc::new(chat_service),
        })
    }
}
