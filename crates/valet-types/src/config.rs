//! Application configuration.
//!
//! All runtime configuration is read once at startup into an immutable
//! [`AppConfig`] and passed into the components that need it. Request
//! handlers never read ambient environment state.

use std::path::PathBuf;

use secrecy::SecretString;

/// Default completion model identifier.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Default SQLite database path.
pub const DEFAULT_DATABASE: &str = "memory.db";
/// Default number of conversational turns included as context.
pub const DEFAULT_MAX_HISTORY: u32 = 8;
/// Default bind host.
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port.
pub const DEFAULT_PORT: u16 = 5000;
/// Default static asset directory served at `/`.
pub const DEFAULT_WEB_DIR: &str = "frontend";

/// Immutable application configuration, constructed at startup.
///
/// Built from the environment by `valet_infra::config::load_config`.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenAI API key. Required; the process does not start without it.
    pub openai_api_key: SecretString,
    /// Completion model identifier.
    pub model: String,
    /// Optional completion endpoint override (OpenAI-compatible gateways,
    /// mock servers in tests).
    pub base_url: Option<String>,
    /// SQLite database file path.
    pub database: PathBuf,
    /// How many past turns to include as context.
    pub max_history: u32,
    /// HTTP bind host.
    pub host: String,
    /// HTTP bind port.
    pub port: u16,
    /// Directory of front-end assets served at `/`, if it exists.
    pub web_dir: PathBuf,
}
