//! Environment configuration loader for Valet.
//!
//! Builds the immutable [`AppConfig`] once at startup. A missing API key or
//! an unparseable numeric variable is a fatal startup error; everything
//! else falls back to its default.

use std::path::PathBuf;

use secrecy::SecretString;

use valet_types::config::{
    AppConfig, DEFAULT_DATABASE, DEFAULT_HOST, DEFAULT_MAX_HISTORY, DEFAULT_MODEL, DEFAULT_PORT,
    DEFAULT_WEB_DIR,
};
use valet_types::error::ConfigError;

/// Load configuration from the process environment.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(|name| std::env::var(name).ok())
}

/// Load configuration from an arbitrary variable lookup.
///
/// The lookup is injected so tests can exercise the loader without
/// mutating process-wide environment state.
pub fn load_config_from(
    get: impl Fn(&str) -> Option<String>,
) -> Result<AppConfig, ConfigError> {
    let openai_api_key = get("OPENAI_API_KEY")
        .filter(|v| !v.trim().is_empty())
        .map(SecretString::from)
        .ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

    let model = get("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let base_url = get("OPENAI_BASE_URL");

    let database = get("MEMORY_DB")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE));

    let max_history = parse_or_default(&get, "MAX_HISTORY", DEFAULT_MAX_HISTORY)?;
    let host = get("VALET_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = parse_or_default(&get, "VALET_PORT", DEFAULT_PORT)?;

    let web_dir = get("VALET_WEB_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_WEB_DIR));

    Ok(AppConfig {
        openai_api_key,
        model,
        base_url,
        database,
        max_history,
        host,
        port,
        web_dir,
    })
}

fn parse_or_default<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match get(name) {
        None => Ok(default),
        Some(raw) => raw.parse().map_err(|e: T::Err| ConfigError::Invalid {
            name,
            reason: e.to_string(),
        }),
    }
}
