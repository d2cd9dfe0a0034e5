//! Credential and API settings resolution.
//!
//! The Slack token is resolved in this order (first hit wins):
//! 1. `SLACK_API_TOKEN` environment variable
//! 2. a `token: <value>` line in `~/.afk-slack.yml`
//!
//! `AFK_SLACK_API_URL` and `AFK_API_TIMEOUT_SECS` override the API endpoint
//! and request timeout.

use crate::error::ConfigError;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const TOKEN_ENV_VAR: &str = "SLACK_API_TOKEN";
pub const TOKEN_FILE_NAME: &str = ".afk-slack.yml";
pub const TOKEN_FILE_KEY: &str = "token";

pub const DEFAULT_API_BASE_URL: &str = "https://slack.com/api";
pub const DEFAULT_API_TIMEOUT_SECS: u64 = 30;

const BASE_URL_ENV_VAR: &str = "AFK_SLACK_API_URL";
const TIMEOUT_ENV_VAR: &str = "AFK_API_TIMEOUT_SECS";

/// Everything the Slack client needs to talk to the API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiSettings {
    pub base_url: String,
    pub token: String,
    pub timeout: Duration,
}

/// Default location of the token file (`$HOME/.afk-slack.yml`).
pub fn token_file_path() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(TOKEN_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(TOKEN_FILE_NAME))
}

/// Resolve API settings from the process environment and the default token file.
pub fn load_api_settings() -> Result<ApiSettings, ConfigError> {
    load_api_settings_with(&|key: &str| std::env::var(key).ok(), &token_file_path())
}

/// Resolve API settings with an injectable env lookup and token file path.
pub fn load_api_settings_with<FEnv>(
    env_lookup: &FEnv,
    token_path: &Path,
) -> Result<ApiSettings, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    let token = resolve_token_with(env_lookup, token_path)?;
    let base_url = non_empty(env_lookup(BASE_URL_ENV_VAR))
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
    let timeout_secs = match non_empty(env_lookup(TIMEOUT_ENV_VAR)) {
        // Clamp to at least 1 second to avoid "no-timeout" accidental behavior.
        Some(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| {
                ConfigError::Invalid(format!(
                    "invalid {TIMEOUT_ENV_VAR} value `{raw}`: expected positive integer seconds"
                ))
            })?
            .max(1),
        None => DEFAULT_API_TIMEOUT_SECS,
    };
    Ok(ApiSettings {
        base_url,
        token,
        timeout: Duration::from_secs(timeout_secs),
    })
}

/// Resolve the Slack token from the env var, then the token file.
pub fn resolve_token_with<FEnv>(env_lookup: &FEnv, token_path: &Path) -> Result<String, ConfigError>
where
    FEnv: Fn(&str) -> Option<String>,
{
    if let Some(token) = non_empty(env_lookup(TOKEN_ENV_VAR)) {
        return Ok(token.trim().to_string());
    }
    let text = match fs::read_to_string(token_path) {
        Ok(text) => Some(text),
        Err(e) if e.kind() == io::ErrorKind::NotFound => None,
        Err(e) => return Err(e.into()),
    };
    text.as_deref()
        .and_then(token_from_config_text)
        .ok_or_else(|| ConfigError::MissingToken {
            env_var: TOKEN_ENV_VAR.to_string(),
            path: token_path.to_path_buf(),
        })
}

/// Find the first `token: <value>` line in config file text.
pub fn token_from_config_text(text: &str) -> Option<String> {
    text.lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .filter_map(|line| line.split_once(':'))
        .find(|(key, _)| key.trim() == TOKEN_FILE_KEY)
        .map(|(_, value)| unquote(value.trim()).to_string())
        .filter(|token| !token.is_empty())
}

fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
