//! Error types for configuration, the Slack API layer, and the session.

use std::fmt;
use std::path::PathBuf;

use crate::session::SessionPhase;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Errors while resolving credentials or runtime settings.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    /// Neither the env var nor the config file produced a token.
    MissingToken { env_var: String, path: PathBuf },
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::MissingToken { env_var, path } => write!(
                f,
                "could not find a Slack API token. Checked ENV var: ${env_var} and file: {}",
                path.display()
            ),
            Self::Invalid(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

// ---------------------------------------------------------------------------
// ApiError
// ---------------------------------------------------------------------------

/// Errors from the Slack Web API layer.
#[derive(Debug)]
pub enum ApiError {
    /// Network / reqwest-level error.
    Http(reqwest::Error),
    /// Non-2xx status from the API.
    Status(u16, String),
    /// The response body was not the JSON shape we expected.
    Parse(String),
    /// Slack answered `ok: false` with this error code.
    Slack(String),
}

impl ApiError {
    /// Slack error code for `ok: false` responses.
    pub fn slack_code(&self) -> Option<&str> {
        match self {
            Self::Slack(code) => Some(code.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "http: {e}"),
            Self::Status(code, body) => write!(f, "status {code}: {body}"),
            Self::Parse(msg) => write!(f, "unreadable response: {msg}"),
            Self::Slack(code) => write!(f, "slack: {code}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e)
    }
}

// ---------------------------------------------------------------------------
// SessionError (top level)
// ---------------------------------------------------------------------------

/// Top-level error for one `afk` session.
#[derive(Debug)]
pub enum SessionError {
    Config(ConfigError),
    /// A remote call failed while the session was in `phase`.
    Api {
        phase: SessionPhase,
        source: ApiError,
    },
    /// Interactive input was neither empty nor `e`.
    UserInput(String),
}

impl SessionError {
    pub(crate) fn api(phase: SessionPhase) -> impl FnOnce(ApiError) -> Self {
        move |source| Self::Api { phase, source }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "config: {e}"),
            Self::Api { phase, source } => write!(f, "{}: {source}", phase.describe()),
            Self::UserInput(input) => write!(
                f,
                "unrecognized input {input:?}: press enter to restore your status or `e` to keep it"
            ),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Api { source, .. } => Some(source),
            Self::UserInput(_) => None,
        }
    }
}

impl From<ConfigError> for SessionError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
