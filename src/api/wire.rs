//! Slack JSON payload shapes.

use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::status::Status;

/// `{ ok, error? }` carried by every Slack Web API response.
#[derive(Debug, Default, Deserialize)]
pub(super) struct ApiEnvelope {
    #[serde(default)]
    pub ok: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiEnvelope {
    /// Turn `ok: false` into [`ApiError::Slack`].
    pub fn check(&self) -> Result<(), ApiError> {
        if self.ok {
            return Ok(());
        }
        let code = self
            .error
            .clone()
            .filter(|code| !code.trim().is_empty())
            .unwrap_or_else(|| "unknown_error".to_string());
        Err(ApiError::Slack(code))
    }
}

/// `users.profile.get` / `users.profile.set` response.
#[derive(Debug, Deserialize)]
pub(super) struct ProfileResponse {
    #[serde(flatten)]
    pub envelope: ApiEnvelope,
    #[serde(default)]
    pub profile: Option<WireStatus>,
}

/// `users.profile.set` request body.
#[derive(Debug, Serialize)]
pub(super) struct ProfileUpdate {
    pub profile: WireStatus,
}

/// Status fields inside a Slack profile object.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(super) struct WireStatus {
    #[serde(default)]
    pub status_text: String,
    #[serde(default)]
    pub status_emoji: String,
    /// Epoch seconds; 0 means never expires.
    #[serde(default, deserialize_with = "nullable_epoch")]
    pub status_expiration: i64,
}

impl From<&Status> for WireStatus {
    fn from(status: &Status) -> Self {
        Self {
            status_text: status.text.clone(),
            status_emoji: status.emoji.clone(),
            status_expiration: status.expiration_epoch(),
        }
    }
}

impl From<WireStatus> for Status {
    fn from(wire: WireStatus) -> Self {
        Status {
            emoji: wire.status_emoji,
            text: wire.status_text,
            expiration: Status::expiration_from_epoch(wire.status_expiration),
        }
    }
}

fn nullable_epoch<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or(0))
}
