//! reqwest-backed Slack Web API client.

use super::wire::{ApiEnvelope, ProfileResponse, ProfileUpdate, WireStatus};
use super::{StatusService, SNOOZE_NOT_ACTIVE};
use crate::config::ApiSettings;
use crate::error::ApiError;
use crate::status::Status;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Client for the handful of Slack methods a session needs.
pub struct SlackClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
}

impl SlackClient {
    /// Build a client from resolved API settings.
    pub fn new(settings: &ApiSettings) -> Self {
        Self {
            http: build_http_client(settings.timeout),
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            token: settings.token.trim().to_string(),
        }
    }

    fn url(&self, method: &str) -> String {
        format!("{}/{method}", self.base_url)
    }

    /// Send one authenticated request and decode the JSON body.
    async fn send<T: DeserializeOwned>(
        &self,
        method: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        debug!(method, "calling slack");
        let response = req
            .header("Authorization", format!("Bearer {}", self.token))
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ApiError::Status(status.as_u16(), body));
        }
        serde_json::from_str(&body).map_err(|e| ApiError::Parse(format!("{method}: {e}")))
    }

    async fn profile_call(
        &self,
        method: &str,
        req: reqwest::RequestBuilder,
    ) -> Result<Status, ApiError> {
        let response: ProfileResponse = self.send(method, req).await?;
        response.envelope.check()?;
        let profile = response
            .profile
            .ok_or_else(|| ApiError::Parse(format!("{method}: response has no profile")))?;
        Ok(Status::from(profile))
    }

    async fn action_call(&self, method: &str, req: reqwest::RequestBuilder) -> Result<(), ApiError> {
        let envelope: ApiEnvelope = self.send(method, req).await?;
        envelope.check()
    }
}

#[async_trait]
impl StatusService for SlackClient {
    async fn fetch_status(&self) -> Result<Status, ApiError> {
        let method = "users.profile.get";
        self.profile_call(method, self.http.get(self.url(method)))
            .await
    }

    async fn apply_status(&self, status: &Status) -> Result<Status, ApiError> {
        let method = "users.profile.set";
        let body = ProfileUpdate {
            profile: WireStatus::from(status),
        };
        self.profile_call(method, self.http.post(self.url(method)).json(&body))
            .await
    }

    async fn set_snooze(&self, minutes: u32) -> Result<(), ApiError> {
        let method = "dnd.setSnooze";
        let url = format!("{}?num_minutes={minutes}", self.url(method));
        self.action_call(method, self.http.post(url)).await
    }

    async fn end_snooze(&self) -> Result<(), ApiError> {
        let method = "dnd.endSnooze";
        match self.action_call(method, self.http.post(self.url(method))).await {
            Err(err) if err.slack_code() == Some(SNOOZE_NOT_ACTIVE) => {
                debug!("no snooze was active");
                Ok(())
            }
            other => other,
        }
    }
}

fn build_http_client(timeout: Duration) -> reqwest::Client {
    // Fall back to reqwest defaults if builder creation fails for any reason.
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
