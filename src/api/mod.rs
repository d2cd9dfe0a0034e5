//! Slack Web API access for presence status and do-not-disturb.
//!
//! - `wire`: JSON envelope and profile payload shapes
//! - `slack`: reqwest-backed [`SlackClient`]

use crate::error::ApiError;
use crate::status::Status;
use async_trait::async_trait;

mod slack;
mod wire;

pub use slack::SlackClient;

/// Slack error code returned by `dnd.endSnooze` when no snooze is running.
pub const SNOOZE_NOT_ACTIVE: &str = "snooze_not_active";

/// Remote status operations used by the session controller.
///
/// Tests substitute an in-memory implementation; production uses
/// [`SlackClient`].
#[async_trait]
pub trait StatusService: Send + Sync {
    /// Read the user's current status.
    async fn fetch_status(&self) -> Result<Status, ApiError>;
    /// Replace the user's status and return what the server now reports.
    async fn apply_status(&self, status: &Status) -> Result<Status, ApiError>;
    /// Turn on do-not-disturb for `minutes`.
    async fn set_snooze(&self, minutes: u32) -> Result<(), ApiError>;
    /// Turn off do-not-disturb. Succeeds when no snooze is active.
    async fn end_snooze(&self) -> Result<(), ApiError>;
}
