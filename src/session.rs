//! Session controller: fetch the current status, apply the new one, wait for
//! the deadline or the user, then keep or restore.
//!
//! Phases run in order `Fetching → Applying → Waiting → Resolving → Terminal`.
//! Any remote failure ends the session with [`SessionError::Api`] tagged with
//! the phase it happened in.

pub mod events;

use crate::api::StatusService;
use crate::duration_words::{format_duration_words, time_until};
use crate::error::{ConfigError, SessionError};
use crate::render::RenderSink;
use crate::status::Status;
use events::{first_outcome, Outcome, DEFAULT_POLL_INTERVAL};
use std::io::Read;
use std::time::{Duration, SystemTime};
use tracing::{debug, info};

/// Controller state; also used to label failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Fetching,
    Applying,
    Waiting,
    Resolving,
    Terminal,
}

impl SessionPhase {
    /// Short lowercase description used in error messages.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Fetching => "fetching current status",
            Self::Applying => "applying new status",
            Self::Waiting => "waiting",
            Self::Resolving => "restoring original status",
            Self::Terminal => "finishing session",
        }
    }
}

/// Immutable inputs for one session, built once from CLI flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Status to show while away; its expiration is the deadline.
    pub new_status: Status,
    pub deadline: SystemTime,
    /// Do-not-disturb length, when requested.
    pub dnd_minutes: Option<u32>,
    /// Upper bound on each countdown sleep before re-reading the clock.
    pub poll_interval: Duration,
}

impl SessionConfig {
    /// Build a config whose deadline is `now + duration`.
    ///
    /// Fails when the deadline does not fit in `SystemTime`.
    pub fn new(
        emoji: &str,
        message: &str,
        duration: Duration,
        do_not_disturb: bool,
        now: SystemTime,
    ) -> Result<Self, ConfigError> {
        let deadline = now.checked_add(duration).ok_or_else(|| {
            ConfigError::Invalid(format!(
                "duration of {}s puts the deadline beyond the representable clock range",
                duration.as_secs()
            ))
        })?;
        Ok(Self {
            new_status: Status::new(emoji, message, Some(deadline)),
            deadline,
            dnd_minutes: do_not_disturb.then(|| snooze_minutes(duration)),
            poll_interval: DEFAULT_POLL_INTERVAL,
        })
    }
}

/// Whole minutes covering `duration`, at least one.
pub fn snooze_minutes(duration: Duration) -> u32 {
    let minutes = duration.as_secs().div_ceil(60).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// How a session that ran to completion was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Kept,
    Resumed,
}

/// Result of a completed session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionReport {
    pub resolution: Resolution,
    pub original: Status,
    /// Status as echoed by Slack after applying the new one.
    pub applied: Status,
    pub snooze_enabled: bool,
}

/// Per-run state, created when the new status lands.
#[derive(Debug)]
struct ActiveSession {
    original_status: Status,
    new_status: Status,
    snooze_enabled: bool,
    deadline: SystemTime,
}

/// Drives one away-from-keyboard session against a [`StatusService`].
pub struct Session<'a> {
    service: &'a dyn StatusService,
    render: &'a dyn RenderSink,
    config: SessionConfig,
}

impl<'a> Session<'a> {
    pub fn new(
        service: &'a dyn StatusService,
        render: &'a dyn RenderSink,
        config: SessionConfig,
    ) -> Self {
        Self {
            service,
            render,
            config,
        }
    }

    /// Run the session to completion, reading the user's decision from `input`.
    pub async fn run<R>(&self, input: R) -> Result<SessionReport, SessionError>
    where
        R: Read + Send + 'static,
    {
        let active = self.start().await?;

        enter(SessionPhase::Waiting);
        self.render.detail(&format!(
            "Press enter to restore your previous status (automatic in {}), or type `e` and enter to keep the new one.",
            format_duration_words(time_until(active.deadline, SystemTime::now()))
        ));
        let outcome = first_outcome(active.deadline, self.config.poll_interval, input).await;
        debug!(?outcome, "session outcome decided");

        enter(SessionPhase::Resolving);
        let report = self.resolve(active, outcome).await;
        enter(SessionPhase::Terminal);
        report
    }

    /// `Fetching` and `Applying`.
    async fn start(&self) -> Result<ActiveSession, SessionError> {
        enter(SessionPhase::Fetching);
        let original_status = self
            .service
            .fetch_status()
            .await
            .map_err(SessionError::api(SessionPhase::Fetching))?;
        self.show_status("Current Status", &original_status);

        enter(SessionPhase::Applying);
        let new_status = self
            .service
            .apply_status(&self.config.new_status)
            .await
            .map_err(SessionError::api(SessionPhase::Applying))?;
        self.show_status("New Status", &new_status);

        let snooze_enabled = match self.config.dnd_minutes {
            Some(minutes) => {
                self.service
                    .set_snooze(minutes)
                    .await
                    .map_err(SessionError::api(SessionPhase::Applying))?;
                self.render.activity(&format!(
                    "Do not disturb enabled for {}",
                    format_duration_words(Duration::from_secs(u64::from(minutes) * 60))
                ));
                true
            }
            None => false,
        };

        Ok(ActiveSession {
            original_status,
            new_status,
            snooze_enabled,
            deadline: self.config.deadline,
        })
    }

    /// `Resolving`: act on the single outcome that won the race.
    async fn resolve(
        &self,
        active: ActiveSession,
        outcome: Outcome,
    ) -> Result<SessionReport, SessionError> {
        let resolution = match outcome {
            Outcome::UserError(input) => return Err(SessionError::UserInput(input)),
            Outcome::KeepNewStatus => {
                info!("keeping new status");
                self.render.activity("Keeping new status");
                Resolution::Kept
            }
            Outcome::ResumeOriginalStatus => {
                info!("restoring original status");
                let restored = self
                    .service
                    .apply_status(&active.original_status)
                    .await
                    .map_err(SessionError::api(SessionPhase::Resolving))?;
                if active.snooze_enabled {
                    self.service
                        .end_snooze()
                        .await
                        .map_err(SessionError::api(SessionPhase::Resolving))?;
                    self.render.activity("Do not disturb disabled");
                }
                self.show_status("Restored Status", &restored);
                Resolution::Resumed
            }
        };

        Ok(SessionReport {
            resolution,
            original: active.original_status,
            applied: active.new_status,
            snooze_enabled: active.snooze_enabled,
        })
    }

    fn show_status(&self, title: &str, status: &Status) {
        self.render.section(title);
        for (key, value) in status.display_fields(SystemTime::now()) {
            self.render.field(key, &value);
        }
    }
}

fn enter(phase: SessionPhase) {
    debug!(phase = phase.describe(), "session phase");
}
