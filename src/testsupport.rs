//! Shared test fixtures: temp dirs, an in-memory Slack, and a capturing sink.

use crate::api::StatusService;
use crate::error::ApiError;
use crate::render::RenderSink;
use crate::status::Status;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

static TEST_DIR_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Temporary directory fixture with best-effort cleanup.
#[derive(Debug)]
pub struct TestTempDir {
    path: PathBuf,
}

impl TestTempDir {
    /// Create a unique temporary directory with a readable prefix.
    pub fn new(prefix: &str) -> Self {
        let suffix = TEST_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis();
        let dir = std::env::temp_dir().join(format!("afk-{prefix}-{millis}-{suffix}"));
        fs::create_dir_all(&dir).expect("failed to create temporary fixture directory");
        Self { path: dir }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn child(&self, relative: &str) -> PathBuf {
        self.path.join(relative)
    }

    /// Write UTF-8 text to a child path.
    pub fn write_text(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.child(relative);
        fs::write(&path, content).expect("failed to write fixture file");
        path
    }
}

impl Drop for TestTempDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.path);
    }
}

/// One call observed by [`FakeSlack`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlackCall {
    Fetch,
    Apply(Status),
    SetSnooze(u32),
    EndSnooze,
}

/// In-memory [`StatusService`] that records every call.
#[derive(Debug, Default)]
pub struct FakeSlack {
    current: Mutex<Status>,
    snoozing: Mutex<bool>,
    calls: Mutex<Vec<SlackCall>>,
    fail_apply_after: Option<(usize, &'static str)>,
    fail_fetch: Option<&'static str>,
    fail_snooze: Option<&'static str>,
}

impl FakeSlack {
    pub fn with_status(status: Status) -> Self {
        Self {
            current: Mutex::new(status),
            ..Self::default()
        }
    }

    pub fn with_fetch_error(mut self, code: &'static str) -> Self {
        self.fail_fetch = Some(code);
        self
    }

    pub fn with_snooze_error(mut self, code: &'static str) -> Self {
        self.fail_snooze = Some(code);
        self
    }

    /// Fail `apply_status` with `code` once `ok_calls` calls have succeeded.
    pub fn with_apply_error_after(mut self, ok_calls: usize, code: &'static str) -> Self {
        self.fail_apply_after = Some((ok_calls, code));
        self
    }

    pub fn calls(&self) -> Vec<SlackCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn snoozing(&self) -> bool {
        *self.snoozing.lock().unwrap()
    }

    pub fn current(&self) -> Status {
        self.current.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&SlackCall) -> bool) -> usize {
        self.calls().iter().filter(|call| pred(call)).count()
    }

    fn record(&self, call: SlackCall) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl StatusService for FakeSlack {
    async fn fetch_status(&self) -> Result<Status, ApiError> {
        self.record(SlackCall::Fetch);
        if let Some(code) = self.fail_fetch {
            return Err(ApiError::Slack(code.to_string()));
        }
        Ok(self.current())
    }

    async fn apply_status(&self, status: &Status) -> Result<Status, ApiError> {
        let applied_before = self.count(|call| matches!(call, SlackCall::Apply(_)));
        self.record(SlackCall::Apply(status.clone()));
        if let Some((ok_calls, code)) = self.fail_apply_after {
            if applied_before >= ok_calls {
                return Err(ApiError::Slack(code.to_string()));
            }
        }
        *self.current.lock().unwrap() = status.clone();
        Ok(status.clone())
    }

    async fn set_snooze(&self, minutes: u32) -> Result<(), ApiError> {
        self.record(SlackCall::SetSnooze(minutes));
        if let Some(code) = self.fail_snooze {
            return Err(ApiError::Slack(code.to_string()));
        }
        *self.snoozing.lock().unwrap() = true;
        Ok(())
    }

    async fn end_snooze(&self) -> Result<(), ApiError> {
        self.record(SlackCall::EndSnooze);
        // Ending an inactive snooze succeeds, as it does against Slack.
        *self.snoozing.lock().unwrap() = false;
        Ok(())
    }
}

/// [`RenderSink`] that keeps rendered lines in memory.
#[derive(Debug, Default)]
pub struct CaptureSink {
    lines: Mutex<Vec<String>>,
}

impl CaptureSink {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().iter().any(|line| line.contains(needle))
    }

    fn push(&self, line: String) {
        self.lines.lock().unwrap().push(line);
    }
}

impl RenderSink for CaptureSink {
    fn section(&self, title: &str) {
        self.push(format!("== {title}"));
    }

    fn field(&self, key: &str, value: &str) {
        self.push(format!("{key}: {value}"));
    }

    fn activity(&self, text: &str) {
        self.push(text.to_string());
    }

    fn detail(&self, text: &str) {
        self.push(text.to_string());
    }

    fn error(&self, msg: &str) {
        self.push(format!("error: {msg}"));
    }
}
