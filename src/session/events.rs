//! Event producers that race to decide a session's outcome.
//!
//! Both producers share one single-slot channel and use `try_send`, so
//! whichever fires second finds the slot taken (or the receiver gone) and
//! simply drops its outcome.

use crate::duration_words::time_until;
use std::io::{BufRead, BufReader, Read};
use std::time::{Duration, SystemTime};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, warn};

/// Default wake-up interval for the countdown's wall-clock re-check.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Terminal decision of one session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    KeepNewStatus,
    ResumeOriginalStatus,
    /// Input that was neither an empty line nor `e`.
    UserError(String),
}

/// Map one line of terminal input to an outcome.
pub fn classify_input(line: &str) -> Outcome {
    let line = line.trim_end_matches(['\r', '\n']);
    match line {
        "" => Outcome::ResumeOriginalStatus,
        "e" => Outcome::KeepNewStatus,
        other => Outcome::UserError(other.to_string()),
    }
}

/// Fire `ResumeOriginalStatus` once the wall clock reaches `deadline`.
///
/// Sleeps in slices of at most `poll` and re-reads `SystemTime::now()` after
/// each one, so time spent suspended still counts toward the deadline.
pub fn spawn_countdown(
    deadline: SystemTime,
    poll: Duration,
    tx: mpsc::Sender<Outcome>,
) -> JoinHandle<()> {
    let poll = poll.max(MIN_POLL_INTERVAL);
    tokio::spawn(async move {
        loop {
            let remaining = time_until(deadline, SystemTime::now());
            if remaining.is_zero() {
                debug!("countdown reached deadline");
                let _ = tx.try_send(Outcome::ResumeOriginalStatus);
                return;
            }
            sleep(remaining.min(poll)).await;
        }
    })
}

/// Read one line from `reader` on a detached thread and send its outcome.
///
/// The thread is never joined; if it is still blocked on input when the
/// session resolves, it goes away with the process. EOF sends nothing.
pub fn spawn_input_listener<R>(reader: R, tx: mpsc::Sender<Outcome>)
where
    R: Read + Send + 'static,
{
    let spawned = std::thread::Builder::new()
        .name("afk-input".to_string())
        .spawn(move || {
            let mut line = String::new();
            match BufReader::new(reader).read_line(&mut line) {
                Ok(0) => debug!("input closed before any line was read"),
                Ok(_) => {
                    let _ = tx.try_send(classify_input(&line));
                }
                Err(e) => warn!("failed to read terminal input: {e}"),
            }
        });
    if let Err(e) = spawned {
        warn!("failed to start input listener, waiting for the deadline only: {e}");
    }
}

/// Race the countdown against terminal input and return the first outcome.
///
/// A deadline that has already passed resolves immediately without reading
/// any input.
pub async fn first_outcome<R>(deadline: SystemTime, poll: Duration, reader: R) -> Outcome
where
    R: Read + Send + 'static,
{
    if time_until(deadline, SystemTime::now()).is_zero() {
        return Outcome::ResumeOriginalStatus;
    }

    let (tx, mut rx) = mpsc::channel(1);
    let countdown = spawn_countdown(deadline, poll, tx.clone());
    spawn_input_listener(reader, tx);

    let outcome = rx.recv().await;
    countdown.abort();
    // Only reachable if every producer quit without sending; the countdown
    // always sends, so treat it as the deadline passing.
    outcome.unwrap_or(Outcome::ResumeOriginalStatus)
}
