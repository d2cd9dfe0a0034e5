//! Embeds commit hash and build time for `afk --version`.
//!
//! Either value can be pinned through the environment for reproducible
//! builds. Without git or `date`, "unknown" and raw unix seconds are used.

use std::env;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

const GIT_HASH_VAR: &str = "AFK_BUILD_GIT_HASH";
const TIMESTAMP_VAR: &str = "AFK_BUILD_TIMESTAMP";

fn main() {
    println!("cargo:rerun-if-changed=.git/HEAD");
    if let Some(reference) = head_reference() {
        println!("cargo:rerun-if-changed=.git/{reference}");
    }

    for (var, fallback) in [
        (GIT_HASH_VAR, commit_hash as fn() -> String),
        (TIMESTAMP_VAR, utc_timestamp as fn() -> String),
    ] {
        println!("cargo:rerun-if-env-changed={var}");
        let value = env::var(var).unwrap_or_else(|_| fallback());
        println!("cargo:rustc-env={var}={value}");
    }
}

/// Branch ref named by `.git/HEAD`, if HEAD is not detached.
fn head_reference() -> Option<String> {
    let head = std::fs::read_to_string(".git/HEAD").ok()?;
    head.trim().strip_prefix("ref: ").map(str::to_string)
}

fn commit_hash() -> String {
    command_output("git", &["rev-parse", "--short=12", "HEAD"])
        .unwrap_or_else(|| "unknown".to_string())
}

fn utc_timestamp() -> String {
    command_output("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]).unwrap_or_else(|| {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|since| since.as_secs())
            .unwrap_or(0);
        format!("unix:{secs}")
    })
}

fn command_output(program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program).args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_string()).filter(|text| !text.is_empty())
}
