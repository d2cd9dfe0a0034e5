//! Compile-time build metadata for `afk --version`.

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured by `build.rs`.
pub const GIT_COMMIT: &str = env!("AFK_BUILD_GIT_HASH");

/// Build timestamp captured by `build.rs`.
pub const BUILD_TIMESTAMP: &str = env!("AFK_BUILD_TIMESTAMP");

/// Version block printed by `afk --version`.
pub fn cli_version_text() -> String {
    format!("afk {VERSION}\ncommit: {GIT_COMMIT}\nbuilt: {BUILD_TIMESTAMP}")
}
