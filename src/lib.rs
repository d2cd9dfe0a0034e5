//! afk: set a temporary Slack status, then put the old one back.
//!
//! A session fetches the current status, applies a new one (optionally with
//! do-not-disturb), waits for a deadline or a line of terminal input, and
//! either keeps the new status or restores the original.
//!
//! # Quick start
//!
//! ```no_run
//! use afk::api::SlackClient;
//! use afk::config::load_api_settings;
//! use afk::render::Renderer;
//! use afk::session::{Session, SessionConfig};
//! use std::time::{Duration, SystemTime};
//!
//! # async fn example() {
//! let client = SlackClient::new(&load_api_settings().unwrap());
//! let config = SessionConfig::new(
//!     ":salad:",
//!     "Lunch!",
//!     Duration::from_secs(3600),
//!     false,
//!     SystemTime::now(),
//! )
//! .unwrap();
//! let renderer = Renderer::new(true);
//! let report = Session::new(&client, &renderer, config)
//!     .run(std::io::stdin())
//!     .await
//!     .unwrap();
//! println!("{:?}", report.resolution);
//! # }
//! ```

pub mod api;
pub mod build_info;
pub mod config;
pub mod duration_words;
pub mod error;
pub mod render;
pub mod session;
pub mod status;
#[cfg(test)]
pub mod testsupport;
pub mod textutil;
