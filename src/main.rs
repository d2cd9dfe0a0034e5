//! CLI entry point for afk.

mod cli;

use afk::api::SlackClient;
use afk::build_info::cli_version_text;
use afk::config::load_api_settings;
use afk::error::SessionError;
use afk::render::{RenderSink, Renderer};
use afk::session::{Session, SessionConfig};
use clap::Parser;
use std::io::IsTerminal;
use std::time::SystemTime;
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "AFK_LOG";

#[tokio::main]
async fn main() {
    let args = cli::Args::parse();

    if args.version {
        println!("{}", cli_version_text());
        return;
    }

    init_tracing();

    let color = !args.no_color && std::io::stdout().is_terminal();
    let renderer = Renderer::new(color);

    let code = match run(&args, &renderer).await {
        Ok(()) => 0,
        Err(err) => {
            renderer.error(&err.to_string());
            1
        }
    };
    // Exit explicitly: the input thread may still be blocked on stdin.
    std::process::exit(code);
}

async fn run(args: &cli::Args, renderer: &Renderer) -> Result<(), SessionError> {
    let settings = load_api_settings()?;
    let client = SlackClient::new(&settings);
    let config = SessionConfig::new(
        &args.emoji,
        &args.message,
        args.duration,
        args.dnd,
        SystemTime::now(),
    )?;
    Session::new(&client, renderer, config)
        .run(std::io::stdin())
        .await?;
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
