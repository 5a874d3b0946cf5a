//! hassha-bridge - plays departure melodies for coding-agent host events
//!
//! Reads host event documents on stdin, maps each to its canonical hook name
//! and fires the external hassha notifier, best effort.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, BufRead, Read};
use std::path::PathBuf;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use hassha_bridge_core::events::HostEvent;
use hassha_bridge_core::notifier::Notifier;
use hassha_bridge_core::router::Router;

/// Log levels
#[derive(Debug, Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

#[derive(Parser, Debug)]
#[clap(
    name = "hassha-bridge",
    about = "Bridges coding-agent host events to the hassha melody notifier",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Working directory reported to the notifier (defaults to the current
    /// directory, which is how the host launches the bridge)
    #[clap(long, global = true)]
    dir: Option<PathBuf>,
}

#[derive(Parser, Debug)]
enum Command {
    /// Route a single host event document read from stdin
    Event,

    /// Route newline-delimited host event documents from stdin until EOF
    Run,
}

/// Initialize tracing from the --log-level flag. Logs go to stderr so the
/// host never sees bridge output on stdout.
fn initialize_tracing(log_level: &LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_tracing(&cli.log_level);

    let dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().context("failed to determine current directory")?,
    };

    let notifier = Notifier::discover()?;
    let router = Router::new(notifier, dir);

    match cli.command {
        Command::Event => event_command(&router).await,
        Command::Run => run_command(&router).await,
    }
}

/// Route one event document. Exits zero even when the notifier fails; the
/// bridge is fire-and-forget from the host's point of view.
async fn event_command(router: &Router<Notifier>) -> Result<()> {
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("failed to read event from stdin")?;

    if buffer.trim().is_empty() {
        debug!("empty stdin, nothing to route");
        return Ok(());
    }

    route_line(router, &buffer).await;
    Ok(())
}

/// Route an event stream, one document per line, in arrival order. Malformed
/// lines are skipped; later events must keep flowing.
async fn run_command(router: &Router<Notifier>) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read event stream from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        route_line(router, &line).await;
    }
    Ok(())
}

async fn route_line(router: &Router<Notifier>, input: &str) {
    match HostEvent::parse(input) {
        Ok(Some(event)) => router.dispatch(&event).await,
        Ok(None) => debug!("ignoring unrecognized host event"),
        Err(err) => warn!(error = %err, "skipping malformed host event"),
    }
}
