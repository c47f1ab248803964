// speakeasy - speaking-order timer for moderated discussions
//
// A moderator types the names of people who want to speak. The timer keeps
// one speaker on the floor, counts their time, and orders everyone waiting
// so that responses come first and quieter speakers get priority.
//
// Architecture:
// - Discussion: the scheduler (speakers, speeches, pending pools, history)
// - Clock: turns wall-clock seconds into discussion ticks
// - TUI (ratatui): roster, clock, prompt and key handling
// - Summary: printed once the terminal is restored

mod cli;
mod clock;
mod config;
mod discussion;
mod logging;
mod summary;
mod tui;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use discussion::Discussion;
use logging::{LogBuffer, TuiLogLayer};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing
///
/// Logs always go to the in-memory buffer (the TUI owns the terminal).
/// File logging optionally adds rotating JSON files next to it.
///
/// Precedence: RUST_LOG env var > config file > default "info"
///
/// The returned guard must be kept alive for the duration of the program to
/// ensure file logs flush.
fn init_logging(config: &Config, log_buffer: &LogBuffer) -> Option<WorkerGuard> {
    let default_filter = format!("speakeasy={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    let file_writer = if config.logging.file_enabled {
        match std::fs::create_dir_all(&config.logging.file_dir) {
            Ok(()) => {
                let dir = &config.logging.file_dir;
                let prefix = &config.logging.file_prefix;
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(dir, prefix),
                    LogRotation::Daily => tracing_appender::rolling::daily(dir, prefix),
                    LogRotation::Never => tracing_appender::rolling::never(dir, prefix),
                };
                // Writes happen in a background thread
                Some(tracing_appender::non_blocking(file_appender))
            }
            Err(e) => {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                None
            }
        }
    } else {
        None
    };

    let (file_layer, guard) = match file_writer {
        Some((writer, guard)) => (
            Some(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_ansi(false),
            ),
            Some(guard),
        ),
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(TuiLogLayer::new(log_buffer.clone()))
        .with(file_layer)
        .init();

    guard
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Handle subcommands first (config --show, --reset, --path)
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let mut config = Config::from_env();
    cli.apply(&mut config);

    let log_buffer = LogBuffer::new();
    let _file_guard = init_logging(&config, &log_buffer);

    tracing::info!(
        "speakeasy {} starting ({} order)",
        config::VERSION,
        config.priority_mode.as_str()
    );

    let discussion = Discussion::new(config.discussion_options());
    let discussion = tui::run_tui(discussion, &config, log_buffer).await?;

    let summary = discussion.summary();
    tracing::info!(
        "Discussion ended after {}s with {} speakers",
        summary.total_duration,
        summary.speakers.len()
    );
    summary::print(&summary, config.summary)?;

    Ok(())
}
