/*
[INPUT]:  CLI arguments, YAML configuration file, TASKDECK_* environment
[OUTPUT]: Running taskdeck console with tracing into the log pane and a file
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

use taskdeck_console::cli::run_configure;
use taskdeck_console::config::ConsoleConfig;
use taskdeck_console::controller::Destination;
use taskdeck_console::tui::{
    self, LOG_BUFFER_CAPACITY, LogBuffer, LogBufferHandle, LogWriterFactory,
};

#[derive(Parser, Debug)]
#[command(
    name = "taskdeck",
    version,
    about = "Terminal client for a workflow engine's human tasks"
)]
struct Cli {
    /// Configuration file; defaults to the per-user config directory.
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    /// Override the configured backend base URL.
    #[arg(long = "base-url", value_name = "URL", global = true)]
    base_url: Option<String>,
    /// Override the configured API bearer token.
    #[arg(long = "token", value_name = "TOKEN", global = true)]
    api_token: Option<String>,
    #[arg(
        long = "log-level",
        value_name = "LEVEL",
        default_value = "info",
        global = true
    )]
    log_level: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Open one task directly instead of the task list.
    Open {
        process_instance_id: i64,
        task_id: String,
    },
    /// Interactively write the configuration file.
    Configure,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config_path = args
        .config_path
        .clone()
        .unwrap_or_else(ConsoleConfig::default_path);

    if matches!(args.command, Some(Command::Configure)) {
        let current = ConsoleConfig::load(&config_path)?;
        return run_configure(&config_path, current);
    }

    let (log_buffer, _log_guard) = init_tracing(&args.log_level)?;

    let mut config = ConsoleConfig::load(&config_path)?;
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    if let Some(token) = args.api_token {
        config.api_token = Some(token);
    }
    info!(
        config_path = %config_path.display(),
        base_url = %config.base_url,
        "starting taskdeck"
    );

    let client = config.client().context("build workflow client")?;
    let initial = match args.command {
        Some(Command::Open {
            process_instance_id,
            task_id,
        }) => Destination::TaskDetail {
            process_instance_id,
            task_id,
        },
        _ => Destination::TaskList,
    };

    tui::run(client, initial, log_buffer, config.per_page).await
}

/// Install the tracing subscriber: one layer into the TUI log buffer, one
/// into a daily-rolling file under the user state directory. The returned
/// guard flushes the file writer and must live until exit.
fn init_tracing(
    log_level: &str,
) -> Result<(LogBufferHandle, tracing_appender::non_blocking::WorkerGuard)> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    let log_buffer: LogBufferHandle = Arc::new(Mutex::new(LogBuffer::new(LOG_BUFFER_CAPACITY)));

    let log_dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join("taskdeck")
        .join("logs");
    let (file_writer, guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&log_dir, "taskdeck.log"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(LogWriterFactory::new(log_buffer.clone())),
        )
        .with(fmt::layer().with_ansi(false).with_writer(file_writer))
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    Ok((log_buffer, guard))
}
