//! protocols - terminal views over the Parkinson's healing-protocol catalog
//!
//! Lists protocols for a resource tier, ranks them, shows detail views and
//! enumerates slugs for static generation.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli_config;
mod protocol_cli;

use cli_config::CliConfig;
use protocol_cli::{CommandContext, ProtocolCommand};

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
    name = "protocols",
    about = "Browse and rank healing protocols for Parkinson's by resource level",
    version
)]
struct Cli {
    #[clap(subcommand)]
    command: ProtocolCommand,

    /// Emit structured JSON logs with source locations
    #[clap(long, global = true)]
    trace: bool,

    /// Set log level
    #[clap(long, default_value = "warn", global = true)]
    log_level: LogLevel,

    /// Override configuration file path
    #[clap(long, global = true)]
    config: Option<PathBuf>,

    /// Use this catalog YAML instead of the embedded catalog
    #[clap(long, global = true)]
    catalog: Option<PathBuf>,
}

/// Initialize tracing with CLI flags
///
/// Logs always go to stderr; stdout carries tables, JSON and slug lists.
fn initialize_tracing(log_level: &LogLevel, trace: bool) {
    let filter = EnvFilter::new(log_level.to_filter_directive());

    if trace {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::io::stderr)
            .init();

        tracing::info!("Structured tracing enabled");
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    initialize_tracing(&cli.log_level, cli.trace);

    let config = CliConfig::load(cli.config.as_deref())?;
    tracing::debug!(?config, "Configuration resolved");

    let context = CommandContext {
        config,
        catalog_override: cli.catalog,
    };

    cli.command.execute(&context)
}
