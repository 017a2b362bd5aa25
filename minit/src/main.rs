//! Minit CLI - A command-line driver for the minic lexer.
//!
//! This is the main entry point for the minit CLI application.
//! It uses clap for argument parsing and dispatches to the lex and check
//! command handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::common::OutputFormat;
use commands::{CheckArgs, CheckCommand, Command, LexArgs, LexCommand, Outcome};
use config::Config;
use error::{MinitError, Result};

/// Minit - Run the minic lexer over source files
///
/// Minit prints the token stream of each file, or checks files and reports
/// only lexical diagnostics.
#[derive(Parser, Debug)]
#[command(name = "minit")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Run the minic lexer over source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "MINIT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "MINIT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "MINIT_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the minit CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the token stream of each file
    ///
    /// One token per line, the final EOF included. Diagnostics go to
    /// standard error.
    Lex(LexCli),

    /// Report lexical diagnostics without printing tokens
    Check(CheckCli),
}

/// Arguments for the lex subcommand.
#[derive(Parser, Debug)]
struct LexCli {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCli {
    /// Source files to scan
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Diagnostic format (default: from config)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Omit the summary line
    #[arg(short, long)]
    quiet: bool,
}

/// Exit with 0 when every file is clean, 1 when any diagnostic was reported
/// and 2 when the driver itself failed.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(outcome) if outcome.is_clean() => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::from(2)
        },
    }
}

fn run(cli: Cli) -> Result<Outcome> {
    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    debug!(?config, "configuration loaded");

    execute_command(cli.command, cli.no_color, config)
}

/// Initialize the logging system.
///
/// `MINIT_LOG` overrides the level picked from `verbose`.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = EnvFilter::try_from_env("MINIT_LOG").unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("warn")
        }
    });

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| MinitError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, no_color: bool, config: Config) -> Result<Outcome> {
    match command {
        Commands::Lex(args) => execute::<LexCommand>(
            LexArgs {
                files: args.files,
                format: args.format,
                no_color,
            },
            config,
        ),
        Commands::Check(args) => execute::<CheckCommand>(
            CheckArgs {
                files: args.files,
                format: args.format,
                no_color,
                quiet: args.quiet,
            },
            config,
        ),
    }
}

fn execute<C: Command>(args: C::Args, config: Config) -> Result<Outcome> {
    debug!(command = C::name(), "executing");
    let outcome = C::new(args, config).execute()?;
    debug!(
        command = C::name(),
        files = outcome.files,
        tokens = outcome.tokens,
        diagnostics = outcome.diagnostics,
        "finished"
    );
    Ok(outcome)
}
