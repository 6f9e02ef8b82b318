//! loadout - interactive character loadout demo

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use loadout::{logging, Config, ConfigOverrides, LogFormat, Session};

/// Character loadout demo
#[derive(Parser, Debug)]
#[command(
    name = "loadout",
    version,
    about = "Pick a character, compose an attack, and strike"
)]
struct Args {
    /// Optional TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// tracing filter directive (e.g. "loadout=debug")
    #[arg(long)]
    log_filter: Option<String>,

    /// Log output format
    #[arg(long, value_enum)]
    log_format: Option<LogFormat>,
}

fn main() -> Result<ExitCode> {
    // Parse CLI arguments
    let args = Args::parse();

    let overrides = ConfigOverrides {
        log_filter: args.log_filter,
        log_format: args.log_format,
    };
    let config = Config::load(args.config.as_deref(), &overrides)?;

    // Initialize tracing
    logging::init(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock());

    let outcome = session.run()?;
    Ok(ExitCode::from(outcome.exit_status()))
}
