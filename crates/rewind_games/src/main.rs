//! Rewind Games - Unified CLI
//!
//! Interactive and scripted tic-tac-toe with time travel.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rewind_games::{DisplayConfig, Session};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = DisplayConfig::load(cli.config.as_deref())?
        .with_overrides(cli.reversed, cli.json);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Command::Play) {
        Command::Play => run_play(config),
        Command::Replay { moves, seek } => run_replay(config, moves, seek),
    }
}

/// Run an interactive session on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: DisplayConfig) -> Result<()> {
    info!("Starting interactive session");
    let mut session = Session::new(config);
    let stdin = std::io::stdin();
    session.run(stdin.lock(), std::io::stdout().lock())
}

/// Play a fixed move list and print the result
#[instrument(skip(config))]
fn run_replay(config: DisplayConfig, moves: Vec<usize>, seek: Option<usize>) -> Result<()> {
    let (session, notices) = Session::replay(config, &moves, seek)?;
    for notice in &notices {
        eprintln!("{}", notice);
    }
    println!("{}", session.render()?);
    Ok(())
}
