//! Command-line interface for rewind_games.

use clap::{Parser, Subcommand};

/// Rewind - tic-tac-toe with time travel
#[derive(Parser, Debug)]
#[command(name = "rewind_games")]
#[command(about = "Play tic-tac-toe and jump to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML display config
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// List history newest first
    #[arg(long, global = true)]
    pub reversed: bool,

    /// Print views as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play interactively, one command per line on stdin
    Play,

    /// Play a fixed list of moves and print the resulting view
    Replay {
        /// Squares to play in order, e.g. `0,4,1,3,2`
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Step to seek to after the moves are played
        #[arg(short, long)]
        seek: Option<usize>,
    },
}
