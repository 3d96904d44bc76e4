//! Line-driven play session.
//!
//! The session owns one engine. Each input line is parsed into an
//! intent, dispatched, and answered with either a fresh rendering or a
//! short notice. The session keeps no game state of its own.

use crate::config::DisplayConfig;
use crate::render::render;
use anyhow::{Context, Result};
use rewind_tictactoe::{GameEngine, Intent, IntentResult, MoveRejection, MoveResult, Position, Step};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

/// Help text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  move <0-8|label>   place the next mark (aliases: m, play)
  seek <step>        jump to a recorded step (aliases: jump, s)
  toggle             reverse the history listing (aliases: sort, t)
  show               print the current state
  help               print this help
  quit               leave (alias: q)";

/// What the session wants printed after a line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// State changed or was requested; print the view.
    Render,
    /// Nothing changed; print this message.
    Notice(String),
    /// End the session.
    Quit,
}

/// One interactive game.
#[derive(Debug, Clone)]
pub struct Session {
    engine: GameEngine,
    config: DisplayConfig,
}

impl Session {
    /// Starts a new game with the configured history order.
    #[instrument(skip(config))]
    pub fn new(config: DisplayConfig) -> Self {
        Self {
            engine: GameEngine::with_order(*config.history_order()),
            config,
        }
    }

    /// Plays `moves` in order on a new game, then seeks to `seek` if given.
    ///
    /// A move the engine ignores does not stop the replay. It is logged and
    /// reported in the returned notices, in play order.
    ///
    /// # Errors
    ///
    /// Fails if an index is not a square or `seek` was never recorded.
    #[instrument(skip(config))]
    pub fn replay(
        config: DisplayConfig,
        moves: &[usize],
        seek: Option<usize>,
    ) -> Result<(Self, Vec<String>)> {
        let positions = moves
            .iter()
            .map(|&index| {
                Position::try_from(index).with_context(|| format!("Invalid move {}", index))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut session = Self::new(config);
        let mut notices = Vec::new();
        for pos in positions {
            if let MoveResult::Ignored(rejection) = session.engine.apply_move(pos) {
                warn!(position = %pos, %rejection, "Replayed move ignored");
                notices.push(ignored_notice(rejection));
            }
        }
        if let Some(step) = seek {
            session
                .engine
                .seek(Step::new(step))
                .context("Failed to seek")?;
        }

        info!(
            cursor = %session.engine.cursor(),
            latest = %session.engine.latest(),
            ignored = notices.len(),
            "Replay finished"
        );
        Ok((session, notices))
    }

    /// Wraps an existing engine.
    pub fn with_engine(engine: GameEngine, config: DisplayConfig) -> Self {
        Self { engine, config }
    }

    /// The engine being played.
    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Renders the current state.
    ///
    /// # Errors
    ///
    /// Fails if the view cannot be serialized.
    pub fn render(&self) -> Result<String> {
        render(&self.engine.view(), &self.config).context("Failed to render view")
    }

    /// Handles one line of input.
    #[instrument(skip(self))]
    pub fn handle_line(&mut self, line: &str) -> Reply {
        let trimmed = line.trim();
        match trimmed.to_lowercase().as_str() {
            "" => return Reply::Notice(String::new()),
            "quit" | "q" | "exit" => return Reply::Quit,
            "help" | "?" => return Reply::Notice(HELP.to_string()),
            "show" | "view" => return Reply::Render,
            _ => {}
        }

        let intent: Intent = match trimmed.parse() {
            Ok(intent) => intent,
            Err(e) => {
                debug!(error = %e, "Unparseable input");
                return Reply::Notice(format!("{} (type 'help' for commands)", e));
            }
        };

        match self.engine.dispatch(intent) {
            Ok(IntentResult::Moved(MoveResult::Ignored(rejection))) => {
                Reply::Notice(ignored_notice(rejection))
            }
            Ok(_) => Reply::Render,
            Err(e) => {
                warn!(error = %e, "Seek rejected");
                Reply::Notice(e.to_string())
            }
        }
    }

    /// Reads lines from `input` until EOF or `quit`, writing replies to `output`.
    ///
    /// # Errors
    ///
    /// Returns I/O and rendering failures.
    #[instrument(skip_all)]
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Session started");
        writeln!(output, "{}", self.render()?).context("Failed to write output")?;

        for line in input.lines() {
            let line = line.context("Failed to read input")?;
            match self.handle_line(&line) {
                Reply::Render => {
                    writeln!(output, "{}", self.render()?).context("Failed to write output")?
                }
                Reply::Notice(message) if message.is_empty() => {}
                Reply::Notice(message) => {
                    writeln!(output, "{}", message).context("Failed to write output")?
                }
                Reply::Quit => break,
            }
        }

        info!(cursor = %self.engine.cursor(), latest = %self.engine.latest(), "Session ended");
        Ok(())
    }
}

fn ignored_notice(rejection: MoveRejection) -> String {
    format!("Move ignored: {}", rejection)
}
