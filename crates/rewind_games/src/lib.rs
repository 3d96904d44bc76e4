//! Rewind Games - terminal front end for the rewind tic-tac-toe engine
//!
//! This crate is a renderer only. It turns input lines into engine
//! intents and prints the engine's view back out; all game state lives
//! in [`rewind_tictactoe::GameEngine`].
//!
//! # Architecture
//!
//! - **Config**: TOML display settings
//! - **Render**: stateless text/JSON projection of a view
//! - **Session**: line-driven play loop over any reader/writer

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod render;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, DisplayConfig};

// Crate-level exports - Rendering
pub use render::{render, render_json, render_text};

// Crate-level exports - Session
pub use session::{HELP, Reply, Session};
