//! Game session for chessington
//!
//! This crate pairs a human side with an automated opponent:
//! - Human moves are applied through the board and answered by the bot
//! - Session behavior (bot side, seed, auto reply) is read from TOML
//! - Applied moves are recorded in an in-memory history
//!
//! # Configuration
//!
//! ```toml
//! bot_player = "black"
//! seed = 42
//! auto_reply = true
//! ```

mod config;
mod error;
mod history;
mod session;

pub use config::*;
pub use error::*;
pub use history::*;
pub use session::*;
