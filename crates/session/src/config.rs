//! Session configuration

use chess_core::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::SessionResult;

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

/// Configuration for a game session. Missing keys take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Side played by the automated opponent
    pub bot_player: Player,
    /// Fixed seed for the bot's random source (None = seeded from entropy)
    pub seed: Option<u64>,
    /// Whether the bot answers immediately after each applied human move
    pub auto_reply: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bot_player: Player::Black,
            seed: None,
            auto_reply: true,
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(contents: &str) -> SessionResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> SessionResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_toml_string(&self) -> SessionResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn human_player(&self) -> Player {
        self.bot_player.opponent()
    }
}
