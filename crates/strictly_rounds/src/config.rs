//! Match configuration: player names and round count.

use crate::Player;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{debug, instrument, warn};

/// Round count offered by a setup form before the user changes it.
pub const DEFAULT_ROUNDS: u32 = 3;

/// Smallest round count a setup form offers.
pub const MIN_ROUNDS: u32 = 1;

/// Largest round count a setup form offers.
pub const MAX_ROUNDS: u32 = 10;

/// Validated settings for one match.
///
/// Names are stored trimmed and are never blank. The round count is at
/// least one. Tie-break extensions are tracked by the engine's
/// [`MatchState`](crate::MatchState), so a config never changes after
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct MatchConfig {
    /// Name of the player who plays X.
    player_x_name: String,
    /// Name of the player who plays O.
    player_o_name: String,
    /// Number of rounds scheduled before any tie-break.
    total_rounds: u32,
}

impl MatchConfig {
    /// Validates and builds a match configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigErrorKind::BlankName`] if either name is empty after
    /// trimming, or [`ConfigErrorKind::NoRounds`] if `total_rounds` is zero.
    #[instrument(skip(player_x_name, player_o_name))]
    pub fn new(
        player_x_name: &str,
        player_o_name: &str,
        total_rounds: u32,
    ) -> Result<Self, ConfigError> {
        let player_x_name = player_x_name.trim();
        let player_o_name = player_o_name.trim();

        if player_x_name.is_empty() {
            warn!("Rejecting blank name for player X");
            return Err(ConfigError::new(ConfigErrorKind::BlankName(Player::X)));
        }
        if player_o_name.is_empty() {
            warn!("Rejecting blank name for player O");
            return Err(ConfigError::new(ConfigErrorKind::BlankName(Player::O)));
        }
        if total_rounds == 0 {
            warn!("Rejecting match with zero rounds");
            return Err(ConfigError::new(ConfigErrorKind::NoRounds));
        }

        debug!(
            player_x = %player_x_name,
            player_o = %player_o_name,
            total_rounds,
            "Match configured"
        );
        Ok(Self {
            player_x_name: player_x_name.to_string(),
            player_o_name: player_o_name.to_string(),
            total_rounds,
        })
    }

    /// Returns the name of whoever plays `player`.
    pub fn name_of(&self, player: Player) -> &str {
        match player {
            Player::X => &self.player_x_name,
            Player::O => &self.player_o_name,
        }
    }
}

/// What was wrong with a configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum ConfigErrorKind {
    /// A player name was missing or only whitespace.
    #[display("Player names cannot be empty.")]
    BlankName(Player),
    /// The round count was zero.
    #[display("A match needs at least {} round.", MIN_ROUNDS)]
    NoRounds,
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", kind, file, line)]
pub struct ConfigError {
    /// What was invalid.
    pub kind: ConfigErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: ConfigErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Message suitable for showing to the user.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
