//! Strictly Rounds - tic-tac-toe matches played over several rounds.
//!
//! Pure match logic with no I/O: a validated [`MatchConfig`] feeds a
//! [`MatchEngine`] that owns the board, turn order and scoring. Engine
//! operations return [`MatchEvent`]s for a presentation layer to render.
//!
//! # Architecture
//!
//! - **Config**: player names and round count, validated once per setup
//! - **Engine**: moves, win/draw detection, round and match progression
//! - **Events**: notifications plus the [`MatchObserver`] callback trait
//! - **Invariants**: properties checked after every transition in debug builds
//!
//! # Example
//!
//! ```
//! use strictly_rounds::{MatchConfig, MatchEngine, MatchPhase};
//!
//! # fn example() -> Result<(), strictly_rounds::ConfigError> {
//! let config = MatchConfig::new("Ann", "Ben", 1)?;
//! let mut engine = MatchEngine::new(config);
//!
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
//!     engine.apply_move(row, col);
//! }
//! assert_eq!(engine.phase(), MatchPhase::MatchWon(strictly_rounds::Player::X));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod engine;
mod events;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod setup;
mod state;
mod types;

// Crate-level exports - Configuration
pub use config::{ConfigError, ConfigErrorKind, DEFAULT_ROUNDS, MAX_ROUNDS, MIN_ROUNDS, MatchConfig};
pub use setup::SetupError;

// Crate-level exports - Board and moves
pub use action::{Move, MoveRejection};
pub use position::Position;
pub use types::{Board, Player, Square};

// Crate-level exports - Engine
pub use engine::MatchEngine;
pub use phases::{MatchPhase, MatchResult, RoundOutcome};
pub use state::{MatchState, RoundState};

// Crate-level exports - Notifications
pub use events::{MatchEvent, MatchObserver, dispatch_all};
