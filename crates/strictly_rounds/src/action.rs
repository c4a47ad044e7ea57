//! First-class move types.
//!
//! A move is a domain event: who placed a mark where. Rejected moves are
//! described by [`MoveRejection`] so the engine can log why input was
//! ignored.

use crate::{Player, Position};
use serde::{Deserialize, Serialize};

/// A player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a move was not applied.
///
/// Rejections are not errors for the caller: the engine drops the input
/// and reports nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The round already has a result.
    #[display("Round is already decided")]
    RoundDecided,

    /// The match is waiting on a tie-break answer or has ended.
    #[display("Match is not accepting moves")]
    MatchNotInPlay,

    /// The coordinates are outside the 3x3 grid.
    #[display("Coordinates ({}, {}) are off the board", _0, _1)]
    OffBoard(usize, usize),
}
