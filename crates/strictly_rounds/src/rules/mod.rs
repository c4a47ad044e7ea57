//! Game rules for tic-tac-toe.
//!
//! Pure functions over [`Board`](crate::Board), kept apart from board
//! storage. The round state uses them to decide each round.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_line};
