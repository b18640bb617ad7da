//! Core board and identity types: squares, pieces, the grid, players.
//!
//! Everything here is a plain value type; the rules and the state machine
//! are built on top without owning any of it.

pub mod board;
pub mod player;

pub use board::{Board, Piece, Rank, Side, Square, BOARD_SIZE};
pub use player::{BySide, Player};
