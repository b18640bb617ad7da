//! # checkers-engine
//!
//! Rules engine for an 8x8 checkers (draughts) variant played between two
//! remote players through a turn-based room host.
//!
//! ## Design Principles
//!
//! 1. **Board truth**: every submitted move is re-validated against the
//!    legality set generated from the authoritative board. The
//!    presentation layer may pre-filter with the same functions, but its
//!    highlighted set is never an authorization.
//!
//! 2. **Validate, then mutate**: no transition touches the state document
//!    before every check has passed. A returned error means the caller's
//!    document is exactly as it was.
//!
//! 3. **Turn structure in the engine**: forced jump continuation is an
//!    explicit sub-state of the document (`pendingJump`), and turn
//!    advancement is automatic; neither can be bypassed by a client
//!    talking straight to the host.
//!
//! The engine performs no I/O, spawns nothing, and holds no resources.
//! The hosting platform serializes all calls per room and owns the player
//! list, persistence, and transport.
//!
//! ## Modules
//!
//! - `core`: squares, pieces, the board, player identity
//! - `rules`: legal-move generation and the capture policy
//! - `game`: the authoritative state document and its transitions
//! - `room`: the four lifecycle entry points the room host calls
//! - `error`: validation error kinds

pub mod core;
pub mod error;
pub mod game;
pub mod room;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{Board, BySide, Piece, Player, Rank, Side, Square, BOARD_SIZE};

pub use crate::error::{EngineResult, GameError};

pub use crate::game::{
    GameState, MoveKind, MoveOutcome, MoveRecord, MoveRequest, Status, PIECES_PER_SIDE,
};

pub use crate::room::{
    on_player_join, on_player_move, on_player_quit, on_room_start, on_room_start_with_rules, Room,
    RoomUpdate, SEATS,
};

pub use crate::rules::{jump_moves, legal_moves, regular_moves, MoveList, MoveOption, RuleSet};
