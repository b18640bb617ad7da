//! Validation errors raised to the room host.
//!
//! Every transition validates before it mutates, so any of these errors
//! guarantees the caller's state document is untouched. None are retried
//! internally; the host surfaces them to the offending client as a
//! rejected action.

use thiserror::Error;

use crate::core::{Side, Square};
use crate::game::Status;

/// Errors raised by the lifecycle transitions and move validation.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum GameError {
    /// Transition attempted outside the phase it requires.
    #[error("game is {actual}, this action requires {required}")]
    InvalidPhase { required: Status, actual: Status },

    /// A player acted out of turn.
    #[error("it is not {username}'s turn")]
    OutOfTurn { username: String },

    /// The selected square holds no piece the acting side may move.
    #[error("{side} has no movable piece at {square}")]
    IllegalSelection { square: Square, side: Side },

    /// The submitted move is not in the legality-generated set.
    #[error("moving {origin} to {destination} is not legal on the current board")]
    IllegalMove { origin: Square, destination: Square },

    /// The piece at `at` has an open jump chain that must continue.
    #[error("the piece at {at} must keep jumping")]
    ContinuationRequired { at: Square },

    /// A turn switch was requested with no jump chain open; turn
    /// advancement is automatic otherwise.
    #[error("no jump chain is open to end")]
    NoOpenJumpChain,
}

/// Result type alias for engine operations.
pub type EngineResult<T> = Result<T, GameError>;
