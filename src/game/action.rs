//! Submitted moves, applied-move records, and transition outcomes.

use serde::{Deserialize, Serialize};

use crate::core::{Side, Square};

/// A move as a client submits it.
///
/// The engine never trusts the submission: the `Piece` variant is matched
/// against the legality-generated option set for the current board before
/// anything mutates.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveRequest {
    /// Decline further jumps in an open chain and pass the turn. Only
    /// meaningful under the permissive rule set; turn advancement is
    /// otherwise automatic.
    SwitchPlayer,
    /// Relocate the piece at `from` to `to`, removing the piece at
    /// `capture` when jumping.
    #[serde(rename_all = "camelCase")]
    Piece {
        from: Square,
        to: Square,
        capture: Option<Square>,
    },
}

impl MoveRequest {
    /// A regular step.
    #[must_use]
    pub const fn step(from: Square, to: Square) -> Self {
        Self::Piece {
            from,
            to,
            capture: None,
        }
    }

    /// A capturing jump.
    #[must_use]
    pub const fn jump(from: Square, to: Square, capture: Square) -> Self {
        Self::Piece {
            from,
            to,
            capture: Some(capture),
        }
    }
}

/// Kind of an applied move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveKind {
    Regular,
    Jump,
}

/// Record of the most recently applied move, kept in the state document
/// for the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRecord {
    pub kind: MoveKind,
    /// Where the moved piece now stands.
    pub piece_location: Square,
}

/// What a successfully applied request did to the turn structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The turn passed to the opponent.
    TurnEnded,
    /// The moved piece has further jumps; the same player stays on move
    /// and only that piece may act.
    AwaitingContinuation { at: Square },
    /// An opponent counter reached zero; the game is over.
    Finished { winner: Side },
}
