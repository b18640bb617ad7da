//! The authoritative game-state document and its transitions.
//!
//! ## GameState
//!
//! One document per room: board, turn owner, per-side remaining-piece
//! counters, the last applied move, the open jump chain (if any), and the
//! winner once the game ends. The hosting platform serializes all calls,
//! so no internal locking exists.
//!
//! ## Transition discipline
//!
//! Every transition validates completely before it mutates. A returned
//! error means the document is exactly as it was.
//!
//! Turn advancement is first-class: a regular step passes the turn, a
//! jump either opens a continuation (further jumps exist for the moved
//! piece) or passes the turn on its own. Clients only ever submit piece
//! moves, plus [`MoveRequest::SwitchPlayer`] to decline an open chain
//! under the permissive rule set.

use serde::{Deserialize, Serialize};

use crate::core::{Board, BySide, Piece, Player, Rank, Side, Square};
use crate::error::{EngineResult, GameError};
use crate::rules::{jump_moves, legal_moves, RuleSet};

use super::action::{MoveKind, MoveOutcome, MoveRecord, MoveRequest};

/// Number of men each side starts with.
pub const PIECES_PER_SIDE: u8 = 12;

/// Game phase. Moves only forward: PreGame, then InGame, then EndGame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    PreGame,
    InGame,
    EndGame,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::PreGame => write!(f, "pre-game"),
            Status::InGame => write!(f, "in-game"),
            Status::EndGame => write!(f, "end-game"),
        }
    }
}

/// The state document the room platform persists and broadcasts.
///
/// `pending_jump` is the explicit continuation sub-state of InGame: while
/// it is set, only the piece on that square may act, and only by jumping.
/// A `winner` of `None` with status EndGame means a tie or no-contest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub status: Status,
    pub board: Board,
    pub player_to_move: Side,
    pub remaining: BySide<u8>,
    pub last_move: Option<MoveRecord>,
    pub pending_jump: Option<Square>,
    pub winner: Option<Player>,
    pub rules: RuleSet,
}

impl GameState {
    /// A fresh pre-game document with the standard opening layout.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self {
            status: Status::PreGame,
            board: Board::opening(),
            player_to_move: Side::One,
            remaining: BySide::with_value(PIECES_PER_SIDE),
            last_move: None,
            pending_jump: None,
            winner: None,
            rules,
        }
    }

    /// Fail with [`GameError::InvalidPhase`] unless the game is in
    /// `required`.
    pub fn expect_status(&self, required: Status) -> EngineResult<()> {
        if self.status == required {
            Ok(())
        } else {
            Err(GameError::InvalidPhase {
                required,
                actual: self.status,
            })
        }
    }

    /// Start play: PreGame becomes InGame with Side::One on move.
    pub fn begin(&mut self) -> EngineResult<()> {
        self.expect_status(Status::PreGame)?;
        self.status = Status::InGame;
        self.player_to_move = Side::One;
        Ok(())
    }

    /// End the game unconditionally, recording `winner` (or a no-contest
    /// when `None`). Used by the quit path; elimination wins are detected
    /// inside [`GameState::apply`].
    pub fn conclude(&mut self, winner: Option<Player>) {
        self.status = Status::EndGame;
        self.pending_jump = None;
        self.winner = winner;
    }

    /// Apply a request for the player currently on move.
    ///
    /// The caller is responsible for having resolved the acting player's
    /// identity to the turn owner; everything else — phase, selection,
    /// legality, chain discipline — is validated here against board truth.
    pub fn apply(&mut self, request: &MoveRequest) -> EngineResult<MoveOutcome> {
        self.expect_status(Status::InGame)?;
        match *request {
            MoveRequest::SwitchPlayer => self.decline_chain(),
            MoveRequest::Piece { from, to, capture } => self.apply_piece_move(from, to, capture),
        }
    }

    /// Voluntarily end an open jump chain.
    fn decline_chain(&mut self) -> EngineResult<MoveOutcome> {
        let at = self.pending_jump.ok_or(GameError::NoOpenJumpChain)?;
        if self.rules.mandatory_capture {
            // A chain is only open while further jumps exist, so strict
            // capture never lets it be declined.
            return Err(GameError::ContinuationRequired { at });
        }
        self.pending_jump = None;
        self.last_move = None;
        self.player_to_move = self.player_to_move.opponent();
        Ok(MoveOutcome::TurnEnded)
    }

    fn apply_piece_move(
        &mut self,
        from: Square,
        to: Square,
        capture: Option<Square>,
    ) -> EngineResult<MoveOutcome> {
        let mover = self.player_to_move;

        // While a chain is open, only the chain piece may act, and only
        // by jumping.
        if let Some(at) = self.pending_jump {
            if from != at {
                return Err(GameError::ContinuationRequired { at });
            }
        }
        let piece = match self.board.piece_at(from) {
            Some(piece) if piece.owner == mover => piece,
            _ => {
                return Err(GameError::IllegalSelection {
                    square: from,
                    side: mover,
                })
            }
        };
        let options = if self.pending_jump.is_some() {
            jump_moves(&self.board, from, piece)
        } else {
            legal_moves(&self.board, from, mover, &self.rules)?
        };
        let chosen = options
            .iter()
            .find(|option| option.destination == to && option.capture == capture)
            .copied()
            .ok_or(GameError::IllegalMove {
                origin: from,
                destination: to,
            })?;

        // Validation is complete; mutate.
        self.board.take(from);
        let kind = if let Some(captured) = chosen.capture {
            self.board.take(captured);
            self.remaining[mover.opponent()] -= 1;
            MoveKind::Jump
        } else {
            MoveKind::Regular
        };

        let rank = if piece.is_king() || to.row == mover.crown_row() {
            Rank::King
        } else {
            Rank::Man
        };
        let placed = Piece { owner: mover, rank };
        self.board.place(to, placed);
        self.last_move = Some(MoveRecord {
            kind,
            piece_location: to,
        });

        if self.remaining[mover.opponent()] == 0 {
            self.status = Status::EndGame;
            self.pending_jump = None;
            return Ok(MoveOutcome::Finished { winner: mover });
        }

        if kind == MoveKind::Jump && !jump_moves(&self.board, to, placed).is_empty() {
            self.pending_jump = Some(to);
            return Ok(MoveOutcome::AwaitingContinuation { at: to });
        }

        self.pending_jump = None;
        self.player_to_move = mover.opponent();
        Ok(MoveOutcome::TurnEnded)
    }
}
