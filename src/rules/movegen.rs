//! Legal-move generation for the piece on a single square.
//!
//! All functions here are pure: they read the board and return options,
//! never mutating anything. The state machine re-derives legality from
//! these same functions when a move is submitted, so a client that
//! pre-filters with them cannot widen what the server accepts.
//!
//! A man looks only toward its owner's forward direction; a king looks
//! both ways. Jumps land two squares out over an adjacent opponent piece
//! of either rank.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Board, Piece, Rank, Side, Square};
use crate::error::GameError;
use crate::rules::RuleSet;

/// A generated destination for a selected piece.
///
/// `capture` is set for jumps and names the square whose piece is removed.
/// Options are consumed immediately (highlighting, validation) and never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOption {
    pub destination: Square,
    pub capture: Option<Square>,
}

impl MoveOption {
    #[must_use]
    pub const fn is_jump(self) -> bool {
        self.capture.is_some()
    }
}

/// Generated options for one piece.
///
/// A king has at most four jump and four regular candidates, so the inline
/// capacity covers every possible result without heap allocation.
pub type MoveList = SmallVec<[MoveOption; 8]>;

/// Row directions a piece may travel: forward only for a man, both for a
/// king.
fn row_directions(piece: Piece) -> &'static [i8] {
    static BOTH: [i8; 2] = [-1, 1];
    match (piece.rank, piece.owner) {
        (Rank::King, _) => &BOTH,
        (Rank::Man, Side::One) => &BOTH[..1],
        (Rank::Man, Side::Two) => &BOTH[1..],
    }
}

/// Every legal jump for `piece` standing on `from`.
///
/// A jump in row direction `dr` is legal iff the landing square two steps
/// out is on the board and empty, and the square leapt over holds an
/// opponent piece (man or king).
#[must_use]
pub fn jump_moves(board: &Board, from: Square, piece: Piece) -> MoveList {
    let mut moves = MoveList::new();
    for &dr in row_directions(piece) {
        for dc in [-1i8, 1] {
            let Some(over) = from.offset(dr, dc) else {
                continue;
            };
            let Some(landing) = from.offset(2 * dr, 2 * dc) else {
                continue;
            };
            let leapt_opponent = board
                .piece_at(over)
                .is_some_and(|p| p.owner == piece.owner.opponent());
            if leapt_opponent && board.is_empty(landing) {
                moves.push(MoveOption {
                    destination: landing,
                    capture: Some(over),
                });
            }
        }
    }
    moves
}

/// Every legal non-capturing step for `piece` standing on `from`.
#[must_use]
pub fn regular_moves(board: &Board, from: Square, piece: Piece) -> MoveList {
    let mut moves = MoveList::new();
    for &dr in row_directions(piece) {
        for dc in [-1i8, 1] {
            if let Some(destination) = from.offset(dr, dc) {
                if board.is_empty(destination) {
                    moves.push(MoveOption {
                        destination,
                        capture: None,
                    });
                }
            }
        }
    }
    moves
}

/// All options for the piece at `from`, as the acting `side` may play them.
///
/// Fails with [`GameError::IllegalSelection`] unless `from` holds a piece
/// owned by `side`. Under mandatory capture, a piece that can jump is
/// offered only its jumps; otherwise jumps are listed before regular
/// steps.
pub fn legal_moves(
    board: &Board,
    from: Square,
    side: Side,
    rules: &RuleSet,
) -> Result<MoveList, GameError> {
    let piece = match board.piece_at(from) {
        Some(piece) if piece.owner == side => piece,
        _ => return Err(GameError::IllegalSelection { square: from, side }),
    };

    let mut moves = jump_moves(board, from, piece);
    if moves.is_empty() || !rules.mandatory_capture {
        moves.extend(regular_moves(board, from, piece));
    }
    Ok(moves)
}
