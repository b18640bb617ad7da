//! The 8x8 board and the pieces on it.
//!
//! ## Coordinates
//!
//! `Square {row, col}` with both axes in `0..8`. Row 0 is Side::Two's back
//! row and Side::One's crown row; row 7 is the reverse. `Square::offset` is
//! the only way to step across the board and returns `None` past an edge.
//!
//! ## Pieces
//!
//! A piece is a structured `{owner, rank}` record. Owner and rank are
//! orthogonal everywhere: a king is still owned, a kinged opponent is still
//! capturable.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use super::player::BySide;

/// Board width and height.
pub const BOARD_SIZE: usize = 8;

/// The two seats at the board.
///
/// `Side::One` owns the pieces that start on rows 5-7 and moves toward
/// row 0; `Side::Two` starts on rows 0-2 and moves toward row 7.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    One,
    Two,
}

impl Side {
    /// Seat index (0-based), matching the room's player-list order.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Side::One => 0,
            Side::Two => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::One => Side::Two,
            Side::Two => Side::One,
        }
    }

    /// Row delta of this side's forward direction.
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Side::One => -1,
            Side::Two => 1,
        }
    }

    /// The farthest row from this side's starting region; reaching it
    /// promotes a man.
    #[must_use]
    pub const fn crown_row(self) -> u8 {
        match self {
            Side::One => 0,
            Side::Two => 7,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::One => write!(f, "player 1"),
            Side::Two => write!(f, "player 2"),
        }
    }
}

/// Promotion state of a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Rank {
    /// Moves and jumps only toward the owner's forward direction.
    Man,
    /// Moves and jumps in both row directions.
    King,
}

/// A piece on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Side,
    pub rank: Rank,
}

impl Piece {
    /// A non-promoted piece for `owner`.
    #[must_use]
    pub const fn man(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::Man,
        }
    }

    /// A promoted piece for `owner`.
    #[must_use]
    pub const fn king(owner: Side) -> Self {
        Self {
            owner,
            rank: Rank::King,
        }
    }

    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self.rank, Rank::King)
    }
}

/// A board coordinate. Both axes must be below [`BOARD_SIZE`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    /// Create a square.
    ///
    /// Panics if either axis is off the board; use [`Square::offset`] for
    /// checked stepping.
    #[must_use]
    pub fn new(row: u8, col: u8) -> Self {
        assert!(
            (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE,
            "square ({row}, {col}) is off the board"
        );
        Self { row, col }
    }

    /// Step by `(dr, dc)`, returning `None` past a board edge.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Square> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// The 8x8 grid. Each cell holds at most one piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    cells: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            cells: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// The standard opening layout: 12 men per side on the dark squares of
    /// rows 0-2 (Side::Two) and rows 5-7 (Side::One).
    #[must_use]
    pub fn opening() -> Self {
        let mut board = Self::empty();
        for row in 0..BOARD_SIZE as u8 {
            let owner = match row {
                0..=2 => Side::Two,
                5..=7 => Side::One,
                _ => continue,
            };
            for col in 0..BOARD_SIZE as u8 {
                if (row + col) % 2 == 1 {
                    board.place(Square::new(row, col), Piece::man(owner));
                }
            }
        }
        board
    }

    /// The piece at `square`, if any.
    #[must_use]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize]
    }

    /// Whether `square` holds no piece.
    #[must_use]
    pub fn is_empty(&self, square: Square) -> bool {
        self.piece_at(square).is_none()
    }

    /// Put a piece on `square`, replacing whatever was there.
    pub fn place(&mut self, square: Square, piece: Piece) {
        self.cells[square.row as usize][square.col as usize] = Some(piece);
    }

    /// Remove and return the piece at `square`.
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.cells[square.row as usize][square.col as usize].take()
    }

    /// Count the pieces of each side.
    #[must_use]
    pub fn count_pieces(&self) -> BySide<u8> {
        let mut counts = BySide::with_value(0u8);
        for row in self.cells.iter() {
            for piece in row.iter().flatten() {
                counts[piece.owner] += 1;
            }
        }
        counts
    }

    /// Iterate over every occupied square.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| {
                    (
                        Square {
                            row: row as u8,
                            col: col as u8,
                        },
                        piece,
                    )
                })
            })
        })
    }
}

impl Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, square: Square) -> &Self::Output {
        &self.cells[square.row as usize][square.col as usize]
    }
}
