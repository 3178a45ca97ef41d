//! Derived occupancy and validity queries.
//!
//! There is no stored grid: the playfield is a read-only view computed on
//! demand over the live piece sequence. Occupancy of a cell is the *first*
//! piece in sequence order containing it. Cells normally never overlap, but
//! the first-match rule keeps the query well-defined when they do.

use vote_tetris_types::{BOARD_HEIGHT, BOARD_WIDTH, Cell};

use crate::piece::Piece;

/// Borrowed view over the live pieces.
#[derive(Debug, Clone, Copy)]
pub struct Playfield<'a> {
    pieces: &'a [Piece],
}

impl<'a> Playfield<'a> {
    pub fn new(pieces: &'a [Piece]) -> Self {
        Self { pieces }
    }

    /// Index of the first piece occupying `(x, y)`, if any.
    pub fn occupant_at(&self, x: i8, y: i8) -> Option<usize> {
        self.pieces.iter().position(|p| p.contains(x, y))
    }

    /// Color of the occupant of `(x, y)`, for render projections.
    pub fn color_at(&self, x: i8, y: i8) -> Cell {
        self.occupant_at(x, y).map(|i| self.pieces[i].color())
    }

    /// Whether the piece at `piece_index` may occupy `candidate`.
    ///
    /// Fails if any cell leaves the board horizontally or passes the floor.
    /// There is no upper bound: cells above the visible area (y < 0) are
    /// legal while a piece spawns or rotates near the top. Cells occupied
    /// by the piece itself are always permitted, which is what makes
    /// pre-mutation rotation and shift checks work.
    pub fn is_valid(&self, piece_index: usize, candidate: &[(i8, i8)]) -> bool {
        candidate.iter().all(|&(x, y)| {
            if x < 0 || x >= BOARD_WIDTH || y >= BOARD_HEIGHT {
                return false;
            }
            match self.occupant_at(x, y) {
                Some(i) => i == piece_index,
                None => true,
            }
        })
    }
}
