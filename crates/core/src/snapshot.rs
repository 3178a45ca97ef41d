//! Read-only board projection for renderers.
//!
//! Captures the derived W x H occupancy grid (first match in piece order
//! wins) together with the current score. Renderers consume this instead of
//! touching engine state.

use vote_tetris_types::{BOARD_HEIGHT, BOARD_WIDTH, Cell};

use crate::game::Game;
use crate::playfield::Playfield;

/// One rendered frame's worth of board state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    /// Row-major occupancy grid: `cells[y][x]`.
    pub cells: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub score: u32,
}

impl Snapshot {
    /// Project the live piece sequence onto a grid. Pure read.
    pub fn capture(game: &Game) -> Self {
        let field = Playfield::new(game.pieces());
        let mut cells = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        for (y, row) in cells.iter_mut().enumerate() {
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = field.color_at(x as i8, y as i8);
            }
        }
        Self {
            cells,
            score: game.stats().score,
        }
    }
}

impl Game {
    /// Convenience projection used by the render boundary after each tick.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;
    use vote_tetris_types::ColorTag;

    #[test]
    fn test_snapshot_projects_occupancy() {
        let a = Piece::from_parts(&[(0, 0), (1, 0)], (0, 0), ColorTag::Blue);
        let b = Piece::from_parts(&[(1, 0), (2, 0)], (0, 0), ColorTag::Red);
        let game = Game::from_pieces(vec![a, b], 1);

        let snap = game.snapshot();
        assert_eq!(snap.cells[0][0], Some(ColorTag::Blue));
        // Overlap: first piece in sequence order wins.
        assert_eq!(snap.cells[0][1], Some(ColorTag::Blue));
        assert_eq!(snap.cells[0][2], Some(ColorTag::Red));
        assert_eq!(snap.cells[0][3], None);
        assert_eq!(snap.score, 0);
    }

    #[test]
    fn test_snapshot_does_not_mutate() {
        let mut game = Game::new(11);
        let before = game.pieces().to_vec();
        let _ = game.snapshot();
        let _ = game.snapshot();
        assert_eq!(game.pieces(), &before[..]);
        game.tick(Default::default());
        assert_eq!(game.snapshot().score, game.stats().score);
    }
}
