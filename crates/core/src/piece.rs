//! One live block cluster.
//!
//! A piece owns up to four occupied cells, a rotation pivot, and a cosmetic
//! color tag. The geometric transforms ([`Piece::fallen`], [`Piece::shifted`],
//! [`Piece::rotated`]) are pure: they return a candidate cell set and leave
//! the decision to apply it to the engine, which first validates the
//! candidate against the playfield.
//!
//! Cells may only ever shrink after construction (line clears remove them
//! one by one). A piece with zero cells is inert but keeps its slot in the
//! live sequence so indices stay stable.

use arrayvec::ArrayVec;

use vote_tetris_types::{ColorTag, RotateDir, ShapeKind};

use crate::shapes::shape;

/// Fixed-capacity candidate cell set. Pieces never have more than 4 cells,
/// so transforms never allocate.
pub type CellSet = ArrayVec<(i8, i8), 4>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    cells: CellSet,
    /// Rotation pivot in half-cell units. Never checked against the board.
    pivot: (i16, i16),
    color: ColorTag,
}

impl Piece {
    /// Instantiate a catalog shape at its spawn position.
    pub fn new(kind: ShapeKind, color: ColorTag) -> Self {
        let s = shape(kind);
        Self {
            cells: s.cells.into_iter().collect(),
            pivot: s.pivot,
            color,
        }
    }

    /// Build a piece from explicit parts. Intended for scenario fixtures
    /// and replay tooling; `pivot` is in half-cell units.
    pub fn from_parts(cells: &[(i8, i8)], pivot: (i16, i16), color: ColorTag) -> Self {
        Self {
            cells: cells.iter().copied().collect(),
            pivot,
            color,
        }
    }

    pub fn cells(&self) -> &[(i8, i8)] {
        &self.cells
    }

    pub fn color(&self) -> ColorTag {
        self.color
    }

    /// Pivot in half-cell units.
    pub fn pivot(&self) -> (i16, i16) {
        self.pivot
    }

    /// A piece whose cells have all been cleared away. Inert: it never
    /// blocks movement and never completes a row.
    pub fn is_cleared(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, x: i8, y: i8) -> bool {
        self.cells.iter().any(|&c| c == (x, y))
    }

    /// Candidate cells one row down. Pure.
    pub fn fallen(&self) -> CellSet {
        self.cells.iter().map(|&(x, y)| (x, y + 1)).collect()
    }

    /// Candidate cells shifted one column. `dx` is a unit step. Pure.
    pub fn shifted(&self, dx: i8) -> CellSet {
        self.cells.iter().map(|&(x, y)| (x + dx, y)).collect()
    }

    /// Candidate cells after a 90° rotation about the pivot. Pure.
    ///
    /// All rotations are exact quarter turns, so the rotation is the integer
    /// map `(ox, oy) -> (-oy * f, ox * f)` on pivot offsets. Offsets are in
    /// half-cell units; they carry the pivot's parity, so adding the pivot
    /// back always lands on a whole cell.
    pub fn rotated(&self, dir: RotateDir) -> CellSet {
        let f = dir.factor();
        let (px, py) = self.pivot;
        self.cells
            .iter()
            .map(|&(x, y)| {
                let ox = x as i16 * 2 - px;
                let oy = y as i16 * 2 - py;
                let rx = -oy * f + px;
                let ry = ox * f + py;
                ((rx / 2) as i8, (ry / 2) as i8)
            })
            .collect()
    }

    /// Replace the occupied cells with a validated candidate set.
    pub fn apply(&mut self, cells: CellSet) {
        self.cells = cells;
    }

    /// Translate the pivot by whole cells, keeping it in sync (or
    /// deliberately out of sync, see the engine) with cell movement.
    pub fn recenter(&mut self, dx: i8, dy: i8) {
        self.pivot.0 += dx as i16 * 2;
        self.pivot.1 += dy as i16 * 2;
    }

    /// Remove every cell lying in one of the given rows.
    pub fn remove_rows(&mut self, rows: &[i8]) {
        self.cells.retain(|&mut (_, y)| !rows.contains(&y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(cells: &[(i8, i8)]) -> Vec<(i8, i8)> {
        let mut v = cells.to_vec();
        v.sort_unstable();
        v
    }

    #[test]
    fn test_fallen_is_pure() {
        let piece = Piece::new(ShapeKind::T, ColorTag::Blue);
        let before = piece.cells().to_vec();
        let candidate = piece.fallen();
        assert_eq!(piece.cells(), &before[..]);
        for (i, &(x, y)) in candidate.iter().enumerate() {
            assert_eq!((x, y), (before[i].0, before[i].1 + 1));
        }
    }

    #[test]
    fn test_shifted_moves_x_only() {
        let piece = Piece::new(ShapeKind::I, ColorTag::Red);
        let left = piece.shifted(-1);
        for (i, &(x, y)) in left.iter().enumerate() {
            assert_eq!((x, y), (piece.cells()[i].0 - 1, piece.cells()[i].1));
        }
    }

    #[test]
    fn test_four_rotations_restore_cells() {
        for kind in ShapeKind::ALL {
            for dir in [RotateDir::Ccw, RotateDir::Cw] {
                let mut piece = Piece::new(kind, ColorTag::Green);
                let original = sorted(piece.cells());
                for _ in 0..4 {
                    let next = piece.rotated(dir);
                    piece.apply(next);
                }
                assert_eq!(sorted(piece.cells()), original, "{:?} {:?}", kind, dir);
            }
        }
    }

    #[test]
    fn test_o_shape_rotation_is_identity() {
        let piece = Piece::new(ShapeKind::O, ColorTag::Purple);
        let original = sorted(piece.cells());
        assert_eq!(sorted(&piece.rotated(RotateDir::Cw)), original);
        assert_eq!(sorted(&piece.rotated(RotateDir::Ccw)), original);
    }

    #[test]
    fn test_rotation_tracks_recentered_pivot() {
        let mut piece = Piece::new(ShapeKind::T, ColorTag::Blue);
        let shifted = piece.shifted(1);
        piece.apply(shifted);
        piece.recenter(1, 0);

        // Rotating twice about the moved pivot must mirror cells through it.
        let mut twice = piece.clone();
        for _ in 0..2 {
            let next = twice.rotated(RotateDir::Cw);
            twice.apply(next);
        }
        let (px, py) = piece.pivot();
        let expected: Vec<(i8, i8)> = piece
            .cells()
            .iter()
            .map(|&(x, y)| {
                (
                    ((px - (x as i16 * 2 - px)) / 2) as i8,
                    ((py - (y as i16 * 2 - py)) / 2) as i8,
                )
            })
            .collect();
        assert_eq!(sorted(twice.cells()), sorted(&expected));
    }

    #[test]
    fn test_remove_rows_shrinks_never_grows() {
        let mut piece = Piece::new(ShapeKind::L, ColorTag::Red);
        piece.remove_rows(&[1]);
        assert_eq!(piece.cells().len(), 3);
        piece.remove_rows(&[1]);
        assert_eq!(piece.cells().len(), 3);
        piece.remove_rows(&[0]);
        assert!(piece.is_cleared());
    }
}
