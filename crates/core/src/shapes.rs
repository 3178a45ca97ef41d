//! Static shape catalog.
//!
//! Each entry lists four cell positions already translated into board space
//! around the spawn column, plus the rotation pivot. Pivots are stored in
//! half-cell units (doubled coordinates) so that the O shape's fractional
//! pivot at (3.5, 0.5) stays exact integer arithmetic.

use vote_tetris_types::{ShapeKind, SPAWN_CENTER};

/// Immutable catalog entry for one shape variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    /// Cell positions at spawn, board space.
    pub cells: [(i8, i8); 4],
    /// Rotation pivot in half-cell units (board coordinate times two).
    pub pivot: (i16, i16),
}

/// Look up the catalog entry for a shape variant.
pub fn shape(kind: ShapeKind) -> Shape {
    const C: i8 = SPAWN_CENTER;
    const C2: i16 = SPAWN_CENTER as i16 * 2;

    match kind {
        ShapeKind::T => Shape {
            cells: [(C - 1, 0), (C, 0), (C + 1, 0), (C, 1)],
            pivot: (C2, 0),
        },
        ShapeKind::I => Shape {
            cells: [(C - 2, 0), (C - 1, 0), (C, 0), (C + 1, 0)],
            pivot: (C2, 0),
        },
        ShapeKind::J => Shape {
            cells: [(C - 1, 0), (C, 0), (C + 1, 0), (C + 1, 1)],
            pivot: (C2, 0),
        },
        ShapeKind::L => Shape {
            cells: [(C - 1, 0), (C, 0), (C + 1, 0), (C - 1, 1)],
            pivot: (C2, 0),
        },
        // The 2x2 footprint rotates onto itself because the pivot sits at
        // the exact center of the square, between the four cells.
        ShapeKind::O => Shape {
            cells: [(C - 1, 0), (C, 0), (C - 1, 1), (C, 1)],
            pivot: (C2 - 1, 1),
        },
    }
}
