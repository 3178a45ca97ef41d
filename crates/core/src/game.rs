//! The per-tick simulation engine.
//!
//! The engine owns the ordered live piece sequence. Only the last piece is
//! "controlled" (receives the resolved player action); every piece, settled
//! or not, is subject to gravity each tick. Pieces are never merged into a
//! stack: they stay distinct objects that can fragment cell-by-cell as
//! lines clear.
//!
//! The step order inside [`Game::tick`] is load-bearing: spawn resolution,
//! spawn scheduling, line detection and clearing, gravity, hard drop,
//! rotation, horizontal shift. Reordering changes observable game behavior.

use arrayvec::ArrayVec;

use vote_tetris_types::{
    BOARD_HEIGHT, BOARD_WIDTH, GRAVITY_SCORE, LINE_SCORE, ResolvedAction, RotateDir, Stats,
};

use crate::piece::Piece;
use crate::playfield::Playfield;
use crate::rng::SimpleRng;

/// Whether the simulation still accepts ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Running,
    /// Terminal: a newly spawned piece collided with existing occupancy.
    Over,
}

/// One voted falling-block simulation.
#[derive(Debug, Clone)]
pub struct Game {
    /// Append-only live piece sequence; the last element is controlled.
    pieces: Vec<Piece>,
    stats: Stats,
    /// One-tick buffer between a piece settling and its successor spawning,
    /// so voters get a final nudge in.
    spawn_pending: bool,
    over: bool,
    pending_shift: i8,
    pending_rotation: Option<RotateDir>,
    pending_drop: bool,
    rng: SimpleRng,
}

impl Game {
    /// Create a game with one freshly spawned piece.
    ///
    /// The initial piece does not count toward the `blocks` statistic;
    /// only pieces spawned by the tick loop do.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let first = Piece::new(rng.pick_shape(), rng.pick_color());
        Self {
            pieces: vec![first],
            stats: Stats::default(),
            spawn_pending: false,
            over: false,
            pending_shift: 0,
            pending_rotation: None,
            pending_drop: false,
            rng,
        }
    }

    /// Create a game from an explicit piece sequence, for scenario fixtures
    /// and replay tooling. The last piece becomes the controlled one.
    ///
    /// # Panics
    ///
    /// Panics if `pieces` is empty; the engine always has a controlled piece.
    pub fn from_pieces(pieces: Vec<Piece>, seed: u32) -> Self {
        assert!(!pieces.is_empty(), "engine requires a controlled piece");
        Self {
            pieces,
            stats: Stats::default(),
            spawn_pending: false,
            over: false,
            pending_shift: 0,
            pending_rotation: None,
            pending_drop: false,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn stats(&self) -> Stats {
        self.stats
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Read-only view of the live piece sequence.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// Advance the simulation by one discrete step.
    ///
    /// Once the game is over this is a no-op that keeps reporting
    /// [`GameStatus::Over`].
    pub fn tick(&mut self, action: ResolvedAction) -> GameStatus {
        if self.over {
            return GameStatus::Over;
        }

        self.pending_shift = action.shift;
        self.pending_rotation = action.rotation;
        self.pending_drop = action.hard_drop;

        // 1. Spawn resolution. Loss is only ever detected here.
        if self.spawn_pending && !self.controlled_can_fall() {
            self.stats.blocks += 1;
            let piece = Piece::new(self.rng.pick_shape(), self.rng.pick_color());
            self.pieces.push(piece);
            if self.spawn_collides() {
                self.over = true;
                return GameStatus::Over;
            }
            self.spawn_pending = false;
            // The new piece does not inherit the settling piece's votes.
            self.pending_shift = 0;
            self.pending_rotation = None;
        }

        // 2. Spawn scheduling: one-tick buffer before the actual spawn.
        if !self.controlled_can_fall() {
            self.spawn_pending = true;
        }

        // 3 + 4. Line detection and clearing.
        let full = self.full_rows();
        self.clear_rows(&full);

        // 5. Gravity, every piece including the controlled one.
        self.stats.score += GRAVITY_SCORE;
        self.fall_all(true);

        // 6. Hard drop.
        if self.pending_drop {
            self.hard_drop();
            self.pending_drop = false;
        }

        // 7. Rotation: a blocked rotation is dropped, not retried.
        if let Some(dir) = self.pending_rotation.take() {
            self.rotate_controlled(dir);
        }

        // 8. Horizontal shift.
        if self.pending_shift != 0 {
            self.shift_controlled();
        }

        GameStatus::Running
    }

    fn controlled_index(&self) -> usize {
        self.pieces.len() - 1
    }

    fn controlled_can_fall(&self) -> bool {
        let idx = self.controlled_index();
        let candidate = self.pieces[idx].fallen();
        Playfield::new(&self.pieces).is_valid(idx, &candidate)
    }

    /// Whether any cell of the just-spawned controlled piece is already
    /// occupied by an earlier piece (first-match occupancy).
    fn spawn_collides(&self) -> bool {
        let idx = self.controlled_index();
        let field = Playfield::new(&self.pieces);
        self.pieces[idx]
            .cells()
            .iter()
            .any(|&(x, y)| field.occupant_at(x, y) != Some(idx))
    }

    /// Rows where every cell is occupied by a non-controlled piece.
    ///
    /// The actively falling piece never completes a line; a row only counts
    /// once the piece that filled it has settled (stopped being last).
    fn full_rows(&self) -> ArrayVec<i8, { BOARD_HEIGHT as usize }> {
        let last = self.controlled_index();
        let field = Playfield::new(&self.pieces);
        (0..BOARD_HEIGHT)
            .filter(|&y| {
                (0..BOARD_WIDTH).all(|x| matches!(field.occupant_at(x, y), Some(i) if i != last))
            })
            .collect()
    }

    /// Remove all cells in the full rows from every piece, then apply one
    /// compaction pass per cleared row.
    ///
    /// The compaction pass falls *all* non-controlled pieces uniformly,
    /// not only those above the cleared row (see DESIGN.md).
    fn clear_rows(&mut self, rows: &[i8]) {
        if rows.is_empty() {
            return;
        }
        for piece in &mut self.pieces {
            piece.remove_rows(rows);
        }
        for _ in rows {
            self.stats.lines_cleared += 1;
            self.stats.score += LINE_SCORE;
            self.fall_all(false);
        }
    }

    /// Attempt to fall every piece one cell, in sequence order. A piece
    /// moves only if the candidate is valid against the board as mutated so
    /// far; blocked pieces stay put.
    fn fall_all(&mut self, include_controlled: bool) {
        let last = self.controlled_index();
        for i in 0..self.pieces.len() {
            if !include_controlled && i == last {
                continue;
            }
            if self.pieces[i].is_cleared() {
                // An empty candidate set is vacuously valid; skipping keeps
                // the inert piece's pivot from drifting forever.
                continue;
            }
            let candidate = self.pieces[i].fallen();
            if Playfield::new(&self.pieces).is_valid(i, &candidate) {
                self.pieces[i].apply(candidate);
                self.pieces[i].recenter(0, 1);
            }
        }
    }

    /// Snap the controlled piece to its maximal reachable depth.
    ///
    /// The pivot is deliberately not recentered here (see DESIGN.md).
    fn hard_drop(&mut self) {
        let idx = self.controlled_index();
        if self.pieces[idx].is_cleared() {
            // An empty candidate set is vacuously valid; nothing to drop.
            return;
        }
        loop {
            let candidate = self.pieces[idx].fallen();
            if !Playfield::new(&self.pieces).is_valid(idx, &candidate) {
                break;
            }
            self.pieces[idx].apply(candidate);
        }
    }

    fn rotate_controlled(&mut self, dir: RotateDir) {
        let idx = self.controlled_index();
        let candidate = self.pieces[idx].rotated(dir);
        if Playfield::new(&self.pieces).is_valid(idx, &candidate) {
            self.pieces[idx].apply(candidate);
        }
    }

    /// Apply the pending horizontal magnitude as unit steps, stopping at the
    /// first blocked step. The pivot is recentered by the full magnitude up
    /// front, even if movement ends up partial (see DESIGN.md).
    fn shift_controlled(&mut self) {
        let magnitude = self.pending_shift;
        self.pending_shift = 0;
        let idx = self.controlled_index();
        self.pieces[idx].recenter(magnitude, 0);

        let unit = magnitude.signum();
        for _ in 0..magnitude.unsigned_abs() {
            let candidate = self.pieces[idx].shifted(unit);
            if !Playfield::new(&self.pieces).is_valid(idx, &candidate) {
                break;
            }
            self.pieces[idx].apply(candidate);
        }
    }
}
