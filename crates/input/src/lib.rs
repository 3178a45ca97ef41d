//! Input aggregation (engine-facing).
//!
//! Converts a point-in-time snapshot of vote counts into the single action
//! the engine applies that tick. Aggregation is a pure function: no event
//! subscriptions, no queuing. Vote changes between samples are invisible.
//!
//! Also maps `crossterm` key events onto vote signals for the local
//! terminal runner, where each keypress counts as one vote.

pub mod map;

pub use vote_tetris_types as types;

pub use map::{should_quit, vote_for_key};

use vote_tetris_types::{ResolvedAction, RotateDir, VoteKind};

/// One tick's aggregated vote counts across the seven signals.
///
/// Counts are already normalized by the boundary that collected them (a
/// chat front-end subtracts its own seed reaction); the resolver treats any
/// nonzero count as a satisfied signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ballot {
    pub left2: u32,
    pub left1: u32,
    pub rotate_ccw: u32,
    pub rotate_cw: u32,
    pub right1: u32,
    pub right2: u32,
    pub hard_drop: u32,
}

impl Ballot {
    /// Register one vote for a signal.
    pub fn cast(&mut self, kind: VoteKind) {
        let slot = match kind {
            VoteKind::Left2 => &mut self.left2,
            VoteKind::Left1 => &mut self.left1,
            VoteKind::RotateCcw => &mut self.rotate_ccw,
            VoteKind::RotateCw => &mut self.rotate_cw,
            VoteKind::Right1 => &mut self.right1,
            VoteKind::Right2 => &mut self.right2,
            VoteKind::HardDrop => &mut self.hard_drop,
        };
        *slot = slot.saturating_add(1);
    }

    /// Resolve the ballot into at most one horizontal magnitude, one
    /// rotation, and an independent hard-drop flag.
    ///
    /// Precedence is fixed: for movement, the first satisfied signal in the
    /// order left-2, left-1, right-1, right-2 wins; for rotation, ccw is
    /// checked before cw. Vote counts beyond "satisfied" carry no weight.
    pub fn resolve(&self) -> ResolvedAction {
        let shift = if self.left2 > 0 {
            -2
        } else if self.left1 > 0 {
            -1
        } else if self.right1 > 0 {
            1
        } else if self.right2 > 0 {
            2
        } else {
            0
        };

        let rotation = if self.rotate_ccw > 0 {
            Some(RotateDir::Ccw)
        } else if self.rotate_cw > 0 {
            Some(RotateDir::Cw)
        } else {
            None
        };

        ResolvedAction {
            shift,
            rotation,
            hard_drop: self.hard_drop > 0,
        }
    }
}
