//! The tick loop.
//!
//! One session = one engine instance, one panel, one fixed-interval timer.
//! Input is sampled, not streamed: each tick reads a single aggregated vote
//! snapshot; vote changes between samples are invisible. Cancellation is
//! coarse: when the panel reports itself closed, the session simply stops
//! issuing ticks.

use std::time::Duration;

use anyhow::Result;
use tokio::time::{interval, MissedTickBehavior};

use vote_tetris_core::{Game, GameStatus, Snapshot};
use vote_tetris_input::Ballot;
use vote_tetris_types::FinalReport;

/// The external collaborator boundary: a place where frames are shown and
/// votes are collected. Chat front-ends, terminals, and test scripts all
/// implement this.
pub trait VotePanel {
    /// One aggregated snapshot of vote state for this tick.
    fn sample(&mut self) -> Ballot;

    /// Show the post-tick board state.
    fn publish(&mut self, snapshot: &Snapshot) -> Result<()>;

    /// Show the final statistics. Called exactly once, after the last tick.
    fn report(&mut self, report: &FinalReport) -> Result<()>;

    /// Whether the panel has gone away (controller disconnected, player
    /// quit). The session stops ticking once this returns true.
    fn closed(&self) -> bool {
        false
    }
}

/// One running game session.
pub struct Session<P: VotePanel> {
    game: Game,
    panel: P,
    high_score: u32,
    tick_interval: Duration,
}

impl<P: VotePanel> Session<P> {
    pub fn new(game: Game, panel: P, high_score: u32, tick_interval: Duration) -> Self {
        Self {
            game,
            panel,
            high_score,
            tick_interval,
        }
    }

    /// The panel, e.g. to release its resources after the session ends.
    pub fn panel_mut(&mut self) -> &mut P {
        &mut self.panel
    }

    /// Drive the session to completion and return the final report.
    ///
    /// Runs until the engine reaches its terminal state or the panel
    /// closes. The report is published to the panel exactly once either
    /// way, then returned to the caller (which may decide to persist a
    /// beaten high score).
    pub async fn run(&mut self) -> Result<FinalReport> {
        let mut timer = interval(self.tick_interval);
        timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Show the starting position before the first tick fires.
        self.panel.publish(&self.game.snapshot())?;

        loop {
            timer.tick().await;
            if self.panel.closed() {
                break;
            }
            let action = self.panel.sample().resolve();
            if self.game.tick(action) == GameStatus::Over {
                break;
            }
            self.panel.publish(&self.game.snapshot())?;
        }

        let stats = self.game.stats();
        let report = FinalReport {
            score: stats.score,
            lines_cleared: stats.lines_cleared,
            blocks: stats.blocks,
            high_score: self.high_score,
            beat_high_score: stats.score > self.high_score,
        };
        self.panel.report(&report)?;
        Ok(report)
    }
}
