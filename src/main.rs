//! Local terminal runner (default binary).
//!
//! A single-voter session: keypresses during each one-second tick window are
//! counted as votes, aggregated exactly like a crowd ballot, and resolved
//! into one action per tick. Useful for playing locally and for exercising
//! the full session plumbing without a chat front-end.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use vote_tetris::core::{Game, Snapshot};
use vote_tetris::input::{should_quit, vote_for_key, Ballot};
use vote_tetris::session::{HighScoreStore, Session, VotePanel};
use vote_tetris::term::TerminalRenderer;
use vote_tetris::types::{FinalReport, TICK_INTERVAL_MS};

/// Panel backed by the local terminal: one keyboard, one voter.
struct TerminalPanel {
    term: TerminalRenderer,
    quit: bool,
}

impl TerminalPanel {
    fn new(term: TerminalRenderer) -> Self {
        Self { term, quit: false }
    }

    /// Drain key events buffered since the last tick; each press is one vote.
    fn drain_votes(&mut self) -> Ballot {
        let mut ballot = Ballot::default();
        while event::poll(Duration::from_millis(0)).unwrap_or(false) {
            if let Ok(Event::Key(key)) = event::read() {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if should_quit(key) {
                    self.quit = true;
                    continue;
                }
                if let Some(kind) = vote_for_key(key) {
                    ballot.cast(kind);
                }
            }
        }
        ballot
    }
}

impl VotePanel for TerminalPanel {
    fn sample(&mut self) -> Ballot {
        self.drain_votes()
    }

    fn publish(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.term.draw(snapshot)
    }

    fn report(&mut self, report: &FinalReport) -> Result<()> {
        self.term.draw_final(report)
    }

    fn closed(&self) -> bool {
        self.quit
    }
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn high_score_path() -> String {
    std::env::var("VOTE_TETRIS_HIGHSCORE").unwrap_or_else(|_| "high_score.json".into())
}

#[tokio::main]
async fn main() -> Result<()> {
    let store = HighScoreStore::new(high_score_path());
    let high_score = store.load();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let game = Game::new(time_seed());
    let panel = TerminalPanel::new(term);
    let mut session = Session::new(
        game,
        panel,
        high_score,
        Duration::from_millis(TICK_INTERVAL_MS),
    );

    let result = session.run().await;

    if result.is_ok() && !session.panel_mut().closed() {
        // Leave the final panel up until a key is pressed.
        let _ = event::read();
    }

    // Always try to restore terminal state.
    let _ = session.panel_mut().term.exit();

    let report = result?;
    if report.beat_high_score {
        store.save(report.score)?;
    }
    println!(
        "Final score: {} (lines: {}, blocks: {})",
        report.score, report.lines_cleared, report.blocks
    );
    Ok(())
}
