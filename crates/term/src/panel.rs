//! Panel text composition.
//!
//! Maps a board snapshot into a chat-style glyph-grid panel: one glyph per
//! cell, row per line, score footer. Pure functions, no I/O.

use vote_tetris_core::Snapshot;
use vote_tetris_types::{FinalReport, EMPTY_GLYPH};

/// Render a snapshot into panel text: H glyph rows plus a score footer.
pub fn draw_panel(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    for row in &snapshot.cells {
        for cell in row {
            out.push(match cell {
                Some(tag) => tag.glyph(),
                None => EMPTY_GLYPH,
            });
        }
        out.push('\n');
    }
    out.push_str(&format!("Score: {}\n", snapshot.score));
    out
}

/// Render the end-of-game panel.
pub fn draw_report(report: &FinalReport) -> String {
    let mut out = String::from("You Lose!\n");
    out.push_str(&format!("Score: {}\n", report.score));
    out.push_str(&format!("Lines cleared: {}\n", report.lines_cleared));
    out.push_str(&format!("Blocks spawned: {}\n", report.blocks));
    if report.beat_high_score {
        out.push_str(&format!(
            "New high score! (previous: {})\n",
            report.high_score
        ));
    } else {
        out.push_str(&format!("High score: {}\n", report.high_score));
    }
    out
}
