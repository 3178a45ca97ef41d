//! Key mapping from terminal events to vote signals.
//!
//! Used by the local single-voter runner, where each keypress during a tick
//! window counts as one vote on the corresponding signal.

use crate::types::VoteKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a vote signal.
pub fn vote_for_key(key: KeyEvent) -> Option<VoteKind> {
    match key.code {
        // Movement: plain keys vote one cell, uppercase variants two.
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Some(VoteKind::Left1),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Some(VoteKind::Right1),
        KeyCode::Char('A') | KeyCode::Char('H') => Some(VoteKind::Left2),
        KeyCode::Char('D') | KeyCode::Char('L') => Some(VoteKind::Right2),

        // Rotation
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(VoteKind::RotateCcw),
        KeyCode::Up | KeyCode::Char('x') | KeyCode::Char('X') => Some(VoteKind::RotateCw),

        // Hard drop
        KeyCode::Char(' ') | KeyCode::Down => Some(VoteKind::HardDrop),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
