//! Render adapter: board snapshots to text panels and the terminal.
//!
//! This crate owns no simulation state. [`panel`] is pure text composition
//! (unit-testable); [`renderer`] flushes composed panels to a real terminal
//! through crossterm.

pub mod panel;
pub mod renderer;

pub use vote_tetris_core as core;
pub use vote_tetris_types as types;

pub use panel::{draw_panel, draw_report};
pub use renderer::TerminalRenderer;
