//! TerminalRenderer: flushes panels to a real terminal.
//!
//! Full redraw per frame. At one simulation step per second there is no
//! need for diffing; the drawing API stays small.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor},
    terminal, QueueableCommand,
};

use vote_tetris_core::Snapshot;
use vote_tetris_types::{ColorTag, FinalReport};

use crate::panel::draw_report;

/// Terminal cell width per board column. 2:1 compensates for the typical
/// glyph aspect ratio.
const CELL_COLUMNS: u16 = 2;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw a board snapshot with a score footer and key legend.
    pub fn draw(&mut self, snapshot: &Snapshot) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        for (y, row) in snapshot.cells.iter().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            for cell in row {
                self.stdout.queue(SetBackgroundColor(cell_color(*cell)))?;
                for _ in 0..CELL_COLUMNS {
                    self.stdout.queue(Print(' '))?;
                }
            }
            self.stdout.queue(ResetColor)?;
        }

        let footer_y = snapshot.cells.len() as u16;
        self.stdout.queue(cursor::MoveTo(0, footer_y))?;
        self.stdout
            .queue(Print(format!("Score: {}", snapshot.score)))?;
        self.stdout.queue(cursor::MoveTo(0, footer_y + 1))?;
        self.stdout.queue(Print(
            "arrows/a/d move (A/D x2)  z/x rotate  space drop  q quit",
        ))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Draw the end-of-game panel.
    pub fn draw_final(&mut self, report: &FinalReport) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        for (y, line) in draw_report(report).lines().enumerate() {
            self.stdout.queue(cursor::MoveTo(0, y as u16))?;
            self.stdout.queue(Print(line))?;
        }
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn cell_color(cell: Option<ColorTag>) -> Color {
    match cell {
        Some(ColorTag::Blue) => Color::Blue,
        Some(ColorTag::Green) => Color::Green,
        Some(ColorTag::Purple) => Color::Magenta,
        Some(ColorTag::Red) => Color::Red,
        None => Color::Black,
    }
}
