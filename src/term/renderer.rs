//! TerminalRenderer: draws the board grid to a real terminal.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::core::GameState;
use crate::types::{Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal columns per board cell (2:1 compensates for glyph aspect ratio).
const CELL_W: u16 = 2;

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
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Redraw the whole frame from the board grid.
    pub fn draw(&mut self, state: &GameState) -> Result<()> {
        let (term_w, term_h) = terminal::size().unwrap_or((80, 24));

        let frame_w = BOARD_WIDTH as u16 * CELL_W + 2;
        let frame_h = BOARD_HEIGHT as u16 + 2;
        let start_x = term_w.saturating_sub(frame_w) / 2;
        let start_y = term_h.saturating_sub(frame_h) / 2;

        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;

        self.draw_border(start_x, start_y, frame_w, frame_h)?;

        for row in 0..BOARD_HEIGHT as i8 {
            self.stdout
                .queue(cursor::MoveTo(start_x + 1, start_y + 1 + row as u16))?;
            for col in 0..BOARD_WIDTH as i8 {
                match state.board().get(row, col).unwrap_or(None) {
                    Some(color) => {
                        self.stdout
                            .queue(SetForegroundColor(rgb_to_color(color)))?;
                        self.stdout.queue(Print("██"))?;
                    }
                    None => {
                        self.stdout
                            .queue(SetForegroundColor(Color::Rgb {
                                r: 70,
                                g: 70,
                                b: 80,
                            }))?;
                        self.stdout.queue(Print("· "))?;
                    }
                }
            }
        }

        self.stdout.queue(ResetColor)?;
        if state.game_over() {
            self.draw_overlay_text(start_x, start_y, frame_w, frame_h, "GAME OVER")?;
        }

        // Key help under the frame.
        self.stdout
            .queue(cursor::MoveTo(start_x, start_y + frame_h))?;
        self.stdout.queue(SetAttribute(Attribute::Dim))?;
        self.stdout
            .queue(Print("arrows move · up rotates · space drops · q quits"))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;

        self.stdout.flush()?;
        Ok(())
    }

    fn draw_border(&mut self, x: u16, y: u16, w: u16, h: u16) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(x, y))?;
        self.stdout.queue(Print('┌'))?;
        for _ in 1..w - 1 {
            self.stdout.queue(Print('─'))?;
        }
        self.stdout.queue(Print('┐'))?;

        for dy in 1..h - 1 {
            self.stdout.queue(cursor::MoveTo(x, y + dy))?;
            self.stdout.queue(Print('│'))?;
            self.stdout.queue(cursor::MoveTo(x + w - 1, y + dy))?;
            self.stdout.queue(Print('│'))?;
        }

        self.stdout.queue(cursor::MoveTo(x, y + h - 1))?;
        self.stdout.queue(Print('└'))?;
        for _ in 1..w - 1 {
            self.stdout.queue(Print('─'))?;
        }
        self.stdout.queue(Print('┘'))?;
        Ok(())
    }

    fn draw_overlay_text(&mut self, x: u16, y: u16, w: u16, h: u16, text: &str) -> Result<()> {
        let text_w = text.chars().count() as u16;
        let tx = x + w.saturating_sub(text_w) / 2;
        let ty = y + h / 2;
        self.stdout.queue(cursor::MoveTo(tx, ty))?;
        self.stdout.queue(SetAttribute(Attribute::Bold))?;
        self.stdout.queue(Print(text))?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
