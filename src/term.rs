use std::convert::TryFrom;
use std::io::{Stdout, Write, stdout};

use crate::position::Position;
use crate::render::Canvas;

use anyhow::{Context, Result};
use crossterm::{cursor, execute, queue, style, terminal};
use crossterm::style::Color;
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen};

/// Where the cursor is parked after each frame, below the apple area.
const CURSOR_PARK_ROW: u16 = 22;

pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Self {
        TermManager { stdout: stdout() }
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen).context("Error entering alt screen")?;
        self.set_raw_mode(true)?;
        self.set_cursor_visibility(false)
    }

    pub fn restore(&mut self) -> Result<()> {
        self.set_raw_mode(false)?;
        self.set_cursor_visibility(true)?;
        execute!(self.stdout, LeaveAlternateScreen).context("Error leaving alt screen")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn set_raw_mode(&self, option: bool) -> Result<()> {
        let res = if option {
            terminal::enable_raw_mode()
        } else {
            terminal::disable_raw_mode()
        };

        res.context("Error setting raw mode.")
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<()> {
        let res = if option {
            execute!(self.stdout, cursor::Show)
        } else {
            execute!(self.stdout, cursor::Hide)
        };

        res.context("Error setting cursor visibility.")
    }
}

impl Canvas for TermManager {
    fn clear_screen(&mut self) -> Result<()> {
        queue!(self.stdout, terminal::Clear(ClearType::All)).context("Error clearing.")
    }

    fn draw_glyph(&mut self, pos: Position, glyph: char, color: Color) -> Result<()> {
        let x = u16::try_from(pos.col).with_context(|| format!("Column out of screen: {:?}", pos))?;
        let y = u16::try_from(pos.row).with_context(|| format!("Row out of screen: {:?}", pos))?;

        queue!(
            self.stdout,
            cursor::MoveTo(x, y),
            style::SetForegroundColor(color),
            style::Print(glyph),
            style::ResetColor
        )
        .context("Error drawing.")
    }

    fn reset_cursor(&mut self) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(0, CURSOR_PARK_ROW)).context("Error moving cursor.")?;
        self.stdout.flush().context("Error flushing.")
    }
}
