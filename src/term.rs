use std::io::{stdout, Stdout, Write};
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyEvent};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue, style, Result};

use crate::{Coords, GridInt};

pub struct TermManager {
    width: GridInt,
    height: GridInt,
    stdout: Stdout,
}

impl TermManager {
    pub fn new() -> Result<Self> {
        let (width, height) = terminal::size()?;
        Ok(TermManager {
            width: width as GridInt,
            height: height as GridInt,
            stdout: stdout(),
        })
    }

    /// (width, height) of the terminal at startup.
    pub fn size(&self) -> (GridInt, GridInt) {
        (self.width, self.height)
    }

    pub fn setup(&mut self) -> Result<()> {
        execute!(self.stdout, EnterAlternateScreen, cursor::Hide, cursor::DisableBlinking)?;
        terminal::enable_raw_mode()
    }

    pub fn restore(&mut self) -> Result<()> {
        terminal::disable_raw_mode()?;
        execute!(self.stdout, cursor::EnableBlinking, cursor::Show, LeaveAlternateScreen)
    }

    pub fn clear(&mut self) -> Result<()> {
        execute!(self.stdout, terminal::Clear(ClearType::All))
    }

    /// Waits up to `timeout` for a single key event. `None` just means no
    /// key arrived within the tick, which is the common case.
    pub fn poll_key(&mut self, timeout: Duration) -> Result<Option<KeyEvent>> {
        if poll(timeout)? {
            if let Event::Key(ev) = read()? {
                return Ok(Some(ev));
            }
        }
        Ok(None)
    }

    pub fn read_key_blocking(&mut self) -> Result<KeyEvent> {
        loop {
            if let Event::Key(ev) = read()? {
                return Ok(ev);
            }
        }
    }

    pub fn print_at(&mut self, pos: Coords, ch: char) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.1 as u16, pos.0 as u16), style::Print(ch))
    }

    pub fn print_text_at(&mut self, pos: Coords, text: &str) -> Result<()> {
        queue!(self.stdout, cursor::MoveTo(pos.1 as u16, pos.0 as u16), style::Print(text))
    }

    /// Paints the wall ring around the playfield.
    pub fn draw_borders(&mut self, height: GridInt, width: GridInt) -> Result<()> {
        for col in 0..width {
            self.print_at((0, col), '-')?;
            self.print_at((height - 1, col), '_')?;
        }
        for row in 0..height {
            self.print_at((row, 0), '|')?;
            self.print_at((row, width - 1), '|')?;
        }
        self.flush()
    }

    /// Centered boxed message over whatever is on screen.
    pub fn show_message(&mut self, lines: &[&str]) -> Result<()> {
        let msg_width = lines.iter().map(|l| l.len()).max().unwrap_or(0) + 2;
        let msg_height = lines.len() as GridInt + 2;
        let top = (self.height - msg_height) / 2;
        let left = (self.width - msg_width as GridInt) / 2;

        let blank = " ".repeat(msg_width);
        self.print_text_at((top, left), &blank)?;
        self.print_text_at((top + msg_height - 1, left), &blank)?;

        for (i, line) in lines.iter().enumerate() {
            let padded = format!("{line: ^width$}", line = line, width = msg_width);
            self.print_text_at((top + 1 + i as GridInt, left), &padded)?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<()> {
        self.stdout.flush()?;
        Ok(())
    }
}
