use std::io::Write;

use crossterm::{
    cursor,
    event::{self, Event as CrossTermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style, terminal, ExecutableCommand, QueueableCommand,
};

use super::colors::tile_colors;
use super::error::{InnerError, Result, TuiError};
use super::events::{Event, EventSource, UserInput};
use super::renderer::{cell_text, grid_lines, Renderer, GREETING};
use crate::engine::grid::{Direction, Grid};
use crate::engine::row::Cell;

/// Raw mode turns "\n" into a bare line feed, so every line ends with an explicit carriage return.
const NEWLINE: &str = "\r\n";

pub(crate) struct Crossterm<T: Write> {
    w: Box<T>,
    colors: bool,
}

impl<T: Write> Crossterm<T> {
    pub(crate) fn new(w: Box<T>, colors: bool) -> Result<Self> {
        terminal::enable_raw_mode()?;
        Self::attach(w, colors)
    }

    /// Take over w once raw mode is on. The terminal is restored by Drop, including when
    /// preparing w fails.
    fn attach(w: Box<T>, colors: bool) -> Result<Self> {
        let mut crossterm = Self { w, colors };
        crossterm.w.execute(cursor::Hide)?;
        Ok(crossterm)
    }
}

impl<T: Write> Drop for Crossterm<T> {
    fn drop(&mut self) {
        if let Err(e) = self.w.execute(cursor::Show) {
            log::warn!("showing cursor: {}", e);
        }
        if let Err(e) = terminal::disable_raw_mode() {
            log::warn!("disabling raw mode: {}", e);
        }
    }
}

impl<T: Write> Renderer for Crossterm<T> {
    fn clear(&mut self) -> Result<()> {
        self.w.queue(terminal::Clear(terminal::ClearType::All))?;
        self.w.queue(cursor::MoveTo(0, 0))?;
        self.w.flush()?;
        Ok(())
    }

    fn greet(&mut self) -> Result<()> {
        for line in GREETING {
            self.w.queue(style::Print(line))?;
            self.w.queue(style::Print(NEWLINE))?;
        }
        self.w.flush()?;
        Ok(())
    }

    fn render(&mut self, grid: &Grid) -> Result<()> {
        for line in grid_lines(grid) {
            for value in line {
                self.queue_cell(*value)?;
            }
            self.w.queue(style::Print(NEWLINE))?;
        }
        self.w.flush()?;
        Ok(())
    }
}

impl<T: Write> Crossterm<T> {
    fn queue_cell(&mut self, value: Cell) -> Result<()> {
        match tile_colors(value).filter(|_| self.colors) {
            Some(colors) => {
                self.w.queue(style::SetBackgroundColor(colors.background))?;
                self.w.queue(style::SetForegroundColor(colors.foreground))?;
                self.w.queue(style::Print(cell_text(value)))?;
                self.w.queue(style::ResetColor)?;
            }
            None => {
                self.w.queue(style::Print(cell_text(value)))?;
            }
        }
        Ok(())
    }
}

/// CrosstermEvents reads keys from the terminal crossterm put into raw mode.
#[derive(Default)]
pub(crate) struct CrosstermEvents;

impl EventSource for CrosstermEvents {
    /// Block until the next Crossterm event.
    fn next_event(&self) -> Result<Event> {
        loop {
            match event::read().map_err(read_error)? {
                CrossTermEvent::Key(ke) => match handle_key_event(ke) {
                    Some(ui) => return Ok(Event::UserInput(ui)),
                    None => continue,
                },
                CrossTermEvent::Resize(_, _) => return Ok(Event::Resize),
                _ => continue,
            };
        }
    }
}

/// An exhausted input stream ends the session as InputClosed.
fn read_error(e: std::io::Error) -> TuiError {
    match e.kind() {
        std::io::ErrorKind::UnexpectedEof => InnerError::InputClosed.into(),
        _ => e.into(),
    }
}

fn handle_key_event(ke: KeyEvent) -> Option<UserInput> {
    if ke.kind == KeyEventKind::Release {
        return None;
    }
    match ke {
        // raw mode swallows SIGINT
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            ..
        } if modifiers.contains(KeyModifiers::CONTROL) => Some(UserInput::Quit),
        KeyEvent { code, .. } => match code {
            KeyCode::Left => Some(UserInput::Direction(Direction::Left)),
            KeyCode::Right => Some(UserInput::Direction(Direction::Right)),
            KeyCode::Up => Some(UserInput::Direction(Direction::Up)),
            KeyCode::Down => Some(UserInput::Direction(Direction::Down)),
            KeyCode::Char(c) => Some(UserInput::from(c)),
            _ => Some(UserInput::Ignored),
        },
    }
}
