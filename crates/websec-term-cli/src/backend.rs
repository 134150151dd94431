//! Crossterm-backed terminal surface.

use std::io::{self, Stdout, Write};

use crossterm::cursor::{MoveDown, MoveLeft, MoveRight, MoveTo, MoveToColumn, MoveUp};
use crossterm::event::{KeyCode, KeyEvent as CtKeyEvent, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{
    Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
    enable_raw_mode,
};
use crossterm::{execute, queue};
use log::info;

use websec_term::core::{Surface, SurfaceError};
use websec_term::models::{Directive, Key, KeyEvent, Modifiers, OutputLine, Viewport};

/// Raw mode plus alternate screen for as long as the guard lives.
pub struct RawModeGuard;

impl RawModeGuard {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        if let Err(e) = execute!(io::stdout(), EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e);
        }
        info!("Raw mode enabled");
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

pub struct CrosstermSurface {
    out: Stdout,
    viewport: Viewport,
}

impl CrosstermSurface {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            out: io::stdout(),
            viewport,
        }
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    fn queue_one(&mut self, directive: &Directive) -> io::Result<()> {
        match directive {
            Directive::Write(text) => queue!(self.out, Print(text)),
            Directive::WriteLine(line) => {
                match line {
                    OutputLine::Text(text) => queue!(self.out, Print(text))?,
                    OutputLine::Error(text) => queue!(
                        self.out,
                        SetForegroundColor(Color::Red),
                        Print(text),
                        ResetColor
                    )?,
                    OutputLine::Info(text) => queue!(
                        self.out,
                        SetForegroundColor(Color::Cyan),
                        Print(text),
                        ResetColor
                    )?,
                }
                queue!(self.out, Print("\r\n"))
            }
            Directive::Clear => queue!(self.out, Clear(ClearType::All), MoveTo(0, 0)),
            Directive::EraseDown => queue!(
                self.out,
                MoveToColumn(0),
                Clear(ClearType::FromCursorDown)
            ),
            Directive::MoveUp(n) => queue!(self.out, MoveUp(cells(*n))),
            Directive::MoveDown(n) => queue!(self.out, MoveDown(cells(*n))),
            Directive::MoveLeft(n) => queue!(self.out, MoveLeft(cells(*n))),
            Directive::MoveRight(n) => queue!(self.out, MoveRight(cells(*n))),
            Directive::MoveTo { row, col } => queue!(self.out, MoveTo(*col, *row)),
        }
    }
}

impl Surface for CrosstermSurface {
    fn apply(&mut self, directives: &[Directive]) -> Result<(), SurfaceError> {
        for directive in directives {
            self.queue_one(directive)?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

fn cells(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Ctrl+D ends the session.
pub fn is_quit(key: &CtKeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('d')
}

/// Translate a crossterm key press into an engine key event.
pub fn convert_key(key: &CtKeyEvent) -> Option<KeyEvent> {
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Tab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Null => return None,
        _ => Key::Other,
    };
    let modifiers = Modifiers {
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
        alt: key.modifiers.contains(KeyModifiers::ALT),
        meta: key.modifiers.contains(KeyModifiers::META) || key.modifiers.contains(KeyModifiers::SUPER),
    };
    Some(KeyEvent::new(code, modifiers))
}
