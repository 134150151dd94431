//! Terminal-related data types for output rendering.

use crate::config::{DEFAULT_COLS, DEFAULT_ROWS};

/// A single line of command output.
///
/// The variant only affects styling on surfaces that support colour; the
/// text is what gets written.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputLine {
    /// Plain text output
    Text(String),
    /// Error message (red on colour surfaces)
    Error(String),
    /// Informational banner or status (yellow on colour surfaces)
    Info(String),
}

impl OutputLine {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn error(s: impl Into<String>) -> Self {
        Self::Error(s.into())
    }

    pub fn info(s: impl Into<String>) -> Self {
        Self::Info(s.into())
    }

    /// An empty line, used to terminate the row the cursor is on.
    pub fn empty() -> Self {
        Self::Text(String::new())
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Error(s) | Self::Info(s) => s,
        }
    }
}

/// A rendering instruction sent to a terminal surface.
///
/// The engine never draws directly. Every keystroke produces one batch of
/// directives which the surface applies as a unit, so observers never see a
/// half-drawn line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Write text at the cursor, wrapping at the right margin.
    Write(String),
    /// Write a line of output followed by a line break.
    WriteLine(OutputLine),
    /// Clear the whole screen and home the cursor.
    Clear,
    /// Erase the cursor row and every row below it, then return to the
    /// first column.
    EraseDown,
    /// Move the cursor up, stopping at the top row.
    MoveUp(usize),
    /// Move the cursor down, stopping at the bottom row.
    MoveDown(usize),
    /// Move the cursor left, stopping at the first column.
    MoveLeft(usize),
    /// Move the cursor right, stopping at the last column.
    MoveRight(usize),
    /// Move the cursor to an absolute, zero-based cell.
    MoveTo { row: u16, col: u16 },
}

impl Directive {
    pub fn write(s: impl Into<String>) -> Self {
        Self::Write(s.into())
    }

    /// A bare line break.
    pub fn newline() -> Self {
        Self::WriteLine(OutputLine::empty())
    }
}

/// Visible size of a terminal surface in character cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub rows: u16,
    pub cols: u16,
}

impl Viewport {
    /// Creates a viewport, clamping both dimensions to at least one cell.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows: rows.max(1),
            cols: cols.max(1),
        }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_line_constructors() {
        assert_eq!(OutputLine::text("hello"), OutputLine::Text("hello".to_string()));
        assert_eq!(OutputLine::error("boom"), OutputLine::Error("boom".to_string()));
        assert_eq!(OutputLine::info("note"), OutputLine::Info("note".to_string()));
        assert_eq!(OutputLine::empty().as_str(), "");
    }

    #[test]
    fn test_output_line_as_str() {
        assert_eq!(OutputLine::error("ls: nope").as_str(), "ls: nope");
    }

    #[test]
    fn test_viewport_clamps_to_one_cell() {
        assert_eq!(Viewport::new(0, 0), Viewport { rows: 1, cols: 1 });
        assert_eq!(Viewport::default(), Viewport { rows: 24, cols: 80 });
    }

    #[test]
    fn test_newline_directive() {
        assert_eq!(
            Directive::newline(),
            Directive::WriteLine(OutputLine::Text(String::new()))
        );
    }
}
