//! Terminal surfaces.
//!
//! A [`Surface`] applies batches of [`Directive`]s. [`Screen`] is the
//! headless implementation: a character grid with scrollback, used by tests
//! and anything that needs to inspect what a real terminal would show.

use crate::core::error::SurfaceError;
use crate::models::{Directive, Viewport};
use crate::utils::RingBuffer;

/// Something that can display the engine's output.
pub trait Surface {
    /// Apply one batch of directives, in order.
    fn apply(&mut self, directives: &[Directive]) -> Result<(), SurfaceError>;

    /// Current size in character cells.
    fn viewport(&self) -> Viewport;
}

/// Headless character grid.
///
/// Wrapping is deferred like on a VT100: writing the last column leaves the
/// cursor there and the wrap happens on the next printable character.
#[derive(Clone, Debug)]
pub struct Screen {
    viewport: Viewport,
    grid: Vec<Vec<char>>,
    row: usize,
    col: usize,
    pending_wrap: bool,
    scrollback: RingBuffer<String>,
}

impl Screen {
    pub fn new(viewport: Viewport, scrollback: usize) -> Self {
        Self {
            viewport,
            grid: blank_grid(viewport),
            row: 0,
            col: 0,
            pending_wrap: false,
            scrollback: RingBuffer::new(scrollback),
        }
    }

    /// Text of visible row `row` without trailing blanks.
    pub fn row_text(&self, row: usize) -> String {
        self.grid
            .get(row)
            .map(|cells| cells.iter().collect::<String>().trim_end().to_string())
            .unwrap_or_default()
    }

    /// All visible rows, top to bottom.
    pub fn visible_text(&self) -> Vec<String> {
        (0..self.grid.len()).map(|row| self.row_text(row)).collect()
    }

    /// Cursor as (row, column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Lines scrolled off the top, oldest first.
    pub fn scrollback(&self) -> impl Iterator<Item = &String> {
        self.scrollback.iter()
    }

    /// Change the grid size. Resizing to the current size does nothing.
    ///
    /// When the grid loses rows below the cursor, top rows move into
    /// scrollback so the cursor row stays visible.
    pub fn resize(&mut self, viewport: Viewport) {
        if viewport == self.viewport {
            return;
        }

        let rows = usize::from(viewport.rows);
        let cols = usize::from(viewport.cols);

        while self.row >= rows {
            self.scroll_up();
            self.row -= 1;
        }
        self.grid.truncate(rows);
        self.grid.resize_with(rows, Vec::new);
        for cells in &mut self.grid {
            cells.resize(cols, ' ');
        }

        self.viewport = viewport;
        self.col = self.col.min(cols - 1);
        self.pending_wrap = false;
    }

    fn rows(&self) -> usize {
        usize::from(self.viewport.rows)
    }

    fn cols(&self) -> usize {
        usize::from(self.viewport.cols)
    }

    fn apply_one(&mut self, directive: &Directive) {
        match directive {
            Directive::Write(text) => self.write(text),
            Directive::WriteLine(line) => {
                self.write(line.as_str());
                self.line_feed();
            }
            Directive::Clear => {
                self.grid = blank_grid(self.viewport);
                self.row = 0;
                self.col = 0;
                self.pending_wrap = false;
            }
            Directive::EraseDown => {
                let cols = self.cols();
                for cells in &mut self.grid[self.row..] {
                    *cells = vec![' '; cols];
                }
                self.col = 0;
                self.pending_wrap = false;
            }
            Directive::MoveUp(n) => {
                self.row = self.row.saturating_sub(*n);
                self.pending_wrap = false;
            }
            Directive::MoveDown(n) => {
                self.row = self.row.saturating_add(*n).min(self.rows() - 1);
                self.pending_wrap = false;
            }
            Directive::MoveLeft(n) => {
                self.col = self.col.saturating_sub(*n);
                self.pending_wrap = false;
            }
            Directive::MoveRight(n) => {
                self.col = self.col.saturating_add(*n).min(self.cols() - 1);
                self.pending_wrap = false;
            }
            Directive::MoveTo { row, col } => {
                self.row = usize::from(*row).min(self.rows() - 1);
                self.col = usize::from(*col).min(self.cols() - 1);
                self.pending_wrap = false;
            }
        }
    }

    fn write(&mut self, text: &str) {
        for c in text.chars() {
            match c {
                '\n' => self.line_feed(),
                '\r' => {
                    self.col = 0;
                    self.pending_wrap = false;
                }
                c if c.is_control() => {}
                c => self.put(c),
            }
        }
    }

    fn put(&mut self, c: char) {
        if self.pending_wrap {
            self.line_feed();
        }
        self.grid[self.row][self.col] = c;
        if self.col + 1 == self.cols() {
            self.pending_wrap = true;
        } else {
            self.col += 1;
        }
    }

    fn line_feed(&mut self) {
        self.col = 0;
        self.pending_wrap = false;
        if self.row + 1 == self.rows() {
            self.scroll_up();
        } else {
            self.row += 1;
        }
    }

    fn scroll_up(&mut self) {
        let cols = self.cols();
        let top = self.grid.remove(0);
        self.scrollback
            .push(top.into_iter().collect::<String>().trim_end().to_string());
        self.grid.push(vec![' '; cols]);
    }
}

impl Surface for Screen {
    fn apply(&mut self, directives: &[Directive]) -> Result<(), SurfaceError> {
        for directive in directives {
            self.apply_one(directive);
        }
        Ok(())
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}

fn blank_grid(viewport: Viewport) -> Vec<Vec<char>> {
    vec![vec![' '; usize::from(viewport.cols)]; usize::from(viewport.rows)]
}
