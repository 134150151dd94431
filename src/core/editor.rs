//! Full-screen modal editor modelled on `nano`.
//!
//! While open, the editor receives every keystroke. Each keystroke that
//! changes anything triggers a full redraw: no incremental diffing.

use log::{debug, info};

use crate::config::PROMPT;
use crate::config::editor::{FOOTER_ROWS, HEADER_ROWS, RULE, SHORTCUTS, TITLE};
use crate::core::Session;
use crate::core::session::OpenFile;
use crate::models::{Directive, Key, KeyEvent, Viewport};

/// Directives for one keystroke and whether the editor closed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditorResponse {
    pub directives: Vec<Directive>,
    pub exit: bool,
}

/// Editor over one open file.
///
/// Content and cursor live in the session's open-file table; the editor only
/// keeps what it needs to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NanoEditor {
    path: String,
    title: String,
    /// First visual row shown in the content area.
    top: usize,
    status: Option<String>,
}

impl NanoEditor {
    /// Open `path` in `session` and draw the first frame.
    pub fn open(
        path: impl Into<String>,
        title: impl Into<String>,
        session: &mut Session,
        viewport: Viewport,
    ) -> (Self, Vec<Directive>) {
        let mut editor = Self {
            path: path.into(),
            title: title.into(),
            top: 0,
            status: None,
        };
        info!("Opening editor for {}", editor.path);
        let buffer = session.open_file(&editor.path).clone();
        let frame = editor.render(&buffer, viewport);
        (editor, frame)
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Process one keystroke.
    pub fn handle(
        &mut self,
        event: &KeyEvent,
        session: &mut Session,
        viewport: Viewport,
    ) -> EditorResponse {
        if event.is_ctrl('x') {
            session.close_file(&self.path);
            debug!("Closing editor for {}", self.path);
            return EditorResponse {
                directives: vec![Directive::Clear, Directive::write(PROMPT)],
                exit: true,
            };
        }

        if event.is_ctrl('o') {
            self.status = Some(match session.save_file(&self.path) {
                Ok(lines) => {
                    info!("Wrote {} lines to {}", lines, self.path);
                    format!("[ Wrote {} lines ]", lines)
                }
                Err(e) => format!("[ Error writing {}: {} ]", self.title, e),
            });
            return self.redraw(session, viewport);
        }

        let buffer = session.open_file(&self.path);
        if !edit(buffer, event) {
            return EditorResponse::default();
        }
        self.status = None;
        self.redraw(session, viewport)
    }

    /// Redraw the whole editor, e.g. after a resize.
    pub fn redraw(&mut self, session: &mut Session, viewport: Viewport) -> EditorResponse {
        let buffer = session.open_file(&self.path).clone();
        EditorResponse {
            directives: self.render(&buffer, viewport),
            exit: false,
        }
    }

    fn render(&mut self, buffer: &OpenFile, viewport: Viewport) -> Vec<Directive> {
        let width = usize::from(viewport.cols);
        let height = content_height(viewport);
        let rows = visual_rows(&buffer.content, width);
        let (cursor_row, cursor_col) = cursor_position(&buffer.content, buffer.cursor, width);

        // Scroll just enough to keep the cursor row visible
        if cursor_row < self.top {
            self.top = cursor_row;
        } else if cursor_row >= self.top + height {
            self.top = cursor_row + 1 - height;
        }

        // Rows past the bottom edge are skipped
        let last_row = usize::from(viewport.rows);
        let mut directives = vec![Directive::Clear];
        let mut put = |row: usize, text: String| {
            if row >= last_row {
                return;
            }
            directives.push(Directive::MoveTo {
                row: to_cell(row),
                col: 0,
            });
            if !text.is_empty() {
                directives.push(Directive::Write(text));
            }
        };

        let rule: String = std::iter::repeat_n(RULE, width).collect();
        let header_rows = usize::from(HEADER_ROWS);

        put(0, self.header(width));
        put(1, rule.clone());
        for (i, text) in rows.iter().skip(self.top).take(height).enumerate() {
            put(header_rows + i, text.clone());
        }

        let footer = header_rows + height;
        let status = self.status.as_deref().map(|s| centered(s, width)).unwrap_or_default();
        put(footer, status);
        put(footer + 1, rule);
        put(footer + 2, truncate(SHORTCUTS[0], width));
        put(footer + 3, truncate(SHORTCUTS[1], width));

        directives.push(Directive::MoveTo {
            row: to_cell(header_rows + cursor_row - self.top),
            col: to_cell(cursor_col),
        });
        directives
    }

    /// Title on the left, file name centred.
    fn header(&self, width: usize) -> String {
        let name_len = self.title.chars().count();
        let title_len = TITLE.chars().count();
        let start = (width.saturating_sub(name_len) / 2).max(title_len + 2);
        truncate(&format!("{:<start$}{}", TITLE, self.title), width)
    }
}

/// Apply an editing key to `buffer`. Returns whether anything changed.
fn edit(buffer: &mut OpenFile, event: &KeyEvent) -> bool {
    let len = buffer.len();
    let changed = if let Some(c) = event.printable() {
        insert(buffer, c);
        true
    } else if !event.modifiers.is_empty() {
        false
    } else {
        match event.key {
            Key::Enter => {
                insert(buffer, '\n');
                true
            }
            Key::Backspace if buffer.cursor > 0 => {
                buffer.cursor -= 1;
                let at = buffer.byte_offset();
                buffer.content.remove(at);
                true
            }
            Key::Left if buffer.cursor > 0 => {
                buffer.cursor -= 1;
                true
            }
            Key::Right if buffer.cursor < len => {
                buffer.cursor += 1;
                true
            }
            _ => false,
        }
    };

    debug_assert!(buffer.cursor <= buffer.len(), "editor cursor out of range");
    changed
}

fn insert(buffer: &mut OpenFile, c: char) {
    let at = buffer.byte_offset();
    buffer.content.insert(at, c);
    buffer.cursor += 1;
}

// =============================================================================
// Layout
// =============================================================================

/// Rows available for content between the header and the footer.
fn content_height(viewport: Viewport) -> usize {
    usize::from(viewport.rows.saturating_sub(HEADER_ROWS + FOOTER_ROWS).max(1))
}

/// Split content into screen rows.
///
/// Lines longer than `width` wrap. A non-empty line whose length is an exact
/// multiple of `width` is followed by an empty row, where the cursor sits
/// after its last character.
fn visual_rows(content: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in content.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
        if chars.len() % width == 0 {
            rows.push(String::new());
        }
    }
    rows
}

/// Screen row and column of character offset `cursor`.
fn cursor_position(content: &str, cursor: usize, width: usize) -> (usize, usize) {
    let width = width.max(1);
    let (mut row, mut col) = (0, 0);
    for c in content.chars().take(cursor) {
        if c == '\n' {
            row += 1;
            col = 0;
        } else {
            col += 1;
            if col == width {
                row += 1;
                col = 0;
            }
        }
    }
    (row, col)
}

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

fn truncate(s: &str, width: usize) -> String {
    s.chars().take(width).collect()
}

fn centered(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(s.chars().count()) / 2;
    truncate(&format!("{}{}", " ".repeat(pad), s), width)
}

// =============================================================================
// Tests
// =============================================================================
