//! Input line editor.
//!
//! Keystrokes are first classified into a [`KeyClass`], then looked up in a
//! (state × class) transition table that yields a [`LineAction`]. Only
//! [`LineEditor::handle`] touches the buffer, so every transition can be
//! tested in isolation.
//!
//! Rendering is a redraw of the whole input line emitted as one batch: back up
//! to the prompt's row, erase downwards, write prompt plus buffer, then
//! reposition the cursor. The line wraps at the viewport width, so cursor
//! moves are computed as (row, column) steps rather than column offsets.

use log::debug;

use crate::config::PROMPT;
use crate::core::autocomplete::{AutocompleteResult, autocomplete};
use crate::core::commands::ShellAction;
use crate::core::history::HistoryStep;
use crate::core::Session;
use crate::models::{Directive, Key, KeyEvent, OutputLine, Viewport};

// =============================================================================
// Classification
// =============================================================================

/// Key classes the line editor distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyClass {
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    /// Ctrl+C
    Interrupt,
    /// Ctrl+L
    ClearScreen,
    Printable(char),
    Ignored,
}

impl KeyClass {
    pub fn classify(event: &KeyEvent) -> Self {
        if event.is_ctrl('c') {
            return Self::Interrupt;
        }
        if event.is_ctrl('l') {
            return Self::ClearScreen;
        }
        if let Some(c) = event.printable() {
            return Self::Printable(c);
        }
        if !event.modifiers.is_empty() {
            return Self::Ignored;
        }

        match event.key {
            Key::Enter => Self::Enter,
            Key::Backspace => Self::Backspace,
            Key::Delete => Self::Delete,
            Key::Left => Self::Left,
            Key::Right => Self::Right,
            Key::Up => Self::Up,
            Key::Down => Self::Down,
            Key::Home => Self::Home,
            Key::End => Self::End,
            Key::Tab => Self::Tab,
            Key::Char(_) | Key::Escape | Key::Other => Self::Ignored,
        }
    }
}

// =============================================================================
// Transition Table
// =============================================================================

/// Line editor states. Input is always being collected into a line.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineState {
    #[default]
    Collecting,
}

/// Effect selected by the transition table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LineAction {
    Submit,
    DeleteBefore,
    DeleteAt,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    HistoryOlder,
    HistoryNewer,
    Complete,
    Cancel,
    ClearScreen,
    Insert(char),
    Nothing,
}

/// The transition table.
pub fn transition(state: LineState, class: KeyClass) -> (LineState, LineAction) {
    use KeyClass as K;
    use LineAction as A;

    let action = match (state, class) {
        (LineState::Collecting, K::Enter) => A::Submit,
        (LineState::Collecting, K::Backspace) => A::DeleteBefore,
        (LineState::Collecting, K::Delete) => A::DeleteAt,
        (LineState::Collecting, K::Left) => A::CursorLeft,
        (LineState::Collecting, K::Right) => A::CursorRight,
        (LineState::Collecting, K::Home) => A::CursorHome,
        (LineState::Collecting, K::End) => A::CursorEnd,
        (LineState::Collecting, K::Up) => A::HistoryOlder,
        (LineState::Collecting, K::Down) => A::HistoryNewer,
        (LineState::Collecting, K::Tab) => A::Complete,
        (LineState::Collecting, K::Interrupt) => A::Cancel,
        (LineState::Collecting, K::ClearScreen) => A::ClearScreen,
        (LineState::Collecting, K::Printable(c)) => A::Insert(c),
        (LineState::Collecting, K::Ignored) => A::Nothing,
    };

    (LineState::Collecting, action)
}

// =============================================================================
// Editor
// =============================================================================

/// Directives for one keystroke, plus a follow-up the terminal must perform.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LineResponse {
    pub directives: Vec<Directive>,
    /// Set when a submitted command asks for a screen clear or the editor.
    /// The terminal then owns writing the next prompt.
    pub action: Option<ShellAction>,
}

impl LineResponse {
    fn draw(directives: Vec<Directive>) -> Self {
        Self {
            directives,
            action: None,
        }
    }
}

/// Edits the current input line.
///
/// `cursor` counts characters, not bytes. The prompt and buffer wrap at the
/// viewport width, so the editor also tracks which row of the wrapped line
/// the terminal cursor is on.
#[derive(Clone, Debug, Default)]
pub struct LineEditor {
    state: LineState,
    buffer: String,
    cursor: usize,
    /// Row of the terminal cursor, counted from the prompt's row.
    row: usize,
    /// Width the line was last laid out for. Zero before the first draw.
    cols: usize,
}

impl LineEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.buffer.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.buffer
            .char_indices()
            .nth(char_index)
            .map_or(self.buffer.len(), |(i, _)| i)
    }

    /// Process one keystroke.
    pub fn handle(
        &mut self,
        event: &KeyEvent,
        session: &mut Session,
        viewport: Viewport,
    ) -> LineResponse {
        let (state, action) = transition(self.state, KeyClass::classify(event));
        self.state = state;

        let cols = usize::from(viewport.cols).max(1);
        if self.buffer.is_empty() {
            // A bare prompt fits on one row at any width
            self.cols = cols;
        }

        let response = self.apply(action, session, cols);
        debug_assert!(self.cursor <= self.len(), "line cursor out of range");
        response
    }

    fn apply(&mut self, action: LineAction, session: &mut Session, cols: usize) -> LineResponse {
        match action {
            LineAction::Submit => self.submit(session, cols),
            LineAction::DeleteBefore => {
                if self.cursor == 0 {
                    return LineResponse::default();
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
                LineResponse::draw(self.redraw(cols))
            }
            LineAction::DeleteAt => {
                if self.cursor >= self.len() {
                    return LineResponse::default();
                }
                let at = self.byte_index(self.cursor);
                self.buffer.remove(at);
                LineResponse::draw(self.redraw(cols))
            }
            LineAction::CursorLeft => {
                if self.cursor == 0 {
                    return LineResponse::default();
                }
                LineResponse::draw(self.move_cursor(self.cursor - 1, cols))
            }
            LineAction::CursorRight => {
                if self.cursor >= self.len() {
                    return LineResponse::default();
                }
                LineResponse::draw(self.move_cursor(self.cursor + 1, cols))
            }
            LineAction::CursorHome => LineResponse::draw(self.move_cursor(0, cols)),
            LineAction::CursorEnd => LineResponse::draw(self.move_cursor(self.len(), cols)),
            LineAction::HistoryOlder => match session.history_mut().older() {
                Some(entry) => {
                    self.replace(entry);
                    LineResponse::draw(self.redraw(cols))
                }
                None => LineResponse::default(),
            },
            LineAction::HistoryNewer => match session.history_mut().newer() {
                HistoryStep::Entry(entry) => {
                    self.replace(entry);
                    LineResponse::draw(self.redraw(cols))
                }
                HistoryStep::Cleared => {
                    self.replace(String::new());
                    LineResponse::draw(self.redraw(cols))
                }
                HistoryStep::Unchanged => LineResponse::default(),
            },
            LineAction::Complete => self.complete(session, cols),
            LineAction::Cancel => {
                let mut directives = self.move_cursor(self.len(), cols);
                directives.extend([
                    Directive::write("^C"),
                    Directive::newline(),
                    Directive::write(PROMPT),
                ]);
                self.replace(String::new());
                self.row = 0;
                session.history_mut().reset_view();
                LineResponse::draw(directives)
            }
            LineAction::ClearScreen => {
                self.row = 0;
                let mut directives = vec![Directive::Clear];
                directives.extend(self.redraw(cols));
                LineResponse::draw(directives)
            }
            LineAction::Insert(c) => {
                let at = self.byte_index(self.cursor);
                self.buffer.insert(at, c);
                self.cursor += 1;
                LineResponse::draw(self.redraw(cols))
            }
            LineAction::Nothing => LineResponse::default(),
        }
    }

    /// Commit the buffer to the session and print the result.
    fn submit(&mut self, session: &mut Session, cols: usize) -> LineResponse {
        let mut directives = self.leave_line(cols);
        let line = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        session.history_mut().reset_view();

        let result = session.run_line(&line);
        directives.extend(result.output.into_iter().map(Directive::WriteLine));

        if result.action.is_none() {
            directives.push(Directive::write(PROMPT));
        } else {
            debug!("Line '{}' requested {:?}", line, result.action);
        }

        LineResponse {
            directives,
            action: result.action,
        }
    }

    fn complete(&mut self, session: &Session, cols: usize) -> LineResponse {
        match autocomplete(&self.buffer, session.cwd(), session.fs()) {
            AutocompleteResult::Single(line) => {
                self.replace(line);
                LineResponse::draw(self.redraw(cols))
            }
            AutocompleteResult::Multiple(line, candidates) => {
                let mut directives = self.leave_line(cols);
                directives.push(Directive::WriteLine(OutputLine::text(candidates.join("  "))));
                if line.chars().count() > self.buffer.trim_start().chars().count() {
                    self.replace(line);
                }
                directives.extend(self.redraw(cols));
                LineResponse::draw(directives)
            }
            AutocompleteResult::None => LineResponse::default(),
        }
    }

    /// Replace the buffer and put the cursor at its end.
    fn replace(&mut self, line: String) {
        self.buffer = line;
        self.cursor = self.len();
    }

    /// Directives redrawing the prompt and buffer with the cursor in place.
    ///
    /// Starts from the prompt's row and erases everything below it, so a
    /// line that now spans fewer rows leaves nothing behind.
    fn redraw(&mut self, cols: usize) -> Vec<Directive> {
        let mut directives: Vec<Directive> = move_up(self.row).into_iter().collect();
        directives.push(Directive::EraseDown);
        directives.push(Directive::write(format!("{}{}", PROMPT, self.buffer)));

        let end = offset(self.len());
        if end % cols == 0 {
            // Force the pending wrap so the row after a full one exists
            directives.push(Directive::newline());
        }
        let target = cell(offset(self.cursor), cols);
        directives.extend(step(cell(end, cols), target));

        self.row = target.0;
        self.cols = cols;
        directives
    }

    /// Move the cursor to character `to`, stepping across wrapped rows.
    fn move_cursor(&mut self, to: usize, cols: usize) -> Vec<Directive> {
        if self.cols != cols {
            // Laid out for another width: start over from the prompt row
            self.cursor = to;
            return self.redraw(cols);
        }
        let from = cell(offset(self.cursor), self.cols);
        let target = cell(offset(to), self.cols);
        self.cursor = to;
        self.row = target.0;
        step(from, target)
    }

    /// Put the terminal cursor on a fresh row below the line.
    fn leave_line(&mut self, cols: usize) -> Vec<Directive> {
        let mut directives = self.move_cursor(self.len(), cols);
        if offset(self.len()) % self.cols != 0 {
            directives.push(Directive::newline());
        }
        self.row = 0;
        directives
    }
}

/// Character offset of buffer position `cursor` from the start of the prompt.
fn offset(cursor: usize) -> usize {
    PROMPT.chars().count() + cursor
}

/// (row, column) of a character offset in a line wrapped at `cols`.
fn cell(offset: usize, cols: usize) -> (usize, usize) {
    (offset / cols, offset % cols)
}

fn move_up(n: usize) -> Option<Directive> {
    (n > 0).then_some(Directive::MoveUp(n))
}

/// Relative moves from one cell to another.
fn step(from: (usize, usize), to: (usize, usize)) -> Vec<Directive> {
    let mut directives = Vec::new();
    if to.0 < from.0 {
        directives.push(Directive::MoveUp(from.0 - to.0));
    } else if to.0 > from.0 {
        directives.push(Directive::MoveDown(to.0 - from.0));
    }
    if to.1 < from.1 {
        directives.push(Directive::MoveLeft(from.1 - to.1));
    } else if to.1 > from.1 {
        directives.push(Directive::MoveRight(to.1 - from.1));
    }
    directives
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerminalConfig;
    use crate::models::Modifiers;

    fn session() -> Session {
        Session::new(&TerminalConfig::default())
    }

    fn wide() -> Viewport {
        Viewport::new(24, 80)
    }

    fn type_text(editor: &mut LineEditor, session: &mut Session, text: &str) {
        for event in KeyEvent::typed(text) {
            editor.handle(&event, session, wide());
        }
    }

    fn press(editor: &mut LineEditor, session: &mut Session, key: Key) -> LineResponse {
        editor.handle(&KeyEvent::plain(key), session, wide())
    }

    #[test]
    fn test_classify() {
        assert_eq!(KeyClass::classify(&KeyEvent::char('a')), KeyClass::Printable('a'));
        assert_eq!(KeyClass::classify(&KeyEvent::ctrl('c')), KeyClass::Interrupt);
        assert_eq!(KeyClass::classify(&KeyEvent::ctrl('L')), KeyClass::ClearScreen);
        assert_eq!(KeyClass::classify(&KeyEvent::ctrl('a')), KeyClass::Ignored);
        assert_eq!(KeyClass::classify(&KeyEvent::plain(Key::Enter)), KeyClass::Enter);
        assert_eq!(KeyClass::classify(&KeyEvent::plain(Key::Escape)), KeyClass::Ignored);
        let alt_left = KeyEvent::new(
            Key::Left,
            Modifiers {
                alt: true,
                ..Modifiers::NONE
            },
        );
        assert_eq!(KeyClass::classify(&alt_left), KeyClass::Ignored);
    }

    #[test]
    fn test_transition_table() {
        let cases = [
            (KeyClass::Enter, LineAction::Submit),
            (KeyClass::Backspace, LineAction::DeleteBefore),
            (KeyClass::Delete, LineAction::DeleteAt),
            (KeyClass::Left, LineAction::CursorLeft),
            (KeyClass::Right, LineAction::CursorRight),
            (KeyClass::Up, LineAction::HistoryOlder),
            (KeyClass::Down, LineAction::HistoryNewer),
            (KeyClass::Interrupt, LineAction::Cancel),
            (KeyClass::Printable('x'), LineAction::Insert('x')),
            (KeyClass::Ignored, LineAction::Nothing),
        ];
        for (class, expected) in cases {
            assert_eq!(
                transition(LineState::Collecting, class),
                (LineState::Collecting, expected)
            );
        }
    }

    #[test]
    fn test_insert_redraws_whole_line() {
        let mut s = session();
        let mut editor = LineEditor::new();
        let response = editor.handle(&KeyEvent::char('l'), &mut s, wide());
        assert_eq!(
            response.directives,
            vec![Directive::EraseDown, Directive::write("$ l")]
        );
        assert_eq!(editor.cursor(), 1);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "ac");
        press(&mut editor, &mut s, Key::Left);
        let response = editor.handle(&KeyEvent::char('b'), &mut s, wide());
        assert_eq!(editor.buffer(), "abc");
        assert_eq!(editor.cursor(), 2);
        assert_eq!(
            response.directives,
            vec![
                Directive::EraseDown,
                Directive::write("$ abc"),
                Directive::MoveLeft(1)
            ]
        );
    }

    #[test]
    fn test_arrows_only_move_cursor() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "ab");

        let left = press(&mut editor, &mut s, Key::Left);
        assert_eq!(left.directives, vec![Directive::MoveLeft(1)]);
        let right = press(&mut editor, &mut s, Key::Right);
        assert_eq!(right.directives, vec![Directive::MoveRight(1)]);

        // At the end already
        assert!(press(&mut editor, &mut s, Key::Right).directives.is_empty());
        assert_eq!(editor.cursor(), 2);
    }

    #[test]
    fn test_wrapped_line_moves_across_rows() {
        let mut s = session();
        let mut editor = LineEditor::new();
        let narrow = Viewport::new(6, 10);
        for event in KeyEvent::typed("echo ab") {
            editor.handle(&event, &mut s, narrow);
        }

        // Filling the row forces the wrap onto the next one
        let full = editor.handle(&KeyEvent::char('c'), &mut s, narrow);
        assert_eq!(
            full.directives,
            vec![Directive::EraseDown, Directive::write("$ echo abc"), Directive::newline()]
        );

        let wrapped = editor.handle(&KeyEvent::char('d'), &mut s, narrow);
        assert_eq!(
            wrapped.directives,
            vec![Directive::MoveUp(1), Directive::EraseDown, Directive::write("$ echo abcd")]
        );

        let left = editor.handle(&KeyEvent::plain(Key::Left), &mut s, narrow);
        assert_eq!(left.directives, vec![Directive::MoveLeft(1)]);
        let left = editor.handle(&KeyEvent::plain(Key::Left), &mut s, narrow);
        assert_eq!(left.directives, vec![Directive::MoveUp(1), Directive::MoveRight(9)]);

        let home = editor.handle(&KeyEvent::plain(Key::Home), &mut s, narrow);
        assert_eq!(home.directives, vec![Directive::MoveLeft(7)]);
        let end = editor.handle(&KeyEvent::plain(Key::End), &mut s, narrow);
        assert_eq!(end.directives, vec![Directive::MoveDown(1), Directive::MoveLeft(1)]);
    }

    #[test]
    fn test_submit_leaves_from_end_of_wrapped_line() {
        let mut s = session();
        let mut editor = LineEditor::new();
        let narrow = Viewport::new(6, 10);
        for event in KeyEvent::typed("cd /var/log") {
            editor.handle(&event, &mut s, narrow);
        }
        editor.handle(&KeyEvent::plain(Key::Home), &mut s, narrow);

        let response = editor.handle(&KeyEvent::plain(Key::Enter), &mut s, narrow);
        assert_eq!(
            response.directives,
            vec![
                Directive::MoveDown(1),
                Directive::MoveRight(1),
                Directive::newline(),
                Directive::write("$ "),
            ]
        );
        assert_eq!(s.cwd(), "/var/log");
    }

    #[test]
    fn test_redraw_after_width_change() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "abcdefgh");

        // Laid out at 80 columns; a move at 10 columns redraws instead
        let response = editor.handle(&KeyEvent::plain(Key::Left), &mut s, Viewport::new(6, 10));
        assert_eq!(
            response.directives,
            vec![
                Directive::EraseDown,
                Directive::write("$ abcdefgh"),
                Directive::newline(),
                Directive::MoveUp(1),
                Directive::MoveRight(9),
            ]
        );
        assert_eq!(editor.cursor(), 7);
    }

    #[test]
    fn test_backspace_and_delete_at_edges() {
        let mut s = session();
        let mut editor = LineEditor::new();
        assert!(press(&mut editor, &mut s, Key::Backspace).directives.is_empty());

        type_text(&mut editor, &mut s, "xy");
        assert!(press(&mut editor, &mut s, Key::Delete).directives.is_empty());
        press(&mut editor, &mut s, Key::Backspace);
        assert_eq!(editor.buffer(), "x");

        press(&mut editor, &mut s, Key::Home);
        press(&mut editor, &mut s, Key::Delete);
        assert_eq!(editor.buffer(), "");
        assert_eq!(editor.cursor(), 0);
    }

    #[test]
    fn test_home_end() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "abc");
        assert_eq!(
            press(&mut editor, &mut s, Key::Home).directives,
            vec![Directive::MoveLeft(3)]
        );
        assert_eq!(editor.cursor(), 0);
        assert_eq!(
            press(&mut editor, &mut s, Key::End).directives,
            vec![Directive::MoveRight(3)]
        );
        assert_eq!(editor.cursor(), 3);
    }

    #[test]
    fn test_cursor_stays_in_range() {
        let mut s = session();
        let mut editor = LineEditor::new();
        let keys = [
            Key::Left,
            Key::Char('é'),
            Key::Backspace,
            Key::Backspace,
            Key::Char('a'),
            Key::Char('b'),
            Key::Left,
            Key::Left,
            Key::Left,
            Key::Delete,
            Key::Delete,
            Key::Delete,
            Key::Right,
            Key::Char('z'),
            Key::Right,
            Key::Right,
        ];
        for key in keys {
            editor.handle(&KeyEvent::plain(key), &mut s, wide());
            assert!(editor.cursor() <= editor.buffer().chars().count());
        }
        assert_eq!(editor.buffer(), "z");
    }

    #[test]
    fn test_enter_runs_command() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "pwd");
        let response = press(&mut editor, &mut s, Key::Enter);
        assert_eq!(
            response.directives,
            vec![
                Directive::newline(),
                Directive::WriteLine(OutputLine::text("/home/user")),
                Directive::write("$ "),
            ]
        );
        assert_eq!(response.action, None);
        assert_eq!(editor.buffer(), "");
        assert_eq!(s.history().get(0), Some("pwd"));
    }

    #[test]
    fn test_empty_enter_prints_prompt() {
        let mut s = session();
        let mut editor = LineEditor::new();
        let response = press(&mut editor, &mut s, Key::Enter);
        assert_eq!(
            response.directives,
            vec![Directive::newline(), Directive::write("$ ")]
        );
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_enter_hands_action_to_terminal() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "clear");
        let response = press(&mut editor, &mut s, Key::Enter);
        assert_eq!(response.action, Some(ShellAction::ClearScreen));
        assert_eq!(response.directives, vec![Directive::newline()]);
    }

    #[test]
    fn test_ctrl_c_discards_line() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "rm -rf");
        let response = editor.handle(&KeyEvent::ctrl('c'), &mut s, wide());
        assert_eq!(
            response.directives,
            vec![Directive::write("^C"), Directive::newline(), Directive::write("$ ")]
        );
        assert_eq!(editor.buffer(), "");
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_ctrl_l_keeps_buffer() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "ls");
        let response = editor.handle(&KeyEvent::ctrl('l'), &mut s, wide());
        assert_eq!(response.directives[0], Directive::Clear);
        assert_eq!(editor.buffer(), "ls");
    }

    #[test]
    fn test_history_up_down() {
        let mut s = session();
        let mut editor = LineEditor::new();
        for line in ["pwd", "ls", "help"] {
            type_text(&mut editor, &mut s, line);
            press(&mut editor, &mut s, Key::Enter);
        }

        type_text(&mut editor, &mut s, "draft");
        press(&mut editor, &mut s, Key::Up);
        assert_eq!(editor.buffer(), "help");
        press(&mut editor, &mut s, Key::Up);
        assert_eq!(editor.buffer(), "ls");
        assert_eq!(editor.cursor(), 2);
        press(&mut editor, &mut s, Key::Up);
        press(&mut editor, &mut s, Key::Up);
        assert_eq!(editor.buffer(), "pwd");

        press(&mut editor, &mut s, Key::Down);
        assert_eq!(editor.buffer(), "ls");
        press(&mut editor, &mut s, Key::Down);
        assert_eq!(editor.buffer(), "help");
        press(&mut editor, &mut s, Key::Down);
        assert_eq!(editor.buffer(), "");
        assert!(press(&mut editor, &mut s, Key::Down).directives.is_empty());
    }

    #[test]
    fn test_tab_completes_single_match() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "cd Doc");
        press(&mut editor, &mut s, Key::Tab);
        assert_eq!(editor.buffer(), "cd Documents/");
        assert_eq!(editor.cursor(), 13);
    }

    #[test]
    fn test_tab_lists_candidates() {
        let mut s = session();
        let mut editor = LineEditor::new();
        type_text(&mut editor, &mut s, "cd D");
        let response = press(&mut editor, &mut s, Key::Tab);
        assert_eq!(editor.buffer(), "cd Do");
        assert_eq!(
            response.directives[1],
            Directive::WriteLine(OutputLine::text("Documents/  Downloads/"))
        );
        assert_eq!(response.directives.last(), Some(&Directive::write("$ cd Do")));
    }
}
