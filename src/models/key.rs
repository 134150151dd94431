//! Keystroke events as delivered by a terminal surface in raw mode.
//!
//! Every key press, control keys included, reaches the engine as a
//! [`KeyEvent`]. Backends translate their native events into this shape so
//! the line editor and the modal editor never see platform key codes.

/// Logical key identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// A character key. Control combinations arrive as `Char` plus
    /// [`Modifiers::ctrl`].
    Char(char),
    Enter,
    Backspace,
    Delete,
    Tab,
    Escape,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    /// Anything the engine has no binding for (function keys, media keys).
    Other,
}

/// Modifier flags held while the key was pressed.
///
/// Shift is not tracked: backends report shifted characters directly.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Self = Self {
        ctrl: false,
        alt: false,
        meta: false,
    };

    pub const CTRL: Self = Self {
        ctrl: true,
        alt: false,
        meta: false,
    };

    pub fn is_empty(self) -> bool {
        !self.ctrl && !self.alt && !self.meta
    }
}

/// A single key press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key pressed without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// A printable character typed without modifiers.
    pub fn char(c: char) -> Self {
        Self::plain(Key::Char(c))
    }

    /// `Ctrl+<c>`. The letter is stored lowercase.
    pub fn ctrl(c: char) -> Self {
        Self::new(Key::Char(c.to_ascii_lowercase()), Modifiers::CTRL)
    }

    /// Keystrokes that type `text` character by character.
    pub fn typed(text: &str) -> Vec<Self> {
        text.chars().map(Self::char).collect()
    }

    /// The character this event inserts, if it is printable and no modifier
    /// is held.
    pub fn printable(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if self.modifiers.is_empty() && !c.is_control() => Some(c),
            _ => None,
        }
    }

    /// Whether this is `Ctrl+<c>` (case-insensitive).
    pub fn is_ctrl(&self, c: char) -> bool {
        self.modifiers.ctrl && matches!(self.key, Key::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_printable() {
        assert_eq!(KeyEvent::char('a').printable(), Some('a'));
        assert_eq!(KeyEvent::char(' ').printable(), Some(' '));
        assert_eq!(KeyEvent::ctrl('a').printable(), None);
        assert_eq!(KeyEvent::plain(Key::Enter).printable(), None);
        assert_eq!(KeyEvent::char('\u{7}').printable(), None);

        let alt = KeyEvent::new(Key::Char('x'), Modifiers {
            alt: true,
            ..Modifiers::NONE
        });
        assert_eq!(alt.printable(), None);
    }

    #[test]
    fn test_is_ctrl() {
        assert!(KeyEvent::ctrl('X').is_ctrl('x'));
        assert!(KeyEvent::ctrl('o').is_ctrl('O'));
        assert!(!KeyEvent::char('x').is_ctrl('x'));
        assert!(!KeyEvent::ctrl('c').is_ctrl('x'));
    }

    #[test]
    fn test_typed() {
        let keys = KeyEvent::typed("ls");
        assert_eq!(keys, vec![KeyEvent::char('l'), KeyEvent::char('s')]);
    }
}
