//! Embedded terminal emulator engine.
//!
//! A virtual shell over an in-memory filesystem, driven one keystroke at a
//! time. The engine never draws: every keystroke yields a batch of
//! [`Directive`](models::Directive)s for a [`Surface`](core::Surface) to
//! apply.
//!
//! ```
//! use websec_term::config::TerminalConfig;
//! use websec_term::core::{Screen, Surface, Terminal};
//! use websec_term::models::{Key, KeyEvent};
//!
//! let config = TerminalConfig::default();
//! let mut terminal = Terminal::new(&config);
//! let mut screen = Screen::new(config.viewport(), config.scrollback);
//! screen.apply(&terminal.start()).unwrap();
//!
//! for event in KeyEvent::typed("pwd") {
//!     screen.apply(&terminal.handle_key(&event)).unwrap();
//! }
//! screen.apply(&terminal.handle_key(&KeyEvent::plain(Key::Enter))).unwrap();
//! assert_eq!(screen.row_text(2), "/home/user");
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;
