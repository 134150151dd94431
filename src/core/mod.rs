//! Core business logic for the terminal engine.
//!
//! This module provides:
//! - [`VirtualFs`] in-memory filesystem and path resolution
//! - [`Command`] parsing and [`execute_command`] execution
//! - [`Session`] shell state and line dispatch
//! - [`LineEditor`] and [`NanoEditor`] keystroke consumers
//! - [`Terminal`] mode stack and [`Screen`] headless surface

mod autocomplete;
pub mod commands;
pub mod editor;
pub mod error;
mod filesystem;
pub mod history;
pub mod line_editor;
pub mod screen;
pub mod session;
pub mod terminal;

pub use autocomplete::{AutocompleteResult, autocomplete};
pub use commands::{Command, CommandResult, ShellAction, execute_command};
pub use editor::{EditorResponse, NanoEditor};
pub use error::{ConfigError, FsError, ShellError, SurfaceError};
pub use filesystem::{DirEntry, ROOT, VirtualFs};
pub use history::{CommandHistory, HistoryStep};
pub use line_editor::{KeyClass, LineAction, LineEditor, LineResponse, LineState, transition};
pub use screen::{Screen, Surface};
pub use session::{OpenFile, Session};
pub use terminal::{InputMode, Terminal};
