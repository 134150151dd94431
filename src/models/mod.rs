//! Data models and types for the terminal.
//!
//! Contains plain data types for:
//! - [`KeyEvent`], [`Key`], [`Modifiers`] - Raw keystrokes from a surface
//! - [`OutputLine`], [`Directive`], [`Viewport`] - Output and rendering
//! - [`Manifest`] - Virtual filesystem seed

mod filesystem;
mod key;
mod terminal;

pub use filesystem::{DirectorySeed, FileSeed, Manifest};
pub use key::{Key, KeyEvent, Modifiers};
pub use terminal::{Directive, OutputLine, Viewport};
