//! Command execution result type.

use crate::models::OutputLine;

/// A side effect the terminal must perform after printing a command's
/// output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShellAction {
    /// Wipe the surface before the next prompt.
    ClearScreen,
    /// Hand keystrokes to the modal editor for `path` (absolute). `title` is
    /// the name as the user typed it.
    OpenEditor { path: String, title: String },
}

/// Result of executing a command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandResult {
    /// Output lines to display
    pub output: Vec<OutputLine>,
    /// Optional follow-up for the terminal
    pub action: Option<ShellAction>,
}

impl CommandResult {
    /// Create a result with just output, no action.
    pub fn output(lines: Vec<OutputLine>) -> Self {
        Self {
            output: lines,
            action: None,
        }
    }

    /// Create a single-line error result.
    pub fn error(message: impl Into<String>) -> Self {
        Self::output(vec![OutputLine::error(message)])
    }

    /// Create a result that only requests an action.
    pub fn action(action: ShellAction) -> Self {
        Self {
            output: vec![],
            action: Some(action),
        }
    }

    /// Create an empty result (no output, no action).
    pub fn empty() -> Self {
        Self {
            output: vec![],
            action: None,
        }
    }
}
