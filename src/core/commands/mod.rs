//! Command parsing and execution.
//!
//! This module provides:
//! - `Command` enum for parsed terminal commands
//! - `REGISTRY`, the fixed name/description table behind `help` and completion
//! - `CommandResult` for command execution results
//! - `tokenize` for splitting an input line into words
//!
//! # Architecture
//!
//! Input lines are split on single spaces (no quoting), the first word is
//! looked up case-insensitively and parsed into the `Command` enum, then
//! executed against the session via `execute_command`.

mod execute;
mod result;

pub use execute::execute_command;
pub use result::{CommandResult, ShellAction};

use std::fmt;

// =============================================================================
// Path Argument Type
// =============================================================================

/// A path argument passed to a command (e.g., `cd foo`, `cat bar.txt`).
///
/// Stored exactly as typed: error messages echo it back verbatim, and
/// resolution against the working directory happens during execution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathArg(String);

impl PathArg {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PathArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PathArg {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl PartialEq<&str> for PathArg {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

// =============================================================================
// Registry
// =============================================================================

/// Registered command names with their `help` descriptions, in display
/// order.
pub const REGISTRY: &[(&str, &str)] = &[
    ("pwd", "Print working directory"),
    ("ls", "List directory contents"),
    ("cd", "Change directory"),
    ("cat", "Concatenate and print files"),
    ("clear", "Clear terminal screen"),
    ("mkdir", "Make directories"),
    ("touch", "Change file timestamps"),
    ("rm", "Remove files or directories"),
    ("help", "Show this help message"),
    ("nano", "Text editor"),
];

// =============================================================================
// Command Enum
// =============================================================================

/// Parsed terminal command.
///
/// Operands are optional at parse time; a missing required operand is
/// reported when the command executes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Pwd,
    /// List directory contents. `long` is set by `-l`.
    Ls {
        path: Option<PathArg>,
        long: bool,
    },
    /// Change directory; no operand means the home directory.
    Cd(Option<PathArg>),
    Cat(Option<PathArg>),
    Clear,
    Mkdir(Option<PathArg>),
    Touch(Option<PathArg>),
    Rm(Option<PathArg>),
    Help,
    Nano(Option<PathArg>),
    /// Name as typed by the user.
    Unknown(String),
}

impl Command {
    /// All registered command names, in registry order.
    pub fn names() -> impl Iterator<Item = &'static str> {
        REGISTRY.iter().map(|(name, _)| *name)
    }

    /// Parse command from name and arguments. Names are case-insensitive.
    pub fn parse(name: &str, args: &[String]) -> Self {
        let first = || args.first().map(|a| PathArg::new(a.as_str()));

        match name.to_lowercase().as_str() {
            "pwd" => Self::Pwd,
            "ls" => {
                let mut long = false;
                let mut path = None;
                for arg in args {
                    if arg == "-l" {
                        long = true;
                    } else if path.is_none() {
                        path = Some(PathArg::new(arg.as_str()));
                    }
                }
                Self::Ls { path, long }
            }
            "cd" => Self::Cd(first()),
            "cat" => Self::Cat(first()),
            "clear" => Self::Clear,
            "mkdir" => Self::Mkdir(first()),
            "touch" => Self::Touch(first()),
            "rm" => Self::Rm(first()),
            "help" => Self::Help,
            "nano" => Self::Nano(first()),
            _ => Self::Unknown(name.to_string()),
        }
    }
}

/// Split an input line into words on single spaces.
///
/// There is no quoting or escaping. Runs of spaces do not produce empty
/// words.
pub fn tokenize(line: &str) -> Vec<String> {
    line.split(' ')
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
