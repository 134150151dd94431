//! Error types for the terminal core.
//!
//! - [`FsError`] - Virtual filesystem operation failures
//! - [`ShellError`] - Command-line usage errors
//! - [`ConfigError`] - Loading configuration and filesystem seeds
//! - [`SurfaceError`] - Applying directives to a real terminal
//!
//! Filesystem and shell errors are always recovered by the command handler
//! that hit them and printed as a single output line. The `Display` text of
//! [`FsError`] is the POSIX-style suffix used in those lines.

use thiserror::Error;

/// Virtual filesystem errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FsError {
    /// The path does not name an existing entry.
    #[error("No such file or directory")]
    PathNotFound,
    /// An entry with that name already exists.
    #[error("File exists")]
    PathExists,
    /// The parent directory of the target does not exist.
    #[error("No such file or directory")]
    ParentMissing,
    /// A directory was expected but the path names a file.
    #[error("Not a directory")]
    NotADirectory,
    /// A file was expected but the path names a directory.
    #[error("Is a directory")]
    IsADirectory,
}

/// Command-line usage errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    /// A required argument was not given. `operand` names what was missing
    /// (`operand`, `file operand`, `filename`).
    #[error("{command}: missing {operand}")]
    MissingOperand {
        command: &'static str,
        operand: &'static str,
    },
    /// No registered command has this name.
    #[error("Command not found: {0}")]
    UnknownCommand(String),
}

/// Configuration and seed loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised by a surface while drawing.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
