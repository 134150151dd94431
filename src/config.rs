//! Terminal configuration.
//!
//! Centralizes the constants used throughout the engine and the runtime
//! [`TerminalConfig`] that can override a subset of them from a TOML file.

use std::path::Path;

use serde::Deserialize;

use crate::core::error::ConfigError;
use crate::models::Viewport;

// =============================================================================
// Shell
// =============================================================================

/// Prompt written before every input line.
pub const PROMPT: &str = "$ ";

/// Working directory of a fresh session and target of a bare `cd`.
pub const HOME_DIR: &str = "/home/user";

/// First line written when a terminal starts.
pub const WELCOME_BANNER: &str = "Welcome to WEBSec Terminal";

/// Maximum number of command history entries to keep.
pub const MAX_COMMAND_HISTORY: usize = 100;

/// Width of the name column in `help` output.
pub const HELP_NAME_WIDTH: usize = 12;

// =============================================================================
// Long Listing (`ls -l`)
// =============================================================================

/// Size reported for every directory. Synthetic, not a block count.
pub const DIRECTORY_SIZE: u64 = 4096;

/// Blocks added to the `total` line per listed entry.
pub const BLOCKS_PER_ENTRY: usize = 4;

/// Owner and group shown for every entry.
pub const FILE_OWNER: &str = "user";

/// Width the size column is right-aligned to.
pub const SIZE_COLUMN_WIDTH: usize = 8;

// =============================================================================
// Surface
// =============================================================================

pub const DEFAULT_ROWS: u16 = 24;
pub const DEFAULT_COLS: u16 = 80;

/// Lines kept above the visible grid of a headless screen.
pub const SCROLLBACK_LINES: usize = 1000;

/// Modal editor chrome.
pub mod editor {
    /// Title on the left of the header row.
    pub const TITLE: &str = "  GNU nano";

    /// Header row plus the rule below it.
    pub const HEADER_ROWS: u16 = 2;

    /// Status row, rule, and two shortcut rows.
    pub const FOOTER_ROWS: u16 = 4;

    pub const SHORTCUTS: [&str; 2] = [
        "^G Get Help  ^O Write Out  ^W Where Is  ^K Cut Text  ^J Justify   ^C Cancel",
        "^X Exit      ^R Read File  ^\\ Replace   ^U Paste     ^T To Spell",
    ];

    pub const RULE: char = '─';
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Settings that may be overridden at startup.
///
/// Every field is optional in the TOML source; missing keys keep the
/// defaults above.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Initial working directory and target of a bare `cd`.
    pub home: String,
    /// Banner written by [`Terminal::start`](crate::core::Terminal::start).
    pub welcome: String,
    /// Command history bound.
    pub history_limit: usize,
    /// Scrollback bound for headless screens.
    pub scrollback: usize,
    /// Viewport used until the surface reports its real size.
    pub rows: u16,
    pub cols: u16,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            home: HOME_DIR.to_string(),
            welcome: WELCOME_BANNER.to_string(),
            history_limit: MAX_COMMAND_HISTORY,
            scrollback: SCROLLBACK_LINES,
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
        }
    }
}

impl TerminalConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.rows, self.cols)
    }
}
