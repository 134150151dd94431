//! Shell session state.
//!
//! A [`Session`] owns everything a shell instance mutates: the virtual
//! filesystem, the working directory, command history, and the buffers of
//! files opened in the editor. Nothing is shared between sessions.

use std::collections::HashMap;

use log::{debug, warn};

use crate::config::TerminalConfig;
use crate::core::commands::{Command, CommandResult, execute_command, tokenize};
use crate::core::error::FsError;
use crate::core::history::CommandHistory;
use crate::core::{ROOT, VirtualFs};
use crate::utils::format::local_now;

/// Editing state of a file opened with `nano`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OpenFile {
    /// Unsaved buffer text.
    pub content: String,
    /// Character offset into `content`, in `0..=content.chars().count()`.
    pub cursor: usize,
}

impl OpenFile {
    fn new(content: String) -> Self {
        Self { content, cursor: 0 }
    }

    /// Number of characters in the buffer.
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Byte index of the character at `cursor`.
    pub(crate) fn byte_offset(&self) -> usize {
        self.content
            .char_indices()
            .nth(self.cursor)
            .map_or(self.content.len(), |(i, _)| i)
    }
}

pub struct Session {
    fs: VirtualFs,
    cwd: String,
    home: String,
    history: CommandHistory,
    /// Editor buffers keyed by absolute path.
    open_files: HashMap<String, OpenFile>,
    clock: fn() -> u64,
}

impl Session {
    /// Create a session over the default seed tree.
    pub fn new(config: &TerminalConfig) -> Self {
        Self::with_fs(VirtualFs::seeded(), config)
    }

    /// Create a session over an existing filesystem.
    ///
    /// Falls back to the root when the configured home is not a directory.
    pub fn with_fs(fs: VirtualFs, config: &TerminalConfig) -> Self {
        let mut home = VirtualFs::normalize_path(&config.home);
        if !fs.is_directory(&home) {
            warn!("Home directory '{}' does not exist; using '/'", home);
            home = ROOT.to_string();
        }

        Self {
            fs,
            cwd: home.clone(),
            home,
            history: CommandHistory::new(config.history_limit),
            open_files: HashMap::new(),
            clock: local_now,
        }
    }

    /// Replace the clock used for `ls -l` timestamps.
    pub fn with_clock(mut self, clock: fn() -> u64) -> Self {
        self.clock = clock;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn cwd(&self) -> &str {
        &self.cwd
    }

    /// Change the working directory. `path` must already be normalized.
    pub fn set_cwd(&mut self, path: impl Into<String>) {
        let path = path.into();
        debug_assert!(self.fs.is_directory(&path), "cwd must be a directory");
        self.cwd = path;
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn fs(&self) -> &VirtualFs {
        &self.fs
    }

    pub fn fs_mut(&mut self) -> &mut VirtualFs {
        &mut self.fs
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn history_mut(&mut self) -> &mut CommandHistory {
        &mut self.history
    }

    /// Current local wall-clock time in seconds since the epoch.
    pub fn now(&self) -> u64 {
        (self.clock)()
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Run one input line.
    ///
    /// Blank lines produce nothing and are not recorded. Anything else is
    /// pushed to history as typed, then tokenized, parsed and executed.
    pub fn run_line(&mut self, line: &str) -> CommandResult {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return CommandResult::empty();
        }

        self.history.push(trimmed);
        let tokens = tokenize(trimmed);
        let Some((name, args)) = tokens.split_first() else {
            return CommandResult::empty();
        };

        let command = Command::parse(name, args);
        debug!("Executing {:?} in {}", command, self.cwd);
        execute_command(command, self)
    }

    /// Move the working directory up to its nearest surviving ancestor.
    pub fn retreat_cwd(&mut self) {
        while !self.fs.is_directory(&self.cwd) {
            self.cwd = VirtualFs::parent_path(&self.cwd);
        }
    }

    // =========================================================================
    // Editor Buffers
    // =========================================================================

    /// Open `path` for editing, returning its buffer.
    ///
    /// A buffer that is already open is reused as is. Otherwise
    /// the buffer starts from the file's content (empty if the file does not
    /// exist yet) with the cursor at the start.
    pub fn open_file(&mut self, path: &str) -> &mut OpenFile {
        let fs = &self.fs;
        self.open_files.entry(path.to_string()).or_insert_with(|| {
            let content = fs.read_file(path).unwrap_or("").to_string();
            OpenFile::new(content)
        })
    }

    pub fn buffer(&self, path: &str) -> Option<&OpenFile> {
        self.open_files.get(path)
    }

    /// Drop the buffer for `path` without saving.
    pub fn close_file(&mut self, path: &str) -> Option<OpenFile> {
        self.open_files.remove(path)
    }

    /// Write the buffer for `path` to the filesystem.
    ///
    /// Returns the number of lines written. A path with no open buffer saves
    /// as an empty file.
    pub fn save_file(&mut self, path: &str) -> Result<usize, FsError> {
        let content = self
            .open_files
            .get(path)
            .map(|f| f.content.clone())
            .unwrap_or_default();
        self.fs.write_file(path, &content)?;
        debug!("Saved {} ({} bytes)", path, content.len());
        Ok(content.split('\n').count())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(&TerminalConfig::default())
    }

    #[test]
    fn test_starts_at_home() {
        let s = session();
        assert_eq!(s.cwd(), "/home/user");
        assert_eq!(s.home(), "/home/user");
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_missing_home_falls_back_to_root() {
        let config = TerminalConfig {
            home: "/nowhere".to_string(),
            ..TerminalConfig::default()
        };
        let s = Session::new(&config);
        assert_eq!(s.cwd(), "/");
    }

    #[test]
    fn test_blank_lines_are_not_recorded() {
        let mut s = session();
        assert_eq!(s.run_line("   "), CommandResult::empty());
        assert!(s.history().is_empty());
    }

    #[test]
    fn test_lines_are_recorded_trimmed() {
        let mut s = session();
        s.run_line("  pwd ");
        s.run_line("bogus");
        assert_eq!(s.history().iter().collect::<Vec<_>>(), vec!["bogus", "pwd"]);
    }

    #[test]
    fn test_retreat_cwd() {
        let mut s = session();
        s.set_cwd("/home/user/projects");
        s.fs_mut().remove("/home/user").unwrap();
        s.retreat_cwd();
        assert_eq!(s.cwd(), "/home");
    }

    #[test]
    fn test_open_file_seeds_from_content() {
        let mut s = session();
        let buffer = s.open_file("/etc/hosts");
        assert!(buffer.content.starts_with("127.0.0.1"));
        assert_eq!(buffer.cursor, 0);

        let fresh = s.open_file("/home/user/new.txt");
        assert!(fresh.is_empty());
    }

    #[test]
    fn test_open_file_reuses_buffer() {
        let mut s = session();
        {
            let buffer = s.open_file("/home/user/a.txt");
            buffer.content.push_str("draft");
            buffer.cursor = 5;
        }
        let again = s.open_file("/home/user/a.txt");
        assert_eq!(again.content, "draft");
        assert_eq!(again.cursor, 5);
    }

    #[test]
    fn test_save_file() {
        let mut s = session();
        s.open_file("/home/user/a.txt").content = "one\ntwo".to_string();
        assert_eq!(s.save_file("/home/user/a.txt"), Ok(2));
        assert_eq!(s.fs().read_file("/home/user/a.txt"), Ok("one\ntwo"));
        assert_eq!(s.fs().list_dir("/home/user").unwrap().last().unwrap(), "a.txt");
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let mut s = session();
        s.open_file("/nope/a.txt");
        assert_eq!(s.save_file("/nope/a.txt"), Err(FsError::ParentMissing));
    }

    #[test]
    fn test_byte_offset_multibyte() {
        let file = OpenFile {
            content: "héllo".to_string(),
            cursor: 2,
        };
        assert_eq!(file.byte_offset(), 3);
        assert_eq!(file.len(), 5);
    }
}
