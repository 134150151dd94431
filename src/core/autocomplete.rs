//! Tab autocomplete for command names and paths.
//!
//! Completes:
//! - Command names from the registry (e.g., "cl" → "clear ")
//! - Directory paths for `cd`, `ls`, `mkdir`
//! - File or directory paths for `cat`, `touch`, `rm`, `nano`
//!
//! A single match completes the whole line. Several matches extend the line
//! to their common prefix and list the candidates.

use crate::core::{Command, VirtualFs};

// ============================================================================
// Public Types
// ============================================================================

/// Result of an autocomplete attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AutocompleteResult {
    /// Single match: the completed input line.
    Single(String),
    /// Multiple matches: (input extended to the common prefix, candidates).
    Multiple(String, Vec<String>),
    /// No matches found.
    None,
}

// ============================================================================
// Configuration
// ============================================================================

/// Commands whose operand must be a directory.
const DIR_COMMANDS: &[&str] = &["cd", "ls", "mkdir"];

/// Commands whose operand may be any entry.
const FILE_COMMANDS: &[&str] = &["cat", "touch", "rm", "nano"];

// ============================================================================
// Completion Context
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CompletionMode {
    Command,
    DirectoryPath,
    FilePath,
    None,
}

impl CompletionMode {
    /// Determine completion mode from input.
    fn from_input(input: &str) -> (Self, Vec<&str>) {
        let parts: Vec<&str> = input.splitn(2, ' ').collect();

        if parts.len() == 1 {
            return (Self::Command, parts);
        }

        let cmd_lower = parts[0].to_lowercase();
        let mode = if DIR_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::DirectoryPath
        } else if FILE_COMMANDS.contains(&cmd_lower.as_str()) {
            Self::FilePath
        } else {
            Self::None
        };

        (mode, parts)
    }

    fn dirs_only(self) -> bool {
        matches!(self, Self::DirectoryPath)
    }
}

// ============================================================================
// Path Parsing
// ============================================================================

/// Parsed path components for autocomplete.
struct ParsedPath<'a> {
    /// Directory prefix as typed (e.g., "projects/" or "").
    dir_part: &'a str,
    /// Name being completed.
    name_part: &'a str,
    /// Absolute directory to search.
    search_dir: String,
}

impl<'a> ParsedPath<'a> {
    fn parse(partial: &'a str, cwd: &str) -> Self {
        let (dir_part, name_part) = match partial.rfind('/') {
            Some(idx) => (&partial[..=idx], &partial[idx + 1..]),
            None => ("", partial),
        };

        let search_dir = if dir_part.is_empty() {
            cwd.to_string()
        } else if dir_part == "/" {
            "/".to_string()
        } else {
            VirtualFs::resolve(dir_part.trim_end_matches('/'), cwd)
        };

        Self {
            dir_part,
            name_part,
            search_dir,
        }
    }
}

// ============================================================================
// Public API
// ============================================================================

/// Perform autocomplete on Tab press.
pub fn autocomplete(input: &str, cwd: &str, fs: &VirtualFs) -> AutocompleteResult {
    let input = input.trim_start();
    if input.is_empty() {
        return AutocompleteResult::None;
    }

    let (mode, parts) = CompletionMode::from_input(input);

    match mode {
        CompletionMode::Command => complete_command(parts[0]),
        CompletionMode::DirectoryPath | CompletionMode::FilePath => {
            complete_path(parts[0], parts[1], cwd, fs, mode.dirs_only())
        }
        CompletionMode::None => AutocompleteResult::None,
    }
}

// ============================================================================
// Command Completion
// ============================================================================

fn complete_command(partial: &str) -> AutocompleteResult {
    let partial_lower = partial.to_lowercase();
    let matches: Vec<String> = Command::names()
        .filter(|cmd| cmd.starts_with(&partial_lower))
        .map(str::to_string)
        .collect();

    match matches.len() {
        0 => AutocompleteResult::None,
        1 => AutocompleteResult::Single(format!("{} ", matches[0])),
        _ => {
            let common = find_common_prefix(&matches);
            AutocompleteResult::Multiple(common, matches)
        }
    }
}

// ============================================================================
// Path Completion
// ============================================================================

fn complete_path(
    cmd: &str,
    partial: &str,
    cwd: &str,
    fs: &VirtualFs,
    dirs_only: bool,
) -> AutocompleteResult {
    let parsed = ParsedPath::parse(partial, cwd);

    let Ok(entries) = fs.entries(&parsed.search_dir) else {
        return AutocompleteResult::None;
    };

    let matches: Vec<(&str, bool)> = entries
        .iter()
        .filter(|entry| !dirs_only || entry.is_dir)
        .filter(|entry| entry.name.starts_with(parsed.name_part))
        .map(|entry| (entry.name.as_str(), entry.is_dir))
        .collect();

    build_path_result(cmd, &parsed, &matches)
}

fn build_path_result(cmd: &str, parsed: &ParsedPath, matches: &[(&str, bool)]) -> AutocompleteResult {
    match matches {
        [] => AutocompleteResult::None,
        [(name, is_dir)] => {
            let suffix = if *is_dir { "/" } else { " " };
            AutocompleteResult::Single(format!("{} {}{}{}", cmd, parsed.dir_part, name, suffix))
        }
        _ => {
            let names: Vec<String> = matches.iter().map(|(name, _)| name.to_string()).collect();
            let common = find_common_prefix(&names);

            let display_names = matches
                .iter()
                .map(|(name, is_dir)| {
                    if *is_dir {
                        format!("{}/", name)
                    } else {
                        name.to_string()
                    }
                })
                .collect();

            let line = format!("{} {}{}", cmd, parsed.dir_part, common);
            AutocompleteResult::Multiple(line, display_names)
        }
    }
}

// ============================================================================
// Utilities
// ============================================================================

/// Longest common prefix of `strings`, on character boundaries.
fn find_common_prefix(strings: &[String]) -> String {
    let Some((first, rest)) = strings.split_first() else {
        return String::new();
    };

    let mut prefix_len = first.chars().count();
    for s in rest {
        prefix_len = first
            .chars()
            .zip(s.chars())
            .take(prefix_len)
            .take_while(|(a, b)| a == b)
            .count();
    }

    first.chars().take(prefix_len).collect()
}

// ============================================================================
// Tests
// ============================================================================
