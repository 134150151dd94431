//! Command execution logic.
//!
//! Contains the `execute_command` function that runs parsed commands
//! against the session's virtual filesystem and working directory.
//! Every failure is turned into a single output line here; nothing
//! propagates past the handler.

use crate::config::{BLOCKS_PER_ENTRY, HELP_NAME_WIDTH};
use crate::core::error::{FsError, ShellError};
use crate::core::{Session, VirtualFs};
use crate::models::OutputLine;
use crate::utils::format::{format_date_short, format_long_entry};

use super::{Command, CommandResult, PathArg, REGISTRY, ShellAction};

/// Execute a parsed command.
///
/// May mutate the filesystem (`mkdir`, `touch`, `rm`) or the working
/// directory (`cd`, `rm`). Screen clearing and editor takeover are returned
/// as a [`ShellAction`] for the terminal to carry out.
pub fn execute_command(cmd: Command, session: &mut Session) -> CommandResult {
    match cmd {
        Command::Pwd => CommandResult::output(vec![OutputLine::text(session.cwd())]),
        Command::Ls { path, long } => execute_ls(path, long, session),
        Command::Cd(path) => execute_cd(path, session),
        Command::Cat(file) => execute_cat(file, session),
        Command::Clear => CommandResult::action(ShellAction::ClearScreen),
        Command::Mkdir(path) => execute_mkdir(path, session),
        Command::Touch(path) => execute_touch(path, session),
        Command::Rm(path) => execute_rm(path, session),
        Command::Help => execute_help(),
        Command::Nano(file) => execute_nano(file, session),
        Command::Unknown(name) => CommandResult::output(vec![
            OutputLine::error(ShellError::UnknownCommand(name).to_string()),
            OutputLine::text("Type \"help\" for available commands"),
        ]),
    }
}

fn missing_operand(command: &'static str, operand: &'static str) -> CommandResult {
    CommandResult::error(ShellError::MissingOperand { command, operand }.to_string())
}

/// Execute `ls` command.
fn execute_ls(path: Option<PathArg>, long: bool, session: &Session) -> CommandResult {
    let target = path.as_ref().map_or(".", PathArg::as_str);
    let resolved = VirtualFs::resolve(target, session.cwd());
    let fs = session.fs();

    let entries = match fs.entries(&resolved) {
        Ok(entries) => entries,
        Err(e) => {
            return CommandResult::error(format!("ls: cannot access '{}': {}", target, e));
        }
    };

    if !long {
        if entries.is_empty() {
            return CommandResult::empty();
        }
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        return CommandResult::output(vec![OutputLine::text(names.join("  "))]);
    }

    // Long format: synthesized from the entry kind, not a real stat
    let date = format_date_short(session.now());
    let mut lines = vec![OutputLine::text(format!(
        "total {}",
        entries.len() * BLOCKS_PER_ENTRY
    ))];
    lines.extend(entries.iter().map(|entry| {
        let size = fs.size(&entry.path).unwrap_or(0);
        OutputLine::text(format_long_entry(entry.is_dir, size, &date, &entry.name))
    }));
    CommandResult::output(lines)
}

/// Execute `cd` command.
fn execute_cd(path: Option<PathArg>, session: &mut Session) -> CommandResult {
    let Some(path) = path else {
        let home = session.home().to_string();
        session.set_cwd(home);
        return CommandResult::empty();
    };

    let target = VirtualFs::resolve(path.as_str(), session.cwd());
    let fs = session.fs();
    if fs.is_directory(&target) {
        session.set_cwd(target);
        return CommandResult::empty();
    }

    let reason = if fs.exists(&target) {
        FsError::NotADirectory
    } else {
        FsError::PathNotFound
    };
    CommandResult::error(format!("cd: {}: {}", path, reason))
}

/// Execute `cat` command.
fn execute_cat(file: Option<PathArg>, session: &Session) -> CommandResult {
    let Some(file) = file else {
        return missing_operand("cat", "operand");
    };

    let resolved = VirtualFs::resolve(file.as_str(), session.cwd());
    match session.fs().read_file(&resolved) {
        Ok(content) => CommandResult::output(content.split('\n').map(OutputLine::text).collect()),
        Err(e) => CommandResult::error(format!("cat: {}: {}", file, e)),
    }
}

/// Execute `mkdir` command.
fn execute_mkdir(path: Option<PathArg>, session: &mut Session) -> CommandResult {
    let Some(path) = path else {
        return missing_operand("mkdir", "operand");
    };

    let resolved = VirtualFs::resolve(path.as_str(), session.cwd());
    match session.fs_mut().create_dir(&resolved) {
        Ok(()) => CommandResult::empty(),
        Err(e) => CommandResult::error(format!(
            "mkdir: cannot create directory '{}': {}",
            path, e
        )),
    }
}

/// Execute `touch` command.
fn execute_touch(path: Option<PathArg>, session: &mut Session) -> CommandResult {
    let Some(path) = path else {
        return missing_operand("touch", "file operand");
    };

    let resolved = VirtualFs::resolve(path.as_str(), session.cwd());
    match session.fs_mut().create_file(&resolved) {
        Ok(()) => CommandResult::empty(),
        Err(e) => CommandResult::error(format!("touch: cannot touch '{}': {}", path, e)),
    }
}

/// Execute `rm` command.
fn execute_rm(path: Option<PathArg>, session: &mut Session) -> CommandResult {
    let Some(path) = path else {
        return missing_operand("rm", "operand");
    };

    let resolved = VirtualFs::resolve(path.as_str(), session.cwd());
    match session.fs_mut().remove(&resolved) {
        Ok(()) => {
            // The working directory may have been inside the removed subtree
            session.retreat_cwd();
            CommandResult::empty()
        }
        Err(e) => CommandResult::error(format!("rm: cannot remove '{}': {}", path, e)),
    }
}

/// Execute `help` command.
fn execute_help() -> CommandResult {
    let mut lines = vec![OutputLine::text("Available commands:")];
    lines.extend(REGISTRY.iter().map(|(name, description)| {
        OutputLine::text(format!(
            "  {:<width$}{}",
            name,
            description,
            width = HELP_NAME_WIDTH
        ))
    }));
    CommandResult::output(lines)
}

/// Execute `nano` command.
fn execute_nano(file: Option<PathArg>, session: &Session) -> CommandResult {
    let Some(file) = file else {
        return missing_operand("nano", "filename");
    };

    let path = VirtualFs::resolve(file.as_str(), session.cwd());
    if session.fs().is_directory(&path) {
        return CommandResult::error(format!("nano: {}: {}", file, FsError::IsADirectory));
    }

    CommandResult::action(ShellAction::OpenEditor {
        path,
        title: file.to_string(),
    })
}

// =============================================================================
// Tests
// =============================================================================
