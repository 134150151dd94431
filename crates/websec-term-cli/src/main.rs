//! Native terminal frontend for the websec-term engine.
//!
//! Puts the controlling terminal into raw mode, forwards every key press to
//! the engine and applies the returned directives through crossterm.

mod backend;

use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use websec_term::config::TerminalConfig;
use websec_term::core::{Session, Surface, Terminal, VirtualFs};
use websec_term::models::{Manifest, Viewport};

use backend::{CrosstermSurface, RawModeGuard, convert_key, is_quit};

/// Attempts at reading the terminal size after a resize event.
const RESIZE_RETRIES: usize = 3;

#[derive(Parser, Debug)]
#[command(name = "websec-term", version, about = "Virtual shell over an in-memory filesystem")]
struct Args {
    /// TOML file overriding home directory, banner, history and viewport
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Filesystem seed manifest (TOML, or JSON with a .json extension)
    #[arg(long, value_name = "PATH")]
    seed: Option<PathBuf>,

    /// Write logs here; the screen belongs to the shell while it runs
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_ref())?;

    let config = match &args.config {
        Some(path) => TerminalConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => TerminalConfig::default(),
    };
    let fs = match &args.seed {
        Some(path) => {
            let manifest = Manifest::load(path)
                .with_context(|| format!("failed to load seed {}", path.display()))?;
            VirtualFs::from_manifest(&manifest)
        }
        None => VirtualFs::seeded(),
    };

    let session = Session::with_fs(fs, &config);
    let mut terminal = Terminal::with_session(session, &config);

    let _guard = RawModeGuard::enter().context("failed to enter raw mode")?;
    let mut surface = CrosstermSurface::new(config.viewport());
    if let Some(viewport) = probe_size() {
        surface.set_viewport(viewport);
        terminal.resize(viewport);
    }

    surface.apply(&terminal.start())?;
    run(&mut terminal, &mut surface)?;
    info!("Session ended");
    Ok(())
}

fn run(terminal: &mut Terminal, surface: &mut CrosstermSurface) -> Result<()> {
    loop {
        match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if !terminal.in_editor() && terminal.line_editor().buffer().is_empty() && is_quit(&key) {
                    return Ok(());
                }
                let Some(event) = convert_key(&key) else {
                    continue;
                };
                let directives = terminal.handle_key(&event);
                surface.apply(&directives)?;
            }
            Event::Resize(cols, rows) => {
                let viewport = probe_size().unwrap_or(Viewport::new(rows, cols));
                surface.set_viewport(viewport);
                let directives = terminal.resize(viewport);
                surface.apply(&directives)?;
            }
            _ => {}
        }
    }
}

/// Read the terminal size, retrying a few times before giving up.
fn probe_size() -> Option<Viewport> {
    for attempt in 1..=RESIZE_RETRIES {
        match crossterm::terminal::size() {
            Ok((cols, rows)) => return Some(Viewport::new(rows, cols)),
            Err(e) => warn!("Size probe {} of {} failed: {}", attempt, RESIZE_RETRIES, e),
        }
    }
    None
}

fn init_logging(log_file: Option<&PathBuf>) -> Result<()> {
    let env = env_logger::Env::default().default_filter_or(if log_file.is_some() {
        "info"
    } else {
        "off"
    });
    let mut builder = env_logger::Builder::from_env(env);

    if let Some(path) = log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        builder.target(env_logger::Target::Pipe(Box::new(file)));
    }

    builder.init();
    Ok(())
}
