//! Terminal: routes keystrokes to whichever input mode is on top.
//!
//! The base mode is the line editor. `nano` pushes an editor mode that owns
//! every keystroke until Ctrl+X pops it again.

use log::{debug, info};

use crate::config::{PROMPT, TerminalConfig};
use crate::core::commands::ShellAction;
use crate::core::editor::NanoEditor;
use crate::core::line_editor::LineEditor;
use crate::core::Session;
use crate::models::{Directive, KeyEvent, OutputLine, Viewport};

/// A keystroke consumer on the mode stack.
#[derive(Clone, Debug)]
pub enum InputMode {
    Line,
    Editor(NanoEditor),
}

pub struct Terminal {
    session: Session,
    line_editor: LineEditor,
    /// Never empty: `Line` sits at the bottom.
    modes: Vec<InputMode>,
    viewport: Viewport,
    welcome: String,
}

impl Terminal {
    pub fn new(config: &TerminalConfig) -> Self {
        Self::with_session(Session::new(config), config)
    }

    pub fn with_session(session: Session, config: &TerminalConfig) -> Self {
        Self {
            session,
            line_editor: LineEditor::new(),
            modes: vec![InputMode::Line],
            viewport: config.viewport(),
            welcome: config.welcome.clone(),
        }
    }

    /// Banner and first prompt.
    pub fn start(&self) -> Vec<Directive> {
        info!("Terminal started in {}", self.session.cwd());
        vec![
            Directive::WriteLine(OutputLine::info(self.welcome.as_str())),
            Directive::write(PROMPT),
        ]
    }

    /// Route one keystroke to the active mode.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Vec<Directive> {
        if let Some(InputMode::Editor(editor)) = self.modes.last_mut() {
            let response = editor.handle(event, &mut self.session, self.viewport);
            if response.exit {
                self.modes.pop();
                debug!("Returned to line mode");
            }
            return response.directives;
        }

        let response = self.line_editor.handle(event, &mut self.session, self.viewport);
        let mut directives = response.directives;
        if let Some(action) = response.action {
            directives.extend(self.perform(action));
        }
        directives
    }

    /// Adopt a new surface size. Redraws the editor when it is active;
    /// line mode needs nothing.
    pub fn resize(&mut self, viewport: Viewport) -> Vec<Directive> {
        if viewport == self.viewport {
            return Vec::new();
        }
        debug!("Resized to {}x{}", viewport.cols, viewport.rows);
        self.viewport = viewport;

        match self.modes.last_mut() {
            Some(InputMode::Editor(editor)) => editor.redraw(&mut self.session, viewport).directives,
            _ => Vec::new(),
        }
    }

    fn perform(&mut self, action: ShellAction) -> Vec<Directive> {
        match action {
            ShellAction::ClearScreen => vec![Directive::Clear, Directive::write(PROMPT)],
            ShellAction::OpenEditor { path, title } => {
                let (editor, frame) = NanoEditor::open(path, title, &mut self.session, self.viewport);
                self.modes.push(InputMode::Editor(editor));
                debug!("Entered editor mode");
                frame
            }
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn line_editor(&self) -> &LineEditor {
        &self.line_editor
    }

    pub fn in_editor(&self) -> bool {
        matches!(self.modes.last(), Some(InputMode::Editor(_)))
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }
}
