use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent};
use tracing::{debug, info};

use crate::backend::FsBackend;
use crate::dialog::{DialogSession, SessionStatus};
use crate::model::{
    AppState, Command, Event, PanelId, PanelState, visible_rows_for_height,
};
use crate::navigation::{enter_selected, reload_panel};

pub struct App<B: FsBackend> {
    state: AppState,
    running: bool,
    backend: B,
}

impl<B: FsBackend> App<B> {
    pub fn bootstrap(cwd: PathBuf, terminal_height: u16, backend: B) -> Self {
        info!(
            "starting in {} ({} backend)",
            cwd.display(),
            backend.backend_name()
        );
        let mut app = Self {
            state: AppState::new(cwd, terminal_height),
            running: true,
            backend,
        };
        app.reload(PanelId::Left);
        app.reload(PanelId::Right);
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Processes one event to completion. Returns whether a redraw is needed.
    pub fn on_event(&mut self, event: Event) -> bool {
        match event {
            Event::Input(key) => {
                if let Some(redraw) = self.handle_dialog_input(&key) {
                    return redraw;
                }

                match map_key_to_command(&key) {
                    Some(command) => self.apply_command(command),
                    None => false,
                }
            }
            Event::Tick => self
                .state
                .dialog
                .as_mut()
                .is_some_and(|dialog| dialog.expire_banner(Instant::now())),
            Event::Resize { height } => {
                self.state.visible_rows = visible_rows_for_height(height);
                let rows = self.state.visible_rows;
                self.state.left_panel.ensure_selection_visible(rows);
                self.state.right_panel.ensure_selection_visible(rows);
                true
            }
        }
    }

    fn apply_command(&mut self, command: Command) -> bool {
        let rows = self.state.visible_rows;
        match command {
            Command::Quit => {
                self.running = false;
                false
            }
            Command::SwitchPanel => {
                self.state.active_panel = self.state.active_panel.other();
                debug!("active panel: {:?}", self.state.active_panel);
                true
            }
            Command::MoveSelectionUp => {
                self.active_panel_mut().move_selection(-1, rows);
                true
            }
            Command::MoveSelectionDown => {
                self.active_panel_mut().move_selection(1, rows);
                true
            }
            Command::PageUp => {
                self.active_panel_mut().page_move(-1, rows);
                true
            }
            Command::PageDown => {
                self.active_panel_mut().page_move(1, rows);
                true
            }
            Command::OpenSelected => {
                let panel = self.state.panel_mut(self.state.active_panel);
                // Failures are already stored inline on the pane.
                enter_selected(panel, &self.backend).unwrap_or(true)
            }
            Command::Mkdir => {
                self.state.dialog = Some(DialogSession::create_directory(self.state.active_panel));
                debug!("mkdir dialog opened");
                true
            }
            Command::Delete => self.open_delete_dialog(),
            Command::Help
            | Command::Menu
            | Command::View
            | Command::Edit
            | Command::Copy
            | Command::Move => {
                debug!("{command:?} is not implemented");
                false
            }
        }
    }

    fn open_delete_dialog(&mut self) -> bool {
        let panel_id = self.state.active_panel;
        let Some(target) = self.state.panel(panel_id).selected_entry().cloned() else {
            return false;
        };
        match DialogSession::confirm_delete(panel_id, target) {
            Some(session) => {
                debug!("delete dialog opened");
                self.state.dialog = Some(session);
                true
            }
            None => false,
        }
    }

    /// While a session is open it owns every key; `None` means no session.
    fn handle_dialog_input(&mut self, key: &KeyEvent) -> Option<bool> {
        let mut session = self.state.dialog.take()?;
        let panel = self.state.panel_mut(session.panel);
        match session.handle_key(key, panel, &self.backend) {
            SessionStatus::Open => self.state.dialog = Some(session),
            SessionStatus::Terminated => debug!("{} dialog closed", session.title()),
        }
        Some(true)
    }

    fn active_panel_mut(&mut self) -> &mut PanelState {
        self.state.panel_mut(self.state.active_panel)
    }

    fn reload(&mut self, panel_id: PanelId) {
        let panel = self.state.panel_mut(panel_id);
        if let Err(err) = reload_panel(panel, &self.backend) {
            debug!("initial listing of {panel_id:?} failed: {err}");
        }
    }
}

fn map_key_to_command(key: &KeyEvent) -> Option<Command> {
    match key.code {
        KeyCode::Char('q') if key.modifiers.is_empty() => Some(Command::Quit),
        KeyCode::F(9) | KeyCode::F(10) => Some(Command::Quit),
        KeyCode::Tab => Some(Command::SwitchPanel),
        KeyCode::Up => Some(Command::MoveSelectionUp),
        KeyCode::Down => Some(Command::MoveSelectionDown),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        KeyCode::Enter => Some(Command::OpenSelected),
        KeyCode::F(1) => Some(Command::Help),
        KeyCode::F(2) => Some(Command::Menu),
        KeyCode::F(3) => Some(Command::View),
        KeyCode::F(4) => Some(Command::Edit),
        KeyCode::F(5) => Some(Command::Copy),
        KeyCode::F(6) => Some(Command::Move),
        KeyCode::F(7) => Some(Command::Mkdir),
        KeyCode::F(8) => Some(Command::Delete),
        _ => None,
    }
}
