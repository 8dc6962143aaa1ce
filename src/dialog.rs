use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{info, warn};

use crate::backend::FsBackend;
use crate::errors::AppError;
use crate::model::{FsEntry, PanelId, PanelState};
use crate::navigation::{descend_path, reload_panel};

pub const MAX_NAME_LEN: usize = 32;
pub const ERROR_BANNER_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    TextInput,
    OkButton,
    CancelButton,
    YesButton,
    NoButton,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogKind {
    CreateDirectory { text: String },
    ConfirmDelete { target: FsEntry },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Open,
    Terminated,
}

#[derive(Debug, Clone)]
pub struct ErrorBanner {
    pub message: String,
    shown_at: Instant,
}

impl ErrorBanner {
    fn new(message: String) -> Self {
        Self {
            message,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= ERROR_BANNER_DURATION
    }
}

/// A modal session spawned from one pane. While it is open it receives
/// every key; it ends on success, an explicit cancel, or Escape.
#[derive(Debug, Clone)]
pub struct DialogSession {
    pub panel: PanelId,
    pub kind: DialogKind,
    pub focus: FocusTarget,
    pub error: Option<ErrorBanner>,
}

impl DialogSession {
    pub fn create_directory(panel: PanelId) -> Self {
        Self {
            panel,
            kind: DialogKind::CreateDirectory {
                text: String::new(),
            },
            focus: FocusTarget::TextInput,
            error: None,
        }
    }

    /// Refuses the synthetic parent link. Focus starts on "No".
    pub fn confirm_delete(panel: PanelId, target: FsEntry) -> Option<Self> {
        if target.is_virtual {
            return None;
        }
        Some(Self {
            panel,
            kind: DialogKind::ConfirmDelete { target },
            focus: FocusTarget::NoButton,
            error: None,
        })
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            DialogKind::CreateDirectory { .. } => "Make directory",
            DialogKind::ConfirmDelete { .. } => "Delete",
        }
    }

    pub fn message(&self) -> String {
        match &self.kind {
            DialogKind::CreateDirectory { .. } => "Enter directory name:".to_string(),
            DialogKind::ConfirmDelete { target } if target.is_dir() => {
                format!("Delete directory \"{}\"?", target.name)
            }
            DialogKind::ConfirmDelete { target } => format!("Delete file \"{}\"?", target.name),
        }
    }

    pub fn text(&self) -> Option<&str> {
        match &self.kind {
            DialogKind::CreateDirectory { text } => Some(text.as_str()),
            DialogKind::ConfirmDelete { .. } => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|banner| banner.message.as_str())
    }

    /// Clears the banner once it has been shown long enough.
    pub fn expire_banner(&mut self, now: Instant) -> bool {
        if self.error.as_ref().is_some_and(|banner| banner.is_expired(now)) {
            self.error = None;
            return true;
        }
        false
    }

    pub fn handle_key(
        &mut self,
        key: &KeyEvent,
        panel: &mut PanelState,
        backend: &dyn FsBackend,
    ) -> SessionStatus {
        if key.code == KeyCode::Esc {
            return SessionStatus::Terminated;
        }

        match self.kind {
            DialogKind::CreateDirectory { .. } => self.handle_create_key(key, panel, backend),
            DialogKind::ConfirmDelete { .. } => self.handle_delete_key(key, panel, backend),
        }
    }

    fn handle_create_key(
        &mut self,
        key: &KeyEvent,
        panel: &mut PanelState,
        backend: &dyn FsBackend,
    ) -> SessionStatus {
        match (self.focus, key.code) {
            (FocusTarget::TextInput | FocusTarget::OkButton, KeyCode::Enter) => {
                self.submit_create(panel, backend)
            }
            (FocusTarget::CancelButton, KeyCode::Enter) => SessionStatus::Terminated,
            (FocusTarget::TextInput, KeyCode::Down) => {
                self.focus = FocusTarget::OkButton;
                SessionStatus::Open
            }
            (FocusTarget::OkButton | FocusTarget::CancelButton, KeyCode::Up) => {
                self.focus = FocusTarget::TextInput;
                SessionStatus::Open
            }
            (FocusTarget::OkButton, KeyCode::Right) => {
                self.focus = FocusTarget::CancelButton;
                SessionStatus::Open
            }
            (FocusTarget::CancelButton, KeyCode::Left) => {
                self.focus = FocusTarget::OkButton;
                SessionStatus::Open
            }
            (FocusTarget::TextInput, KeyCode::Backspace) => {
                if let DialogKind::CreateDirectory { text } = &mut self.kind {
                    text.pop();
                }
                SessionStatus::Open
            }
            (FocusTarget::TextInput, KeyCode::Char(c)) if is_text_input(key, c) => {
                if let DialogKind::CreateDirectory { text } = &mut self.kind {
                    if text.chars().count() < MAX_NAME_LEN {
                        text.push(c);
                    }
                }
                SessionStatus::Open
            }
            _ => SessionStatus::Open,
        }
    }

    fn handle_delete_key(
        &mut self,
        key: &KeyEvent,
        panel: &mut PanelState,
        backend: &dyn FsBackend,
    ) -> SessionStatus {
        match key.code {
            KeyCode::Left | KeyCode::Right => {
                self.focus = match self.focus {
                    FocusTarget::YesButton => FocusTarget::NoButton,
                    _ => FocusTarget::YesButton,
                };
                SessionStatus::Open
            }
            KeyCode::Enter if self.focus == FocusTarget::YesButton => {
                self.submit_delete(panel, backend)
            }
            KeyCode::Enter => SessionStatus::Terminated,
            _ => SessionStatus::Open,
        }
    }

    fn submit_create(&mut self, panel: &mut PanelState, backend: &dyn FsBackend) -> SessionStatus {
        let DialogKind::CreateDirectory { text } = &self.kind else {
            return SessionStatus::Open;
        };
        if text.is_empty() {
            return SessionStatus::Open;
        }

        let target = descend_path(&panel.cwd, text);
        match backend.make_directory(&target) {
            Ok(()) => {
                info!("created directory {}", target.display());
                relist_after_change(panel, backend);
                SessionStatus::Terminated
            }
            Err(err) => {
                warn!("mkdir failed: {err}");
                self.error = Some(ErrorBanner::new(format!(
                    "Error: Can not create directory! ({})",
                    err.reason()
                )));
                SessionStatus::Open
            }
        }
    }

    fn submit_delete(&mut self, panel: &mut PanelState, backend: &dyn FsBackend) -> SessionStatus {
        let DialogKind::ConfirmDelete { target } = &self.kind else {
            return SessionStatus::Open;
        };

        let path = descend_path(&panel.cwd, &target.file_name);
        match backend.remove_entry(&path, target.removes_as_directory()) {
            Ok(()) => {
                info!("deleted {}", path.display());
                relist_after_change(panel, backend);
                SessionStatus::Terminated
            }
            Err(err) => {
                warn!("delete failed: {err}");
                let message = delete_failure_banner(target, &err);
                self.error = Some(ErrorBanner::new(message));
                SessionStatus::Open
            }
        }
    }
}

fn is_text_input(key: &KeyEvent, c: char) -> bool {
    !c.is_control()
        && (key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT)
}

fn relist_after_change(panel: &mut PanelState, backend: &dyn FsBackend) {
    if let Err(err) = reload_panel(panel, backend) {
        warn!("refresh after change failed: {err}");
    }
}

fn delete_failure_banner(target: &FsEntry, err: &AppError) -> String {
    match err {
        AppError::DirectoryNotEmpty { .. } => "Error: Directory not empty!".to_string(),
        _ if target.is_dir() => format!("Error: Cannot delete directory! ({})", err.reason()),
        _ => format!("Error: Cannot delete file! ({})", err.reason()),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;
    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::{
        DialogKind, DialogSession, ERROR_BANNER_DURATION, FocusTarget, MAX_NAME_LEN,
        SessionStatus,
    };
    use crate::backend::testing::{Call, RecordingBackend};
    use crate::model::{FsEntry, PanelId, PanelState};
    use crate::navigation::reload_panel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn loaded_panel(path: &Path, backend: &RecordingBackend) -> PanelState {
        let mut panel = PanelState::new(path.to_path_buf());
        reload_panel(&mut panel, backend).expect("initial listing");
        backend.clear();
        panel
    }

    fn type_text(
        session: &mut DialogSession,
        text: &str,
        panel: &mut PanelState,
        backend: &RecordingBackend,
    ) {
        for c in text.chars() {
            assert_eq!(
                session.handle_key(&key(KeyCode::Char(c)), panel, backend),
                SessionStatus::Open
            );
        }
    }

    fn entry_named<'a>(panel: &'a PanelState, name: &str) -> Option<&'a FsEntry> {
        panel.entries.iter().find(|entry| entry.name == name)
    }

    #[test]
    fn create_focus_traversal_follows_directional_keys() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);
        assert_eq!(session.focus, FocusTarget::TextInput);

        let steps = [
            (KeyCode::Right, FocusTarget::TextInput),
            (KeyCode::Down, FocusTarget::OkButton),
            (KeyCode::Left, FocusTarget::OkButton),
            (KeyCode::Right, FocusTarget::CancelButton),
            (KeyCode::Right, FocusTarget::CancelButton),
            (KeyCode::Left, FocusTarget::OkButton),
            (KeyCode::Up, FocusTarget::TextInput),
            (KeyCode::Up, FocusTarget::TextInput),
            (KeyCode::Down, FocusTarget::OkButton),
            (KeyCode::Right, FocusTarget::CancelButton),
            (KeyCode::Up, FocusTarget::TextInput),
        ];
        for (code, expected) in steps {
            assert_eq!(
                session.handle_key(&key(code), &mut panel, &backend),
                SessionStatus::Open
            );
            assert_eq!(session.focus, expected, "after {code:?}");
        }
        assert_eq!(backend.mutation_count(), 0);
    }

    #[test]
    fn empty_name_submission_is_ignored() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);
        assert_eq!(status, SessionStatus::Open);
        assert!(backend.calls.borrow().is_empty());
        assert!(session.error.is_none());

        session.handle_key(&key(KeyCode::Down), &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);
        assert_eq!(status, SessionStatus::Open);
        assert!(backend.calls.borrow().is_empty());
    }

    #[test]
    fn text_buffer_is_bounded_and_editable() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        type_text(&mut session, &"x".repeat(MAX_NAME_LEN + 8), &mut panel, &backend);
        assert_eq!(session.text().map(|t| t.chars().count()), Some(MAX_NAME_LEN));

        session.handle_key(&key(KeyCode::Backspace), &mut panel, &backend);
        assert_eq!(
            session.text().map(|t| t.chars().count()),
            Some(MAX_NAME_LEN - 1)
        );

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        session.handle_key(&ctrl_c, &mut panel, &backend);
        assert_eq!(
            session.text().map(|t| t.chars().count()),
            Some(MAX_NAME_LEN - 1)
        );
    }

    #[test]
    fn typing_only_reaches_text_input_focus() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        type_text(&mut session, "ab", &mut panel, &backend);
        session.handle_key(&key(KeyCode::Down), &mut panel, &backend);
        type_text(&mut session, "cd", &mut panel, &backend);
        session.handle_key(&key(KeyCode::Backspace), &mut panel, &backend);
        assert_eq!(session.text(), Some("ab"));
    }

    #[test]
    fn leading_separator_name_stays_under_panel_path() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        type_text(&mut session, "/nested", &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);

        assert_eq!(status, SessionStatus::Terminated);
        let calls = backend.calls.borrow();
        let Some(Call::Mkdir(created)) = calls.first() else {
            panic!("expected mkdir call, got {calls:?}");
        };
        assert!(created.starts_with(&panel.cwd), "{created:?}");
        assert!(temp.path().join("nested").is_dir());
        assert!(entry_named(&panel, "nested").is_some());
    }

    #[cfg(unix)]
    #[test]
    fn deletes_file_with_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp = tempfile::tempdir().expect("temp dir");
        let raw = OsStr::from_bytes(b"f\xff");
        fs::write(temp.path().join(raw), b"x").expect("write");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let target = panel
            .entries
            .iter()
            .find(|entry| entry.file_name.as_os_str() == raw)
            .cloned()
            .expect("entry listed");
        let mut session = DialogSession::confirm_delete(PanelId::Left, target).expect("session");

        session.handle_key(&key(KeyCode::Left), &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);

        assert_eq!(status, SessionStatus::Terminated);
        assert!(!temp.path().join(raw).exists());
        assert_eq!(panel.entries.len(), 1);
    }

    #[test]
    fn enter_on_text_input_creates_directory_and_relists() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        type_text(&mut session, "sub", &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);

        assert_eq!(status, SessionStatus::Terminated);
        assert!(temp.path().join("sub").is_dir());
        let created = entry_named(&panel, "sub").expect("new entry listed");
        assert!(created.is_dir());
        assert_eq!(panel.selected_index, 0);
        assert_eq!(
            backend.calls.borrow().first(),
            Some(&Call::Mkdir(temp.path().join("sub")))
        );
    }

    #[test]
    fn enter_on_ok_button_creates_directory() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        type_text(&mut session, "via_ok", &mut panel, &backend);
        session.handle_key(&key(KeyCode::Down), &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);
        assert_eq!(status, SessionStatus::Terminated);
        assert!(temp.path().join("via_ok").is_dir());
    }

    #[test]
    fn mkdir_failure_keeps_session_open_with_banner() {
        let temp = tempfile::tempdir().expect("temp dir");
        let mut backend = RecordingBackend::new(temp.path());
        backend.fail_mkdir = true;
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        type_text(&mut session, "nope", &mut panel, &backend);
        session.handle_key(&key(KeyCode::Down), &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);

        assert_eq!(status, SessionStatus::Open);
        assert_eq!(session.focus, FocusTarget::OkButton);
        assert_eq!(session.text(), Some("nope"));
        let message = session.error_message().expect("banner").to_string();
        assert!(message.contains("Can not create directory"), "{message}");
        assert!(message.contains("permission denied"), "{message}");

        assert!(!session.expire_banner(Instant::now()));
        assert!(session.expire_banner(Instant::now() + ERROR_BANNER_DURATION));
        assert!(session.error.is_none());
        assert_eq!(session.focus, FocusTarget::OkButton);
    }

    #[test]
    fn existing_name_reports_create_failure() {
        let temp = tempfile::tempdir().expect("temp dir");
        fs::create_dir(temp.path().join("dup")).expect("mkdir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let mut session = DialogSession::create_directory(PanelId::Left);

        type_text(&mut session, "dup", &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);
        assert_eq!(status, SessionStatus::Open);
        assert!(
            session
                .error_message()
                .is_some_and(|message| message.contains("already exists"))
        );
    }

    #[test]
    fn escape_and_cancel_terminate_without_effect() {
        let temp = tempfile::tempdir().expect("temp dir");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);

        for focus_moves in [vec![], vec![KeyCode::Down], vec![KeyCode::Down, KeyCode::Right]] {
            let mut session = DialogSession::create_directory(PanelId::Left);
            type_text(&mut session, "kept_out", &mut panel, &backend);
            for code in focus_moves {
                session.handle_key(&key(code), &mut panel, &backend);
            }
            assert_eq!(
                session.handle_key(&key(KeyCode::Esc), &mut panel, &backend),
                SessionStatus::Terminated
            );
        }

        let mut session = DialogSession::create_directory(PanelId::Left);
        type_text(&mut session, "kept_out", &mut panel, &backend);
        session.handle_key(&key(KeyCode::Down), &mut panel, &backend);
        session.handle_key(&key(KeyCode::Right), &mut panel, &backend);
        assert_eq!(
            session.handle_key(&key(KeyCode::Enter), &mut panel, &backend),
            SessionStatus::Terminated
        );

        assert_eq!(backend.mutation_count(), 0);
        assert!(!temp.path().join("kept_out").exists());
    }

    #[test]
    fn confirm_delete_defaults_to_no_and_refuses_parent_link() {
        assert!(DialogSession::confirm_delete(PanelId::Left, FsEntry::parent_link()).is_none());

        let temp = tempfile::tempdir().expect("temp dir");
        fs::write(temp.path().join("a.txt"), b"a").expect("write");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let target = entry_named(&panel, "a.txt").cloned().expect("entry");

        let mut session = DialogSession::confirm_delete(PanelId::Right, target).expect("session");
        assert_eq!(session.focus, FocusTarget::NoButton);
        assert_eq!(session.message(), "Delete file \"a.txt\"?");

        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);
        assert_eq!(status, SessionStatus::Terminated);
        assert_eq!(backend.mutation_count(), 0);
        assert!(temp.path().join("a.txt").exists());
    }

    #[test]
    fn left_and_right_share_one_toggle() {
        let temp = tempfile::tempdir().expect("temp dir");
        fs::write(temp.path().join("a.txt"), b"a").expect("write");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let target = entry_named(&panel, "a.txt").cloned().expect("entry");
        let mut session = DialogSession::confirm_delete(PanelId::Left, target).expect("session");

        session.handle_key(&key(KeyCode::Right), &mut panel, &backend);
        assert_eq!(session.focus, FocusTarget::YesButton);
        session.handle_key(&key(KeyCode::Right), &mut panel, &backend);
        assert_eq!(session.focus, FocusTarget::NoButton);
        session.handle_key(&key(KeyCode::Left), &mut panel, &backend);
        assert_eq!(session.focus, FocusTarget::YesButton);
        session.handle_key(&key(KeyCode::Up), &mut panel, &backend);
        assert_eq!(session.focus, FocusTarget::YesButton);

        assert_eq!(
            session.handle_key(&key(KeyCode::Esc), &mut panel, &backend),
            SessionStatus::Terminated
        );
        assert_eq!(backend.mutation_count(), 0);
    }

    #[test]
    fn yes_deletes_file_and_relists() {
        let temp = tempfile::tempdir().expect("temp dir");
        fs::write(temp.path().join("a.txt"), b"a").expect("write");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let target = entry_named(&panel, "a.txt").cloned().expect("entry");
        let mut session = DialogSession::confirm_delete(PanelId::Left, target).expect("session");

        session.handle_key(&key(KeyCode::Left), &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);

        assert_eq!(status, SessionStatus::Terminated);
        assert!(!temp.path().join("a.txt").exists());
        assert!(entry_named(&panel, "a.txt").is_none());
        assert_eq!(
            backend.calls.borrow().first(),
            Some(&Call::Remove(temp.path().join("a.txt"), false))
        );
    }

    #[test]
    fn deleting_non_empty_directory_fails_and_stays_open() {
        let temp = tempfile::tempdir().expect("temp dir");
        fs::create_dir(temp.path().join("full")).expect("mkdir");
        fs::write(temp.path().join("full").join("inner.txt"), b"x").expect("write");
        let backend = RecordingBackend::new(temp.path());
        let mut panel = loaded_panel(temp.path(), &backend);
        let before = panel.entries.clone();
        let target = entry_named(&panel, "full").cloned().expect("entry");
        let mut session = DialogSession::confirm_delete(PanelId::Left, target).expect("session");
        assert_eq!(session.message(), "Delete directory \"full\"?");

        session.handle_key(&key(KeyCode::Right), &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);

        assert_eq!(status, SessionStatus::Open);
        assert_eq!(session.focus, FocusTarget::YesButton);
        assert_eq!(session.error_message(), Some("Error: Directory not empty!"));
        assert_eq!(panel.entries, before);
        assert!(temp.path().join("full").join("inner.txt").exists());
        assert!(matches!(session.kind, DialogKind::ConfirmDelete { .. }));
    }

    #[test]
    fn delete_permission_failure_uses_generic_banner() {
        let temp = tempfile::tempdir().expect("temp dir");
        fs::write(temp.path().join("a.txt"), b"a").expect("write");
        let mut backend = RecordingBackend::new(temp.path());
        backend.fail_remove = true;
        let mut panel = loaded_panel(temp.path(), &backend);
        let target = entry_named(&panel, "a.txt").cloned().expect("entry");
        let mut session = DialogSession::confirm_delete(PanelId::Left, target).expect("session");

        session.handle_key(&key(KeyCode::Left), &mut panel, &backend);
        let status = session.handle_key(&key(KeyCode::Enter), &mut panel, &backend);
        assert_eq!(status, SessionStatus::Open);
        assert!(
            session
                .error_message()
                .is_some_and(|message| message.starts_with("Error: Cannot delete file!"))
        );
        assert!(temp.path().join("a.txt").exists());
    }
}
