use std::ffi::OsString;
use std::path::PathBuf;
use std::time::SystemTime;

use crossterm::event::KeyEvent;

use crate::dialog::DialogSession;

pub const PARENT_LINK_NAME: &str = "..";

/// Rows taken by the menu bar, key bar, pane borders and the column header.
pub const LAYOUT_CHROME_ROWS: u16 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Left,
    Right,
}

impl PanelId {
    pub fn other(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FsEntryType {
    Directory,
    File,
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FsEntry {
    /// Lossy UTF-8 form, for display only.
    pub name: String,
    /// Raw name as returned by the OS; paths are always built from this.
    pub file_name: OsString,
    pub entry_type: FsEntryType,
    pub is_symlink: bool,
    pub size_bytes: u64,
    pub modified_at: Option<SystemTime>,
    pub is_virtual: bool,
}

impl FsEntry {
    pub fn parent_link() -> Self {
        Self {
            name: PARENT_LINK_NAME.to_string(),
            file_name: OsString::from(PARENT_LINK_NAME),
            entry_type: FsEntryType::Directory,
            is_symlink: false,
            size_bytes: 0,
            modified_at: None,
            is_virtual: true,
        }
    }

    pub fn is_dir(&self) -> bool {
        self.entry_type == FsEntryType::Directory
    }

    pub fn is_parent_link(&self) -> bool {
        self.is_virtual && self.name == PARENT_LINK_NAME
    }

    /// Links are unlinked as files even when they point at a directory.
    pub fn removes_as_directory(&self) -> bool {
        self.is_dir() && !self.is_symlink
    }
}

#[derive(Debug, Clone)]
pub struct PanelState {
    pub cwd: PathBuf,
    pub entries: Vec<FsEntry>,
    pub selected_index: usize,
    pub viewport_offset: usize,
    pub error_message: Option<String>,
}

impl PanelState {
    pub fn new(cwd: PathBuf) -> Self {
        Self {
            cwd,
            entries: Vec::new(),
            selected_index: 0,
            viewport_offset: 0,
            error_message: None,
        }
    }

    pub fn selected_entry(&self) -> Option<&FsEntry> {
        self.entries.get(self.selected_index)
    }
}

/// Everything the dispatcher mutates and the renderer reads.
#[derive(Debug)]
pub struct AppState {
    pub active_panel: PanelId,
    pub left_panel: PanelState,
    pub right_panel: PanelState,
    pub dialog: Option<DialogSession>,
    pub visible_rows: usize,
}

impl AppState {
    pub fn new(cwd: PathBuf, terminal_height: u16) -> Self {
        Self {
            active_panel: PanelId::Left,
            left_panel: PanelState::new(cwd.clone()),
            right_panel: PanelState::new(cwd),
            dialog: None,
            visible_rows: visible_rows_for_height(terminal_height),
        }
    }

    pub fn panel(&self, id: PanelId) -> &PanelState {
        match id {
            PanelId::Left => &self.left_panel,
            PanelId::Right => &self.right_panel,
        }
    }

    pub fn panel_mut(&mut self, id: PanelId) -> &mut PanelState {
        match id {
            PanelId::Left => &mut self.left_panel,
            PanelId::Right => &mut self.right_panel,
        }
    }

    pub fn is_active(&self, id: PanelId) -> bool {
        self.active_panel == id
    }
}

pub fn visible_rows_for_height(height: u16) -> usize {
    usize::from(height.saturating_sub(LAYOUT_CHROME_ROWS)).max(1)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    SwitchPanel,
    MoveSelectionUp,
    MoveSelectionDown,
    PageUp,
    PageDown,
    OpenSelected,
    Mkdir,
    Delete,
    Help,
    Menu,
    View,
    Edit,
    Copy,
    Move,
}

#[derive(Debug, Clone)]
pub enum Event {
    Input(KeyEvent),
    Tick,
    Resize { height: u16 },
}
