use std::ffi::OsStr;
use std::path::{self, Path, PathBuf};

use tracing::{debug, warn};

use crate::backend::FsBackend;
use crate::errors::AppResult;
use crate::model::PanelState;

/// Child path of `current`; a separator is only inserted when missing.
///
/// Unlike `Path::join`, a `name` with a leading separator still lands under
/// `current`.
pub fn descend_path(current: &Path, name: impl AsRef<OsStr>) -> PathBuf {
    let mut raw = current.as_os_str().to_os_string();
    let has_separator = raw
        .as_encoded_bytes()
        .last()
        .is_some_and(|byte| path::is_separator(char::from(*byte)));
    if !raw.is_empty() && !has_separator {
        raw.push(path::MAIN_SEPARATOR_STR);
    }
    raw.push(name);
    PathBuf::from(raw)
}

/// Where ".." leads from `current`.
///
/// `.` is first resolved through the backend's working directory. The root
/// maps to itself, `/name` maps to the root, and a bare relative name (no
/// separator) maps to the working directory.
pub fn resolve_parent(current: &Path, backend: &dyn FsBackend) -> AppResult<PathBuf> {
    if current == Path::new(".") {
        let cwd = backend.working_dir()?;
        return Ok(match cwd.parent() {
            Some(parent) => parent.to_path_buf(),
            None => cwd,
        });
    }

    match current.parent() {
        None => Ok(current.to_path_buf()),
        Some(parent) if parent.as_os_str().is_empty() => backend.working_dir(),
        Some(parent) => Ok(parent.to_path_buf()),
    }
}

/// Lists `target` and, only on success, makes it the pane's path with a
/// fresh listing and position. On failure the prior path and listing stay
/// and the error is kept inline until the next successful listing.
pub fn change_dir(
    panel: &mut PanelState,
    target: PathBuf,
    backend: &dyn FsBackend,
) -> AppResult<()> {
    match backend.list_entries(&target) {
        Ok(entries) => {
            debug!("changed directory to {}", target.display());
            panel.cwd = target;
            panel.set_entries(entries);
            panel.error_message = None;
            Ok(())
        }
        Err(err) => {
            warn!("cannot open {}: {err}", target.display());
            panel.error_message = Some(err.to_string());
            Err(err)
        }
    }
}

/// Forced re-list of the pane's current path.
pub fn reload_panel(panel: &mut PanelState, backend: &dyn FsBackend) -> AppResult<()> {
    let cwd = panel.cwd.clone();
    let result = change_dir(panel, cwd, backend);
    if result.is_err() && panel.entries.is_empty() {
        panel.set_entries(vec![crate::model::FsEntry::parent_link()]);
    }
    result
}

/// Enter on the selection. Returns `Ok(false)` when the selection is not a
/// directory and nothing happened.
pub fn enter_selected(panel: &mut PanelState, backend: &dyn FsBackend) -> AppResult<bool> {
    let Some(entry) = panel.selected_entry() else {
        return Ok(false);
    };
    if !entry.is_dir() {
        return Ok(false);
    }

    let target = if entry.is_parent_link() {
        match resolve_parent(&panel.cwd, backend) {
            Ok(parent) => parent,
            Err(err) => {
                warn!("cannot resolve parent of {}: {err}", panel.cwd.display());
                panel.error_message = Some(err.to_string());
                return Err(err);
            }
        }
    } else {
        descend_path(&panel.cwd, &entry.file_name)
    };
    change_dir(panel, target, backend)?;
    Ok(true)
}
