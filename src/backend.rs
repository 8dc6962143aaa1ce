use std::path::{Path, PathBuf};

use crate::errors::AppResult;
use crate::fs::FsAdapter;
use crate::model::FsEntry;

/// Synchronous filesystem collaborator used by navigation and dialogs.
pub trait FsBackend {
    fn backend_name(&self) -> &'static str;
    fn list_entries(&self, path: &Path) -> AppResult<Vec<FsEntry>>;
    fn make_directory(&self, path: &Path) -> AppResult<()>;
    fn remove_entry(&self, path: &Path, is_directory: bool) -> AppResult<()>;
    fn working_dir(&self) -> AppResult<PathBuf>;
}

impl FsBackend for FsAdapter {
    fn backend_name(&self) -> &'static str {
        "local"
    }

    fn list_entries(&self, path: &Path) -> AppResult<Vec<FsEntry>> {
        self.list_dir(path)
    }

    fn make_directory(&self, path: &Path) -> AppResult<()> {
        self.create_dir(path)
    }

    fn remove_entry(&self, path: &Path, is_directory: bool) -> AppResult<()> {
        self.remove_path(path, is_directory)
    }

    fn working_dir(&self) -> AppResult<PathBuf> {
        self.current_dir()
    }
}
