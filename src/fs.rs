use std::cmp::Ordering;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::model::{FsEntry, FsEntryType};

#[derive(Debug, Default, Clone)]
pub struct FsAdapter;

impl FsAdapter {
    pub fn list_dir(&self, path: &Path) -> AppResult<Vec<FsEntry>> {
        let dir_iter =
            fs::read_dir(path).map_err(|err| AppError::from_io("list_dir", path.to_path_buf(), err))?;

        let mut entries = Vec::new();
        for entry_result in dir_iter {
            let entry = entry_result
                .map_err(|err| AppError::from_io("list_dir", path.to_path_buf(), err))?;
            let entry_path = entry.path();
            let link_metadata = fs::symlink_metadata(&entry_path)
                .map_err(|err| AppError::from_io("list_dir", entry_path.clone(), err))?;
            let is_symlink = link_metadata.file_type().is_symlink();
            // Dangling links keep their own metadata.
            let metadata = if is_symlink {
                fs::metadata(&entry_path).unwrap_or(link_metadata)
            } else {
                link_metadata
            };

            let file_name = entry.file_name();
            entries.push(FsEntry {
                name: file_name.to_string_lossy().to_string(),
                file_name,
                entry_type: map_entry_type(&metadata),
                is_symlink,
                size_bytes: metadata.len(),
                modified_at: metadata.modified().ok(),
                is_virtual: false,
            });
        }

        sort_entries(&mut entries);
        entries.insert(0, FsEntry::parent_link());
        Ok(entries)
    }

    pub fn create_dir(&self, path: &Path) -> AppResult<()> {
        if path.file_name().is_none() {
            return Err(AppError::invalid_path(
                "mkdir",
                path,
                "target path must include a directory name",
            ));
        }
        fs::create_dir(path).map_err(|err| AppError::from_io("mkdir", path.to_path_buf(), err))
    }

    pub fn remove_path(&self, path: &Path, is_directory: bool) -> AppResult<()> {
        let result = if is_directory {
            fs::remove_dir(path)
        } else {
            fs::remove_file(path)
        };
        result.map_err(|err| AppError::from_io("remove", path.to_path_buf(), err))
    }

    pub fn current_dir(&self) -> AppResult<PathBuf> {
        env::current_dir().map_err(|err| AppError::from_io("current_dir", PathBuf::from("."), err))
    }
}

fn map_entry_type(metadata: &fs::Metadata) -> FsEntryType {
    let file_type = metadata.file_type();
    if file_type.is_dir() {
        FsEntryType::Directory
    } else if file_type.is_file() {
        FsEntryType::File
    } else {
        FsEntryType::Other
    }
}

fn sort_entries(entries: &mut [FsEntry]) {
    entries.sort_by(|left, right| {
        let group_cmp = entry_group(left).cmp(&entry_group(right));
        if group_cmp != Ordering::Equal {
            return group_cmp;
        }
        left.name
            .to_lowercase()
            .cmp(&right.name.to_lowercase())
            .then_with(|| left.name.cmp(&right.name))
    });
}

fn entry_group(entry: &FsEntry) -> u8 {
    match entry.entry_type {
        FsEntryType::Directory => 0,
        _ => 1,
    }
}
