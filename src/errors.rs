use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("permission denied during {operation}: {path}")]
    PermissionDenied {
        operation: &'static str,
        path: PathBuf,
    },
    #[error("path not found during {operation}: {path}")]
    NotFound {
        operation: &'static str,
        path: PathBuf,
    },
    #[error("already exists during {operation}: {path}")]
    AlreadyExists {
        operation: &'static str,
        path: PathBuf,
    },
    #[error("directory not empty during {operation}: {path}")]
    DirectoryNotEmpty {
        operation: &'static str,
        path: PathBuf,
    },
    #[error("not a directory during {operation}: {path}")]
    NotADirectory {
        operation: &'static str,
        path: PathBuf,
    },
    #[error("io error during {operation} for {path}: {source}")]
    Io {
        operation: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid path for {operation}: {path} ({reason})")]
    InvalidPath {
        operation: &'static str,
        path: PathBuf,
        reason: String,
    },
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn from_io(operation: &'static str, path: PathBuf, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { operation, path },
            io::ErrorKind::NotFound => Self::NotFound { operation, path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { operation, path },
            io::ErrorKind::DirectoryNotEmpty => Self::DirectoryNotEmpty { operation, path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { operation, path },
            _ => Self::Io {
                operation,
                path,
                source,
            },
        }
    }

    pub fn invalid_path(
        operation: &'static str,
        path: impl Into<PathBuf>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidPath {
            operation,
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Short human reason without the operation/path prefix, for inline banners.
    pub fn reason(&self) -> String {
        match self {
            Self::PermissionDenied { .. } => "permission denied".to_string(),
            Self::NotFound { .. } => "not found".to_string(),
            Self::AlreadyExists { .. } => "already exists".to_string(),
            Self::DirectoryNotEmpty { .. } => "directory not empty".to_string(),
            Self::NotADirectory { .. } => "not a directory".to_string(),
            Self::Io { source, .. } => source.to_string(),
            Self::InvalidPath { reason, .. } => reason.clone(),
        }
    }
}
