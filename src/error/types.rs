use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, MakebinError>;

#[derive(Error, Debug)]
pub enum MakebinError {
    #[error("{0}")]
    Usage(String),

    #[error("Invalid path: {}", .0.display())]
    InvalidPath(PathBuf),

    #[error("File system error: {0}")]
    FileSystem(#[from] FileSystemError),

    #[error("Invalid hex token '{token}' on line {line}")]
    InvalidHexToken {
        token: String,
        line: usize,
    },

    #[error("Hex token '{token}' on line {line} does not fit in 16 bits")]
    ValueOutOfRange {
        token: String,
        line: usize,
    },
}

#[derive(Error, Debug)]
pub enum FileSystemError {
    #[error("File not found: {}", .path.display())]
    NotFound {
        path: PathBuf,
    },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied {
        path: PathBuf,
    },

    #[error("No space left on device while writing {}", .path.display())]
    DiskFull {
        path: PathBuf,
    },

    #[error("Failed to read file {}: {reason}", .path.display())]
    Read {
        path: PathBuf,
        reason: String,
    },

    #[error("Failed to write file {}: {reason}", .path.display())]
    Write {
        path: PathBuf,
        reason: String,
    },
}

impl FileSystemError {
    /// Classify an error raised while reading `path`.
    pub fn from_read(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Read {
                path,
                reason: err.to_string(),
            },
        }
    }

    /// Classify an error raised while creating or writing `path`.
    pub fn from_write(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::StorageFull => Self::DiskFull { path },
            _ => Self::Write {
                path,
                reason: err.to_string(),
            },
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            Self::NotFound { path }
            | Self::PermissionDenied { path }
            | Self::DiskFull { path }
            | Self::Read { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}
