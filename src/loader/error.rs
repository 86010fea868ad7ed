//! Load failures, split by cause so callers can tell path problems from content problems.

use std::{
    io,
    path::{Path, PathBuf},
};

use arrow::error::ArrowError;
use parquet::errors::ParquetError;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("permission denied: {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("cannot decode {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        cause: FormatCause,
    },
}

/// Why the bytes of an existing, readable file could not be decoded.
#[derive(Debug, Error)]
pub enum FormatCause {
    #[error("not a Parquet or Arrow IPC file")]
    Unrecognized,

    #[error(transparent)]
    Parquet(#[from] ParquetError),

    #[error(transparent)]
    Arrow(#[from] ArrowError),

    #[error("read failed")]
    Io(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum LoadErrorKind {
    #[strum(serialize = "file not found")]
    FileNotFound,
    #[strum(serialize = "permission denied")]
    PermissionDenied,
    #[strum(serialize = "format error")]
    Format,
}

impl LoadErrorKind {
    /// Process exit status reported by the CLI for this kind of failure.
    ///
    /// 1 and 2 are left to generic failures and clap usage errors.
    pub fn exit_code(self) -> u8 {
        match self {
            LoadErrorKind::FileNotFound => 3,
            LoadErrorKind::PermissionDenied => 4,
            LoadErrorKind::Format => 5,
        }
    }
}

impl LoadError {
    pub fn kind(&self) -> LoadErrorKind {
        match self {
            LoadError::FileNotFound { .. } => LoadErrorKind::FileNotFound,
            LoadError::PermissionDenied { .. } => LoadErrorKind::PermissionDenied,
            LoadError::Format { .. } => LoadErrorKind::Format,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            LoadError::FileNotFound { path }
            | LoadError::PermissionDenied { path }
            | LoadError::Format { path, .. } => path.as_path(),
        }
    }

    /// Classify an error raised while resolving or opening the path.
    ///
    /// Anything other than a permission problem means the path doesn't lead to a
    /// readable file (missing, dangling, a component isn't a directory, ...).
    pub(crate) fn from_open(path: impl Into<PathBuf>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::FileNotFound { path },
        }
    }

    pub(crate) fn format(path: impl Into<PathBuf>, cause: impl Into<FormatCause>) -> Self {
        LoadError::Format {
            path: path.into(),
            cause: cause.into(),
        }
    }
}
