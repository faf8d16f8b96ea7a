//! Error types for `twinpane-core`.
//!
//! All fallible operations in the core library return [`CoreResult<T>`],
//! which is an alias for `Result<T, CoreError>`.

use std::path::{Path, PathBuf};

/// Unified error type for all core operations.
///
/// Each variant captures just enough context for the caller to display
/// a meaningful message. [`CoreError::kind`] collapses the variants into the
/// three classes the frontend distinguishes.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Something already exists at the target path.
    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// The target path does not exist.
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    /// A directory was expected but the path points to something else.
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A file or directory name is invalid (empty, contains path separators, etc.).
    #[error("invalid name: {0:?}")]
    InvalidName(String),

    /// A directory cannot be copied or moved into its own subtree.
    #[error("cannot put {} inside itself ({})", dir.display(), target.display())]
    IntoItself { dir: PathBuf, target: PathBuf },

    /// Permission, I/O or any other filesystem failure.
    #[error("operation failed on {}: {source}", path.display())]
    OperationFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse a TOML configuration file.
    #[error("config parse error: {0}")]
    ConfigParse(String),
}

/// Coarse error class shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AlreadyExists,
    NotFound,
    OperationFailed,
}

impl CoreError {
    /// Classifies an I/O error raised while touching `path`.
    ///
    /// `AlreadyExists` and `NotFound` keep their meaning; everything else
    /// becomes [`CoreError::OperationFailed`].
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists(path.to_path_buf()),
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            _ => Self::failed(path, err),
        }
    }

    /// Wraps an I/O error as [`CoreError::OperationFailed`] regardless of its kind.
    pub fn failed(path: &Path, err: std::io::Error) -> Self {
        Self::OperationFailed {
            path: path.to_path_buf(),
            source: err,
        }
    }

    /// Returns the coarse class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlreadyExists(_) => ErrorKind::AlreadyExists,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::NotADirectory(_)
            | Self::InvalidName(_)
            | Self::IntoItself { .. }
            | Self::OperationFailed { .. }
            | Self::ConfigParse(_) => ErrorKind::OperationFailed,
        }
    }
}

/// Convenience alias used throughout `twinpane-core`.
pub type CoreResult<T> = Result<T, CoreError>;
