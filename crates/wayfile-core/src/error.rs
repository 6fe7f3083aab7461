//! Error types for filesystem and session operations.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for results carrying an [`FsError`].
pub type FsResult<T> = Result<T, FsError>;

/// Errors that can occur while listing or modifying the filesystem.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path vanished or was renamed since it was last listed.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Destination already exists.
    #[error("Already exists: {path}")]
    AlreadyExists { path: PathBuf },

    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file or folder name failed validation.
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    /// Path exists but is not a directory.
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// A directory cannot be copied or moved into itself.
    #[error("Cannot copy or move {path} into itself ({destination})")]
    SourceIsAncestor { path: PathBuf, destination: PathBuf },

    /// The operation needs a directory location but the drive list is shown.
    #[error("{operation} needs a directory, not the drive list")]
    NoDirectory { operation: &'static str },

    /// Moving to the trash failed.
    #[error("Failed to move {path} to trash: {message}")]
    Trash { path: PathBuf, message: String },

    /// The default handler could not be launched.
    #[error("Failed to open {path}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl FsError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            std::io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            std::io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            _ => Self::Io { path, source },
        }
    }

    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Whether this error means the path no longer exists.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fs_error_io_maps_kinds() {
        let err = FsError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, FsError::PermissionDenied { .. }));

        let err = FsError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        );
        assert!(err.is_not_found());

        let err = FsError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "taken"),
        );
        assert!(matches!(err, FsError::AlreadyExists { .. }));
    }

    #[test]
    fn test_fs_error_io_keeps_generic_source() {
        let err = FsError::io("/test/path", std::io::Error::other("disk on fire"));
        match err {
            FsError::Io { path, source } => {
                assert_eq!(path, PathBuf::from("/test/path"));
                assert!(source.to_string().contains("disk on fire"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_fs_error_messages() {
        let err = FsError::NoDirectory { operation: "Paste" };
        assert_eq!(err.to_string(), "Paste needs a directory, not the drive list");

        let err = FsError::invalid_name("a/b", "Name cannot contain '/'");
        assert!(err.to_string().contains("a/b"));
    }
}
