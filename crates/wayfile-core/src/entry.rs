//! Locations, directory entries, and volumes.

use std::fmt;
use std::path::{Path, PathBuf};

use compact_str::CompactString;
use serde::{Deserialize, Serialize};

/// The place a session is currently showing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Location {
    /// The list of mounted volumes.
    #[default]
    Drives,
    /// An absolute directory path.
    Directory(PathBuf),
}

impl Location {
    /// Create a directory location.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory(path.into())
    }

    /// The directory path, or `None` for the drive list.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Drives => None,
            Self::Directory(path) => Some(path),
        }
    }

    /// Check if this is the drive list.
    pub fn is_drives(&self) -> bool {
        matches!(self, Self::Drives)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Drives => write!(f, "Drives"),
            Self::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}

impl From<PathBuf> for Location {
    fn from(path: PathBuf) -> Self {
        Self::Directory(path)
    }
}

impl From<&Path> for Location {
    fn from(path: &Path) -> Self {
        Self::Directory(path.to_path_buf())
    }
}

/// Kind of a listed entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntryKind {
    Directory,
    File,
}

impl EntryKind {
    /// Check if this is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Check if this is a file.
    #[inline]
    pub fn is_file(&self) -> bool {
        matches!(self, Self::File)
    }
}

/// One row of a directory listing.
///
/// Entries are transient: they are rebuilt on every refresh and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirEntry {
    /// Display name (final path component, or the mount point for volumes).
    pub name: CompactString,
    /// Absolute path.
    pub path: PathBuf,
    /// Directory or file.
    pub kind: EntryKind,
}

impl DirEntry {
    /// Create a new entry.
    pub fn new(name: impl Into<CompactString>, path: impl Into<PathBuf>, kind: EntryKind) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind,
        }
    }

    /// Create a directory entry named after the last path component.
    pub fn directory(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(display_name(&path), path, EntryKind::Directory)
    }

    /// Create a file entry named after the last path component.
    pub fn file(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        Self::new(display_name(&path), path, EntryKind::File)
    }

    /// Check if this entry is a directory.
    #[inline]
    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }

    /// Check if this is a dot-file or dot-directory.
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// A mounted volume shown in the drive list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Volume {
    /// Where the volume is mounted.
    pub mount_point: PathBuf,
    /// Label reported by the OS (may be empty).
    pub label: String,
}

impl Volume {
    /// Create a new volume.
    pub fn new(mount_point: impl Into<PathBuf>, label: impl Into<String>) -> Self {
        Self {
            mount_point: mount_point.into(),
            label: label.into(),
        }
    }

    /// Convert to a listing entry. Volumes are displayed by mount point.
    pub fn to_entry(&self) -> DirEntry {
        DirEntry::new(
            self.mount_point.to_string_lossy().as_ref(),
            self.mount_point.clone(),
            EntryKind::Directory,
        )
    }
}

/// What a paste does with the staged source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransferMode {
    /// Duplicate the source; it stays where it is.
    Copy,
    /// Relocate the source.
    Move,
}

impl fmt::Display for TransferMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copy => write!(f, "Copy"),
            Self::Move => write!(f, "Move"),
        }
    }
}

fn display_name(path: &Path) -> CompactString {
    match path.file_name() {
        Some(name) => CompactString::from(name.to_string_lossy().as_ref()),
        None => CompactString::from(path.to_string_lossy().as_ref()),
    }
}
