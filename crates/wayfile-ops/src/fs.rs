//! The filesystem capability set and its host implementation.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use sysinfo::Disks;
use tracing::{debug, warn};
use wayfile_core::{DirEntry, EntryKind, FsError, FsResult, Volume};

/// Filesystem primitives the session depends on.
///
/// Implementations are expected to block until the call finishes. Kinds in
/// [`FileSystem::read_dir`] follow symbolic links, so a link to a directory
/// is listed as a directory.
pub trait FileSystem {
    /// Enumerate top-level mounted volumes.
    fn volumes(&self) -> FsResult<Vec<Volume>>;

    /// List the immediate children of a directory, in no particular order.
    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Check if a path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if a path is an existing file.
    fn is_file(&self, path: &Path) -> bool;

    /// Check if anything exists at a path.
    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.is_file(path)
    }

    /// Create a single directory. Fails if the path is taken.
    fn create_dir(&self, path: &Path) -> FsResult<()>;

    /// Create a directory and any missing parents. An existing directory is fine.
    fn create_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it.
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;

    /// Create an empty file. Fails if the path is taken.
    fn create_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a file.
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Copy a file, returning the number of bytes copied.
    fn copy_file(&self, from: &Path, to: &Path, overwrite: bool) -> FsResult<u64>;

    /// Rename or move a file or directory.
    fn rename(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Move a file or directory to the trash.
    fn trash(&self, path: &Path) -> FsResult<()>;

    /// Open a file with the OS default handler.
    fn launch(&self, path: &Path) -> FsResult<()>;
}

/// [`FileSystem`] backed by `std::fs` and the host OS.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl StdFileSystem {
    /// Create a new host filesystem handle.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for StdFileSystem {
    fn volumes(&self) -> FsResult<Vec<Volume>> {
        let disks = Disks::new_with_refreshed_list();
        let mut volumes: Vec<Volume> = disks
            .iter()
            .filter(|disk| {
                let mount = disk.mount_point();
                !mount.as_os_str().is_empty() && mount.exists()
            })
            .map(|disk| Volume::new(disk.mount_point(), disk.name().to_string_lossy()))
            .collect();

        volumes.sort_by(|a, b| a.mount_point.cmp(&b.mount_point));
        volumes.dedup_by(|a, b| a.mount_point == b.mount_point);

        if volumes.is_empty() {
            debug!("no mounted volumes reported, falling back to filesystem root");
            volumes.push(Volume::new(PathBuf::from(std::path::MAIN_SEPARATOR_STR), ""));
        }

        Ok(volumes)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let entries = fs::read_dir(path).map_err(|e| FsError::io(path, e))?;

        let mut result = Vec::new();
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable entry");
                    continue;
                }
            };
            let child = entry.path();
            let kind = if child.is_dir() {
                EntryKind::Directory
            } else {
                EntryKind::File
            };
            let name = entry.file_name();
            result.push(DirEntry::new(name.to_string_lossy().as_ref(), child, kind));
        }

        Ok(result)
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn exists(&self, path: &Path) -> bool {
        // Counts dangling symlinks too, since their name is still taken.
        fs::symlink_metadata(path).is_ok()
    }

    fn create_dir(&self, path: &Path) -> FsResult<()> {
        fs::create_dir(path).map_err(|e| FsError::io(path, e))
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::create_dir_all(path).map_err(|e| FsError::io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir_all(path).map_err(|e| FsError::io(path, e))
    }

    fn create_file(&self, path: &Path) -> FsResult<()> {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map(|_: File| ())
            .map_err(|e| FsError::io(path, e))
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::io(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path, overwrite: bool) -> FsResult<u64> {
        if !overwrite && self.exists(to) {
            return Err(FsError::AlreadyExists {
                path: to.to_path_buf(),
            });
        }
        fs::copy(from, to).map_err(|e| {
            // Attribute a missing source to the source path, anything else to the target.
            if e.kind() == std::io::ErrorKind::NotFound && !from.exists() {
                FsError::io(from, e)
            } else {
                FsError::io(to, e)
            }
        })
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        fs::rename(from, to).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound && !from.exists() {
                FsError::io(from, e)
            } else {
                FsError::io(to, e)
            }
        })
    }

    fn trash(&self, path: &Path) -> FsResult<()> {
        trash::delete(path).map_err(|e| FsError::Trash {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    fn launch(&self, path: &Path) -> FsResult<()> {
        open::that(path).map_err(|source| FsError::Launch {
            path: path.to_path_buf(),
            source,
        })
    }
}
