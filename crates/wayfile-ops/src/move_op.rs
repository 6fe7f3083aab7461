//! Move operation.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};
use wayfile_core::{ConflictPolicy, FsError, FsResult};

use crate::conflict::{check_not_ancestor, contains_source, unique_path};
use crate::copy::copy_item;
use crate::FileSystem;

/// Move a file or directory to `dest`, returning where it ended up.
///
/// A rename is tried first. When source and destination are on different
/// filesystems the item is copied and the source removed afterwards; the
/// source is kept if any part of the copy failed.
///
/// An occupied `dest` is handled by `policy`, except that a `dest` holding
/// the source is never removed. Moving an item onto its own path does
/// nothing.
pub fn move_item(
    fs: &dyn FileSystem,
    from: &Path,
    dest: &Path,
    policy: ConflictPolicy,
) -> FsResult<PathBuf> {
    if from == dest {
        return Ok(dest.to_path_buf());
    }

    if !fs.exists(from) {
        return Err(FsError::NotFound {
            path: from.to_path_buf(),
        });
    }

    let source_is_dir = fs.is_dir(from);
    if source_is_dir {
        check_not_ancestor(from, dest)?;
    }

    let target = if fs.exists(dest) {
        match policy {
            ConflictPolicy::Reject => {
                return Err(FsError::AlreadyExists {
                    path: dest.to_path_buf(),
                });
            }
            ConflictPolicy::AutoRename => unique_path(fs, dest, source_is_dir),
            ConflictPolicy::Overwrite => {
                if contains_source(from, dest) {
                    return Err(FsError::AlreadyExists {
                        path: dest.to_path_buf(),
                    });
                }
                debug!(path = %dest.display(), "removing existing destination");
                if fs.is_dir(dest) {
                    fs.remove_dir_all(dest)?;
                } else {
                    fs.remove_file(dest)?;
                }
                dest.to_path_buf()
            }
        }
    } else {
        dest.to_path_buf()
    };

    match fs.rename(from, &target) {
        Ok(()) => {}
        Err(FsError::Io { ref source, .. }) if source.kind() == io::ErrorKind::CrossesDevices => {
            debug!(from = %from.display(), "rename crosses devices, copying instead");
            move_by_copy(fs, from, &target, source_is_dir)?;
        }
        Err(e) => return Err(e),
    }

    info!(from = %from.display(), to = %target.display(), "moved");
    Ok(target)
}

fn move_by_copy(fs: &dyn FileSystem, from: &Path, to: &Path, is_dir: bool) -> FsResult<()> {
    let report = copy_item(fs, from, to);
    if let Some(first) = report.errors.first() {
        return Err(FsError::Io {
            path: first.path.clone(),
            source: io::Error::other(first.message.clone()),
        });
    }

    if is_dir {
        fs.remove_dir_all(from)
    } else {
        fs.remove_file(from)
    }
}
