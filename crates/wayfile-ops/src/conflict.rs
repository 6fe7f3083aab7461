//! Name-collision avoidance and conflict checks.

use std::path::{Path, PathBuf};

use wayfile_core::{FsError, FsResult};

use crate::FileSystem;

/// Find a free path by appending " (N)" to the name.
///
/// Returns `path` unchanged if nothing exists there. Otherwise N counts up
/// from 1 until the name is free. Folders get the suffix at the end of the
/// name ("New Folder (1)"); files get it before the extension
/// ("New File (1).txt").
pub fn unique_path(fs: &dyn FileSystem, path: &Path, is_dir: bool) -> PathBuf {
    if !fs.exists(path) {
        return path.to_path_buf();
    }

    let parent = path.parent().unwrap_or(Path::new(""));
    let (stem, extension) = split_name(path, is_dir);

    let mut n: u64 = 1;
    loop {
        let new_name = match &extension {
            Some(ext) => format!("{stem} ({n}).{ext}"),
            None => format!("{stem} ({n})"),
        };
        let candidate = parent.join(new_name);
        if !fs.exists(&candidate) {
            return candidate;
        }
        n += 1;
    }
}

fn split_name(path: &Path, is_dir: bool) -> (String, Option<String>) {
    if is_dir {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        return (name, None);
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let extension = path
        .extension()
        .map(|e| e.to_string_lossy().into_owned());
    (stem, extension)
}

/// Reject copying or moving a directory into itself or one of its descendants.
pub fn check_not_ancestor(source: &Path, destination: &Path) -> FsResult<()> {
    if destination != source && destination.starts_with(source) {
        return Err(FsError::SourceIsAncestor {
            path: source.to_path_buf(),
            destination: destination.to_path_buf(),
        });
    }
    Ok(())
}

/// Check whether `destination` is `source` itself or one of its ancestors.
///
/// Writing over such a destination would overwrite or remove the source
/// before it has been read.
pub fn contains_source(source: &Path, destination: &Path) -> bool {
    source.starts_with(destination)
}
