//! Recursive copy.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use wayfile_core::{DirEntry, FsError};

use crate::FileSystem;
use crate::OperationError;

/// What a copy of one item produced.
#[derive(Debug, Clone, Default)]
pub struct TreeCopy {
    /// Files copied.
    pub files: usize,
    /// Bytes copied.
    pub bytes: u64,
    /// Items that could not be created or copied.
    pub errors: Vec<OperationError>,
}

impl TreeCopy {
    /// Check if every item was copied.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    fn fail(&mut self, path: &Path, error: &FsError) {
        warn!(path = %path.display(), error = %error, "copy failed");
        self.errors.push(OperationError::from_fs(path, error));
    }
}

/// Copy a directory tree from `source` into `target`.
///
/// Reads `source`, creates `target`, copies each immediate file into it, then descends into
/// each immediate subdirectory the same way: depth-first and pre-order,
/// files before subdirectories at every level. Pending directory pairs are
/// kept on an explicit stack, so tree depth does not grow the call stack.
///
/// Existing files under `target` are overwritten and existing directories
/// are merged into. A failure is recorded against the item and the rest of
/// the tree is still copied. Symbolic links to directories are followed and
/// cycles are not detected.
pub fn copy_tree(fs: &dyn FileSystem, source: &Path, target: &Path) -> TreeCopy {
    let mut report = TreeCopy::default();
    let mut pending: Vec<(PathBuf, PathBuf)> = vec![(source.to_path_buf(), target.to_path_buf())];

    while let Some((src_dir, dst_dir)) = pending.pop() {
        let children = match fs.read_dir(&src_dir) {
            Ok(children) => children,
            Err(e) => {
                report.fail(&src_dir, &e);
                continue;
            }
        };

        if let Err(e) = fs.create_dir_all(&dst_dir) {
            report.fail(&dst_dir, &e);
            continue;
        }

        let (dirs, files): (Vec<DirEntry>, Vec<DirEntry>) =
            children.into_iter().partition(|entry| entry.is_dir());

        for file in files {
            let dest = child_of(&dst_dir, &file);
            match fs.copy_file(&file.path, &dest, true) {
                Ok(bytes) => {
                    report.files += 1;
                    report.bytes += bytes;
                }
                Err(e) => report.fail(&file.path, &e),
            }
        }

        // Reversed so the first listed subdirectory is popped first.
        for dir in dirs.into_iter().rev() {
            let dest = child_of(&dst_dir, &dir);
            pending.push((dir.path, dest));
        }
    }

    debug!(
        source = %source.display(),
        target = %target.display(),
        files = report.files,
        errors = report.errors.len(),
        "copied tree"
    );
    report
}

/// Copy a single item, file or directory, to `dest`.
///
/// Files overwrite an existing `dest`.
pub fn copy_item(fs: &dyn FileSystem, source: &Path, dest: &Path) -> TreeCopy {
    if fs.is_dir(source) {
        return copy_tree(fs, source, dest);
    }

    let mut report = TreeCopy::default();
    if !fs.is_file(source) {
        report.fail(
            source,
            &FsError::NotFound {
                path: source.to_path_buf(),
            },
        );
        return report;
    }

    match fs.copy_file(source, dest, true) {
        Ok(bytes) => {
            report.files = 1;
            report.bytes = bytes;
        }
        Err(e) => report.fail(source, &e),
    }
    report
}

fn child_of(dir: &Path, entry: &DirEntry) -> PathBuf {
    match entry.path.file_name() {
        Some(name) => dir.join(name),
        None => dir.join(entry.name.as_str()),
    }
}
