//! Paste and drop transfers into a directory.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use wayfile_core::{ConflictPolicy, FsError, TransferMode};

use crate::conflict::{check_not_ancestor, contains_source, unique_path};
use crate::copy::copy_item;
use crate::move_op::move_item;
use crate::{FileSystem, OperationComplete, OperationError, OperationType};

/// Apply a staged copy or move of `source` into `directory`.
///
/// The destination is `directory` joined with the base name of `source`.
/// Copies overwrite an existing file and merge into an existing directory;
/// copying an item onto its own path, or onto a directory that holds it,
/// makes a "name (N)" duplicate instead.
/// Moves follow `move_conflict` when the destination is taken.
pub fn paste_item(
    fs: &dyn FileSystem,
    source: &Path,
    directory: &Path,
    mode: TransferMode,
    move_conflict: ConflictPolicy,
) -> OperationComplete {
    let operation_type = match mode {
        TransferMode::Copy => OperationType::Copy,
        TransferMode::Move => OperationType::Move,
    };
    let mut complete = OperationComplete::new(operation_type);

    let dest = match destination_for(source, directory) {
        Ok(dest) => dest,
        Err(e) => {
            complete.record_failure(OperationError::from_fs(source, &e));
            return complete;
        }
    };

    match mode {
        TransferMode::Copy => copy_one(fs, source, dest, &mut complete),
        TransferMode::Move => match move_item(fs, source, &dest, move_conflict) {
            Ok(_) => complete.record_success(0),
            Err(e) => {
                warn!(source = %source.display(), error = %e, "move failed");
                complete.record_failure(OperationError::from_fs(source, &e));
            }
        },
    }

    info!(summary = %complete.summary(), "paste finished");
    complete
}

/// Copy every item in `sources` into `directory`, as a drop does.
///
/// Each item is handled on its own: a failure is recorded and the rest
/// still run.
pub fn copy_into(fs: &dyn FileSystem, sources: &[PathBuf], directory: &Path) -> OperationComplete {
    let mut complete = OperationComplete::new(OperationType::Copy);

    for source in sources {
        match destination_for(source, directory) {
            Ok(dest) => copy_one(fs, source, dest, &mut complete),
            Err(e) => complete.record_failure(OperationError::from_fs(source, &e)),
        }
    }

    info!(summary = %complete.summary(), "drop finished");
    complete
}

fn destination_for(source: &Path, directory: &Path) -> Result<PathBuf, FsError> {
    match source.file_name() {
        Some(name) => Ok(directory.join(name)),
        None => Err(FsError::invalid_name(
            source.to_string_lossy(),
            "Cannot copy or move a filesystem root",
        )),
    }
}

fn copy_one(fs: &dyn FileSystem, source: &Path, dest: PathBuf, complete: &mut OperationComplete) {
    let is_dir = fs.is_dir(source);
    if is_dir {
        if let Err(e) = check_not_ancestor(source, &dest) {
            complete.record_failure(OperationError::from_fs(source, &e));
            return;
        }
    }

    let dest = if contains_source(source, &dest) {
        unique_path(fs, &dest, is_dir)
    } else {
        dest
    };

    let report = copy_item(fs, source, &dest);
    if report.is_complete() {
        complete.record_success(report.bytes);
    } else {
        complete.failed += 1;
        complete.bytes_processed += report.bytes;
        complete.errors.extend(report.errors);
    }
}
