//! Delete operation.

use std::path::Path;

use tracing::info;
use wayfile_core::{FsError, FsResult};

use crate::FileSystem;

/// Delete a file, or a directory with everything below it.
///
/// With `use_trash` the item is moved to the OS trash instead.
pub fn delete_item(fs: &dyn FileSystem, path: &Path, use_trash: bool) -> FsResult<()> {
    if !fs.exists(path) {
        return Err(FsError::NotFound {
            path: path.to_path_buf(),
        });
    }

    if use_trash {
        fs.trash(path)?;
    } else if fs.is_dir(path) {
        fs.remove_dir_all(path)?;
    } else {
        fs.remove_file(path)?;
    }

    info!(path = %path.display(), trash = use_trash, "deleted");
    Ok(())
}
