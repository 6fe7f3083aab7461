//! File and directory creation with collision-free names.

use std::path::{Path, PathBuf};

use tracing::info;
use wayfile_core::FsResult;

use crate::conflict::unique_path;
use crate::FileSystem;

/// Base name for new folders.
pub const NEW_FOLDER_NAME: &str = "New Folder";

/// Base name for new text files.
pub const NEW_FILE_NAME: &str = "New File.txt";

/// Create an empty folder in `parent` under the first free "New Folder" name.
pub fn create_folder(fs: &dyn FileSystem, parent: &Path) -> FsResult<PathBuf> {
    let path = unique_path(fs, &parent.join(NEW_FOLDER_NAME), true);
    fs.create_dir(&path)?;
    info!(path = %path.display(), "created folder");
    Ok(path)
}

/// Create an empty text file in `parent` under the first free "New File.txt" name.
pub fn create_text_file(fs: &dyn FileSystem, parent: &Path) -> FsResult<PathBuf> {
    let path = unique_path(fs, &parent.join(NEW_FILE_NAME), false);
    fs.create_file(&path)?;
    info!(path = %path.display(), "created file");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::StdFileSystem;

    #[test]
    fn test_create_folder_twice() {
        let tmp = tempfile::tempdir().unwrap();

        let first = create_folder(&StdFileSystem, tmp.path()).unwrap();
        let second = create_folder(&StdFileSystem, tmp.path()).unwrap();

        assert_eq!(first, tmp.path().join("New Folder"));
        assert_eq!(second, tmp.path().join("New Folder (1)"));
        assert!(first.is_dir());
        assert!(second.is_dir());
    }

    #[test]
    fn test_create_text_file_twice() {
        let tmp = tempfile::tempdir().unwrap();

        let first = create_text_file(&StdFileSystem, tmp.path()).unwrap();
        let second = create_text_file(&StdFileSystem, tmp.path()).unwrap();

        assert_eq!(first, tmp.path().join("New File.txt"));
        assert_eq!(second, tmp.path().join("New File (1).txt"));
        assert_eq!(std::fs::metadata(&second).unwrap().len(), 0);
    }

    #[test]
    fn test_create_in_missing_parent_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let err = create_folder(&StdFileSystem, &tmp.path().join("gone")).unwrap_err();
        assert!(err.is_not_found());
    }
}
