//! Directory and drive listings.

use std::cmp::Ordering;

use tracing::debug;
use wayfile_core::{DirEntry, FsError, FsResult, Location};

use crate::FileSystem;

/// List what a location shows.
///
/// The drive list shows one directory entry per mounted volume. A directory
/// shows its subdirectories first and then its files, each group ordered by
/// name without regard to case. Dot-entries are left out unless
/// `show_hidden` is set.
pub fn list_location(
    fs: &dyn FileSystem,
    location: &Location,
    show_hidden: bool,
) -> FsResult<Vec<DirEntry>> {
    let path = match location {
        Location::Drives => {
            let volumes = fs.volumes()?;
            return Ok(volumes.iter().map(|v| v.to_entry()).collect());
        }
        Location::Directory(path) => path,
    };

    if !fs.is_dir(path) {
        return Err(if fs.exists(path) {
            FsError::NotADirectory { path: path.clone() }
        } else {
            FsError::NotFound { path: path.clone() }
        });
    }

    let mut entries: Vec<DirEntry> = fs
        .read_dir(path)?
        .into_iter()
        .filter(|entry| show_hidden || !entry.is_hidden())
        .collect();
    sort_entries(&mut entries);

    debug!(path = %path.display(), count = entries.len(), "listed directory");
    Ok(entries)
}

/// Sort entries directories-first, then by case-insensitive name.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a
            .name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name)),
    });
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::StdFileSystem;

    #[test]
    fn test_list_directory_order_and_hidden() {
        let tmp = tempfile::tempdir().unwrap();
        let base = tmp.path();
        std::fs::create_dir(base.join("zeta")).unwrap();
        std::fs::create_dir(base.join("Alpha")).unwrap();
        std::fs::create_dir(base.join(".git")).unwrap();
        std::fs::write(base.join("b.txt"), "").unwrap();
        std::fs::write(base.join("A.txt"), "").unwrap();
        std::fs::write(base.join(".env"), "").unwrap();

        let location = Location::directory(base);
        let names: Vec<String> = list_location(&StdFileSystem, &location, false)
            .unwrap()
            .into_iter()
            .map(|e| e.name.to_string())
            .collect();
        assert_eq!(names, vec!["Alpha", "zeta", "A.txt", "b.txt"]);

        let all = list_location(&StdFileSystem, &location, true).unwrap();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].name.as_str(), ".git");
    }

    #[test]
    fn test_list_missing_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let location = Location::directory(tmp.path().join("vanished"));
        let err = list_location(&StdFileSystem, &location, false).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_list_file_is_not_a_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("f.txt");
        std::fs::write(&file, "").unwrap();

        let err = list_location(&StdFileSystem, &Location::directory(&file), false).unwrap_err();
        assert!(matches!(err, FsError::NotADirectory { .. }));
    }

    #[test]
    fn test_list_drives() {
        let entries = list_location(&StdFileSystem, &Location::Drives, false).unwrap();
        assert!(!entries.is_empty());
        assert!(entries.iter().all(|e| e.is_dir()));
    }

    #[test]
    fn test_sort_entries() {
        let mut entries = vec![
            DirEntry::file(PathBuf::from("/x/b")),
            DirEntry::directory(PathBuf::from("/x/c")),
            DirEntry::file(PathBuf::from("/x/a")),
        ];
        sort_entries(&mut entries);
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
