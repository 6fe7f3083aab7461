use std::cell::RefCell;
use std::path::{Path, PathBuf};

use wayfile_core::{ConflictPolicy, DirEntry, FsResult, Location, TransferMode, Volume};
use wayfile_ops::{
    FileSystem, StdFileSystem, copy_into, copy_tree, create_folder, create_text_file,
    delete_item, list_location, paste_item, rename_item,
};

/// Wraps the host filesystem and records mutating calls in order.
#[derive(Default)]
struct RecordingFs {
    inner: StdFileSystem,
    calls: RefCell<Vec<String>>,
}

impl RecordingFs {
    fn record(&self, call: String) {
        self.calls.borrow_mut().push(call);
    }
}

impl FileSystem for RecordingFs {
    fn volumes(&self) -> FsResult<Vec<Volume>> {
        self.inner.volumes()
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        self.inner.read_dir(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.inner.is_dir(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.inner.is_file(path)
    }

    fn exists(&self, path: &Path) -> bool {
        self.inner.exists(path)
    }

    fn create_dir(&self, path: &Path) -> FsResult<()> {
        self.record(format!("mkdir {}", name(path)));
        self.inner.create_dir(path)
    }

    fn create_dir_all(&self, path: &Path) -> FsResult<()> {
        self.record(format!("mkdir {}", name(path)));
        self.inner.create_dir_all(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        self.inner.remove_dir_all(path)
    }

    fn create_file(&self, path: &Path) -> FsResult<()> {
        self.inner.create_file(path)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        self.inner.remove_file(path)
    }

    fn copy_file(&self, from: &Path, to: &Path, overwrite: bool) -> FsResult<u64> {
        self.record(format!("copy {}", name(from)));
        self.inner.copy_file(from, to, overwrite)
    }

    fn rename(&self, from: &Path, to: &Path) -> FsResult<()> {
        self.inner.rename(from, to)
    }

    fn trash(&self, path: &Path) -> FsResult<()> {
        self.inner.trash(path)
    }

    fn launch(&self, _path: &Path) -> FsResult<()> {
        Ok(())
    }
}

fn name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

#[test]
fn test_recursive_copy_produces_identical_tree() {
    let tmp = tempfile::tempdir().unwrap();
    let a = tmp.path().join("A");
    std::fs::create_dir_all(a.join("B")).unwrap();
    std::fs::write(a.join("f1"), b"first file").unwrap();
    std::fs::write(a.join("B").join("f2"), b"second file").unwrap();

    let d = tmp.path().join("D");
    let report = copy_tree(&StdFileSystem, &a, &d);

    assert!(report.is_complete());
    assert_eq!(std::fs::read(d.join("f1")).unwrap(), b"first file");
    assert_eq!(std::fs::read(d.join("B").join("f2")).unwrap(), b"second file");
}

#[test]
fn test_recursive_copy_files_before_subdirectories() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    std::fs::create_dir_all(src.join("sub").join("deeper")).unwrap();
    std::fs::write(src.join("top.txt"), "t").unwrap();
    std::fs::write(src.join("sub").join("mid.txt"), "m").unwrap();
    std::fs::write(src.join("sub").join("deeper").join("low.txt"), "l").unwrap();

    let fs = RecordingFs::default();
    let report = copy_tree(&fs, &src, &tmp.path().join("dst"));
    assert!(report.is_complete());

    let calls = fs.calls.borrow().clone();
    assert_eq!(
        calls,
        vec![
            "mkdir dst",
            "copy top.txt",
            "mkdir sub",
            "copy mid.txt",
            "mkdir deeper",
            "copy low.txt",
        ]
    );
}

#[test]
fn test_home_folder_scenario() {
    let tmp = tempfile::tempdir().unwrap();
    let home = tmp.path().join("home").join("u");
    std::fs::create_dir_all(&home).unwrap();
    std::fs::write(home.join("doc.txt"), "report").unwrap();

    let folder = create_folder(&StdFileSystem, &home).unwrap();
    assert_eq!(folder, home.join("New Folder"));
    assert_eq!(std::fs::read_dir(&folder).unwrap().count(), 0);

    let complete = paste_item(
        &StdFileSystem,
        &home.join("doc.txt"),
        &folder,
        TransferMode::Copy,
        ConflictPolicy::Reject,
    );
    assert!(complete.is_success());
    assert!(home.join("New Folder").join("doc.txt").exists());
    assert!(home.join("doc.txt").exists());
}

#[test]
fn test_cut_paste_leaves_nothing_behind() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("notes.md");
    let target = tmp.path().join("archive");
    std::fs::write(&src, "# notes").unwrap();
    std::fs::create_dir(&target).unwrap();

    let complete = paste_item(
        &StdFileSystem,
        &src,
        &target,
        TransferMode::Move,
        ConflictPolicy::Reject,
    );

    assert!(complete.is_success());
    assert!(!src.exists());
    assert_eq!(std::fs::read_to_string(target.join("notes.md")).unwrap(), "# notes");
}

#[test]
fn test_create_then_rename_then_delete() {
    let tmp = tempfile::tempdir().unwrap();
    let file = create_text_file(&StdFileSystem, tmp.path()).unwrap();
    let renamed = rename_item(&StdFileSystem, &file, "todo.txt").unwrap();

    let listing = list_location(&StdFileSystem, &Location::directory(tmp.path()), false).unwrap();
    let names: Vec<&str> = listing.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["todo.txt"]);

    delete_item(&StdFileSystem, &renamed, false).unwrap();
    assert!(
        list_location(&StdFileSystem, &Location::directory(tmp.path()), false)
            .unwrap()
            .is_empty()
    );
}

#[test]
fn test_drop_batch_aggregates_failures() {
    let tmp = tempfile::tempdir().unwrap();
    let target = tmp.path().join("target");
    std::fs::create_dir(&target).unwrap();
    std::fs::write(tmp.path().join("one.txt"), "1").unwrap();
    std::fs::write(tmp.path().join("two.txt"), "22").unwrap();

    let sources: Vec<PathBuf> = vec![
        tmp.path().join("one.txt"),
        tmp.path().join("ghost.txt"),
        tmp.path().join("two.txt"),
        PathBuf::from("/"),
    ];
    let complete = copy_into(&StdFileSystem, &sources, &target);

    assert_eq!(complete.succeeded, 2);
    assert_eq!(complete.failed, 2);
    assert_eq!(complete.bytes_processed, 3);
    assert!(target.join("one.txt").exists());
    assert!(target.join("two.txt").exists());
}

#[test]
fn test_paste_into_directory_holding_source_keeps_source() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("X").join("X");
    std::fs::create_dir_all(src.join("X")).unwrap();
    std::fs::write(src.join("precious.txt"), "outer").unwrap();
    std::fs::write(src.join("X").join("precious.txt"), "inner").unwrap();

    let moved = paste_item(
        &StdFileSystem,
        &src,
        tmp.path(),
        TransferMode::Move,
        ConflictPolicy::Overwrite,
    );
    assert_eq!(moved.failed, 1);
    assert!(moved.errors[0].message.starts_with("Already exists"));
    assert_eq!(
        std::fs::read_to_string(src.join("precious.txt")).unwrap(),
        "outer"
    );

    let copied = paste_item(
        &StdFileSystem,
        &src,
        tmp.path(),
        TransferMode::Copy,
        ConflictPolicy::Reject,
    );
    assert!(copied.is_success());
    assert_eq!(
        std::fs::read_to_string(src.join("precious.txt")).unwrap(),
        "outer"
    );
    assert_eq!(
        std::fs::read_to_string(tmp.path().join("X (1)").join("X").join("precious.txt")).unwrap(),
        "inner"
    );
}

#[test]
fn test_copy_of_vanished_directory_creates_nothing() {
    let tmp = tempfile::tempdir().unwrap();
    let fs = RecordingFs::default();
    let dst = tmp.path().join("dst");

    let report = copy_tree(&fs, &tmp.path().join("gone"), &dst);

    assert!(!report.is_complete());
    assert!(fs.calls.borrow().is_empty());
    assert!(!dst.exists());
}
