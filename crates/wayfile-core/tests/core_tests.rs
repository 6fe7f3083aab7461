use std::path::{Path, PathBuf};

use wayfile_core::{
    ConflictPolicy, DirEntry, EntryKind, FsError, Location, SessionConfig, TransferMode, Volume,
};

#[test]
fn test_location_drives_is_default() {
    let location = Location::default();
    assert!(location.is_drives());
    assert!(location.path().is_none());
    assert_eq!(location.to_string(), "Drives");
}

#[test]
fn test_location_directory() {
    let location = Location::directory("/home/u");
    assert!(!location.is_drives());
    assert_eq!(location.path(), Some(Path::new("/home/u")));
    assert_eq!(location, Location::from(PathBuf::from("/home/u")));
    assert_eq!(location.to_string(), "/home/u");
}

#[test]
fn test_dir_entry_names_from_path() {
    let dir = DirEntry::directory("/home/u/projects");
    assert_eq!(dir.name.as_str(), "projects");
    assert!(dir.is_dir());

    let file = DirEntry::file("/home/u/.bashrc");
    assert_eq!(file.kind, EntryKind::File);
    assert!(file.is_hidden());
    assert!(!file.is_dir());
}

#[test]
fn test_root_entry_uses_full_path_as_name() {
    let root = DirEntry::directory("/");
    assert_eq!(root.name.as_str(), "/");
}

#[test]
fn test_volume_to_entry() {
    let volume = Volume::new("/mnt/usb", "USB");
    let entry = volume.to_entry();
    assert_eq!(entry.name.as_str(), "/mnt/usb");
    assert_eq!(entry.path, PathBuf::from("/mnt/usb"));
    assert!(entry.is_dir());
}

#[test]
fn test_transfer_mode_display() {
    assert_eq!(TransferMode::Copy.to_string(), "Copy");
    assert_eq!(TransferMode::Move.to_string(), "Move");
}

#[test]
fn test_entry_serialization() {
    let entry = DirEntry::file("/home/u/doc.txt");
    let json = serde_json::to_string(&entry).unwrap();
    let parsed: DirEntry = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, entry);
}

#[test]
fn test_config_deserializes_with_defaults() {
    let config: SessionConfig = serde_json::from_str(r#"{"move_conflict":"overwrite"}"#).unwrap();
    assert_eq!(config.move_conflict, ConflictPolicy::Overwrite);
    assert!(!config.show_hidden);
    assert!(!config.use_trash);
    assert!(config.start.is_none());
}

#[test]
fn test_error_display_includes_path() {
    let err = FsError::NotFound {
        path: PathBuf::from("/gone"),
    };
    assert_eq!(err.to_string(), "Path not found: /gone");
}
