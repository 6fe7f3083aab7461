//! Rename operation.

use std::path::{Path, PathBuf};

use tracing::info;
use wayfile_core::{FsError, FsResult};

use crate::FileSystem;

/// Rename a file or directory within its parent directory.
///
/// Returns the new path. On any failure the original item is untouched.
/// Renaming to the current name is a no-op.
pub fn rename_item(fs: &dyn FileSystem, source: &Path, new_name: &str) -> FsResult<PathBuf> {
    validate_filename(new_name)?;

    let parent = source.parent().unwrap_or(Path::new(""));
    let new_path = parent.join(new_name);

    if new_path == source {
        return Ok(new_path);
    }

    if !fs.exists(source) {
        return Err(FsError::NotFound {
            path: source.to_path_buf(),
        });
    }

    if fs.exists(&new_path) {
        return Err(FsError::AlreadyExists { path: new_path });
    }

    fs.rename(source, &new_path)?;
    info!(from = %source.display(), to = %new_path.display(), "renamed");
    Ok(new_path)
}

/// Validate a filename for cross-platform compatibility.
pub fn validate_filename(name: &str) -> FsResult<()> {
    if name.is_empty() {
        return Err(FsError::invalid_name(name, "Name cannot be empty"));
    }

    if name.len() > 255 {
        return Err(FsError::invalid_name(
            name,
            "Name is too long (max 255 characters)",
        ));
    }

    let invalid_chars = ['/', '\0'];
    for c in invalid_chars {
        if name.contains(c) {
            return Err(FsError::invalid_name(
                name,
                format!("Name cannot contain '{}'", c.escape_default()),
            ));
        }
    }

    #[cfg(target_os = "windows")]
    {
        let windows_invalid = ['\\', ':', '*', '?', '"', '<', '>', '|'];
        for c in windows_invalid {
            if name.contains(c) {
                return Err(FsError::invalid_name(
                    name,
                    format!("Name cannot contain '{}'", c),
                ));
            }
        }

        let reserved = [
            "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7",
            "COM8", "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
        ];
        let upper_name = name.to_uppercase();
        let base_name = upper_name.split('.').next().unwrap_or("");
        if reserved.contains(&base_name) {
            return Err(FsError::invalid_name(name, "Reserved filename"));
        }
    }

    if name.starts_with(' ') || name.ends_with(' ') {
        return Err(FsError::invalid_name(
            name,
            "Name cannot start or end with spaces",
        ));
    }

    if name == "." || name == ".." {
        return Err(FsError::invalid_name(name, "'.' and '..' are reserved names"));
    }

    if name.ends_with('.') {
        return Err(FsError::invalid_name(name, "Name cannot end with a dot"));
    }

    Ok(())
}
