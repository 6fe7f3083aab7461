//! Single-slot clipboard.

use std::path::{Path, PathBuf};

use wayfile_core::TransferMode;

/// A staged source path and what paste should do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardEntry {
    /// The staged item.
    pub source: PathBuf,
    /// Copy or move.
    pub mode: TransferMode,
}

/// Holds at most one staged item. Each copy or cut replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clipboard {
    entry: Option<ClipboardEntry>,
}

impl Clipboard {
    /// Stage a path for copying.
    pub fn copy(&mut self, source: impl Into<PathBuf>) {
        self.stage(source.into(), TransferMode::Copy);
    }

    /// Stage a path for moving.
    pub fn cut(&mut self, source: impl Into<PathBuf>) {
        self.stage(source.into(), TransferMode::Move);
    }

    fn stage(&mut self, source: PathBuf, mode: TransferMode) {
        self.entry = Some(ClipboardEntry { source, mode });
    }

    /// The staged entry, if any.
    pub fn entry(&self) -> Option<&ClipboardEntry> {
        self.entry.as_ref()
    }

    /// Remove and return the staged entry.
    pub fn take(&mut self) -> Option<ClipboardEntry> {
        self.entry.take()
    }

    /// Clear the clipboard.
    pub fn clear(&mut self) {
        self.entry = None;
    }

    /// Check if the clipboard is empty.
    pub fn is_empty(&self) -> bool {
        self.entry.is_none()
    }

    /// Drop the entry if it names `path` or something below it.
    pub fn forget_under(&mut self, path: &Path) {
        if self
            .entry
            .as_ref()
            .is_some_and(|entry| entry.source.starts_with(path))
        {
            self.entry = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_write_wins() {
        let mut clipboard = Clipboard::default();
        assert!(clipboard.is_empty());

        clipboard.copy("/a");
        clipboard.cut("/b");

        let entry = clipboard.entry().unwrap();
        assert_eq!(entry.source, PathBuf::from("/b"));
        assert_eq!(entry.mode, TransferMode::Move);
    }

    #[test]
    fn test_take_empties() {
        let mut clipboard = Clipboard::default();
        clipboard.copy("/a");
        assert!(clipboard.take().is_some());
        assert!(clipboard.is_empty());
        assert!(clipboard.take().is_none());
    }

    #[test]
    fn test_forget_under() {
        let mut clipboard = Clipboard::default();
        clipboard.copy("/data/project/file.rs");

        clipboard.forget_under(Path::new("/data/other"));
        assert!(!clipboard.is_empty());

        clipboard.forget_under(Path::new("/data/project"));
        assert!(clipboard.is_empty());
    }
}
