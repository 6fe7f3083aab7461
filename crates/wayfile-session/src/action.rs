//! User actions and the effects they request.

use std::path::PathBuf;

use strum::IntoStaticStr;
use wayfile_core::{DirEntry, Location};

use crate::ClipboardEntry;

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq, IntoStaticStr)]
pub enum Action {
    /// Open a directory, pushing the current location onto the back stack.
    NavigateInto(PathBuf),
    /// Double-click on a listed entry: directories navigate, files launch.
    Activate(DirEntry),
    /// Return to the previous location.
    GoBack,
    /// Undo the last back step.
    GoForward,
    /// Show the mounted volumes.
    ShowDrives,
    /// Re-list the current location.
    Refresh,
    /// Flip whether dot-entries are listed.
    ToggleHidden,
    /// Stage a path for copying.
    StageCopy(PathBuf),
    /// Stage a path for moving.
    StageCut(PathBuf),
    /// Apply the staged item to the current location.
    Paste,
    /// Delete an item.
    Delete(PathBuf),
    /// Give an item a new name in the same directory.
    Rename { source: PathBuf, new_name: String },
    /// Create "New Folder" (or the next free variant) in the current location.
    CreateFolder,
    /// Create "New File.txt" (or the next free variant) in the current location.
    CreateTextFile,
    /// Copy dropped items into the current location.
    Drop(Vec<PathBuf>),
}

impl Action {
    /// Short name for logging.
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

/// A filesystem call or refresh requested by a state transition.
///
/// Effects are listed in the order they must run; a refresh always comes
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// List a location and publish it.
    Refresh(Location),
    /// Copy or move the staged item into a directory.
    Paste {
        entry: ClipboardEntry,
        directory: PathBuf,
    },
    /// Copy several items into a directory.
    CopyInto {
        sources: Vec<PathBuf>,
        directory: PathBuf,
    },
    /// Delete an item.
    Delete(PathBuf),
    /// Rename an item.
    Rename { source: PathBuf, new_name: String },
    /// Create a collision-free new folder in a directory.
    CreateFolder(PathBuf),
    /// Create a collision-free new text file in a directory.
    CreateTextFile(PathBuf),
    /// Open a file with its default handler.
    Launch(PathBuf),
    /// The action needs a directory but the drive list is shown.
    Reject { operation: &'static str },
}

impl Effect {
    /// Whether running this effect can change the filesystem.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Paste { .. }
                | Self::CopyInto { .. }
                | Self::Delete(_)
                | Self::Rename { .. }
                | Self::CreateFolder(_)
                | Self::CreateTextFile(_)
        )
    }
}
