//! Session state and the pure transition function.

use std::path::PathBuf;

use wayfile_core::Location;

use crate::{Action, Clipboard, Effect, NavigationHistory};

/// Everything a session remembers between actions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    history: NavigationHistory,
    clipboard: Clipboard,
    show_hidden: bool,
}

impl SessionState {
    /// Start at `location` with empty history and clipboard.
    pub fn new(location: Location, show_hidden: bool) -> Self {
        Self {
            history: NavigationHistory::new(location),
            clipboard: Clipboard::default(),
            show_hidden,
        }
    }

    /// The location being shown.
    pub fn location(&self) -> &Location {
        self.history.current()
    }

    /// Navigation history.
    pub fn history(&self) -> &NavigationHistory {
        &self.history
    }

    /// Clipboard contents.
    pub fn clipboard(&self) -> &Clipboard {
        &self.clipboard
    }

    /// Whether dot-entries are listed.
    pub fn show_hidden(&self) -> bool {
        self.show_hidden
    }

    /// Reduce an action into the next state and the effects it needs.
    ///
    /// No I/O happens here. An action that does nothing in the current state
    /// (going back with an empty back stack, pasting an empty clipboard)
    /// returns the state unchanged and no effects.
    pub fn apply(mut self, action: Action) -> (Self, Vec<Effect>) {
        let effects = match action {
            Action::NavigateInto(path) => self.navigate(Location::Directory(path)),
            Action::Activate(entry) => {
                if entry.is_dir() {
                    self.navigate(Location::Directory(entry.path))
                } else {
                    vec![Effect::Launch(entry.path)]
                }
            }
            Action::ShowDrives => {
                if self.location().is_drives() {
                    Vec::new()
                } else {
                    self.navigate(Location::Drives)
                }
            }
            Action::GoBack => {
                if self.history.go_back() {
                    vec![self.refresh()]
                } else {
                    Vec::new()
                }
            }
            Action::GoForward => {
                if self.history.go_forward() {
                    vec![self.refresh()]
                } else {
                    Vec::new()
                }
            }
            Action::Refresh => vec![self.refresh()],
            Action::ToggleHidden => {
                self.show_hidden = !self.show_hidden;
                vec![self.refresh()]
            }
            Action::StageCopy(path) => {
                self.clipboard.copy(path);
                Vec::new()
            }
            Action::StageCut(path) => {
                self.clipboard.cut(path);
                Vec::new()
            }
            Action::Paste => {
                if self.clipboard.is_empty() {
                    Vec::new()
                } else {
                    match self.directory() {
                        None => vec![Effect::Reject { operation: "Paste" }],
                        Some(directory) => match self.clipboard.take() {
                            Some(entry) => {
                                vec![Effect::Paste { entry, directory }, self.refresh()]
                            }
                            None => Vec::new(),
                        },
                    }
                }
            }
            Action::Delete(path) => match self.directory() {
                None => vec![Effect::Reject { operation: "Delete" }],
                Some(_) => {
                    self.clipboard.forget_under(&path);
                    vec![Effect::Delete(path), self.refresh()]
                }
            },
            Action::Rename { source, new_name } => match self.directory() {
                None => vec![Effect::Reject { operation: "Rename" }],
                Some(_) => vec![Effect::Rename { source, new_name }, self.refresh()],
            },
            Action::CreateFolder => match self.directory() {
                None => vec![Effect::Reject {
                    operation: "Create folder",
                }],
                Some(directory) => vec![Effect::CreateFolder(directory), self.refresh()],
            },
            Action::CreateTextFile => match self.directory() {
                None => vec![Effect::Reject {
                    operation: "Create file",
                }],
                Some(directory) => vec![Effect::CreateTextFile(directory), self.refresh()],
            },
            Action::Drop(sources) => {
                if sources.is_empty() {
                    Vec::new()
                } else {
                    match self.directory() {
                        None => vec![Effect::Reject { operation: "Drop" }],
                        Some(directory) => {
                            vec![Effect::CopyInto { sources, directory }, self.refresh()]
                        }
                    }
                }
            }
        };

        (self, effects)
    }

    fn navigate(&mut self, target: Location) -> Vec<Effect> {
        self.history.navigate_into(target);
        vec![self.refresh()]
    }

    fn refresh(&self) -> Effect {
        Effect::Refresh(self.location().clone())
    }

    fn directory(&self) -> Option<PathBuf> {
        self.location().path().map(|p| p.to_path_buf())
    }
}
