//! Callbacks into the presentation layer.

use std::path::Path;

use wayfile_core::{DirEntry, Location};
use wayfile_ops::OperationComplete;

use crate::SessionError;

/// Whether the back and forward affordances should be enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HistoryAvailability {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// Receives everything a session wants to show.
///
/// Only [`Presenter::listing_changed`] is required; the rest default to
/// doing nothing.
pub trait Presenter {
    /// The listing of the current location changed.
    fn listing_changed(&mut self, location: &Location, entries: &[DirEntry]);

    /// The current location changed.
    fn location_changed(&mut self, _location: &Location) {}

    /// Back/forward availability may have changed.
    fn history_changed(&mut self, _availability: HistoryAvailability) {}

    /// An action failed and was rolled back.
    fn report_error(&mut self, _error: &SessionError) {}

    /// A copy, move, or drop finished.
    fn report_summary(&mut self, _summary: &OperationComplete) {}

    /// A new item was created and should be put into rename mode.
    fn begin_rename(&mut self, _path: &Path) {}
}

/// A presenter that ignores everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullPresenter;

impl Presenter for NullPresenter {
    fn listing_changed(&mut self, _location: &Location, _entries: &[DirEntry]) {}
}
