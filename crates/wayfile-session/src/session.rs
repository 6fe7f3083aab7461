//! Runs actions against a filesystem and reports to a presenter.

use std::path::PathBuf;

use tracing::{debug, warn};
use wayfile_core::{DirEntry, FsError, Location, SessionConfig};
use wayfile_ops::{
    FileSystem, OperationComplete, copy_into, create_folder, create_text_file, delete_item,
    list_location, paste_item, rename_item,
};

use crate::presenter::{HistoryAvailability, Presenter};
use crate::{Action, Effect, SessionError, SessionState};

/// Results gathered while running one action's effects.
#[derive(Debug, Default)]
struct Pending {
    listing: Option<Vec<DirEntry>>,
    summary: Option<OperationComplete>,
    created: Option<PathBuf>,
}

/// A browsing session: state, a filesystem to act on, and a presenter.
///
/// Each action is all-or-nothing for the session state. If any effect
/// fails, the state before the action is kept; in particular a failed
/// navigation leaves the history untouched and a failed paste keeps the
/// clipboard entry. When the failed action already changed the filesystem,
/// the current location is listed again so partial results show up.
///
/// A change that completed is never rolled back. If only the listing that
/// follows it fails, the new state is kept, the error is reported and the
/// previous listing stays on screen.
pub struct Session<F, P> {
    fs: F,
    presenter: P,
    config: SessionConfig,
    state: SessionState,
    listing: Vec<DirEntry>,
}

impl<F: FileSystem, P: Presenter> Session<F, P> {
    /// Open a session at `config.start`, or the drive list if unset.
    ///
    /// If the start directory cannot be listed the error is reported and
    /// the session opens on the drive list instead.
    pub fn new(fs: F, presenter: P, config: SessionConfig) -> Self {
        let start = config
            .start
            .clone()
            .map(Location::Directory)
            .unwrap_or_default();
        let state = SessionState::new(start, config.show_hidden);

        let mut session = Self {
            fs,
            presenter,
            config,
            state,
            listing: Vec::new(),
        };

        if let Err(e) = session.publish_current() {
            warn!(error = %e, "start location unavailable, showing drives");
            session.presenter.report_error(&e);
            session.state = SessionState::new(Location::Drives, session.config.show_hidden);
            if let Err(e) = session.publish_current() {
                session.presenter.report_error(&e);
            }
        }

        session
    }

    /// Current state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// The last successful listing of the current location.
    pub fn listing(&self) -> &[DirEntry] {
        &self.listing
    }

    /// Session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// The filesystem.
    pub fn fs(&self) -> &F {
        &self.fs
    }

    /// Run one action to completion.
    ///
    /// Any error has already been passed to the presenter. The action was
    /// rolled back unless its filesystem change had completed and only the
    /// listing afterwards failed.
    pub fn dispatch(&mut self, action: Action) -> Result<(), SessionError> {
        debug!(action = action.name(), "dispatch");
        let (next, effects) = self.state.clone().apply(action);

        let mut pending = Pending::default();
        let mut changed = false;
        for effect in effects {
            let mutates = effect.mutates();
            match self.run(effect, &next, &mut pending) {
                Ok(()) => changed |= mutates,
                Err(e) if changed && !mutates => {
                    warn!(error = %e, "listing failed after change, keeping old listing");
                    self.commit(next, pending);
                    self.presenter.report_error(&e);
                    return Err(e);
                }
                Err(e) => {
                    warn!(error = %e, "action rolled back");
                    self.presenter.report_error(&e);
                    if changed || mutates {
                        if let Err(refresh_err) = self.publish_current() {
                            self.presenter.report_error(&refresh_err);
                        }
                    }
                    return Err(e);
                }
            }
        }

        self.commit(next, pending);
        Ok(())
    }

    fn run(
        &self,
        effect: Effect,
        next: &SessionState,
        pending: &mut Pending,
    ) -> Result<(), SessionError> {
        let fs: &dyn FileSystem = &self.fs;
        match effect {
            Effect::Refresh(location) => {
                pending.listing = Some(list_location(fs, &location, next.show_hidden())?);
            }
            Effect::Paste { entry, directory } => {
                let summary = paste_item(
                    fs,
                    &entry.source,
                    &directory,
                    entry.mode,
                    self.config.move_conflict,
                );
                if !summary.is_success() {
                    return Err(SessionError::Incomplete(summary));
                }
                pending.summary = Some(summary);
            }
            Effect::CopyInto { sources, directory } => {
                // Per-item failures are part of the summary, not a rollback.
                pending.summary = Some(copy_into(fs, &sources, &directory));
            }
            Effect::Delete(path) => delete_item(fs, &path, self.config.use_trash)?,
            Effect::Rename { source, new_name } => {
                rename_item(fs, &source, &new_name)?;
            }
            Effect::CreateFolder(directory) => {
                pending.created = Some(create_folder(fs, &directory)?);
            }
            Effect::CreateTextFile(directory) => {
                pending.created = Some(create_text_file(fs, &directory)?);
            }
            Effect::Launch(path) => fs.launch(&path)?,
            Effect::Reject { operation } => {
                return Err(FsError::NoDirectory { operation }.into());
            }
        }
        Ok(())
    }

    fn commit(&mut self, next: SessionState, pending: Pending) {
        let moved = next.location() != self.state.location();
        self.state = next;

        if moved {
            self.presenter.location_changed(self.state.location());
        }
        if let Some(listing) = pending.listing {
            self.listing = listing;
            self.presenter
                .listing_changed(self.state.location(), &self.listing);
        }
        let availability = self.availability();
        self.presenter.history_changed(availability);

        if let Some(summary) = pending.summary {
            self.presenter.report_summary(&summary);
        }
        if let Some(created) = pending.created {
            self.presenter.begin_rename(&created);
        }
    }

    /// List the committed location and publish it.
    fn publish_current(&mut self) -> Result<(), SessionError> {
        let location = self.state.location().clone();
        let listing = list_location(&self.fs, &location, self.state.show_hidden())?;
        self.listing = listing;
        self.presenter.location_changed(&location);
        self.presenter.listing_changed(&location, &self.listing);
        let availability = self.availability();
        self.presenter.history_changed(availability);
        Ok(())
    }

    fn availability(&self) -> HistoryAvailability {
        HistoryAvailability {
            can_go_back: self.state.history().can_go_back(),
            can_go_forward: self.state.history().can_go_forward(),
        }
    }
}
