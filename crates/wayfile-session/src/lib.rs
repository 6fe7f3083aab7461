//! Navigation history and clipboard state machine for wayfile.
//!
//! A [`SessionState`] holds the current location, the back/forward
//! histories, and the single-slot clipboard. Every user action is reduced
//! by [`SessionState::apply`] into a next state plus a list of [`Effect`]s
//! describing filesystem calls and refreshes. A [`Session`] runs those
//! effects against a [`wayfile_ops::FileSystem`] and reports to a
//! [`Presenter`].

mod action;
mod clipboard;
mod error;
mod history;
mod presenter;
mod session;
mod state;

pub use action::{Action, Effect};
pub use clipboard::{Clipboard, ClipboardEntry};
pub use error::SessionError;
pub use history::NavigationHistory;
pub use presenter::{HistoryAvailability, NullPresenter, Presenter};
pub use session::Session;
pub use state::SessionState;
