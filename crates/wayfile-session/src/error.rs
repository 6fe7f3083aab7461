//! Session-level errors.

use thiserror::Error;
use wayfile_core::FsError;
use wayfile_ops::OperationComplete;

/// Why an action was not committed.
#[derive(Debug, Error)]
pub enum SessionError {
    /// A filesystem call failed.
    #[error(transparent)]
    Fs(#[from] FsError),

    /// A transfer finished with failed items.
    #[error("{}", .0.summary())]
    Incomplete(OperationComplete),
}

impl SessionError {
    /// The underlying filesystem error, if there is one.
    pub fn fs_error(&self) -> Option<&FsError> {
        match self {
            Self::Fs(e) => Some(e),
            Self::Incomplete(_) => None,
        }
    }
}
