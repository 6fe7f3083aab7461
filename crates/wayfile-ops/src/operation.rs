//! Operation types and result summaries.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use wayfile_core::FsError;

/// Which transfer a summary describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OperationType {
    Copy,
    Move,
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Copy => write!(f, "Copy"),
            Self::Move => write!(f, "Move"),
        }
    }
}

/// An error that occurred for one item of an operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationError {
    /// The path that caused the error.
    pub path: PathBuf,
    /// A human-readable error message.
    pub message: String,
}

impl OperationError {
    /// Create a new operation error.
    pub fn new(path: PathBuf, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
        }
    }

    /// Record a filesystem error against the item it happened to.
    pub fn from_fs(path: impl Into<PathBuf>, error: &FsError) -> Self {
        Self::new(path.into(), error.to_string())
    }
}

impl std::fmt::Display for OperationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path.display(), self.message)
    }
}

/// Result of a completed operation.
///
/// Each top-level item counts once, as either succeeded or failed. Errors
/// from inside a directory tree are listed individually and mark the
/// top-level item as failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationComplete {
    /// The type of operation.
    pub operation_type: OperationType,
    /// Number of items successfully processed.
    pub succeeded: usize,
    /// Number of items that failed.
    pub failed: usize,
    /// Total bytes processed.
    pub bytes_processed: u64,
    /// Errors that occurred.
    pub errors: Vec<OperationError>,
}

impl OperationComplete {
    /// Create an empty summary for an operation.
    pub fn new(operation_type: OperationType) -> Self {
        Self {
            operation_type,
            succeeded: 0,
            failed: 0,
            bytes_processed: 0,
            errors: Vec::new(),
        }
    }

    /// Count one item as done.
    pub fn record_success(&mut self, bytes: u64) {
        self.succeeded += 1;
        self.bytes_processed += bytes;
    }

    /// Count one item as failed.
    pub fn record_failure(&mut self, error: OperationError) {
        self.failed += 1;
        self.errors.push(error);
    }

    /// Check if the operation was fully successful.
    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    /// Get a human-readable summary of the operation.
    pub fn summary(&self) -> String {
        let action = match self.operation_type {
            OperationType::Copy => "Copied",
            OperationType::Move => "Moved",
        };
        let noun = if self.succeeded == 1 { "item" } else { "items" };

        if self.failed == 0 {
            format!("{} {} {}", action, self.succeeded, noun)
        } else {
            format!(
                "{} {} {}, {} failed",
                action, self.succeeded, noun, self.failed
            )
        }
    }
}
