//! Core types and configuration for wayfile.
//!
//! This crate provides the data structures shared by the operations engine
//! and the session state machine: locations, directory entries, volumes,
//! transfer modes, errors, and session configuration.

mod config;
mod entry;
mod error;

pub use config::{ConflictPolicy, SessionConfig, SessionConfigBuilder};
pub use entry::{DirEntry, EntryKind, Location, TransferMode, Volume};
pub use error::{FsError, FsResult};
