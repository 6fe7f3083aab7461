//! Session configuration types.

use std::path::PathBuf;

use derive_builder::Builder;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// What a move-paste does when the destination name is already taken.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Fail with an already-exists error and leave both items alone.
    #[default]
    Reject,
    /// Move under a free "name (N)" variant of the name.
    AutoRename,
    /// Remove the existing item first.
    Overwrite,
}

/// Configuration for a browsing session.
///
/// Nothing here is persisted; a fresh config is built for every process.
#[derive(Debug, Clone, Builder, Serialize, Deserialize)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct SessionConfig {
    /// Directory to open first (None = the drive list).
    #[builder(default)]
    #[serde(default)]
    pub start: Option<PathBuf>,

    /// List entries whose name starts with a dot.
    #[builder(default = "false")]
    #[serde(default)]
    pub show_hidden: bool,

    /// Send deletions to the trash instead of removing them.
    #[builder(default = "false")]
    #[serde(default)]
    pub use_trash: bool,

    /// Conflict handling for move-paste.
    #[builder(default)]
    #[serde(default)]
    pub move_conflict: ConflictPolicy,
}

impl SessionConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if let Some(Some(start)) = &self.start {
            if start.as_os_str().is_empty() {
                return Err("Start path cannot be empty".to_string());
            }
            if !start.is_absolute() {
                return Err(format!("Start path must be absolute: {}", start.display()));
            }
        }
        Ok(())
    }
}

impl SessionConfig {
    /// Create a new session config builder.
    pub fn builder() -> SessionConfigBuilder {
        SessionConfigBuilder::default()
    }

    /// Create a config that opens the given directory.
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: Some(start.into()),
            ..Self::default()
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start: None,
            show_hidden: false,
            use_trash: false,
            move_conflict: ConflictPolicy::Reject,
        }
    }
}
