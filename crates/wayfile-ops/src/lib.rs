//! File operations engine for wayfile.
//!
//! This crate defines the [`FileSystem`] capability set the session calls
//! into, a host implementation of it, and the operations built on top:
//! listing, recursive copy, move, create, rename, delete, and batch
//! transfers that collect per-item failures instead of stopping early.
//!
//! Every operation is synchronous and runs to completion on the caller's
//! thread.

mod conflict;
mod copy;
mod create;
mod delete;
mod fs;
mod listing;
mod move_op;
mod operation;
mod rename;
mod transfer;

pub use conflict::{check_not_ancestor, unique_path};
pub use copy::{copy_item, copy_tree, TreeCopy};
pub use create::{create_folder, create_text_file, NEW_FILE_NAME, NEW_FOLDER_NAME};
pub use delete::delete_item;
pub use fs::{FileSystem, StdFileSystem};
pub use listing::{list_location, sort_entries};
pub use move_op::move_item;
pub use operation::{OperationComplete, OperationError, OperationType};
pub use rename::{rename_item, validate_filename};
pub use transfer::{copy_into, paste_item};
