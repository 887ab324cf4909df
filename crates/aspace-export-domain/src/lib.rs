//! ArchivesSpace export domain layer
//!
//! This crate contains the core domain model for the digitization-tracking
//! export. It has ZERO external dependencies and defines the concepts the
//! client and CLI layers build on.
//!
//! ## Key Concepts
//!
//! - **Level**: where a component sits in the archival hierarchy; only
//!   `file` and `item` components become spreadsheet rows
//! - **Folder Expression**: the raw `indicator_2` string on a physical
//!   instance - a single number, a hyphen range ("7-9"), an ampersand
//!   list ("7 & 9"), or absent
//! - **Row**: one line of the output spreadsheet (Box, Folder/Item, Title)
//!
//! The folder-expression expansion in [`folder`] is the one non-trivial
//! algorithm in the system: it turns each instance's expression into one
//! row per encoded folder number.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod folder;
pub mod level;
pub mod row;

// Re-exports for convenience
pub use folder::{expand_instance, FolderExpression, FolderExpressionError};
pub use level::Level;
pub use row::{FolderItem, Row};
