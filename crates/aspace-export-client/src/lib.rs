//! ArchivesSpace API client
//!
//! Blocking client for the three read operations the export needs:
//! the ordered descendant list of a resource, individual archival object
//! records, and top container (box) records. Session establishment
//! against the ArchivesSpace backend lives in [`session`]; every request
//! after login carries the session token in the
//! `X-ArchivesSpace-Session` header.
//!
//! # Example
//!
//! ```no_run
//! use aspace_export_client::AspaceClient;
//!
//! let mut client = AspaceClient::new("https://aspace.example.edu/api");
//! client.connect("admin", "secret").expect("Failed to connect");
//!
//! let components = client.ordered_records(3, 388).expect("Failed to fetch tree");
//! ```

#![warn(missing_docs)]

mod client;
mod error;
mod records;
mod session;

pub use client::AspaceClient;
pub use error::ClientError;
pub use records::{
    ArchivalObject, ComponentRef, Instance, RecordRef, SubContainer, TopContainer,
};
