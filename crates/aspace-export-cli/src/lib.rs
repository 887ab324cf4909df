//! aspace-export CLI library.
//!
//! This library provides the functionality behind the `aspace-export`
//! binary: argument parsing, credentials configuration, the export
//! orchestrator, and the CSV writer.

pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod writer;

pub use cli::Cli;
pub use config::Config;
pub use error::{CliError, Result};
pub use export::ExportSummary;
