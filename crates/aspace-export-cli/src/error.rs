//! Error types for the CLI application.

use thiserror::Error;

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API client error
    #[error("API error: {0}")]
    Client(#[from] aspace_export_client::ClientError),

    /// Malformed folder/item number expression
    #[error("Folder expression error: {0}")]
    FolderExpression(#[from] aspace_export_domain::FolderExpressionError),

    /// A record is missing a field the export requires
    #[error("Missing field: {0}")]
    MissingField(String),

    /// CSV writing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}
