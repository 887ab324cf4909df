//! CLI argument definitions and parsing.

use clap::Parser;
use std::path::PathBuf;

/// Export an ArchivesSpace collection to a digitization-tracking CSV.
///
/// Fetches the full descendant tree of a resource, expands every file-
/// and item-level component into one row per folder/item number, and
/// writes a `Box,Folder/Item,Title` spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "aspace-export")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// ArchivesSpace repository ID
    pub repo: u32,

    /// ArchivesSpace resource (collection) ID
    pub resource: u32,

    /// Output CSV file path (overwritten if it exists)
    pub output: PathBuf,

    /// Configuration file path (default: ~/.aspace-export/config.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["aspace-export", "3", "388", "ms353_digi_tracking.csv"]);
        assert_eq!(cli.repo, 3);
        assert_eq!(cli.resource, 388);
        assert_eq!(cli.output, PathBuf::from("ms353_digi_tracking.csv"));
        assert!(cli.config.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn test_config_override() {
        let cli = Cli::parse_from([
            "aspace-export",
            "3",
            "388",
            "out.csv",
            "--config",
            "creds.toml",
            "--verbose",
        ]);
        assert_eq!(cli.config, Some(PathBuf::from("creds.toml")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_non_numeric_ids_rejected() {
        let result = Cli::try_parse_from(["aspace-export", "three", "388", "out.csv"]);
        assert!(result.is_err());
    }
}
