//! Configuration management for the CLI.
//!
//! Credentials live in a TOML file rather than on the command line, in
//! the spirit of ArchivesSnake's `.archivessnake.yml`.

use crate::error::{CliError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration: where the ArchivesSpace API lives and how to log in.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// ArchivesSpace API base URL (e.g. https://aspace.example.edu/api)
    pub base_url: String,

    /// API username
    pub username: String,

    /// API password
    pub password: String,
}

impl Config {
    /// Get the default configuration file path.
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".aspace-export").join("config.toml"))
    }

    /// Load configuration from the given path, or the default path.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::default_path()?,
        };

        if !path.exists() {
            return Err(CliError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let contents = fs::read_to_string(&path)?;
        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }
}
