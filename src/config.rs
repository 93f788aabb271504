// src/config.rs
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

pub const CONFIG_FILE: &str = "pkgviz.toml";

/// Settings read from `pkgviz.toml` at the project root.
///
/// Every field is optional; command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub max_depth: Option<i64>,
    #[serde(default)]
    pub dot: Option<bool>,
    #[serde(default)]
    pub skip_dirs: Vec<String>,
}

impl Config {
    /// Loads `pkgviz.toml` from `root`, or defaults when there is none.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(root: &Path) -> Result<Self> {
        let path = root.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => {
                tracing::debug!(path = %path.display(), "loading config");
                Self::parse(&content).map_err(|message| Error::Config { path, message })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(Error::io(path, e)),
        }
    }

    /// Parses config content.
    ///
    /// # Errors
    /// Returns the toml error message on malformed content.
    pub fn parse(content: &str) -> std::result::Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
    }
}
