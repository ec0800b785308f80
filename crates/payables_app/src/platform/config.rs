use std::fs;
use std::path::{Path, PathBuf};

use payables_core::Seed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::logging::LogDestination;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Where hand-off manifests are written.
    pub output_dir: PathBuf,
    pub log_destination: LogDestination,
    pub log_level: String,
    /// Startup invoices and history. `None` means the built-in demo data.
    pub seed: Option<Seed>,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("handoff"),
            log_destination: LogDestination::File,
            log_level: "info".to_string(),
            seed: None,
        }
    }
}

/// Reads the config at `path`. A missing file is not an error: it yields `None`.
pub fn load_config(path: &Path) -> Result<Option<DeskConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    parse_config(&content)
        .map(Some)
        .map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
}

fn parse_config(content: &str) -> Result<DeskConfig, ron::error::SpannedError> {
    ron::from_str(content)
}
