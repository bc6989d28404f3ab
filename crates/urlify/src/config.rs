use std::{
    io,
    path::{Path, PathBuf},
};

use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the file looked up in a directory by [`UrlifyConfig::new_from_path`].
pub const CONFIG_FILE_NAME: &str = "urlify.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Builder defaults read from a `urlify.toml`, every key is optional.
///
/// ```toml
/// language = "de"
/// max_length = 48
/// stopwords = ["und", "oder"]
/// ```
#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct UrlifyConfig {
    pub language: Option<String>,
    pub max_length: usize,
    pub stopwords: Vec<String>,
}

impl UrlifyConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }

    /// Reads `urlify.toml` from `base_path`. A missing file is not an error, the defaults are
    /// used instead.
    pub fn new_from_path(base_path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = base_path.as_ref().join(CONFIG_FILE_NAME);

        let contents = match std::fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!("no {} found, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Io { path, source }),
        };

        Self::from_toml_str(&contents).map_err(|source| ConfigError::Parse { path, source })
    }
}
