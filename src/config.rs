use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, ShowcaseError},
    theme::{Appearance, Theme},
};

/// Looked up in the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "showcase.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseConfig {
    pub appearance: Appearance,
    /// Theme document to use instead of the built-in one.
    pub theme: Option<PathBuf>,
    pub window: WindowConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 960.,
            height: 900.,
            title: "Spark Template".into(),
        }
    }
}

impl ShowcaseConfig {
    /// Reads the config at `path`. A missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => return Err(read_error(path, source)),
        };

        Self::from_json(&json).map_err(|source| ShowcaseError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// The configured theme document, or the built-in theme.
    pub fn load_theme(&self) -> Result<Theme> {
        let Some(path) = &self.theme else {
            return Ok(Theme::DEFAULT.clone());
        };

        let json = std::fs::read_to_string(path).map_err(|source| read_error(path, source))?;
        Ok(Theme::from_json(json)?)
    }
}

fn read_error(path: &Path, source: std::io::Error) -> ShowcaseError {
    ShowcaseError::Io {
        path: path.to_path_buf(),
        source,
    }
}
