//! `daybook.toml` configuration.
//!
//! Every key is optional. Missing sections fall back to the same defaults the
//! library crates use, and unknown keys are rejected so typos surface early.

use std::fs;
use std::path::{Path, PathBuf};

use daybook_ingest::DiscoveryOptions;
use daybook_nav::{KeyboardLayout, RenderOptions};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File looked up in the program directory when no `--config` is given.
pub const CONFIG_FILENAME: &str = "daybook.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub render: RenderSection,
    pub content: ContentSection,
    pub keyboard: KeyboardSection,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSection {
    /// Day label; `{n}` is the day number.
    pub label_format: String,
    pub home_label: String,
    pub wants_web_preview: bool,
}

impl Default for RenderSection {
    fn default() -> Self {
        let options = RenderOptions::default();
        Self {
            label_format: options.label_format,
            home_label: options.home_label,
            wants_web_preview: options.wants_web_preview,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContentSection {
    pub descriptor_file: String,
    pub text_extensions: Vec<String>,
}

impl Default for ContentSection {
    fn default() -> Self {
        let options = DiscoveryOptions::default();
        Self {
            descriptor_file: options.descriptor_file,
            text_extensions: options.text_extensions,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyboardSection {
    pub days_per_page: usize,
    pub buttons_per_row: usize,
}

impl Default for KeyboardSection {
    fn default() -> Self {
        let layout = KeyboardLayout::default();
        Self {
            days_per_page: layout.days_per_page,
            buttons_per_row: layout.buttons_per_row,
        }
    }
}

impl Config {
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            label_format: self.render.label_format.clone(),
            home_label: self.render.home_label.clone(),
            wants_web_preview: self.render.wants_web_preview,
        }
    }

    pub fn discovery_options(&self) -> DiscoveryOptions {
        DiscoveryOptions {
            descriptor_file: self.content.descriptor_file.clone(),
            text_extensions: self
                .content
                .text_extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    pub fn keyboard_layout(&self) -> KeyboardLayout {
        KeyboardLayout::new(self.keyboard.days_per_page, self.keyboard.buttons_per_row)
    }
}

/// Parse a config file.
pub fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load the effective configuration.
///
/// An explicit path must exist and parse. Otherwise `daybook.toml` in the
/// program directory is used when present, and defaults when it is not.
pub fn load_config(
    explicit: Option<&Path>,
    program_dir: Option<&Path>,
) -> Result<Config, ConfigError> {
    if let Some(path) = explicit {
        let config = read_config(path)?;
        tracing::info!(path = %path.display(), "loaded config");
        return Ok(config);
    }
    let Some(path) = program_dir.map(|dir| dir.join(CONFIG_FILENAME)) else {
        return Ok(Config::default());
    };
    if !path.is_file() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    let config = read_config(&path)?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}
