//! Configuration for the command line front end.
//!
//! Read from `~/.config/urlparser/config.toml` unless a path is given. The
//! library itself needs no configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::UrlParserError;

/// File name of the cached public suffix list in the XDG data dirs.
pub const SUFFIX_LIST_FILE: &str = "public_suffix_list.dat";

/// How parsed URLs are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Path to a `public_suffix_list.dat`; falls back to the XDG data file.
    #[serde(default)]
    pub suffix_list: Option<PathBuf>,
    /// `tracing` filter directive, overridden by `RUST_LOG`.
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub output: OutputFormat,
}

/// Where the default config file lives (it may not exist).
pub fn config_path() -> Result<PathBuf, UrlParserError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlparser")?;
    Ok(xdg_dirs.get_config_home().join("urlparser").join("config.toml"))
}

/// Look for a cached suffix list in the XDG data dirs.
pub fn default_suffix_list_path() -> Option<PathBuf> {
    xdg::BaseDirectories::with_prefix("urlparser")
        .ok()?
        .find_data_file(SUFFIX_LIST_FILE)
}

/// Load configuration from `path`.
pub fn load(path: &Path) -> Result<ParserConfig, UrlParserError> {
    let data = fs::read_to_string(path)
        .map_err(|e| UrlParserError::Config(format!("{}: {}", path.display(), e)))?;
    let cfg: ParserConfig = toml::from_str(&data)?;
    Ok(cfg)
}

/// Load the default config file, or defaults if it does not exist.
pub fn load_or_default() -> Result<ParserConfig, UrlParserError> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlparser")?;
    match xdg_dirs.find_config_file("config.toml") {
        Some(path) => load(&path),
        None => {
            tracing::debug!("no config file found, using defaults");
            Ok(ParserConfig::default())
        }
    }
}
