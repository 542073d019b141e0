//! Error types for suffix list loading, configuration and URL conversion.
//!
//! Splitting a URL and resolving its public suffix never fail; these errors
//! only come from the layers around that core.

use thiserror::Error;

/// Errors that can occur outside the infallible parsing core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum UrlParserError {
    /// The suffix list source could not be read.
    #[error("Failed to read suffix list from {path}: {reason}")]
    SuffixListRead { path: String, reason: String },

    /// The suffix list contained no usable entries.
    #[error("Suffix list contains no usable entries")]
    EmptySuffixList,

    /// The configuration file could not be located, read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The tracing subscriber could not be installed.
    #[error("Logging initialization failed: {0}")]
    Logging(String),

    /// Conversion into a `url::Url` failed.
    #[error("URL parsing error: {0}")]
    UrlParseError(String),
}

impl From<::url::ParseError> for UrlParserError {
    fn from(err: ::url::ParseError) -> Self {
        UrlParserError::UrlParseError(err.to_string())
    }
}

impl From<toml::de::Error> for UrlParserError {
    fn from(err: toml::de::Error) -> Self {
        UrlParserError::Config(err.to_string())
    }
}

impl From<xdg::BaseDirectoriesError> for UrlParserError {
    fn from(err: xdg::BaseDirectoriesError) -> Self {
        UrlParserError::Config(err.to_string())
    }
}
