//! Where suffix list text comes from.
//!
//! Fetching the list is the application's business; the parser only ever
//! sees a loaded [`SuffixList`]. These sources cover the local cases.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::UrlParserError;
use crate::url::psl::SuffixList;

/// Something that can produce a suffix list.
pub trait SuffixSource {
    fn load(&self) -> Result<SuffixList, UrlParserError>;
}

/// Reads a `public_suffix_list.dat` file from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSuffixSource {
    path: PathBuf,
}

impl FileSuffixSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SuffixSource for FileSuffixSource {
    fn load(&self) -> Result<SuffixList, UrlParserError> {
        let text = fs::read_to_string(&self.path).map_err(|e| UrlParserError::SuffixListRead {
            path: self.path.display().to_string(),
            reason: e.to_string(),
        })?;

        let list = SuffixList::from_text(&text);
        if list.is_empty() {
            warn!(path = %self.path.display(), "suffix list file has no usable entries");
        } else {
            debug!(path = %self.path.display(), entries = list.len(), "loaded suffix list");
        }
        Ok(list)
    }
}

/// Suffix list text already held in memory (embedded data, a fetched body).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSuffixSource {
    text: String,
}

impl TextSuffixSource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl SuffixSource for TextSuffixSource {
    fn load(&self) -> Result<SuffixList, UrlParserError> {
        Ok(SuffixList::from_text(&self.text))
    }
}
