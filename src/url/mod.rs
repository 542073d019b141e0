//! URL splitting and public suffix handling.
//!
//! This module contains:
//! - The lenient structural splitter and query parser
//! - Public suffix matching and registrable domain derivation
//! - Suffix list sources

pub mod psl;
pub mod source;
pub mod utils;

// Re-export main functionality
pub use psl::{matches_suffix, resolve_suffix, suffix_entries, SuffixList, SuffixMatch};
pub use source::{FileSuffixSource, SuffixSource, TextSuffixSource};
pub use utils::{
    split_url, parse_query, parse_query_string, get_query_value, get_anchor,
    strip_anchor, get_path_segments, get_filename, is_https, has_query, has_anchor,
};
