//! urlparser - lenient HTTP(S) URL splitting with public suffix classification.
//!
//! This crate takes a full or partial web URL and splits it into scheme, host,
//! path, query parameters and anchor. The host is then classified against a
//! public suffix list into its public suffix ("tld") and registrable domain.
//!
//! # Features
//!
//! - **Lenient**: any string parses; malformed input yields empty or absent parts
//! - **Most specific suffix wins**: `co.uk` beats `uk` regardless of list order
//! - **Label aware**: a suffix only matches on a dot boundary
//! - **Injected list**: the suffix list is always passed in, never fetched
//! - **Immutable results**: a [`ParsedUrl`] has no setters and is `Send + Sync`
//!
//! # Quick Start
//!
//! ```
//! use urlparser::{ParsedUrl, SuffixList, parse_query};
//!
//! // Usually the contents of public_suffix_list.dat
//! let suffixes = SuffixList::from_text("// ICANN\nno\nhm.no\ngs.hm.no\nnl\n");
//!
//! let url = ParsedUrl::parse("https://henk.gs.hm.no/film/?page=2#cast", &suffixes);
//! assert_eq!(url.tld(), Some("gs.hm.no"));
//! assert_eq!(url.domain(), Some("henk.gs.hm.no"));
//! assert_eq!(url.query_params().get("page"), Some("2"));
//! assert_eq!(url.to_string(), "https://henk.gs.hm.no/film/?page=2#cast");
//!
//! // Query strings on their own
//! let params = parse_query("a=1&a=2");
//! assert_eq!(params.get("a"), Some("2"));
//! ```
//!
//! # Error Handling
//!
//! Parsing and suffix resolution never fail. [`UrlParserError`] is only
//! returned by the surrounding layers:
//!
//! - Reading a suffix list file
//! - Requiring a non-empty suffix list
//! - Loading configuration
//! - Converting into a `url::Url`

// Re-export URL utilities
pub use crate::url::{
    split_url, parse_query, parse_query_string, get_query_value, get_anchor,
    strip_anchor, get_path_segments, get_filename, is_https, has_query, has_anchor,
};

// Re-export suffix handling
pub use crate::url::{
    matches_suffix, resolve_suffix, suffix_entries, SuffixList, SuffixMatch,
    FileSuffixSource, SuffixSource, TextSuffixSource,
};

// Re-export public types
pub use error::UrlParserError;
pub use types::{ParsedUrl, QueryParams, Scheme, UrlComponentType, UrlComponents};

// Module declarations
pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod url;
