//! Core data structures produced by URL splitting and suffix resolution.

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::url::psl::{resolve_suffix, SuffixList, SuffixMatch};
use crate::url::utils::split_url;

/// URL scheme. Only the two web schemes are recognised; anything else is
/// treated as plain `http`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Scheme {
    #[default]
    Http,
    Https,
}

impl Scheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Scheme::Http => "http",
            Scheme::Https => "https",
        }
    }

    pub fn is_secure(&self) -> bool {
        matches!(self, Scheme::Https)
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Query parameters keyed by name, in order of each key's first appearance.
///
/// Inserting an existing key replaces its value but keeps its position, so
/// `a=1&b=2&a=3` yields `[("a", "3"), ("b", "2")]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Set `key` to `value`, overwriting any earlier value in place.
    pub fn insert(&mut self, key: &str, value: &str) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, v)) => *v = value.to_string(),
            None => self.params.push((key.to_string(), value.to_string())),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for QueryParams {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Structural pieces of a URL, before any suffix classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlComponents {
    /// Detected scheme (defaults to http)
    pub scheme: Scheme,
    /// Cached `scheme == Https`
    pub is_secure: bool,
    /// Lowercased host (nu.nl)
    pub host: String,
    /// Path without leading slash, query or anchor (film/dingen)
    pub path: String,
    /// Raw query string without the '?' (a=1&b=2)
    pub query: Option<String>,
    /// Parsed query string
    pub query_params: QueryParams,
    /// Anchor without the '#' (section1)
    pub anchor: Option<String>,
    /// Lowercased input with every `http://` and `https://` removed
    #[serde(skip)]
    pub remainder: String,
}

impl fmt::Display for UrlComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://{}", self.scheme, self.remainder)
    }
}

/// Enum for selecting a single component of a [`ParsedUrl`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlComponentType {
    /// URL scheme (https, http)
    Scheme,
    /// Full hostname (www.quoteshirts.nl)
    Host,
    /// Registrable domain (quoteshirts.nl)
    Domain,
    /// Labels in front of the registrable domain (www)
    Subdomain,
    /// Public suffix (nl, co.uk)
    Tld,
    /// Path component (film/dingen)
    Path,
    /// Raw query string (a=1&b=2)
    Query,
    /// Anchor (spullen)
    Anchor,
    /// Non-empty path segments, comma separated (film,dingen)
    PathSegments,
    /// Filename from path (file.pdf)
    Filename,
}

/// A fully parsed URL: structural components plus public suffix data.
///
/// Built once from a raw string and a suffix list; there are no setters.
/// `Display` gives the canonical form `scheme://remainder`, which parses back
/// into an equal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedUrl {
    #[serde(flatten)]
    components: UrlComponents,
    #[serde(flatten)]
    suffix: SuffixMatch,
}

impl ParsedUrl {
    /// Parse `raw` and classify its host against a loaded suffix list.
    ///
    /// # Examples
    ///
    /// ```
    /// use urlparser::{ParsedUrl, SuffixList};
    ///
    /// let suffixes = SuffixList::from_text("// comment\nuk\nco.uk\nnl\n");
    /// let url = ParsedUrl::parse("https://www.henk.co.uk/film/#top", &suffixes);
    ///
    /// assert!(url.is_secure());
    /// assert_eq!(url.host(), "www.henk.co.uk");
    /// assert_eq!(url.tld(), Some("co.uk"));
    /// assert_eq!(url.domain(), Some("henk.co.uk"));
    /// assert_eq!(url.anchor(), Some("top"));
    /// ```
    pub fn parse(raw: &str, suffixes: &SuffixList) -> Self {
        let components = split_url(raw);
        let suffix = suffixes.resolve(&components.host);
        Self { components, suffix }
    }

    /// Parse `raw` against raw suffix list text, without building an index.
    pub fn parse_with_source(raw: &str, suffix_source: &str) -> Self {
        let components = split_url(raw);
        let suffix = resolve_suffix(&components.host, suffix_source);
        Self { components, suffix }
    }

    pub fn scheme(&self) -> Scheme {
        self.components.scheme
    }

    pub fn is_secure(&self) -> bool {
        self.components.is_secure
    }

    pub fn host(&self) -> &str {
        &self.components.host
    }

    pub fn path(&self) -> &str {
        &self.components.path
    }

    pub fn anchor(&self) -> Option<&str> {
        self.components.anchor.as_deref()
    }

    pub fn query(&self) -> Option<&str> {
        self.components.query.as_deref()
    }

    pub fn query_params(&self) -> &QueryParams {
        &self.components.query_params
    }

    pub fn tld(&self) -> Option<&str> {
        self.suffix.tld.as_deref()
    }

    pub fn domain(&self) -> Option<&str> {
        self.suffix.domain.as_deref()
    }

    pub fn subdomain(&self) -> Option<&str> {
        self.suffix.subdomain(&self.components.host)
    }

    pub fn components(&self) -> &UrlComponents {
        &self.components
    }

    pub fn suffix_match(&self) -> &SuffixMatch {
        &self.suffix
    }

    /// Non-empty `/`-separated segments of the path.
    pub fn path_segments(&self) -> Vec<&str> {
        self.components
            .path
            .split('/')
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// Last path segment if it looks like a file (has a dot, or is the only
    /// segment).
    pub fn filename(&self) -> Option<&str> {
        let segments = self.path_segments();
        let last = *segments.last()?;
        if last.contains('.') || segments.len() == 1 {
            Some(last)
        } else {
            None
        }
    }

    /// Extract one component as an owned string.
    pub fn component(&self, component: UrlComponentType) -> Option<String> {
        match component {
            UrlComponentType::Scheme => Some(self.scheme().to_string()),
            UrlComponentType::Host => Some(self.host().to_string()),
            UrlComponentType::Domain => self.domain().map(str::to_string),
            UrlComponentType::Subdomain => self.subdomain().map(str::to_string),
            UrlComponentType::Tld => self.tld().map(str::to_string),
            UrlComponentType::Path => Some(self.path().to_string()),
            UrlComponentType::Query => self.query().map(str::to_string),
            UrlComponentType::Anchor => self.anchor().map(str::to_string),
            UrlComponentType::PathSegments => {
                let segments = self.path_segments();
                if segments.is_empty() {
                    None
                } else {
                    Some(segments.join(","))
                }
            }
            UrlComponentType::Filename => self.filename().map(str::to_string),
        }
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.components, f)
    }
}

impl TryFrom<&ParsedUrl> for ::url::Url {
    type Error = crate::error::UrlParserError;

    fn try_from(parsed: &ParsedUrl) -> Result<Self, Self::Error> {
        Ok(::url::Url::parse(&parsed.to_string())?)
    }
}
