//! Public suffix matching and registrable domain derivation.
//!
//! A suffix matches a host when the host ends with it on a label boundary.
//! Among all matches the one with the most labels wins, so `co.uk` beats
//! `uk` no matter where either appears in the list.

use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

use crate::error::UrlParserError;

/// Outcome of resolving a host against a suffix list.
///
/// Both fields are `None` when nothing matched (bare IPs, private or
/// unlisted suffixes, or an empty list).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SuffixMatch {
    /// Longest matching public suffix (nl, co.uk, gs.hm.no)
    pub tld: Option<String>,
    /// Registrable domain: one label plus the suffix (henk.co.uk)
    pub domain: Option<String>,
}

impl SuffixMatch {
    /// Build the match for a host whose public suffix is `tld`.
    ///
    /// When the host is the suffix itself there is no label left and the
    /// domain comes out as `".{tld}"`.
    pub fn from_tld(host: &str, tld: &str) -> Self {
        let remaining = host.strip_suffix(tld).unwrap_or(host);
        let remaining = remaining.strip_suffix('.').unwrap_or(remaining);
        let label = remaining.rsplit('.').next().unwrap_or("");

        Self {
            tld: Some(tld.to_string()),
            domain: Some(format!("{}.{}", label, tld)),
        }
    }

    pub fn is_match(&self) -> bool {
        self.tld.is_some()
    }

    /// Everything in `host` left of the registrable domain, if anything.
    pub fn subdomain<'a>(&self, host: &'a str) -> Option<&'a str> {
        let domain = self.domain.as_deref()?;
        let before = host.strip_suffix(domain)?.strip_suffix('.')?;
        if before.is_empty() {
            None
        } else {
            Some(before)
        }
    }
}

/// Iterate the usable entries of raw suffix list text.
///
/// Lines are trimmed; blank lines and `//` comments are skipped.
pub fn suffix_entries(suffix_source: &str) -> impl Iterator<Item = &str> {
    suffix_source
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with("//"))
}

/// True when `host` ends with `suffix` on a label boundary.
pub fn matches_suffix(host: &str, suffix: &str) -> bool {
    if suffix.is_empty() || !host.ends_with(suffix) {
        return false;
    }
    let start = host.len() - suffix.len();
    start == 0 || host.as_bytes()[start - 1] == b'.'
}

fn label_count(suffix: &str) -> usize {
    suffix.split('.').count()
}

/// Resolve `host` by scanning raw suffix list text once.
///
/// Every entry is tested; the most specific match (most labels, then most
/// characters) is kept. Use [`SuffixList`] when resolving many hosts against
/// the same list.
pub fn resolve_suffix(host: &str, suffix_source: &str) -> SuffixMatch {
    let mut best: Option<&str> = None;

    for suffix in suffix_entries(suffix_source) {
        if !matches_suffix(host, suffix) {
            continue;
        }
        let better = match best {
            None => true,
            Some(current) => {
                (label_count(suffix), suffix.len()) > (label_count(current), current.len())
            }
        };
        if better {
            best = Some(suffix);
        }
    }

    match best {
        Some(tld) => SuffixMatch::from_tld(host, tld),
        None => {
            debug!(host, "no public suffix matched");
            SuffixMatch::default()
        }
    }
}

/// A parsed public suffix list, indexed for repeated lookups.
///
/// Entries keep their source order. The list is immutable once built and can
/// be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct SuffixList {
    entries: Vec<String>,
    index: HashSet<String>,
}

impl SuffixList {
    /// Build a list from raw `public_suffix_list.dat` style text.
    pub fn from_text(suffix_source: &str) -> Self {
        Self::from_entries(suffix_entries(suffix_source))
    }

    /// Build a list from already-filtered entries.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries: Vec<String> = entries
            .into_iter()
            .map(|s| s.as_ref().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let index = entries.iter().cloned().collect();

        debug!(entries = entries.len(), "suffix list built");
        Self { entries, index }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in source order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn contains(&self, suffix: &str) -> bool {
        self.index.contains(suffix)
    }

    /// Fail with [`UrlParserError::EmptySuffixList`] if there is nothing to
    /// match against.
    pub fn ensure_not_empty(&self) -> Result<&Self, UrlParserError> {
        if self.is_empty() {
            Err(UrlParserError::EmptySuffixList)
        } else {
            Ok(self)
        }
    }

    /// Resolve `host` to its public suffix and registrable domain.
    ///
    /// Candidates are the host itself and every tail after a dot, tried from
    /// longest to shortest, so the first hit has the most labels.
    pub fn resolve(&self, host: &str) -> SuffixMatch {
        let candidates = std::iter::once(0).chain(
            host.bytes()
                .enumerate()
                .filter(|(_, b)| *b == b'.')
                .map(|(i, _)| i + 1),
        );

        for start in candidates {
            let candidate = &host[start..];
            if self.index.contains(candidate) {
                return SuffixMatch::from_tld(host, candidate);
            }
        }

        debug!(host, "no public suffix matched");
        SuffixMatch::default()
    }

    /// True when `host` is exactly a listed public suffix.
    pub fn is_public_suffix(&self, host: &str) -> bool {
        self.contains(host)
    }

    /// The registrable domain of `host`, or `None` if no suffix matched or
    /// the host is itself a public suffix.
    pub fn registrable_domain(&self, host: &str) -> Option<String> {
        if self.is_public_suffix(host) {
            return None;
        }
        self.resolve(host).domain
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LIST: &str = "\
// ===BEGIN ICANN DOMAINS===

// uk : https://en.wikipedia.org/wiki/.uk
uk
co.uk
org.uk

// nl : https://www.iana.org/domains/root/db/nl.html
nl

// no : https://www.norid.no/
no
hm.no
gs.hm.no

com
";

    #[test]
    fn test_suffix_entries_skip_comments_and_blanks() {
        let entries: Vec<&str> = suffix_entries(LIST).collect();
        assert_eq!(
            entries,
            vec!["uk", "co.uk", "org.uk", "nl", "no", "hm.no", "gs.hm.no", "com"]
        );
    }

    #[test]
    fn test_suffix_entries_handle_crlf() {
        let entries: Vec<&str> = suffix_entries("// c\r\nuk\r\n\r\nco.uk\r\n").collect();
        assert_eq!(entries, vec!["uk", "co.uk"]);
    }

    #[test]
    fn test_matches_suffix_label_boundary() {
        assert!(matches_suffix("henk.co.uk", "co.uk"));
        assert!(matches_suffix("henk.co.uk", "uk"));
        assert!(matches_suffix("co.uk", "co.uk"));
        assert!(!matches_suffix("custom.com", "om"));
        assert!(!matches_suffix("henk.deco.uk", "co.uk"));
        assert!(!matches_suffix("uk", "co.uk"));
        assert!(!matches_suffix("example.com", ""));
    }

    #[test]
    fn test_multi_label_suffix_wins() {
        let m = resolve_suffix("henk.co.uk", LIST);
        assert_eq!(m.tld.as_deref(), Some("co.uk"));
        assert_eq!(m.domain.as_deref(), Some("henk.co.uk"));
    }

    #[test]
    fn test_three_label_suffix() {
        let m = resolve_suffix("henk.gs.hm.no", LIST);
        assert_eq!(m.tld.as_deref(), Some("gs.hm.no"));
        assert_eq!(m.domain.as_deref(), Some("henk.gs.hm.no"));
    }

    #[test]
    fn test_only_adjacent_label_kept() {
        let m = resolve_suffix("www.quoteshirts.nl", LIST);
        assert_eq!(m.tld.as_deref(), Some("nl"));
        assert_eq!(m.domain.as_deref(), Some("quoteshirts.nl"));
        assert_eq!(m.subdomain("www.quoteshirts.nl"), Some("www"));
    }

    #[test]
    fn test_no_match() {
        let m = resolve_suffix("192.168.1.10", LIST);
        assert!(!m.is_match());
        assert_eq!(m.domain, None);

        let empty = resolve_suffix("example.com", "");
        assert_eq!(empty, SuffixMatch::default());
    }

    #[test]
    fn test_host_equal_to_suffix() {
        let m = resolve_suffix("co.uk", LIST);
        assert_eq!(m.tld.as_deref(), Some("co.uk"));
        assert_eq!(m.domain.as_deref(), Some(".co.uk"));
        assert_eq!(m.subdomain("co.uk"), None);
    }

    #[test]
    fn test_indexed_list_agrees_with_scan() {
        let list = SuffixList::from_text(LIST);
        let hosts = [
            "henk.co.uk",
            "a.b.henk.gs.hm.no",
            "www.quoteshirts.nl",
            "hm.no",
            "custom.com",
            "localhost",
            "",
            "example.com.",
        ];

        for host in hosts {
            assert_eq!(list.resolve(host), resolve_suffix(host, LIST), "host: {}", host);
        }
    }

    #[test]
    fn test_suffix_list_accessors() {
        let list = SuffixList::from_text(LIST);
        assert_eq!(list.len(), 8);
        assert!(!list.is_empty());
        assert_eq!(list.entries()[0], "uk");
        assert!(list.contains("gs.hm.no"));
        assert!(list.ensure_not_empty().is_ok());

        let empty = SuffixList::from_text("// only comments\n\n");
        assert!(empty.is_empty());
        assert_eq!(empty.ensure_not_empty().unwrap_err(), UrlParserError::EmptySuffixList);
    }

    #[test]
    fn test_registrable_domain() {
        let list = SuffixList::from_text(LIST);
        assert_eq!(list.registrable_domain("www.bbc.co.uk"), Some("bbc.co.uk".to_string()));
        assert_eq!(list.registrable_domain("co.uk"), None);
        assert_eq!(list.registrable_domain("localhost"), None);
        assert!(list.is_public_suffix("hm.no"));
        assert!(!list.is_public_suffix("henk.hm.no"));
    }
}
