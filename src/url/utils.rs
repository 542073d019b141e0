//! Lenient URL splitting and small helpers built on it.
//!
//! Nothing here fails: malformed input just produces empty or absent parts.
//! Only `http` and `https` are understood, and no percent-decoding is done.

use crate::types::{QueryParams, Scheme, UrlComponents};

/// Split a full or partial URL into its structural components.
///
/// The input is lowercased, the scheme is detected from an `https` prefix,
/// every `http://` and `https://` is removed, and the rest is cut into host,
/// path, query and anchor.
///
/// # Examples
///
/// ```
/// use urlparser::split_url;
///
/// let parts = split_url("https://nu.nl/film/5821479/einde.html?no=1&m=d#1");
/// assert!(parts.is_secure);
/// assert_eq!(parts.host, "nu.nl");
/// assert_eq!(parts.path, "film/5821479/einde.html");
/// assert_eq!(parts.query_params.get("m"), Some("d"));
/// assert_eq!(parts.anchor, Some("1".to_string()));
/// ```
pub fn split_url(raw: &str) -> UrlComponents {
    let lowered = raw.to_ascii_lowercase();

    // Plain prefix test: "httpsfoo" counts as secure too.
    let scheme = if lowered.starts_with("https") {
        Scheme::Https
    } else {
        Scheme::Http
    };

    let remainder = lowered.replace("http://", "").replace("https://", "");

    let (host, mut request) = match remainder.split_once('/') {
        Some((host, request)) => (host, request),
        None => (remainder.as_str(), ""),
    };

    let mut anchor = None;
    if let Some((before, after)) = request.split_once('#') {
        anchor = Some(after.to_string());
        request = before;
    }

    let (path, query) = match request.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (request, None),
    };

    let query_params = query.map(parse_query).unwrap_or_default();

    UrlComponents {
        scheme,
        is_secure: scheme.is_secure(),
        host: host.to_string(),
        path: path.to_string(),
        query: query.map(str::to_string),
        query_params,
        anchor,
        remainder: remainder.clone(),
    }
}

/// Parse a raw query string (without the `?`) into parameters.
///
/// Each `&`-separated token is split on `=`: the first piece is the key and
/// the last piece is the value, so `a=b=c` gives `a -> c`. A token without
/// `=` maps to an empty value. Repeated keys keep the last value.
///
/// # Examples
///
/// ```
/// use urlparser::parse_query;
///
/// let params = parse_query("a=1&a=2&flag");
/// assert_eq!(params.get("a"), Some("2"));
/// assert_eq!(params.get("flag"), Some(""));
/// ```
pub fn parse_query(query: &str) -> QueryParams {
    let mut params = QueryParams::new();

    for token in query.split('&') {
        let mut pieces = token.split('=');
        let key = pieces.next().unwrap_or("");
        let value = pieces.last().unwrap_or("");
        params.insert(key, value);
    }

    params
}

/// Query parameters of a whole URL; empty when there is no `?`.
pub fn parse_query_string(url: &str) -> QueryParams {
    split_url(url).query_params
}

/// Get a specific query parameter value.
///
/// # Examples
///
/// ```
/// use urlparser::get_query_value;
///
/// assert_eq!(get_query_value("nu.nl/?page=2", "page"), Some("2".to_string()));
/// assert_eq!(get_query_value("nu.nl/?page=2", "missing"), None);
/// ```
pub fn get_query_value(url: &str, key: &str) -> Option<String> {
    parse_query_string(url).get(key).map(str::to_string)
}

/// Get the anchor without the '#'.
pub fn get_anchor(url: &str) -> Option<String> {
    split_url(url).anchor
}

/// Canonical form of `url` with any anchor removed.
///
/// # Examples
///
/// ```
/// use urlparser::strip_anchor;
///
/// assert_eq!(strip_anchor("https://nu.nl/film#top"), "https://nu.nl/film");
/// ```
pub fn strip_anchor(url: &str) -> String {
    let parts = split_url(url);
    let Some(slash) = parts.remainder.find('/') else {
        return parts.to_string();
    };
    match parts.remainder[slash..].find('#') {
        Some(hash) => format!("{}://{}", parts.scheme, &parts.remainder[..slash + hash]),
        None => parts.to_string(),
    }
}

/// Non-empty path segments.
pub fn get_path_segments(url: &str) -> Vec<String> {
    split_url(url)
        .path
        .split('/')
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Last path segment if it has an extension or is the only segment.
pub fn get_filename(url: &str) -> Option<String> {
    let segments = get_path_segments(url);
    let last = segments.last()?;
    if last.contains('.') || segments.len() == 1 {
        Some(last.clone())
    } else {
        None
    }
}

/// Same prefix test the splitter uses for `is_secure`.
pub fn is_https(url: &str) -> bool {
    url.to_ascii_lowercase().starts_with("https")
}

pub fn has_query(url: &str) -> bool {
    split_url(url).query.is_some()
}

pub fn has_anchor(url: &str) -> bool {
    split_url(url).anchor.is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_url_complete() {
        let parts = split_url("https://nu.nl/film/5821479/bijzonder-einde-flikken.html?no=1&m=d#1");

        assert_eq!(parts.scheme, Scheme::Https);
        assert!(parts.is_secure);
        assert_eq!(parts.host, "nu.nl");
        assert_eq!(parts.path, "film/5821479/bijzonder-einde-flikken.html");
        assert_eq!(parts.query, Some("no=1&m=d".to_string()));
        assert_eq!(parts.query_params.get("no"), Some("1"));
        assert_eq!(parts.query_params.get("m"), Some("d"));
        assert_eq!(parts.anchor, Some("1".to_string()));
    }

    #[test]
    fn test_split_url_minimal() {
        let parts = split_url("a.b");

        assert_eq!(parts.scheme, Scheme::Http);
        assert!(!parts.is_secure);
        assert_eq!(parts.host, "a.b");
        assert_eq!(parts.path, "");
        assert_eq!(parts.query, None);
        assert!(parts.query_params.is_empty());
        assert_eq!(parts.anchor, None);
        assert_eq!(parts.to_string(), "http://a.b");
    }

    #[test]
    fn test_scheme_prefix_quirk() {
        assert!(split_url("httpsomething.com").is_secure);
        assert!(split_url("HTTPS://A.B").is_secure);
        assert!(!split_url("http://a.b").is_secure);
    }

    #[test]
    fn test_scheme_removed_everywhere() {
        let parts = split_url("https://a.b/redirect?to=http://c.d/x");

        assert_eq!(parts.host, "a.b");
        assert_eq!(parts.remainder, "a.b/redirect?to=c.d/x");
        assert_eq!(parts.query_params.get("to"), Some("c.d/x"));
    }

    #[test]
    fn test_anchor_split_on_first_hash() {
        let parts = split_url("a.b/x#one#two");
        assert_eq!(parts.path, "x");
        assert_eq!(parts.anchor, Some("one#two".to_string()));

        let trailing = split_url("a.b/x#");
        assert_eq!(trailing.anchor, Some(String::new()));
    }

    #[test]
    fn test_hash_in_host_stays_in_host() {
        // Only the part after the first '/' is searched for '#' and '?'.
        let parts = split_url("a.b#frag");
        assert_eq!(parts.host, "a.b#frag");
        assert_eq!(parts.anchor, None);
    }

    #[test]
    fn test_parse_query_rules() {
        let params = parse_query("a=1&b=2");
        assert_eq!(params.iter().collect::<Vec<_>>(), vec![("a", "1"), ("b", "2")]);

        let dup = parse_query("a=1&a=2");
        assert_eq!(dup.len(), 1);
        assert_eq!(dup.get("a"), Some("2"));

        let flag = parse_query("flag");
        assert_eq!(flag.get("flag"), Some(""));

        let middle = parse_query("a=b=c");
        assert_eq!(middle.get("a"), Some("c"));

        let trailing = parse_query("a=");
        assert_eq!(trailing.get("a"), Some(""));
    }

    #[test]
    fn test_empty_query_present() {
        let parts = split_url("a.b/x?");
        assert_eq!(parts.query, Some(String::new()));
        assert_eq!(parts.query_params.get(""), Some(""));
    }

    #[test]
    fn test_helpers() {
        assert_eq!(get_anchor("https://nu.nl/film/dingen#spullen"), Some("spullen".to_string()));
        assert_eq!(get_anchor("https://www.linkedin.com"), None);
        assert_eq!(strip_anchor("https://nu.nl/film#x"), "https://nu.nl/film");
        assert_eq!(strip_anchor("https://nu.nl/film"), "https://nu.nl/film");

        assert_eq!(get_path_segments("https://nu.nl/film/dingen/"), vec!["film", "dingen"]);
        assert_eq!(get_filename("https://nu.nl/heel/leuk.html"), Some("leuk.html".to_string()));
        assert_eq!(get_filename("https://nu.nl/heel/leuk/"), None);

        assert!(is_https("https://nu.nl"));
        assert!(!is_https("nu.nl"));
        assert!(has_query("nu.nl/?a=1"));
        assert!(!has_query("nu.nl/a"));
        assert!(has_anchor("nu.nl/#a"));
        assert!(!has_anchor("nu.nl#a"));
    }
}
