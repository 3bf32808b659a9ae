//! Hostname utilities for catalog lookup
//!
//! Catalog records are keyed by hostname suffix, so lookups walk a host from
//! its full form down to its last label.
//!
//! # Examples
//!
//! ```
//! use mwp_core::host::walk_host_suffixes;
//!
//! let suffixes: Vec<&str> = walk_host_suffixes("en.m.wikipedia.org").collect();
//! assert_eq!(suffixes, ["en.m.wikipedia.org", "m.wikipedia.org", "wikipedia.org", "org"]);
//! ```

/// Get the parent domain (strip leftmost label).
pub fn get_parent_domain(host: &str) -> Option<&str> {
    match host.find('.') {
        Some(idx) if idx < host.len() - 1 => Some(&host[idx + 1..]),
        _ => None,
    }
}

/// Iterator for suffix-walking a host from full to last label.
pub struct HostSuffixIter<'a> {
    current: Option<&'a str>,
}

impl<'a> HostSuffixIter<'a> {
    pub fn new(host: &'a str) -> Self {
        Self {
            current: Some(host).filter(|h| !h.is_empty()),
        }
    }
}

impl<'a> Iterator for HostSuffixIter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;
        self.current = get_parent_domain(result);
        Some(result)
    }
}

/// Walk host suffixes from most specific to least specific.
pub fn walk_host_suffixes(host: &str) -> HostSuffixIter<'_> {
    HostSuffixIter::new(host)
}

/// Find the hostname in a URL or URL-like string.
///
/// Takes the first non-empty component containing a dot among the first
/// three `/`-separated components, which covers bare hostnames,
/// protocol-relative and absolute URLs. Userinfo and port are dropped.
pub fn hostname_candidate(input: &str) -> Option<&str> {
    let part = input
        .split('/')
        .take(3)
        .find(|part| !part.is_empty() && part.contains('.'))?;

    let host = match part.rfind('@') {
        Some(at_pos) => &part[at_pos + 1..],
        None => part,
    };
    let host = match host.find(':') {
        Some(colon_pos) => &host[..colon_pos],
        None => host,
    };
    let host = host.split(['?', '#']).next().unwrap_or_default();

    Some(host).filter(|h| !h.is_empty())
}

/// Normalize a hostname for catalog lookup.
pub fn normalize_hostname(host: &str) -> String {
    host.trim().trim_end_matches('.').to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_parent_domain() {
        assert_eq!(get_parent_domain("sub.example.com"), Some("example.com"));
        assert_eq!(get_parent_domain("example.com"), Some("com"));
        assert_eq!(get_parent_domain("com"), None);
        assert_eq!(get_parent_domain(""), None);
    }

    #[test]
    fn test_walk_host_suffixes() {
        let suffixes: Vec<&str> = walk_host_suffixes("a.b.example.org").collect();
        assert_eq!(suffixes, ["a.b.example.org", "b.example.org", "example.org", "org"]);
    }

    #[test]
    fn test_walk_empty_host() {
        assert_eq!(walk_host_suffixes("").count(), 0);
    }

    #[test]
    fn test_hostname_candidate() {
        assert_eq!(hostname_candidate("https://en.wikipedia.org/wiki/Foo"), Some("en.wikipedia.org"));
        assert_eq!(hostname_candidate("//en.wikipedia.org/w/"), Some("en.wikipedia.org"));
        assert_eq!(hostname_candidate("en.wikipedia.org/wiki/Foo"), Some("en.wikipedia.org"));
        assert_eq!(hostname_candidate("en.wikipedia.org"), Some("en.wikipedia.org"));
        assert_eq!(hostname_candidate("https://user:pw@example.org:8080/"), Some("example.org"));
        assert_eq!(hostname_candidate("example.org?action=raw"), Some("example.org"));
    }

    #[test]
    fn test_hostname_candidate_missing() {
        assert_eq!(hostname_candidate(""), None);
        assert_eq!(hostname_candidate("localhost/wiki/Foo"), None);
        assert_eq!(hostname_candidate("https://localhost/"), None);
    }

    #[test]
    fn test_normalize_hostname() {
        assert_eq!(normalize_hostname("EN.Wikipedia.ORG."), "en.wikipedia.org");
    }
}
