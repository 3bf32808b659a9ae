//! In-memory catalog of wiki projects and frontend proxies
//!
//! The catalog is built once and never mutated. Record patterns are compiled
//! lazily, once per record, the first time a resolution needs them.

use std::collections::HashMap;
use std::sync::OnceLock;

use fancy_regex::Regex;

use crate::host::{normalize_hostname, walk_host_suffixes};
use crate::types::{FrontendProxy, Record, WikiProject};

// =============================================================================
// Catalog Entry
// =============================================================================

/// A record together with its lazily compiled patterns.
///
/// A pattern that fails to compile is remembered as `None`, so a malformed
/// record is reported once and then behaves like a record that never
/// matches.
#[derive(Debug)]
pub struct CatalogEntry<R> {
    record: R,
    matcher: OnceLock<Option<Regex>>,
    anchor: OnceLock<Option<Regex>>,
    id_matcher: OnceLock<Option<Regex>>,
}

impl<R: Record> CatalogEntry<R> {
    pub fn new(record: R) -> Self {
        Self {
            record,
            matcher: OnceLock::new(),
            anchor: OnceLock::new(),
            id_matcher: OnceLock::new(),
        }
    }

    pub fn record(&self) -> &R {
        &self.record
    }

    /// The record pattern, unanchored.
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher
            .get_or_init(|| compile_pattern(self.record.name(), self.record.pattern()))
            .as_ref()
    }

    /// The id string pattern, anchored at both ends.
    pub fn id_matcher(&self) -> Option<&Regex> {
        let spec = self.record.id_string()?;
        self.id_matcher
            .get_or_init(|| compile_pattern(self.record.name(), &format!("^{}$", spec.pattern)))
            .as_ref()
    }

    /// A derived pattern built from the record by `build` on first use.
    pub(crate) fn anchor_with<F>(&self, build: F) -> Option<&Regex>
    where
        F: FnOnce(&R) -> String,
    {
        self.anchor
            .get_or_init(|| compile_pattern(self.record.name(), &build(&self.record)))
            .as_ref()
    }
}

fn compile_pattern(name: &str, source: &str) -> Option<Regex> {
    match Regex::new(source) {
        Ok(regex) => Some(regex),
        Err(e) => {
            log::warn!("record '{}' has an invalid pattern '{}': {}", name, source, e);
            None
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// Table of project and proxy records keyed by hostname suffix.
#[derive(Debug, Default)]
pub struct Catalog {
    projects: Vec<CatalogEntry<WikiProject>>,
    proxies: Vec<CatalogEntry<FrontendProxy>>,
    project_index: HashMap<String, usize>,
    proxy_index: HashMap<String, usize>,
}

impl Catalog {
    /// Create a catalog from already normalized records.
    ///
    /// When two records share a name the first one is used for lookups.
    pub fn new(projects: Vec<WikiProject>, proxies: Vec<FrontendProxy>) -> Self {
        let projects: Vec<_> = projects.into_iter().map(CatalogEntry::new).collect();
        let proxies: Vec<_> = proxies.into_iter().map(CatalogEntry::new).collect();
        let project_index = index_entries(&projects, "project");
        let proxy_index = index_entries(&proxies, "proxy");

        log::debug!(
            "catalog built with {} projects and {} proxies",
            projects.len(),
            proxies.len()
        );

        Self {
            projects,
            proxies,
            project_index,
            proxy_index,
        }
    }

    pub fn projects(&self) -> impl Iterator<Item = &WikiProject> {
        self.projects.iter().map(CatalogEntry::record)
    }

    pub fn proxies(&self) -> impl Iterator<Item = &FrontendProxy> {
        self.proxies.iter().map(CatalogEntry::record)
    }

    pub fn project_count(&self) -> usize {
        self.projects.len()
    }

    pub fn proxy_count(&self) -> usize {
        self.proxies.len()
    }

    /// Find the project owning `hostname` by longest suffix.
    pub fn project(&self, hostname: &str) -> Option<&WikiProject> {
        self.project_entry(hostname).map(CatalogEntry::record)
    }

    /// Find the proxy owning `hostname` by longest suffix.
    pub fn proxy(&self, hostname: &str) -> Option<&FrontendProxy> {
        self.proxy_entry(hostname).map(CatalogEntry::record)
    }

    pub(crate) fn project_entry(&self, hostname: &str) -> Option<&CatalogEntry<WikiProject>> {
        lookup_suffix(&self.projects, &self.project_index, hostname)
    }

    pub(crate) fn proxy_entry(&self, hostname: &str) -> Option<&CatalogEntry<FrontendProxy>> {
        lookup_suffix(&self.proxies, &self.proxy_index, hostname)
    }

    pub(crate) fn project_entry_by_name(&self, name: &str) -> Option<&CatalogEntry<WikiProject>> {
        self.project_index.get(name).map(|&idx| &self.projects[idx])
    }

    pub(crate) fn proxy_entry_by_name(&self, name: &str) -> Option<&CatalogEntry<FrontendProxy>> {
        self.proxy_index.get(name).map(|&idx| &self.proxies[idx])
    }
}

fn index_entries<R: Record>(entries: &[CatalogEntry<R>], kind: &str) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(entries.len());
    for (idx, entry) in entries.iter().enumerate() {
        let name = normalize_hostname(entry.record().name());
        if index.contains_key(&name) {
            log::warn!("duplicate {} '{}' is shadowed by an earlier record", kind, name);
            continue;
        }
        index.insert(name, idx);
    }
    index
}

fn lookup_suffix<'a, R>(
    entries: &'a [CatalogEntry<R>],
    index: &HashMap<String, usize>,
    hostname: &str,
) -> Option<&'a CatalogEntry<R>> {
    let host = normalize_hostname(hostname);
    walk_host_suffixes(&host)
        .find_map(|suffix| index.get(suffix))
        .map(|&idx| &entries[idx])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::IdStringSpec;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                WikiProject::new("example.org", "(example\\.org)", "/wiki/", "/w/"),
                WikiProject::new("sub.example.org", "(sub\\.example\\.org)", "/", "/"),
                WikiProject::new("broken.org", "((broken\\.org)", "/wiki/", "/w/"),
                WikiProject::new("example.org", "(shadowed\\.org)", "/x/", "/y/"),
            ],
            vec![FrontendProxy::new(
                "proxy.example",
                "(proxy\\.example)/([a-z]+)",
                "https://proxy.example/$2/",
                "https://proxy.example/$2/wiki/",
                "https://$2.example.org/w/",
            )],
        )
    }

    #[test]
    fn test_suffix_lookup() {
        let catalog = catalog();
        assert_eq!(catalog.project("a.b.example.org").map(|p| p.name.as_str()), Some("example.org"));
        assert_eq!(catalog.project("example.org").map(|p| p.name.as_str()), Some("example.org"));
        assert_eq!(catalog.project("x.sub.example.org").map(|p| p.name.as_str()), Some("sub.example.org"));
    }

    #[test]
    fn test_suffix_respects_labels() {
        let catalog = catalog();
        assert!(catalog.project("otherexample.org").is_none());
        assert!(catalog.project("org").is_none());
        assert!(catalog.project("").is_none());
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let catalog = catalog();
        assert!(catalog.project("WWW.Example.Org").is_some());
    }

    #[test]
    fn test_first_duplicate_wins() {
        let catalog = catalog();
        assert_eq!(catalog.project("example.org").map(|p| p.pattern.as_str()), Some("(example\\.org)"));
        assert_eq!(catalog.project_count(), 4);
    }

    #[test]
    fn test_projects_and_proxies_are_separate() {
        let catalog = catalog();
        assert!(catalog.proxy("example.org").is_none());
        assert!(catalog.project("proxy.example").is_none());
        assert!(catalog.proxy("www.proxy.example").is_some());
    }

    #[test]
    fn test_exact_name_lookup() {
        let catalog = catalog();
        assert!(catalog.project_entry_by_name("example.org").is_some());
        assert!(catalog.project_entry_by_name("a.example.org").is_none());
        assert!(catalog.proxy_entry_by_name("proxy.example").is_some());
    }

    #[test]
    fn test_invalid_pattern_is_none() {
        let catalog = catalog();
        let entry = catalog.project_entry("broken.org").unwrap();
        assert!(entry.matcher().is_none());
        assert!(entry.matcher().is_none());
    }

    #[test]
    fn test_id_matcher_is_anchored() {
        let entry = CatalogEntry::new(
            WikiProject::new("example.org", "(example\\.org)", "/wiki/", "/w/")
                .with_id_string(IdStringSpec::new("([a-z]+)", vec!["https://$1.example.org/".into()])),
        );
        let re = entry.id_matcher().unwrap();
        assert!(re.is_match("de").unwrap());
        assert!(!re.is_match("de.x").unwrap());
    }

    #[test]
    fn test_debug_lists_records() {
        let debug = format!("{:?}", catalog());
        assert!(debug.contains("sub.example.org"));
        assert!(debug.contains("proxy.example"));
    }

    #[test]
    fn test_id_matcher_requires_id_string() {
        let entry = CatalogEntry::new(WikiProject::new("example.org", "(example\\.org)", "/wiki/", "/w/"));
        assert!(entry.id_matcher().is_none());
        assert!(entry.matcher().is_some());
    }
}
