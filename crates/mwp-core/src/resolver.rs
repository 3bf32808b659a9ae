//! Memoizing resolution engine
//!
//! One [`Resolver`] owns one catalog and its caches. Two resolvers built
//! from different catalogs never share cache entries.

use url::Url;

use crate::cache::ResultCache;
use crate::catalog::Catalog;
use crate::host::{hostname_candidate, normalize_hostname};
use crate::id_string;
use crate::link_fix::LinkFixer;
use crate::paths::{resolve_project, resolve_proxy};
use crate::types::{FrontendProxy, ProjectMatch, ProxyMatch, WikiProject};

#[derive(Default)]
struct Caches {
    projects: ResultCache<String, Option<ProjectMatch>>,
    proxies: ResultCache<String, Option<ProxyMatch>>,
    id_strings: ResultCache<String, Option<String>>,
    urls: ResultCache<(String, String), Option<String>>,
    link_fixers: ResultCache<String, Option<LinkFixer>>,
}

/// Resolves URLs against a catalog of wiki projects and frontend proxies.
pub struct Resolver {
    catalog: Catalog,
    caches: Caches,
}

impl Resolver {
    /// Create a resolver with empty caches.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            caches: Caches::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the wiki project owning `hostname`.
    pub fn get_project(&self, hostname: &str) -> Option<&WikiProject> {
        self.catalog.project(hostname)
    }

    /// Find the frontend proxy owning `hostname`.
    pub fn get_proxy(&self, hostname: &str) -> Option<&FrontendProxy> {
        self.catalog.proxy(hostname)
    }

    /// Resolve a URL or partial URL to a wiki project.
    pub fn resolve_input(&self, input: &str) -> Option<ProjectMatch> {
        self.caches.projects.get_or_insert_with(input, || {
            let result = resolve_project(&self.catalog, input);
            if result.is_none() {
                log::debug!("no wiki project matches '{}'", input);
            }
            result
        })
    }

    /// Resolve a URL or partial URL to a frontend proxy.
    pub fn resolve_proxy_input(&self, input: &str) -> Option<ProxyMatch> {
        self.caches.proxies.get_or_insert_with(input, || {
            let result = resolve_proxy(&self.catalog, input);
            if result.is_none() {
                log::debug!("no frontend proxy matches '{}'", input);
            }
            result
        })
    }

    /// Encode a URL as the id string of its record.
    pub fn url_to_id_string(&self, url: &Url) -> Option<String> {
        self.caches
            .id_strings
            .get_or_insert_with(url.as_str(), || id_string::encode(&self.catalog, url))
    }

    /// Decode an id string against the record named `name`.
    pub fn id_string_to_url(&self, id_string: &str, name: &str) -> Option<Url> {
        let key = (name.to_string(), id_string.to_string());
        let filled = self
            .caches
            .urls
            .get_or_insert_with(&key, || id_string::decode(&self.catalog, id_string, name))?;
        Url::parse(&filled).ok()
    }

    /// Build the relative link fixer for the proxy owning a hostname or URL.
    pub fn build_link_fixer(&self, hostname_or_url: &str) -> Option<LinkFixer> {
        let hostname = normalize_hostname(hostname_candidate(hostname_or_url)?);
        self.caches.link_fixers.get_or_insert_with(hostname.as_str(), || {
            let proxy = self.catalog.proxy(&hostname)?;
            LinkFixer::build(proxy)
        })
    }

    /// Drop every cached result.
    pub fn clear_caches(&self) {
        self.caches.projects.clear();
        self.caches.proxies.clear();
        self.caches.id_strings.clear();
        self.caches.urls.clear();
        self.caches.link_fixers.clear();
    }
}
