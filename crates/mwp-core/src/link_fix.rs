//! Relative link rewriting for frontend proxies
//!
//! Proxies mirror a wiki under their own paths, so a relative link taken
//! from a proxied page may need the proxy's mount point put back, query
//! parameters carried over from the page, or a proxy-specific prefix
//! removed. Everything a proxy needs is derived once from its name path.

use std::borrow::Cow;

use fancy_regex::Regex;

use crate::href::{append_query, extract_query, has_query_key, query_key, query_pairs};
use crate::types::FrontendProxy;

/// Name paths split into more pieces than this mount wikis below the root.
const ROOT_DEPTH: usize = 4;

bitflags::bitflags! {
    /// Rewriting steps a proxy needs.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct FixShape: u8 {
        /// Re-insert the mount point taken from the page link
        const PATH_PREFIX = 1 << 0;
        /// Carry query parameters of the name path over from the page link
        const FORWARD_QUERY = 1 << 1;
        /// Strip the proxy's relative fix pattern from the link
        const RELATIVE_FIX = 1 << 2;
    }
}

/// Rewrites relative links found on one proxy's pages.
#[derive(Debug, Clone)]
pub struct LinkFixer {
    shape: FixShape,
    path_depth: usize,
    query_keys: Vec<String>,
    relative_fix: Option<Regex>,
}

impl LinkFixer {
    /// Derive the fixer for a proxy.
    ///
    /// Returns `None` when links from this proxy need no rewriting, or when
    /// its relative fix pattern does not compile.
    pub fn build(proxy: &FrontendProxy) -> Option<Self> {
        let path_depth = proxy.name_path.split('/').count();
        let query_keys = name_path_query_keys(&proxy.name_path);

        let relative_fix = match proxy.relative_fix.as_deref().filter(|fix| !fix.is_empty()) {
            Some(source) => match Regex::new(source) {
                Ok(regex) => Some(regex),
                Err(e) => {
                    log::warn!("proxy '{}' has an invalid relative fix '{}': {}", proxy.name, source, e);
                    return None;
                }
            },
            None => None,
        };

        let mut shape = FixShape::empty();
        shape.set(FixShape::PATH_PREFIX, path_depth > ROOT_DEPTH);
        shape.set(FixShape::FORWARD_QUERY, !query_keys.is_empty());
        shape.set(FixShape::RELATIVE_FIX, relative_fix.is_some());

        if shape.is_empty() {
            return None;
        }

        Some(Self {
            shape,
            path_depth,
            query_keys,
            relative_fix,
        })
    }

    pub fn shape(&self) -> FixShape {
        self.shape
    }

    /// Query keys forwarded from the page link.
    pub fn query_keys(&self) -> &[String] {
        &self.query_keys
    }

    /// Rewrite `href`, found on the page at `pagelink`.
    pub fn fix(&self, href: &str, pagelink: &str) -> String {
        let href = match &self.relative_fix {
            Some(regex) => remove_first(regex, href),
            None => Cow::Borrowed(href),
        };

        let mut link = String::with_capacity(href.len() + pagelink.len());
        if self.shape.contains(FixShape::PATH_PREFIX) {
            let prefix = mount_prefix(pagelink, self.path_depth);
            if !prefix.is_empty() {
                link.push('/');
                link.push_str(&prefix);
            }
        }
        link.push_str(&href);

        if self.shape.contains(FixShape::FORWARD_QUERY) {
            let forwarded: Vec<&str> = extract_query(pagelink)
                .into_iter()
                .flat_map(query_pairs)
                .filter(|pair| {
                    let key = query_key(pair);
                    self.query_keys.iter().any(|k| k == key) && !has_query_key(&link, key)
                })
                .collect();
            link = append_query(&link, &forwarded);
        }

        link
    }

    /// Turn the fixer into a plain rewriting function.
    pub fn into_fn(self) -> impl Fn(&str, &str) -> String {
        move |href: &str, pagelink: &str| self.fix(href, pagelink)
    }
}

/// Keys of the query part of a name path, in order, without duplicates.
fn name_path_query_keys(name_path: &str) -> Vec<String> {
    let Some((_, query)) = name_path.split_once('?') else {
        return Vec::new();
    };

    let mut keys: Vec<String> = Vec::new();
    for pair in query_pairs(query) {
        let key = query_key(pair);
        if !key.is_empty() && !keys.iter().any(|k| k == key) {
            keys.push(key.to_string());
        }
    }
    keys
}

/// Path pieces between the host and the last piece of the first
/// `depth` pieces of `pagelink`.
fn mount_prefix(pagelink: &str, depth: usize) -> String {
    let parts: Vec<&str> = pagelink.split('/').take(depth).collect();
    let end = parts.len().saturating_sub(1);
    parts.get(3..end).map(|mount| mount.join("/")).unwrap_or_default()
}

fn remove_first<'a>(regex: &Regex, href: &'a str) -> Cow<'a, str> {
    match regex.find(href) {
        Ok(Some(m)) => Cow::Owned(format!("{}{}", &href[..m.start()], &href[m.end()..])),
        Ok(None) => Cow::Borrowed(href),
        Err(e) => {
            log::warn!("relative fix failed on '{}': {}", href, e);
            Cow::Borrowed(href)
        }
    }
}
