//! MediaWiki Projects Core Library
//!
//! This crate resolves URLs and URL-like strings to known MediaWiki
//! installations and the frontend proxies mirroring them.
//!
//! # Architecture
//!
//! All resolution works on an immutable [`Catalog`] of records keyed by
//! hostname suffix. Each record carries a pattern whose first group is the
//! host and whose further groups identify one wiki among many on that host.
//! A [`Resolver`] owns the catalog and memoizes every result per input.
//!
//! # Modules
//!
//! - `types`: Record and result type definitions
//! - `catalog`: Record table with suffix lookup and lazy pattern compilation
//! - `host`: Hostname suffix walking and hostname extraction
//! - `paths`: Input to article/script path resolution
//! - `id_string`: URL to id string codec
//! - `link_fix`: Relative link rewriting for proxies
//! - `template`: `$N` placeholder substitution
//! - `href`: Slicing helpers for relative links
//! - `cache`: Result memoization
//! - `resolver`: The memoizing engine tying the above together

pub mod cache;
pub mod catalog;
pub mod host;
pub mod href;
pub mod id_string;
pub mod link_fix;
pub mod paths;
pub mod resolver;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use catalog::Catalog;
pub use link_fix::{FixShape, LinkFixer};
pub use resolver::Resolver;
pub use types::{
    Direction, Extension, FrontendProxy, IdStringSpec, ProjectMatch, ProxyMatch, Record,
    WikiFarm, WikiProject,
};
