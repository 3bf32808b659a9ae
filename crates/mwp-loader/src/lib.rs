//! MediaWiki Projects Catalog Loader
//!
//! This crate turns the JSON catalog of wiki projects and frontend proxies
//! into a [`mwp_core::Catalog`], filling in schema defaults on the way.

pub mod error;
pub mod parser;
pub mod schema;

pub use error::LoadError;
pub use parser::{load_catalog, normalize_project, normalize_proxy, parse_catalog};
pub use schema::{RawCatalog, RawFrontendProxy, RawIdString, RawWikiProject};
