//! Catalog JSON schema
//!
//! Optional fields stay optional here; defaults are applied by the parser.

use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCatalog {
    #[serde(default)]
    pub wiki_projects: Vec<RawWikiProject>,
    #[serde(default)]
    pub frontend_proxies: Vec<RawFrontendProxy>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIdString {
    pub separator: Option<String>,
    pub direction: Option<String>,
    pub regex: String,
    pub script_paths: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawWikiProject {
    pub name: String,
    pub regex: String,
    pub article_path: String,
    pub script_path: String,
    pub id_string: Option<RawIdString>,
    pub regex_paths: Option<bool>,
    pub wiki_farm: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub url_space_replacement: Option<String>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFrontendProxy {
    pub name: String,
    pub regex: String,
    pub name_path: String,
    pub article_path: String,
    pub script_path: String,
    pub relative_fix: Option<String>,
    pub id_string: Option<RawIdString>,
    pub note: Option<String>,
}
