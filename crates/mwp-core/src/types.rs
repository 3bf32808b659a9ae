//! Core type definitions for catalog records
//!
//! These types mirror the normalized catalog schema: every optional field has
//! already been defaulted by the time a record reaches the core.

use crate::template::fill_template;

// =============================================================================
// Id String Spec
// =============================================================================

/// Order in which captured path segments are chained into an id string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Capture order is kept.
    Asc,
    /// The last captured segment becomes the first id string segment.
    #[default]
    Desc,
}

impl Direction {
    /// Parse from the catalog's textual form.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// How to convert between a URL and a compact id string.
///
/// Only present on records whose hostname pattern serves several wikis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdStringSpec {
    /// Separator to join or split the id string on
    pub separator: String,
    /// Order in which the record pattern's extra groups are chained
    pub direction: Direction,
    /// Pattern matching a whole id string; group 1 is the joined segments
    pub pattern: String,
    /// Script path URL templates, indexed by segment count minus one
    pub path_templates: Vec<String>,
}

impl IdStringSpec {
    pub fn new(pattern: impl Into<String>, path_templates: Vec<String>) -> Self {
        Self {
            separator: ".".to_string(),
            direction: Direction::Desc,
            pattern: pattern.into(),
            path_templates,
        }
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }
}

// =============================================================================
// Wiki Farms & Extensions
// =============================================================================

/// Wiki farm hosting a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WikiFarm {
    Biligame,
    Fandom,
    Huijiwiki,
    Miraheze,
    Shoutwiki,
    WikiGg,
    Wikimedia,
}

impl WikiFarm {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "biligame" => Some(Self::Biligame),
            "fandom" => Some(Self::Fandom),
            "huijiwiki" => Some(Self::Huijiwiki),
            "miraheze" => Some(Self::Miraheze),
            "shoutwiki" => Some(Self::Shoutwiki),
            "wiki.gg" => Some(Self::WikiGg),
            "wikimedia" => Some(Self::Wikimedia),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Biligame => "biligame",
            Self::Fandom => "fandom",
            Self::Huijiwiki => "huijiwiki",
            Self::Miraheze => "miraheze",
            Self::Shoutwiki => "shoutwiki",
            Self::WikiGg => "wiki.gg",
            Self::Wikimedia => "wikimedia",
        }
    }
}

/// MediaWiki extension providing useful API endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    Cargo,
    CentralAuth,
    OAuth,
}

impl Extension {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Cargo" => Some(Self::Cargo),
            "CentralAuth" => Some(Self::CentralAuth),
            "OAuth" => Some(Self::OAuth),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Cargo => "Cargo",
            Self::CentralAuth => "CentralAuth",
            Self::OAuth => "OAuth",
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// Fields shared by wiki projects and frontend proxies.
pub trait Record {
    /// Hostname suffix identifying the record.
    fn name(&self) -> &str;
    /// Pattern whose first group is the matched host.
    fn pattern(&self) -> &str;
    fn id_string(&self) -> Option<&IdStringSpec>;
}

/// A MediaWiki project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WikiProject {
    /// Hostname of the project
    pub name: String,
    /// Pattern matching the project URL
    pub pattern: String,
    /// Article path, or article path template when `regex_paths` is set
    pub article_path: String,
    /// Script path, or script path template when `regex_paths` is set
    pub script_path: String,
    pub id_string: Option<IdStringSpec>,
    /// Whether the paths include `$N` references to pattern groups
    pub regex_paths: bool,
    pub wiki_farm: Option<WikiFarm>,
    pub extensions: Vec<Extension>,
    /// Replacement for spaces in the article URL
    pub url_space_replacement: String,
    pub note: Option<String>,
}

impl WikiProject {
    /// Create a project with every optional field at its schema default.
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        article_path: impl Into<String>,
        script_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            article_path: article_path.into(),
            script_path: script_path.into(),
            id_string: None,
            regex_paths: false,
            wiki_farm: None,
            extensions: Vec::new(),
            url_space_replacement: "_".to_string(),
            note: None,
        }
    }

    pub fn with_id_string(mut self, id_string: IdStringSpec) -> Self {
        self.id_string = Some(id_string);
        self
    }

    pub fn with_regex_paths(mut self, regex_paths: bool) -> Self {
        self.regex_paths = regex_paths;
        self
    }
}

impl Record for WikiProject {
    fn name(&self) -> &str {
        &self.name
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn id_string(&self) -> Option<&IdStringSpec> {
        self.id_string.as_ref()
    }
}

/// A frontend proxy mirroring wikis under its own hostname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendProxy {
    /// Hostname of the proxy
    pub name: String,
    /// Pattern matching the proxy URL
    pub pattern: String,
    /// Full URL template of the proxy's own page for a wiki
    pub name_path: String,
    /// Full URL template of the article path
    pub article_path: String,
    /// Full URL template of the origin script path
    pub script_path: String,
    /// Pattern to remove from relative links
    pub relative_fix: Option<String>,
    pub id_string: Option<IdStringSpec>,
    pub note: Option<String>,
}

impl FrontendProxy {
    pub fn new(
        name: impl Into<String>,
        pattern: impl Into<String>,
        name_path: impl Into<String>,
        article_path: impl Into<String>,
        script_path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            pattern: pattern.into(),
            name_path: name_path.into(),
            article_path: article_path.into(),
            script_path: script_path.into(),
            relative_fix: None,
            id_string: None,
            note: None,
        }
    }

    pub fn with_relative_fix(mut self, relative_fix: impl Into<String>) -> Self {
        self.relative_fix = Some(relative_fix.into());
        self
    }

    pub fn with_id_string(mut self, id_string: IdStringSpec) -> Self {
        self.id_string = Some(id_string);
        self
    }
}

impl Record for FrontendProxy {
    fn name(&self) -> &str {
        &self.name
    }

    fn pattern(&self) -> &str {
        &self.pattern
    }

    fn id_string(&self) -> Option<&IdStringSpec> {
        self.id_string.as_ref()
    }
}

// =============================================================================
// Resolution Results
// =============================================================================

/// Result of resolving an input against the wiki projects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectMatch {
    /// Article URL with a `$1` title placeholder
    pub full_article_path: String,
    pub full_script_path: String,
    pub project: WikiProject,
}

impl ProjectMatch {
    /// Build the article URL for `title`.
    pub fn article_url(&self, title: &str) -> String {
        let title = title.replace(' ', &self.project.url_space_replacement);
        fill_template(&self.full_article_path, &[None, Some(title.as_str())]).into_owned()
    }
}

/// Result of resolving an input against the frontend proxies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyMatch {
    pub full_name_path: String,
    /// Article URL with a `$1` title placeholder
    pub full_article_path: String,
    pub full_script_path: String,
    pub proxy: FrontendProxy,
}
