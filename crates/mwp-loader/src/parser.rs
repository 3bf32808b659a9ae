use std::fs;
use std::path::Path;

use mwp_core::{Catalog, Direction, Extension, FrontendProxy, IdStringSpec, WikiFarm, WikiProject};

use crate::error::LoadError;
use crate::schema::{RawCatalog, RawFrontendProxy, RawIdString, RawWikiProject};

const DEFAULT_SEPARATOR: &str = ".";
const DEFAULT_URL_SPACE_REPLACEMENT: &str = "_";

/// Parse a JSON catalog and build the lookup table.
pub fn parse_catalog(text: &str) -> Result<Catalog, LoadError> {
    let raw: RawCatalog = serde_json::from_str(text)?;

    let projects: Vec<WikiProject> = raw.wiki_projects.into_iter().map(normalize_project).collect();
    let proxies: Vec<FrontendProxy> = raw.frontend_proxies.into_iter().map(normalize_proxy).collect();

    log::debug!("parsed catalog: {} projects, {} proxies", projects.len(), proxies.len());

    Ok(Catalog::new(projects, proxies))
}

/// Read and parse a JSON catalog file.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_catalog(&text)
}

/// Apply schema defaults to a raw wiki project.
pub fn normalize_project(raw: RawWikiProject) -> WikiProject {
    let id_string = raw.id_string.map(|spec| normalize_id_string(&raw.name, spec));

    let wiki_farm = raw.wiki_farm.and_then(|farm| {
        let parsed = WikiFarm::from_name(&farm);
        if parsed.is_none() {
            log::warn!("project '{}' has unknown wiki farm '{}'", raw.name, farm);
        }
        parsed
    });

    let extensions = raw
        .extensions
        .unwrap_or_default()
        .into_iter()
        .filter_map(|name| {
            let parsed = Extension::from_name(&name);
            if parsed.is_none() {
                log::warn!("project '{}' has unknown extension '{}'", raw.name, name);
            }
            parsed
        })
        .collect();

    WikiProject {
        name: raw.name,
        pattern: raw.regex,
        article_path: raw.article_path,
        script_path: raw.script_path,
        id_string,
        regex_paths: raw.regex_paths.unwrap_or(false),
        wiki_farm,
        extensions,
        url_space_replacement: raw
            .url_space_replacement
            .unwrap_or_else(|| DEFAULT_URL_SPACE_REPLACEMENT.to_string()),
        note: raw.note,
    }
}

/// Apply schema defaults to a raw frontend proxy.
pub fn normalize_proxy(raw: RawFrontendProxy) -> FrontendProxy {
    let id_string = raw.id_string.map(|spec| normalize_id_string(&raw.name, spec));

    FrontendProxy {
        name: raw.name,
        pattern: raw.regex,
        name_path: raw.name_path,
        article_path: raw.article_path,
        script_path: raw.script_path,
        relative_fix: raw.relative_fix.filter(|fix| !fix.is_empty()),
        id_string,
        note: raw.note,
    }
}

fn normalize_id_string(name: &str, raw: RawIdString) -> IdStringSpec {
    let direction = match raw.direction.as_deref() {
        Some(value) => Direction::from_name(value).unwrap_or_else(|| {
            log::warn!("record '{}' has unknown id string direction '{}'", name, value);
            Direction::default()
        }),
        None => Direction::default(),
    };

    IdStringSpec {
        separator: raw.separator.unwrap_or_else(|| DEFAULT_SEPARATOR.to_string()),
        direction,
        pattern: raw.regex,
        path_templates: raw.script_paths,
    }
}
