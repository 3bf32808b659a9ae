//! Input to project/proxy resolution
//!
//! Resolution narrows an input to one record by hostname, then matches the
//! record pattern against the whole input and rebuilds the canonical paths
//! from the captured groups.

use fancy_regex::{escape, Captures};

use crate::catalog::Catalog;
use crate::host::hostname_candidate;
use crate::template::{append_title_placeholder, fill_template};
use crate::types::{ProjectMatch, ProxyMatch, WikiProject};

/// Optional `user[:pass]@` in front of the host. Non-capturing, so record
/// group numbers are unchanged.
const USERINFO: &str = r"(?:[^\s/@:]+(?::[^\s/@]*)?@)?";

/// Build the anchored pattern for a project.
///
/// The record pattern must be followed by the article path, the script path,
/// or the end of the input. With `regex_paths` both paths reduce to `/`.
pub fn project_anchor_pattern(project: &WikiProject) -> String {
    let (article_path, script_path) = if project.regex_paths {
        ("/".into(), "/".into())
    } else {
        let article_path = project.article_path.split('?').next().unwrap_or_default();
        (escape(article_path), escape(&project.script_path))
    };
    format!(
        "{}{}(?:{}|{}|/?$)",
        USERINFO, project.pattern, article_path, script_path
    )
}

/// Resolve an input to a wiki project and its full paths.
pub fn resolve_project(catalog: &Catalog, input: &str) -> Option<ProjectMatch> {
    let hostname = hostname_candidate(input)?;
    let entry = catalog.project_entry(hostname)?;
    let project = entry.record();
    let anchor = entry.anchor_with(project_anchor_pattern)?;

    let captures = match anchor.captures(input) {
        Ok(captures) => captures?,
        Err(e) => {
            log::warn!("matching '{}' against project '{}' failed: {}", input, project.name, e);
            return None;
        }
    };
    let whole = captures.get(0)?;
    let host = captures.get(1)?;
    let groups = capture_groups(&captures);

    let (article_path, script_path) = if project.regex_paths {
        (
            fill_template(&project.article_path, &groups),
            fill_template(&project.script_path, &groups),
        )
    } else {
        (
            project.article_path.as_str().into(),
            project.script_path.as_str().into(),
        )
    };

    // Userinfo only ever belongs in the script path.
    let userinfo = if whole.start() < host.start() {
        &input[whole.start()..host.start()]
    } else {
        ""
    };

    let full_article_path =
        append_title_placeholder(format!("https://{}{}", host.as_str(), article_path));
    let full_script_path = format!("https://{}{}{}", userinfo, host.as_str(), script_path);

    Some(ProjectMatch {
        full_article_path,
        full_script_path,
        project: project.clone(),
    })
}

/// Resolve an input to a frontend proxy and its full paths.
pub fn resolve_proxy(catalog: &Catalog, input: &str) -> Option<ProxyMatch> {
    let hostname = hostname_candidate(input)?;
    let entry = catalog.proxy_entry(hostname)?;
    let proxy = entry.record();
    let matcher = entry.matcher()?;

    let captures = match matcher.captures(input) {
        Ok(captures) => captures?,
        Err(e) => {
            log::warn!("matching '{}' against proxy '{}' failed: {}", input, proxy.name, e);
            return None;
        }
    };
    let groups = capture_groups(&captures);

    let full_name_path = fill_template(&proxy.name_path, &groups).into_owned();
    let full_article_path =
        append_title_placeholder(fill_template(&proxy.article_path, &groups).into_owned());
    let full_script_path = fill_template(&proxy.script_path, &groups).into_owned();

    Some(ProxyMatch {
        full_name_path,
        full_article_path,
        full_script_path,
        proxy: proxy.clone(),
    })
}

/// All groups of a match, group 0 first.
pub(crate) fn capture_groups<'t>(captures: &Captures<'t>) -> Vec<Option<&'t str>> {
    captures.iter().map(|group| group.map(|m| m.as_str())).collect()
}
