//! Id string codec
//!
//! An id string is the compact form of the path segments a record pattern
//! captures beyond the host. For `https://minecraft.fandom.com/de/` with
//! `direction = desc` that is `de.minecraft`.
//!
//! Decoding picks the script path template by segment count: `k` segments
//! select `path_templates[k - 1]`. No arity is stored with the templates, so
//! a catalog entry must list them in exactly that order.

use url::Url;

use crate::catalog::{Catalog, CatalogEntry};
use crate::paths::capture_groups;
use crate::template::fill_template;
use crate::types::{Direction, Record};

/// Encode a URL into the id string of its record.
///
/// Projects are consulted before proxies. Only records with an id string
/// format qualify.
pub fn encode(catalog: &Catalog, url: &Url) -> Option<String> {
    let hostname = url.host_str()?;

    if let Some(entry) = catalog
        .project_entry(hostname)
        .filter(|entry| entry.record().id_string().is_some())
    {
        return encode_with(entry, url);
    }

    let entry = catalog
        .proxy_entry(hostname)
        .filter(|entry| entry.record().id_string().is_some())?;
    encode_with(entry, url)
}

fn encode_with<R: Record>(entry: &CatalogEntry<R>, url: &Url) -> Option<String> {
    let spec = entry.record().id_string()?;
    let matcher = entry.matcher()?;

    let captures = match matcher.captures(url.as_str()) {
        Ok(captures) => captures?,
        Err(e) => {
            log::warn!("matching '{}' against '{}' failed: {}", url, entry.record().name(), e);
            return None;
        }
    };

    // Group 1 is the host, the rest are the wiki's identity.
    let mut segments: Vec<&str> = capture_groups(&captures)
        .into_iter()
        .skip(2)
        .flatten()
        .filter(|segment| !segment.is_empty())
        .collect();

    if segments.is_empty() {
        return None;
    }
    if spec.direction == Direction::Desc {
        segments.reverse();
    }

    Some(segments.join(&spec.separator))
}

/// Decode an id string against the record named `name`.
///
/// Returns the filled script path template; it is guaranteed to parse as a
/// URL.
pub fn decode(catalog: &Catalog, id_string: &str, name: &str) -> Option<String> {
    if let Some(entry) = catalog
        .project_entry_by_name(name)
        .filter(|entry| entry.record().id_string().is_some())
    {
        return decode_with(entry, id_string);
    }

    let entry = catalog
        .proxy_entry_by_name(name)
        .filter(|entry| entry.record().id_string().is_some())?;
    decode_with(entry, id_string)
}

fn decode_with<R: Record>(entry: &CatalogEntry<R>, id_string: &str) -> Option<String> {
    let spec = entry.record().id_string()?;
    let matcher = entry.id_matcher()?;

    let captures = match matcher.captures(id_string) {
        Ok(captures) => captures?,
        Err(e) => {
            log::warn!("matching id string '{}' against '{}' failed: {}", id_string, entry.record().name(), e);
            return None;
        }
    };
    let joined = captures.get(1)?.as_str();

    // An empty separator splits into single characters.
    let segments: Vec<&str> = if spec.separator.is_empty() {
        joined
            .char_indices()
            .map(|(i, c)| &joined[i..i + c.len_utf8()])
            .collect()
    } else {
        joined.split(spec.separator.as_str()).collect()
    };

    let template = segments
        .len()
        .checked_sub(1)
        .and_then(|idx| spec.path_templates.get(idx));
    let Some(template) = template else {
        log::debug!(
            "id string '{}' has {} segments but '{}' only has {} path templates",
            id_string,
            segments.len(),
            entry.record().name(),
            spec.path_templates.len()
        );
        return None;
    };

    // `$1` is the first segment.
    let groups: Vec<Option<&str>> = std::iter::once(Some(id_string))
        .chain(segments.iter().copied().map(Some))
        .collect();
    let filled = fill_template(template, &groups).into_owned();

    match Url::parse(&filled) {
        Ok(_) => Some(filled),
        Err(e) => {
            log::warn!("record '{}' produced an invalid URL '{}': {}", entry.record().name(), filled, e);
            None
        }
    }
}
