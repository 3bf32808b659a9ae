//! Slicing helpers for relative links
//!
//! Links captured from proxied pages are often relative, so these work on
//! plain string slices instead of parsed URLs.

// =============================================================================
// Fragment & Query
// =============================================================================

/// Split a link into the part before `#` and the fragment (with `#`).
#[inline]
pub fn split_fragment(link: &str) -> (&str, Option<&str>) {
    match link.find('#') {
        Some(hash_pos) => (&link[..hash_pos], Some(&link[hash_pos..])),
        None => (link, None),
    }
}

/// Extract the query string (without `?` and fragment).
#[inline]
pub fn extract_query(link: &str) -> Option<&str> {
    let (link, _) = split_fragment(link);
    let q_pos = link.find('?')?;
    Some(&link[q_pos + 1..])
}

/// Non-empty `key=value` pairs of a query string.
pub fn query_pairs(query: &str) -> impl Iterator<Item = &str> {
    query.split('&').filter(|pair| !pair.is_empty())
}

/// Key of a query pair.
#[inline]
pub fn query_key(pair: &str) -> &str {
    match pair.find('=') {
        Some(eq_pos) => &pair[..eq_pos],
        None => pair,
    }
}

/// Check whether a link's query carries `key`.
pub fn has_query_key(link: &str, key: &str) -> bool {
    extract_query(link).is_some_and(|query| query_pairs(query).any(|pair| query_key(pair) == key))
}

/// Append pre-encoded query pairs before any fragment of `link`.
pub fn append_query(link: &str, pairs: &[&str]) -> String {
    if pairs.is_empty() {
        return link.to_string();
    }

    let (base, fragment) = split_fragment(link);
    let joiner = if base.contains('?') { '&' } else { '?' };
    let mut out = String::with_capacity(link.len() + pairs.iter().map(|p| p.len() + 1).sum::<usize>());
    out.push_str(base);
    out.push(joiner);
    out.push_str(&pairs.join("&"));
    if let Some(fragment) = fragment {
        out.push_str(fragment);
    }
    out
}
