//! Positional path templates
//!
//! Templates reference groups with single ASCII digit `$N` placeholders.
//! `$12` is group 1 followed by a literal `2`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Placeholder appended to article paths for the page title.
pub const TITLE_PLACEHOLDER: &str = "$1";

/// Fill every `$N` in `template` with `groups[N]`.
///
/// Groups that did not participate in the match, or that are out of range,
/// are substituted with the empty string.
pub fn fill_template<'a>(template: &'a str, groups: &[Option<&str>]) -> Cow<'a, str> {
    static RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([0-9])").unwrap());

    let mut out = String::new();
    let mut flushed = 0;
    for capture in RE.captures_iter(template) {
        let (_, [index]) = capture.extract();
        let value = index
            .parse::<usize>()
            .ok()
            .and_then(|n| groups.get(n).copied().flatten())
            .unwrap_or_default();
        let range = capture.get_match().range();
        out += &template[flushed..range.start];
        out += value;
        flushed = range.end;
    }

    if flushed == 0 {
        return Cow::Borrowed(template);
    }
    out += &template[flushed..];
    Cow::Owned(out)
}

/// Add the title placeholder to a filled article path.
///
/// A query that does not end in `=` keeps its position after the title, so
/// the placeholder goes right before the first `?`.
pub fn append_title_placeholder(mut article_path: String) -> String {
    match article_path.find('?') {
        Some(pos) if !article_path.ends_with('=') => {
            article_path.insert_str(pos, TITLE_PLACEHOLDER);
        }
        _ => article_path.push_str(TITLE_PLACEHOLDER),
    }
    article_path
}
