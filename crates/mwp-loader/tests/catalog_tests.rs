//! End-to-end resolution against the bundled test catalog.

use std::path::PathBuf;

use mwp_core::{Direction, Extension, FixShape, Resolver, WikiFarm};
use mwp_loader::{load_catalog, parse_catalog, LoadError};
use url::Url;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/catalog.json")
}

fn resolver() -> Resolver {
    let _ = env_logger::builder().is_test(true).try_init();
    Resolver::new(load_catalog(fixture_path()).expect("fixture catalog should load"))
}

#[test]
fn test_fixture_loads() {
    let resolver = resolver();
    assert_eq!(resolver.catalog().project_count(), 3);
    assert_eq!(resolver.catalog().proxy_count(), 2);
}

#[test]
fn test_parse_matches_load() {
    let text = std::fs::read_to_string(fixture_path()).unwrap();
    let parsed = parse_catalog(&text).unwrap();
    let loaded = load_catalog(fixture_path()).unwrap();
    assert!(parsed.projects().eq(loaded.projects()));
    assert!(parsed.proxies().eq(loaded.proxies()));
}

#[test]
fn test_get_project_by_suffix() {
    let resolver = resolver();
    let project = resolver.get_project("en.m.wikipedia.org").unwrap();
    assert_eq!(project.name, "wikipedia.org");
    assert_eq!(project.wiki_farm, Some(WikiFarm::Wikimedia));
    assert_eq!(project.extensions, [Extension::CentralAuth, Extension::OAuth]);
    assert!(resolver.get_project("wikipedia.com").is_none());
}

#[test]
fn test_get_proxy_by_suffix() {
    let resolver = resolver();
    assert_eq!(resolver.get_proxy("breezewiki.com").map(|p| p.name.as_str()), Some("breezewiki.com"));
    assert!(resolver.get_proxy("minecraft.fandom.com").is_none());
    assert_eq!(resolver.get_proxy("query.proxy").and_then(|p| p.relative_fix.as_deref()), None);
}

#[test]
fn test_resolve_wikipedia() {
    let resolver = resolver();
    let matched = resolver.resolve_input("https://en.wikipedia.org/wiki/Rust_(programming_language)").unwrap();
    assert_eq!(matched.full_article_path, "https://en.wikipedia.org/wiki/$1");
    assert_eq!(matched.full_script_path, "https://en.wikipedia.org/w/");
    assert_eq!(matched.article_url("Main Page"), "https://en.wikipedia.org/wiki/Main_Page");
}

#[test]
fn test_resolve_fandom_language_path() {
    let resolver = resolver();
    let matched = resolver.resolve_input("https://minecraft.fandom.com/de/wiki/Creeper").unwrap();
    assert_eq!(matched.full_article_path, "https://minecraft.fandom.com/de/wiki/$1");
    assert_eq!(matched.full_script_path, "https://minecraft.fandom.com/de/");
    assert_eq!(matched.project.name, "fandom.com");
}

#[test]
fn test_resolve_regex_paths() {
    let resolver = resolver();
    let matched = resolver.resolve_input("https://example.net/fr/w/api.php").unwrap();
    assert_eq!(matched.full_article_path, "https://example.net/fr/wiki/$1");
    assert_eq!(matched.full_script_path, "https://example.net/fr/w/");
}

#[test]
fn test_resolve_input_misses() {
    let resolver = resolver();
    assert!(resolver.resolve_input("https://en.wikipedia.org/elsewhere").is_none());
    assert!(resolver.resolve_input("https://unknown.test/wiki/Foo").is_none());
    assert!(resolver.resolve_input("not a url").is_none());
}

#[test]
fn test_resolve_proxy_input() {
    let resolver = resolver();
    let matched = resolver.resolve_proxy_input("https://breezewiki.com/minecraft/wiki/Creeper").unwrap();
    assert_eq!(matched.full_name_path, "https://breezewiki.com/minecraft/");
    assert_eq!(matched.full_article_path, "https://breezewiki.com/minecraft/wiki/$1");
    assert_eq!(matched.full_script_path, "https://minecraft.fandom.com/");

    let matched = resolver.resolve_proxy_input("https://query.proxy/wiki/Bar?wiki=terraria").unwrap();
    assert_eq!(matched.full_name_path, "https://query.proxy/?wiki=terraria");
    assert_eq!(matched.full_script_path, "https://terraria.fandom.com/");

    assert!(resolver.resolve_proxy_input("https://en.wikipedia.org/wiki/Foo").is_none());
}

#[test]
fn test_id_string_round_trip() {
    let resolver = resolver();
    let spec = resolver.get_project("fandom.com").and_then(|p| p.id_string.clone()).unwrap();
    assert_eq!(spec.direction, Direction::Desc);

    let url = Url::parse("https://minecraft.fandom.com/de/wiki/Creeper").unwrap();
    let id = resolver.url_to_id_string(&url).unwrap();
    assert_eq!(id, "de.minecraft");

    let decoded = resolver.id_string_to_url(&id, "fandom.com").unwrap();
    assert_eq!(decoded.as_str(), "https://minecraft.fandom.com/de/");
    assert_eq!(resolver.url_to_id_string(&decoded).as_deref(), Some("de.minecraft"));
}

#[test]
fn test_id_string_proxy() {
    let resolver = resolver();
    let url = Url::parse("https://breezewiki.com/minecraft/wiki/Creeper").unwrap();
    assert_eq!(resolver.url_to_id_string(&url).as_deref(), Some("minecraft"));

    let decoded = resolver.id_string_to_url("minecraft", "breezewiki.com").unwrap();
    assert_eq!(decoded.as_str(), "https://breezewiki.com/minecraft/");
}

#[test]
fn test_id_string_misses() {
    let resolver = resolver();
    let url = Url::parse("https://en.wikipedia.org/wiki/Foo").unwrap();
    assert!(resolver.url_to_id_string(&url).is_none());
    assert!(resolver.id_string_to_url("a.b.c", "fandom.com").is_none());
    assert!(resolver.id_string_to_url("minecraft", "wikipedia.org").is_none());
    assert!(resolver.id_string_to_url("minecraft", "unknown.test").is_none());
}

#[test]
fn test_link_fixer_path_prefix() {
    let resolver = resolver();
    let fixer = resolver.build_link_fixer("https://breezewiki.com/minecraft/wiki/Steve").unwrap();
    assert_eq!(fixer.shape(), FixShape::PATH_PREFIX);
    assert_eq!(
        fixer.fix("/wiki/Creeper", "https://breezewiki.com/minecraft/wiki/Steve"),
        "/minecraft/wiki/Creeper"
    );
}

#[test]
fn test_link_fixer_forwarded_query() {
    let resolver = resolver();
    let fix = resolver.build_link_fixer("query.proxy").unwrap().into_fn();
    assert_eq!(fix("/wiki/Foo", "https://query.proxy/wiki/Bar?wiki=minecraft"), "/wiki/Foo?wiki=minecraft");
}

#[test]
fn test_link_fixer_requires_proxy() {
    let resolver = resolver();
    assert!(resolver.build_link_fixer("en.wikipedia.org").is_none());
    assert!(resolver.build_link_fixer("unknown.test").is_none());
}

#[test]
fn test_load_errors() {
    assert!(matches!(load_catalog("does/not/exist.json"), Err(LoadError::Io { .. })));
    assert!(matches!(parse_catalog("null"), Err(LoadError::Json(_))));
}
