//! Integration tests for the site database as a generator collaborator.
//!
//! - User ignore list patterns
//! - Built-in ignore list short-circuit with and without override rules
//! - Site-specific contrary selectors in generated sheets

use filter_css::prelude::*;
use sitedb::{SiteDatabase, UrlPattern, is_url_in_list};

fn patterns(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

// ============================================================================
// USER IGNORE LIST
// ============================================================================

#[test]
fn test_user_list_matching() {
    let list = patterns(&["example.com", "*.corp.net", "github.com/acme"]);

    assert!(is_url_in_list("https://example.com/", &list));
    assert!(is_url_in_list("http://www.example.com/a/b", &list));
    assert!(is_url_in_list("docs.example.com", &list));
    assert!(is_url_in_list("https://wiki.corp.net/page", &list));
    assert!(is_url_in_list("https://github.com/acme/tools", &list));

    assert!(!is_url_in_list("https://example.org/", &list));
    assert!(!is_url_in_list("https://notexample.com/", &list));
    assert!(!is_url_in_list("corp.net", &list));
    assert!(!is_url_in_list("https://github.com/other", &list));
}

#[test]
fn test_empty_user_list_and_url() {
    assert!(!is_url_in_list("https://example.com/", &[]));
    assert!(!is_url_in_list("", &patterns(&["example.com"])));
}

#[test]
fn test_invalid_user_pattern_is_skipped() {
    let list = patterns(&["", "bad host!", "example.com"]);
    assert!(is_url_in_list("example.com", &list));
    assert!(!is_url_in_list("example.org", &list));
}

#[test]
fn test_pattern_keeps_source_text() {
    let pattern: UrlPattern = " https://Example.com/docs ".parse().unwrap();
    assert_eq!(pattern.as_str(), "https://Example.com/docs");
    assert!(pattern.matches("EXAMPLE.COM/docs/intro"));
}

// ============================================================================
// GENERATOR WITH SITE DATABASE
// ============================================================================

#[test]
fn test_builtin_site_gets_no_filter() {
    let generator =
        FilterCssGenerator::new(vendor::WEBKIT, SiteDatabase::builtin()).with_sink(NullSink);
    let css = generator.create_css_code(&FilterConfig::default(), "https://www.youtube.com/watch");
    assert_eq!(css, "");
}

#[test]
fn test_builtin_site_keeps_its_override_rule() {
    let db = SiteDatabase::builder()
        .override_rule("twitch.tv", ".chat { filter: invert(100%); }")
        .build()
        .unwrap();
    let generator = FilterCssGenerator::new(vendor::WEBKIT, db).with_sink(NullSink);

    let css = generator.create_css_code(&FilterConfig::default(), "https://www.twitch.tv/");
    assert_eq!(css, ".chat { filter: invert(100%); }");
}

#[test]
fn test_user_ignored_site_gets_nothing() {
    let db = SiteDatabase::builder()
        .override_rule("example.com", "p { color: gray; }")
        .build()
        .unwrap();
    let generator = FilterCssGenerator::new(vendor::WEBKIT, db).with_sink(NullSink);
    let config = FilterConfig::default().with_ignored("example.com");

    assert_eq!(generator.create_css_code(&config, "https://example.com/"), "");
}

#[test]
fn test_site_contrary_selectors_in_sheet() {
    let db = SiteDatabase::builder()
        .contrary("maps.example.com", "img, canvas, .tile")
        .override_rule("maps.example.com", ".toolbar { filter: none; }")
        .default_contrary("img, video, picture")
        .build()
        .unwrap();
    let generator = FilterCssGenerator::new(vendor::MOZ, db).with_sink(NullSink);
    let config = FilterConfig::neutral().with_mode(FilterMode::Dark);

    insta::assert_snapshot!(generator.create_css_code(&config, "https://maps.example.com/@1,2"), @r"
    html { -moz-filter: invert(100%) hue-rotate(180deg) !important; min-height: 100% !important; }
    img, canvas, .tile { -moz-filter: brightness(80%) invert(100%) hue-rotate(180deg) !important; }
    *:-moz-full-screen { -moz-filter: none !important; }
    .toolbar { filter: none; }
    ");

    let other = generator.create_css_code(&config, "https://example.com/");
    assert!(other.contains("\nimg, video, picture { -moz-filter: brightness(80%)"));
}
