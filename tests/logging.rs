//! The generator's diagnostics end up in the file installed by `init_logger`.

use nightfilter::{FilterConfig, NightfilterError, vendor};

#[test]
fn test_generation_logs_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("filter.log");

    nightfilter::init_logger(&path).unwrap();

    let css = nightfilter::create_css_code(
        &FilterConfig::default(),
        "https://example.com/",
        vendor::WEBKIT,
    );
    assert!(!css.is_empty());

    // Ignored sites are not logged
    nightfilter::create_css_code(
        &FilterConfig::default(),
        "https://twitch.tv/",
        vendor::WEBKIT,
    );

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "[DEBUG] filter_css: css for url: https://example.com/\n"
    );

    // Only one global logger can be installed
    let again = nightfilter::init_logger(dir.path().join("second.log"));
    assert!(matches!(again, Err(NightfilterError::LoggerAlreadySet(_))));
}
