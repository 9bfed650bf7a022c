//! Dark mode stylesheets for arbitrary web pages.
//!
//! Ties the [`filter_css`] generator to the [`sitedb`] site database and
//! provides a file logger for the generator's diagnostics.
//!
//! ```rust
//! use nightfilter::{FilterConfig, vendor};
//!
//! let css = nightfilter::create_css_code(&FilterConfig::default(), "https://example.com/", vendor::WEBKIT);
//! assert!(css.starts_with("html { -webkit-filter: invert(100%) hue-rotate(180deg) brightness(110%)"));
//!
//! // Built-in ignored sites get no stylesheet at all
//! let css = nightfilter::create_css_code(&FilterConfig::default(), "https://www.youtube.com/", vendor::WEBKIT);
//! assert!(css.is_empty());
//! ```

pub mod error;
pub mod log_init;

pub use filter_css;
pub use sitedb;

pub use error::{NightfilterError, Result};
pub use filter_css::prelude::*;
pub use log_init::{FileLogger, init_logger};
pub use sitedb::SiteDatabase;

/// Generator backed by the built-in site database.
pub fn generator(prefix: &str) -> FilterCssGenerator<&'static SiteDatabase> {
    FilterCssGenerator::new(prefix, SiteDatabase::builtin())
}

/// Generates the stylesheet for `url` using the built-in site database.
pub fn create_css_code(config: &FilterConfig, url: &str, prefix: &str) -> String {
    generator(prefix).create_css_code(config, url)
}
