//! # filter-css - Dark mode stylesheets from CSS filters
//!
//! Generates the CSS injected into a web page to give it a dark appearance.
//! Rather than rewriting colors, the root element gets a composite filter
//! chain (`invert(100%) hue-rotate(180deg)` plus brightness, contrast,
//! grayscale and sepia adjustments) and media elements are inverted a second
//! time so pictures and video keep their original look.
//!
//! ## Quick Start
//!
//! ```rust
//! use filter_css::prelude::*;
//!
//! struct Defaults;
//!
//! impl SiteRules for Defaults {
//!     fn override_rule(&self, _url: &str) -> Option<String> { None }
//!     fn is_in_default_ignore_list(&self, _url: &str) -> bool { false }
//!     fn is_in_user_ignore_list(&self, url: &str, patterns: &[String]) -> bool {
//!         patterns.iter().any(|p| p == url)
//!     }
//!     fn contrary_selectors(&self, _url: &str) -> ContrarySelectors { ContrarySelectors::default() }
//! }
//!
//! let generator = FilterCssGenerator::new(vendor::WEBKIT, Defaults).with_sink(NullSink);
//! let config = FilterConfig::neutral().with_mode(FilterMode::Dark);
//!
//! let css = generator.create_css_code(&config, "example.com");
//! assert_eq!(
//!     css,
//!     "html { -webkit-filter: invert(100%) hue-rotate(180deg) !important; min-height: 100% !important; }\n\
//!      img, video { -webkit-filter: brightness(80%) invert(100%) hue-rotate(180deg) !important; }\n\
//!      *:-webkit-full-screen { -webkit-filter: none !important; }"
//! );
//! ```
//!
//! ## Modules
//!
//! - [`config`]: The [`FilterConfig`] settings record and [`FilterMode`]
//! - [`generator`]: [`FilterCssGenerator`] and the [`CssGenerator`] capability
//! - [`sites`]: The [`SiteRules`] lookups the generator consults
//! - [`diagnostics`]: Injectable log sinks
//! - [`font`]: Font-family validation
//! - [`vendor`]: Vendor prefix constants
//! - [`error`]: Error types for the validating helpers

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod font;
pub mod generator;
pub mod sites;
pub mod vendor;

pub use config::{FilterConfig, FilterMode};
pub use error::FilterCssError;
pub use generator::{CssGenerator, FilterCssGenerator};
pub use sites::{ContrarySelectors, SiteRules};

pub mod prelude {
    pub use crate::config::{FilterConfig, FilterMode};
    pub use crate::diagnostics::{DiagnosticSink, LogSink, MemorySink, NullSink};
    pub use crate::generator::{CssGenerator, FilterCssGenerator};
    pub use crate::vendor;
    pub use crate::sites::{ContrarySelectors, SiteRules};
}
