//! The filter-based dark mode stylesheet generator.
//!
//! Instead of rewriting colors element by element, the whole page is run
//! through one CSS filter chain (`invert(100%) hue-rotate(180deg)` plus the
//! configured adjustments) and media elements are inverted a second time so
//! they come out looking like the original.
//!
//! ## Output
//!
//! A sheet is a newline-joined list of blocks, always in this order:
//!
//! 1. `html { …filter: <chain> !important; min-height: 100% !important; }`
//! 2. `<contrary selectors> { …filter: brightness(B-20%) invert(100%) hue-rotate(180deg) !important; }` (dark mode only)
//! 3. `* { font-family: …; …text-stroke: …; }` (only with a font or stroke override)
//! 4. `*:…full-screen { …filter: none !important; }`
//! 5. The site's override rule, if one exists
//!
//! ```rust
//! use filter_css::config::FilterConfig;
//! use filter_css::diagnostics::NullSink;
//! use filter_css::generator::FilterCssGenerator;
//! use filter_css::vendor;
//! use filter_css::sites::{ContrarySelectors, SiteRules};
//!
//! struct NoSites;
//!
//! impl SiteRules for NoSites {
//!     fn override_rule(&self, _url: &str) -> Option<String> { None }
//!     fn is_in_default_ignore_list(&self, _url: &str) -> bool { false }
//!     fn is_in_user_ignore_list(&self, _url: &str, _patterns: &[String]) -> bool { false }
//!     fn contrary_selectors(&self, _url: &str) -> ContrarySelectors { ContrarySelectors::default() }
//! }
//!
//! let generator = FilterCssGenerator::new(vendor::WEBKIT, NoSites).with_sink(NullSink);
//! let css = generator.create_css_code(&FilterConfig::neutral(), "example.com");
//! assert!(css.starts_with("html { -webkit-filter: !important;"));
//! ```

use crate::config::FilterConfig;
use crate::diagnostics::{DiagnosticSink, LogSink};
use crate::font::FontFamily;
use crate::sites::{ContrarySelectors, SiteRules};
use log::Level;
use std::fmt::Write;

/// Something that turns a configuration and a page address into CSS text.
pub trait CssGenerator {
    type Config;

    fn create_css_code(&self, config: &Self::Config, url: &str) -> String;
}

/// Generates a dark mode stylesheet from CSS filter functions.
///
/// Holds the vendor prefix and its collaborators; nothing else. Calls are
/// independent and the generator can be shared between threads.
#[derive(Debug, Clone)]
pub struct FilterCssGenerator<R, S = LogSink> {
    prefix: String,
    rules: R,
    sink: S,
}

impl<R: SiteRules> FilterCssGenerator<R, LogSink> {
    /// Creates a generator logging through the `log` facade.
    pub fn new(prefix: impl Into<String>, rules: R) -> Self {
        Self {
            prefix: prefix.into(),
            rules,
            sink: LogSink,
        }
    }
}

impl<R: SiteRules, S: DiagnosticSink> FilterCssGenerator<R, S> {
    /// Replaces the diagnostic sink.
    pub fn with_sink<T: DiagnosticSink>(self, sink: T) -> FilterCssGenerator<R, T> {
        FilterCssGenerator {
            prefix: self.prefix,
            rules: self.rules,
            sink,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Builds the full stylesheet for `url`.
    ///
    /// Returns the override rule alone (or nothing) for built-in ignored
    /// sites and an empty string for sites on the user's ignore list.
    pub fn create_css_code(&self, config: &FilterConfig, url: &str) -> String {
        let rule = self.rules.override_rule(url);

        if self.rules.is_in_default_ignore_list(url) {
            return rule.unwrap_or_default();
        }
        if self.rules.is_in_user_ignore_list(url, &config.ignorelist) {
            return String::new();
        }

        self.sink
            .log_diagnostic(Level::Debug, &format!("css for url: {}", url));

        let mut parts = Vec::with_capacity(5);
        parts.push(format!("html {}", self.leading_declaration(config)));

        if config.mode.is_dark() {
            let selectors = self.rules.contrary_selectors(url);
            parts.push(self.contrary_rule(&selectors, config));
        }

        if let Some(text) = self.text_declaration(config) {
            parts.push(format!("* {}", text));
        }

        parts.push(self.fullscreen_fix());

        if let Some(rule) = rule.filter(|rule| !rule.is_empty()) {
            parts.push(rule);
        }

        parts.join("\n")
    }

    /// Filter chain for the root element, neutral terms left out.
    pub fn leading_declaration(&self, config: &FilterConfig) -> String {
        let mut result = format!("{{ {}filter: ", self.prefix);

        if config.mode.is_dark() {
            result.push_str("invert(100%) hue-rotate(180deg) ");
        }
        if config.brightness != 100 {
            let _ = write!(result, "brightness({}%) ", config.brightness);
        }
        if config.contrast != 100 {
            let _ = write!(result, "contrast({}%) ", config.contrast);
        }
        if config.grayscale != 0 {
            let _ = write!(result, "grayscale({}%) ", config.grayscale);
        }
        if config.sepia != 0 {
            let _ = write!(result, "sepia({}%) ", config.sepia);
        }

        result.push_str("!important; min-height: 100% !important; }");
        result
    }

    /// Re-inversion for media elements. Only meaningful in dark mode.
    ///
    /// Brightness is lowered by 20 points to make up for the double
    /// inversion. The result is not clamped.
    pub fn contrary_declaration(&self, config: &FilterConfig) -> String {
        format!(
            "{{ {}filter: brightness({}%) invert(100%) hue-rotate(180deg) !important; }}",
            self.prefix,
            config.brightness - 20
        )
    }

    fn contrary_rule(&self, selectors: &ContrarySelectors, config: &FilterConfig) -> String {
        format!("{} {}", selectors, self.contrary_declaration(config))
    }

    /// Font and stroke overrides for every element.
    ///
    /// `None` unless `usefont` is set or the stroke width is positive.
    pub fn text_declaration(&self, config: &FilterConfig) -> Option<String> {
        if !config.has_text_overrides() {
            return None;
        }

        let mut result = String::from("{ ");

        if config.usefont && !config.fontfamily.is_empty() {
            match FontFamily::parse(&config.fontfamily) {
                Ok(family) => {
                    let _ = write!(result, "font-family: {} !important; ", family);
                }
                Err(err) => self.sink.log_diagnostic(Level::Warn, &err.to_string()),
            }
        }

        if config.textstroke > 0.0 {
            let _ = write!(
                result,
                "{}text-stroke: {}px !important; ",
                self.prefix, config.textstroke
            );
        }

        result.push('}');
        Some(result)
    }

    /// Turns the filter off for full-screen content.
    pub fn fullscreen_fix(&self) -> String {
        format!(
            "*:{prefix}full-screen {{ {prefix}filter: none !important; }}",
            prefix = self.prefix
        )
    }
}

impl<R: SiteRules, S: DiagnosticSink> CssGenerator for FilterCssGenerator<R, S> {
    type Config = FilterConfig;

    fn create_css_code(&self, config: &FilterConfig, url: &str) -> String {
        FilterCssGenerator::create_css_code(self, config, url)
    }
}
