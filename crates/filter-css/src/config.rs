//! Generation input: filter mode and the color/typography settings.
//!
//! [`FilterConfig`] mirrors the settings record the browser extension
//! persists. Values are taken as-is: percentages are not clamped and the
//! stroke width is not checked, so whatever the caller stores ends up in the
//! stylesheet for the browser to accept or ignore.
//!
//! ```rust
//! use filter_css::config::{FilterConfig, FilterMode};
//!
//! let config = FilterConfig::neutral()
//!     .with_mode(FilterMode::Dark)
//!     .with_brightness(90)
//!     .with_ignored("example.com");
//!
//! assert!(config.mode.is_dark());
//! assert_eq!(config.ignorelist, vec!["example.com".to_string()]);
//! ```

use crate::error::FilterCssError;

/// Whether page inversion is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    Light,
    #[default]
    Dark,
}

impl FilterMode {
    pub fn is_dark(self) -> bool {
        matches!(self, FilterMode::Dark)
    }
}

/// Stored settings use `0` for light and `1` for dark.
impl TryFrom<u8> for FilterMode {
    type Error = FilterCssError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(FilterMode::Light),
            1 => Ok(FilterMode::Dark),
            other => Err(FilterCssError::InvalidMode(other)),
        }
    }
}

impl From<FilterMode> for u8 {
    fn from(mode: FilterMode) -> Self {
        match mode {
            FilterMode::Light => 0,
            FilterMode::Dark => 1,
        }
    }
}

/// Color and typography settings for one stylesheet.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfig {
    /// Light leaves colors alone, dark inverts the page.
    pub mode: FilterMode,
    /// Brightness percent applied after inversion (100 = unchanged)
    pub brightness: i32,
    /// Contrast percent (100 = unchanged)
    pub contrast: i32,
    /// Grayscale percent (0 = unchanged)
    pub grayscale: i32,
    /// Sepia percent (0 = unchanged)
    pub sepia: i32,
    /// Force `fontfamily` on every element
    pub usefont: bool,
    /// CSS font-family list used when `usefont` is set
    pub fontfamily: String,
    /// Text stroke width in pixels, applied when positive
    pub textstroke: f64,
    /// Address patterns the user excluded from filtering
    pub ignorelist: Vec<String>,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            mode: FilterMode::Dark,
            brightness: 110,
            contrast: 90,
            grayscale: 20,
            sepia: 10,
            usefont: false,
            fontfamily: "Segoe UI".to_string(),
            textstroke: 0.0,
            ignorelist: Vec::new(),
        }
    }
}

impl FilterConfig {
    /// Light mode with every filter term at its neutral value.
    pub fn neutral() -> Self {
        Self {
            mode: FilterMode::Light,
            brightness: 100,
            contrast: 100,
            grayscale: 0,
            sepia: 0,
            usefont: false,
            fontfamily: String::new(),
            textstroke: 0.0,
            ignorelist: Vec::new(),
        }
    }

    pub fn with_mode(mut self, mode: FilterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_brightness(mut self, brightness: i32) -> Self {
        self.brightness = brightness;
        self
    }

    pub fn with_contrast(mut self, contrast: i32) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_grayscale(mut self, grayscale: i32) -> Self {
        self.grayscale = grayscale;
        self
    }

    pub fn with_sepia(mut self, sepia: i32) -> Self {
        self.sepia = sepia;
        self
    }

    /// Enables the font override with the given family list.
    pub fn with_font(mut self, family: impl Into<String>) -> Self {
        self.usefont = true;
        self.fontfamily = family.into();
        self
    }

    pub fn with_text_stroke(mut self, width: f64) -> Self {
        self.textstroke = width;
        self
    }

    /// Appends one pattern to the user ignore list.
    pub fn with_ignored(mut self, pattern: impl Into<String>) -> Self {
        self.ignorelist.push(pattern.into());
        self
    }

    /// True when the `*` text declaration should be emitted.
    pub fn has_text_overrides(&self) -> bool {
        self.usefont || self.textstroke > 0.0
    }
}
