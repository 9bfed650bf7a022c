//! Error types for the validating helpers.
//!
//! Stylesheet generation itself is total and never returns these. They come
//! from the helpers callers use to check values up front: font-family
//! parsing, numeric mode conversion, and site pattern parsing.

use thiserror::Error;

/// Errors produced when validating filter configuration values.
///
/// # Examples
///
/// ```rust
/// use filter_css::font::FontFamily;
///
/// // A declaration break-out attempt is not a font-family list
/// let result = FontFamily::parse("Arial; } body { display: none");
/// assert!(result.is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterCssError {
    /// The value is not a valid CSS `font-family` list.
    ///
    /// The string contains the offending input and what went wrong.
    #[error("Invalid font family: {0}")]
    InvalidFontFamily(String),

    /// A numeric mode outside `0` (light) and `1` (dark).
    #[error("Unknown filter mode: {0}")]
    InvalidMode(u8),

    /// A site pattern that cannot be matched against addresses.
    #[error("Invalid site pattern: {0}")]
    InvalidPattern(String),
}
