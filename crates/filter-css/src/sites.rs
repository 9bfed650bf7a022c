//! Lookup collaborators consulted by the generator.
//!
//! The generator does not know how sites are matched. It asks a
//! [`SiteRules`] implementation for the override rule, the two ignore-list
//! tests, and the selectors of elements to re-invert. The `sitedb` crate
//! provides the standard database; tests use small fakes.

use std::fmt;
use std::sync::Arc;

/// Selector list used when no site-specific data exists.
pub const DEFAULT_CONTRARY_SELECTORS: &str = "img, video";

/// A CSS selector list naming elements to re-invert (images, video, …).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContrarySelectors(String);

impl ContrarySelectors {
    pub fn new(selectors: impl Into<String>) -> Self {
        Self(selectors.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContrarySelectors {
    fn default() -> Self {
        Self::new(DEFAULT_CONTRARY_SELECTORS)
    }
}

impl fmt::Display for ContrarySelectors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ContrarySelectors {
    fn from(selectors: &str) -> Self {
        Self::new(selectors)
    }
}

impl From<String> for ContrarySelectors {
    fn from(selectors: String) -> Self {
        Self(selectors)
    }
}

/// Site lookups the generator depends on.
///
/// Implementations are expected to be total: "nothing found" is reported
/// as `None`, `false`, or the default selectors, never as an error.
pub trait SiteRules: Send + Sync {
    /// Manually authored CSS for this address, if any.
    fn override_rule(&self, url: &str) -> Option<String>;

    /// Built-in exclusion test.
    fn is_in_default_ignore_list(&self, url: &str) -> bool;

    /// Exclusion test against the user's patterns.
    fn is_in_user_ignore_list(&self, url: &str, patterns: &[String]) -> bool;

    /// Elements to re-invert on this address.
    fn contrary_selectors(&self, url: &str) -> ContrarySelectors;
}

impl<T: SiteRules + ?Sized> SiteRules for &T {
    fn override_rule(&self, url: &str) -> Option<String> {
        (**self).override_rule(url)
    }

    fn is_in_default_ignore_list(&self, url: &str) -> bool {
        (**self).is_in_default_ignore_list(url)
    }

    fn is_in_user_ignore_list(&self, url: &str, patterns: &[String]) -> bool {
        (**self).is_in_user_ignore_list(url, patterns)
    }

    fn contrary_selectors(&self, url: &str) -> ContrarySelectors {
        (**self).contrary_selectors(url)
    }
}

impl<T: SiteRules + ?Sized> SiteRules for Arc<T> {
    fn override_rule(&self, url: &str) -> Option<String> {
        (**self).override_rule(url)
    }

    fn is_in_default_ignore_list(&self, url: &str) -> bool {
        (**self).is_in_default_ignore_list(url)
    }

    fn is_in_user_ignore_list(&self, url: &str, patterns: &[String]) -> bool {
        (**self).is_in_user_ignore_list(url, patterns)
    }

    fn contrary_selectors(&self, url: &str) -> ContrarySelectors {
        (**self).contrary_selectors(url)
    }
}
