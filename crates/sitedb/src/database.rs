//! In-memory site database backing [`SiteRules`].

use crate::builtin::is_builtin_ignored;
use crate::pattern::{SiteAddress, UrlPattern, is_url_in_list};
use filter_css::sites::{ContrarySelectors, SiteRules};
use filter_css::FilterCssError;
use once_cell::sync::Lazy;

static BUILTIN: Lazy<SiteDatabase> = Lazy::new(SiteDatabase::default);

/// Override rules, extra ignored sites and contrary selectors by site.
///
/// For each lookup the first matching entry wins, in insertion order.
///
/// ```rust
/// use filter_css::sites::SiteRules;
/// use sitedb::SiteDatabase;
///
/// let db = SiteDatabase::builder()
///     .override_rule("example.com", ".logo { filter: none; }")
///     .contrary("maps.example.com", "img, canvas")
///     .build()
///     .unwrap();
///
/// assert_eq!(db.override_rule("https://www.example.com/").as_deref(), Some(".logo { filter: none; }"));
/// assert_eq!(db.contrary_selectors("maps.example.com").as_str(), "img, canvas");
/// assert_eq!(db.contrary_selectors("example.com").as_str(), "img, video");
/// ```
#[derive(Debug, Clone)]
pub struct SiteDatabase {
    builtin_ignores: bool,
    ignores: Vec<UrlPattern>,
    overrides: Vec<(UrlPattern, String)>,
    contrary: Vec<(UrlPattern, ContrarySelectors)>,
    default_contrary: ContrarySelectors,
}

impl Default for SiteDatabase {
    fn default() -> Self {
        Self {
            builtin_ignores: true,
            ignores: Vec::new(),
            overrides: Vec::new(),
            contrary: Vec::new(),
            default_contrary: ContrarySelectors::default(),
        }
    }
}

impl SiteDatabase {
    pub fn builder() -> SiteDatabaseBuilder {
        SiteDatabaseBuilder::default()
    }

    /// Shared database with the built-in ignore list and default selectors.
    pub fn builtin() -> &'static SiteDatabase {
        &BUILTIN
    }

    pub fn default_contrary(&self) -> &ContrarySelectors {
        &self.default_contrary
    }
}

impl SiteRules for SiteDatabase {
    fn override_rule(&self, url: &str) -> Option<String> {
        let address = SiteAddress::parse(url);
        self.overrides
            .iter()
            .find(|(pattern, _)| pattern.matches_address(&address))
            .map(|(_, rule)| rule.clone())
    }

    fn is_in_default_ignore_list(&self, url: &str) -> bool {
        let address = SiteAddress::parse(url);
        (self.builtin_ignores && is_builtin_ignored(&address))
            || self
                .ignores
                .iter()
                .any(|pattern| pattern.matches_address(&address))
    }

    fn is_in_user_ignore_list(&self, url: &str, patterns: &[String]) -> bool {
        is_url_in_list(url, patterns)
    }

    fn contrary_selectors(&self, url: &str) -> ContrarySelectors {
        let address = SiteAddress::parse(url);
        self.contrary
            .iter()
            .find(|(pattern, _)| pattern.matches_address(&address))
            .map(|(_, selectors)| selectors.clone())
            .unwrap_or_else(|| self.default_contrary.clone())
    }
}

/// Collects site entries; patterns are checked in [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct SiteDatabaseBuilder {
    builtin_ignores: bool,
    ignores: Vec<String>,
    overrides: Vec<(String, String)>,
    contrary: Vec<(String, String)>,
    default_contrary: Option<String>,
}

impl Default for SiteDatabaseBuilder {
    fn default() -> Self {
        Self {
            builtin_ignores: true,
            ignores: Vec::new(),
            overrides: Vec::new(),
            contrary: Vec::new(),
            default_contrary: None,
        }
    }
}

impl SiteDatabaseBuilder {
    /// Adds a site to the default ignore list.
    pub fn ignore(mut self, pattern: impl Into<String>) -> Self {
        self.ignores.push(pattern.into());
        self
    }

    /// Adds a manually authored CSS rule for a site.
    pub fn override_rule(mut self, pattern: impl Into<String>, css: impl Into<String>) -> Self {
        self.overrides.push((pattern.into(), css.into()));
        self
    }

    /// Sets the elements to re-invert on a site.
    pub fn contrary(mut self, pattern: impl Into<String>, selectors: impl Into<String>) -> Self {
        self.contrary.push((pattern.into(), selectors.into()));
        self
    }

    /// Replaces the selectors used when no site entry matches.
    pub fn default_contrary(mut self, selectors: impl Into<String>) -> Self {
        self.default_contrary = Some(selectors.into());
        self
    }

    /// Leaves the built-in hosts off the default ignore list.
    pub fn without_builtin_ignores(mut self) -> Self {
        self.builtin_ignores = false;
        self
    }

    pub fn build(self) -> Result<SiteDatabase, FilterCssError> {
        let ignores = self
            .ignores
            .iter()
            .map(|pattern| UrlPattern::parse(pattern))
            .collect::<Result<Vec<_>, _>>()?;

        let overrides = self
            .overrides
            .into_iter()
            .map(|(pattern, css)| Ok((UrlPattern::parse(&pattern)?, css)))
            .collect::<Result<Vec<_>, FilterCssError>>()?;

        let contrary = self
            .contrary
            .into_iter()
            .map(|(pattern, selectors)| {
                Ok((UrlPattern::parse(&pattern)?, ContrarySelectors::from(selectors)))
            })
            .collect::<Result<Vec<_>, FilterCssError>>()?;

        Ok(SiteDatabase {
            builtin_ignores: self.builtin_ignores,
            ignores,
            overrides,
            contrary,
            default_contrary: self
                .default_contrary
                .map(ContrarySelectors::from)
                .unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_database_defaults() {
        let db = SiteDatabase::builtin();
        assert!(db.is_in_default_ignore_list("https://www.youtube.com/"));
        assert!(!db.is_in_default_ignore_list("https://example.com/"));
        assert_eq!(db.override_rule("example.com"), None);
        assert_eq!(db.contrary_selectors("example.com").as_str(), "img, video");
    }

    #[test]
    fn test_first_matching_override_wins() {
        let db = SiteDatabase::builder()
            .override_rule("docs.example.com", "a { color: red; }")
            .override_rule("example.com", "a { color: blue; }")
            .build()
            .unwrap();

        assert_eq!(
            db.override_rule("docs.example.com/guide").as_deref(),
            Some("a { color: red; }")
        );
        assert_eq!(
            db.override_rule("example.com").as_deref(),
            Some("a { color: blue; }")
        );
    }

    #[test]
    fn test_build_rejects_bad_pattern() {
        let result = SiteDatabase::builder().contrary("", "img").build();
        assert!(matches!(result, Err(FilterCssError::InvalidPattern(_))));
    }

    #[test]
    fn test_without_builtin_ignores() {
        let db = SiteDatabase::builder()
            .without_builtin_ignores()
            .ignore("intranet.local")
            .build()
            .unwrap();

        assert!(!db.is_in_default_ignore_list("youtube.com"));
        assert!(db.is_in_default_ignore_list("wiki.intranet.local"));
    }
}
