//! # sitedb - Site data for filter-css
//!
//! The standard [`SiteRules`](filter_css::sites::SiteRules) implementation:
//!
//! - [`pattern`]: Address patterns (`example.com`, `*.google.com`, `github.com/org`)
//! - [`builtin`]: Hosts excluded from filtering out of the box
//! - [`database`]: [`SiteDatabase`], holding override rules, extra ignored
//!   sites and contrary selectors per site

pub mod builtin;
pub mod database;
pub mod pattern;

pub use database::{SiteDatabase, SiteDatabaseBuilder};
pub use pattern::{SiteAddress, UrlPattern, is_url_in_list};
