//! Address patterns used by ignore lists and site rules.
//!
//! A pattern is a host optionally followed by a path prefix. Schemes and a
//! leading `www.` are ignored on both the pattern and the address, and hosts
//! compare case-insensitively.
//!
//! | pattern | matches |
//! |---|---|
//! | `example.com` | `example.com`, `https://www.example.com/x`, `docs.example.com` |
//! | `*.google.com` | `mail.google.com`, `a.b.google.com` (not `google.com`) |
//! | `mail.*.com` | `mail.yahoo.com`, `mail.a.b.com` |
//! | `github.com/rust-lang` | `github.com/rust-lang/rust` (not `github.com/rust-lang-nursery`) |

use filter_css::FilterCssError;

/// Host and path of an address, normalized for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteAddress {
    labels: Vec<String>,
    path: String,
}

impl SiteAddress {
    /// Splits an address into host labels and path; never fails.
    pub fn parse(url: &str) -> Self {
        let rest = strip_scheme(url.trim());
        let end = rest.find(['?', '#']).unwrap_or(rest.len());
        let rest = &rest[..end];

        let (host, path) = match rest.find('/') {
            Some(slash) => (&rest[..slash], &rest[slash..]),
            None => (rest, ""),
        };

        Self {
            labels: host_labels(host),
            path: path.to_string(),
        }
    }

    pub fn host(&self) -> String {
        self.labels.join(".")
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// The host followed by each of its parent domains.
    pub fn host_suffixes(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.labels.len()).map(|i| self.labels[i..].join("."))
    }
}

/// A parsed site pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPattern {
    source: String,
    labels: Vec<String>,
    path: String,
}

impl UrlPattern {
    pub fn parse(template: &str) -> Result<Self, FilterCssError> {
        let trimmed = template.trim();
        let address = SiteAddress::parse(trimmed);

        if address.labels.is_empty() {
            return Err(FilterCssError::InvalidPattern(format!(
                "{:?}: missing host",
                template
            )));
        }

        for label in &address.labels {
            let valid = label == "*"
                || (!label.is_empty()
                    && label
                        .chars()
                        .all(|c| c.is_alphanumeric() || c == '-' || c == '_' || c == ':'));
            if !valid {
                return Err(FilterCssError::InvalidPattern(format!(
                    "{:?}: bad host label {:?}",
                    template, label
                )));
            }
        }

        Ok(Self {
            source: trimmed.to_string(),
            labels: address.labels,
            path: address.path,
        })
    }

    /// The template this pattern was parsed from.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, url: &str) -> bool {
        self.matches_address(&SiteAddress::parse(url))
    }

    pub fn matches_address(&self, address: &SiteAddress) -> bool {
        self.matches_host(&address.labels) && self.matches_path(&address.path)
    }

    fn matches_host(&self, host: &[String]) -> bool {
        // Subdomains of a matched host match too
        (0..host.len()).any(|start| labels_match(&self.labels, &host[start..]))
    }

    fn matches_path(&self, path: &str) -> bool {
        let prefix = self.path.as_str();
        if prefix.is_empty() || prefix == "/" {
            return true;
        }
        if prefix.ends_with('/') {
            return path.starts_with(prefix);
        }
        match path.strip_prefix(prefix) {
            Some(rest) => rest.is_empty() || rest.starts_with('/'),
            None => false,
        }
    }
}

impl std::str::FromStr for UrlPattern {
    type Err = FilterCssError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// True when any pattern in `patterns` matches `url`.
///
/// Patterns that do not parse are skipped with a warning.
pub fn is_url_in_list(url: &str, patterns: &[String]) -> bool {
    if patterns.is_empty() {
        return false;
    }

    let address = SiteAddress::parse(url);
    patterns.iter().any(|template| match UrlPattern::parse(template) {
        Ok(pattern) => pattern.matches_address(&address),
        Err(err) => {
            log::warn!("skipping ignore list entry: {}", err);
            false
        }
    })
}

/// `*` matches one or more whole labels.
///
/// Greedy two-pointer matching: on a mismatch only the most recent `*`
/// takes one more label, so the cost stays within pattern length times
/// host length.
fn labels_match(pattern: &[String], host: &[String]) -> bool {
    let (mut p, mut h) = (0, 0);
    // Pattern index after the last `*` and the host index it resumes from
    let mut star: Option<(usize, usize)> = None;

    while h < host.len() {
        if p < pattern.len() && pattern[p] == "*" {
            p += 1;
            h += 1;
            star = Some((p, h));
        } else if p < pattern.len() && pattern[p] == host[h] {
            p += 1;
            h += 1;
        } else if let Some((star_p, star_h)) = star {
            p = star_p;
            h = star_h + 1;
            star = Some((star_p, h));
        } else {
            return false;
        }
    }

    p == pattern.len()
}

fn strip_scheme(url: &str) -> &str {
    match url.find("://") {
        Some(idx) => &url[idx + 3..],
        None => url,
    }
}

fn host_labels(host: &str) -> Vec<String> {
    let host = host.trim_end_matches('.').to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(&host);
    if host.is_empty() {
        return Vec::new();
    }
    host.split('.').map(str::to_string).collect()
}
