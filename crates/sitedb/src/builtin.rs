//! Sites excluded from filtering out of the box.
//!
//! These either ship their own dark theme or are mostly video, where an
//! inverted page around the player does more harm than good.

use crate::pattern::SiteAddress;
use phf::phf_set;

/// Hosts on the built-in ignore list. Subdomains are covered too.
pub static BUILTIN_IGNORED_HOSTS: phf::Set<&'static str> = phf_set! {
    "youtube.com",
    "twitch.tv",
    "vimeo.com",
    "netflix.com",
    "hulu.com",
    "photos.google.com",
    "play.google.com",
    "code.visualstudio.com",
    "kickstarter.com",
    "steampowered.com",
};

/// True when the address host, or one of its parent domains, is built in.
pub fn is_builtin_ignored(address: &SiteAddress) -> bool {
    address
        .host_suffixes()
        .any(|host| BUILTIN_IGNORED_HOSTS.contains(host.as_str()))
}
