//! Vendor prefixes for the `filter`, `text-stroke` and `full-screen` names.

pub const WEBKIT: &str = "-webkit-";
pub const MOZ: &str = "-moz-";
/// Unprefixed names.
pub const NONE: &str = "";
