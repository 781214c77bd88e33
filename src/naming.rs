//! String normalization for values that end up in packaging metadata.
//!
//! Two transforms live here because both feed identifiers the packaging
//! toolchain is strict about:
//!
//! - [`normalize_version`]: tag-style versions (`v1.2.3`) become plain
//!   dotted versions (`1.2.3`). The Windows resource editor rejects the
//!   prefixed form.
//! - [`to_slug`]: free-form app names become package identifiers matching
//!   `[a-z0-9._-]+`.
//!
//! Both are pure and idempotent, so reruns over already-normalized values
//! are no-ops.

use regex::Regex;
use std::sync::LazyLock;

static NON_SLUG_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9._-]+").expect("static slug pattern"));

/// Strip a single leading `v` or `V` from a version string.
///
/// - `"v1.2.3"` → `"1.2.3"`
/// - `"V2.0.0"` → `"2.0.0"`
/// - `"1.2.3"` → `"1.2.3"`
/// - `""` → `""`
pub fn normalize_version(version: &str) -> &str {
    version
        .strip_prefix('v')
        .or_else(|| version.strip_prefix('V'))
        .unwrap_or(version)
}

/// Turn a free-form name into a package identifier, or `fallback` if
/// nothing usable remains.
///
/// Lower-cases the input, collapses every run of characters outside
/// `[a-z0-9._-]` into a single `-`, and trims dashes from both ends.
///
/// - `"My App!!"` → `"my-app"`
/// - `"  Über Tool "` → `"ber-tool"`
/// - `"!!!"` → `fallback`
pub fn to_slug(value: &str, fallback: &str) -> String {
    if value.is_empty() {
        return fallback.to_string();
    }
    let lowered = value.to_lowercase();
    let replaced = NON_SLUG_RUN.replace_all(&lowered, "-");
    let slug = replaced.trim_matches('-');
    if slug.is_empty() {
        fallback.to_string()
    } else {
        slug.to_string()
    }
}
