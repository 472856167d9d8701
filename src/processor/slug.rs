use regex::Regex;
use std::sync::LazyLock;

static NON_ALPHANUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("slug pattern is valid"));

/// URL-safe identifier for a series display name.
///
/// Distinct names can map to the same slug; callers do not deduplicate.
pub fn slugify(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    NON_ALPHANUMERIC
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}
