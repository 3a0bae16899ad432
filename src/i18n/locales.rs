//! Locale detection and Accept-Language parsing.
//!
//! These turn the usual sources of language preferences (an HTTP header, the
//! process environment) into the ordered candidate list that
//! [`Catalog::best_match`](super::Catalog::best_match) consumes.

/// Normalize a locale string to BCP 47 format.
///
/// Examples:
/// - "en_US.UTF-8" -> "en-US"
/// - "`en_US`" -> "en-US"
/// - "en" -> "en"
pub fn normalize_locale(locale: &str) -> String {
    // Remove encoding suffix (e.g., ".UTF-8")
    let locale = locale.split('.').next().unwrap_or(locale);

    // Remove modifier suffix (e.g., "@euro")
    let locale = locale.split('@').next().unwrap_or(locale);

    locale.trim().replace('_', "-")
}

/// Detect the user's preferred locale from environment variables.
///
/// Checks in order:
/// 1. `UNPREFIXED_INTL_LOCALE` - explicit override
/// 2. `LC_ALL` - POSIX locale override
/// 3. `LANG` - default POSIX locale
///
/// Returns `None` when nothing usable is set.
pub fn detect_locale() -> Option<String> {
    ["UNPREFIXED_INTL_LOCALE", "LC_ALL", "LANG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find(|locale| !locale.is_empty() && locale != "C" && locale != "POSIX")
        .map(|locale| normalize_locale(&locale))
}

/// Parse an `Accept-Language` header into language tags, most preferred first.
///
/// Weights come from `;q=` parameters (missing or unparsable weights count
/// as 1). Tags with `q=0` and the `*` wildcard are dropped. Tags of equal
/// weight keep their header order.
pub fn parse_accept_language(header: &str) -> Vec<String> {
    let mut tags: Vec<(String, f32)> = header
        .split(',')
        .filter_map(|item| {
            let mut parts = item.split(';');
            let tag = parts.next()?.trim();
            if tag.is_empty() || tag == "*" {
                return None;
            }

            let quality = parts
                .find_map(|param| param.trim().strip_prefix("q="))
                .and_then(|q| q.trim().parse::<f32>().ok())
                .filter(|q| q.is_finite())
                .map_or(1.0, |q| q.clamp(0.0, 1.0));

            (quality > 0.0).then(|| (normalize_locale(tag), quality))
        })
        .collect();

    // Stable sort keeps header order among equal weights.
    tags.sort_by(|a, b| b.1.total_cmp(&a.1));
    tags.into_iter().map(|(tag, _)| tag).collect()
}
