//! Link normalization.
//!
//! Project records carry free-form `live`/`repo` fields: absolute
//! URLs, bare domains, or nothing at all. Everything that ends up in
//! an `href` goes through [`normalize_url`] first so a malformed
//! field degrades to an inert `#` link instead of a broken one.

/// Placeholder emitted for missing or empty links
pub const INERT_LINK: &str = "#";

/// Canonicalize a possibly-missing or relative link into something
/// safe to put in an `href`.
///
/// - Empty or whitespace-only input becomes [`INERT_LINK`].
/// - Input already carrying an `http://` or `https://` scheme
///   (case-insensitive) is returned unchanged, casing preserved.
/// - Anything else is treated as a bare host/path: leading slashes
///   are stripped and `https://` is prefixed.
///
/// Total over its input domain; never panics.
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return INERT_LINK.to_string();
    }

    if has_http_scheme(trimmed) {
        return trimmed.to_string();
    }

    format!("https://{}", trimmed.trim_start_matches('/'))
}

fn has_http_scheme(s: &str) -> bool {
    let lower = s.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_and_empty_inputs_become_inert() {
        assert_eq!(normalize_url(""), "#");
        assert_eq!(normalize_url("   "), "#");
        assert_eq!(normalize_url("\t\n"), "#");
    }

    #[test]
    fn bare_domain_gets_https_prefix() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
        assert_eq!(normalize_url("example.com/page"), "https://example.com/page");
    }

    #[test]
    fn absolute_urls_pass_through_unchanged() {
        assert_eq!(normalize_url("https://x.com"), "https://x.com");
        assert_eq!(normalize_url("http://x.com"), "http://x.com");
    }

    #[test]
    fn scheme_match_is_case_insensitive_and_preserves_casing() {
        assert_eq!(normalize_url("HTTP://X.COM"), "HTTP://X.COM");
        assert_eq!(normalize_url("HtTpS://Mixed.Example"), "HtTpS://Mixed.Example");
    }

    #[test]
    fn leading_slashes_are_stripped_before_prefixing() {
        assert_eq!(normalize_url("/relative/path"), "https://relative/path");
        assert_eq!(normalize_url("///triple"), "https://triple");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        assert_eq!(normalize_url("  example.com  "), "https://example.com");
        assert_eq!(normalize_url(" https://x.com "), "https://x.com");
    }
}
