//! Configuration utility functions.

/// Coerce a base path into `/…/` form
///
/// The base is the public path prefix the site is served under
/// (e.g. a GitHub Pages project subdirectory). Leading and trailing
/// slashes are added if missing; the root base stays `/`.
///
/// # Examples
/// ```ignore
/// normalize_base("/docs/") -> "/docs/"
/// normalize_base("docs")   -> "/docs/"
/// normalize_base("/a/b")   -> "/a/b/"
/// normalize_base("/")      -> "/"
/// ```
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        return "/".to_string();
    }
    format!("/{trimmed}/")
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base() {
        // Already normalized
        assert_eq!(normalize_base("/docs/"), "/docs/");

        // Missing slashes on either side
        assert_eq!(normalize_base("docs"), "/docs/");
        assert_eq!(normalize_base("/docs"), "/docs/");
        assert_eq!(normalize_base("docs/"), "/docs/");

        // Multi-segment base
        assert_eq!(normalize_base("/a/b"), "/a/b/");

        // Root forms collapse to "/"
        assert_eq!(normalize_base("/"), "/");
        assert_eq!(normalize_base("//"), "/");
    }

    #[test]
    fn test_normalize_base_trims_whitespace() {
        assert_eq!(normalize_base("  docs  "), "/docs/");
    }
}
