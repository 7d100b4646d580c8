//! URL path type for type-safe request-path handling.
//!
//! - Internal representation: Always decoded (human-readable)
//! - Browser boundary: Decode on input

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Decoded URL path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts with `/`
/// - Page URLs end with `/`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from browser URL (decode percent-encoding, strip query string).
    pub fn from_browser(encoded: &str) -> Self {
        use percent_encoding::percent_decode_str;
        // Strip query string before decoding
        let path = encoded.split('?').next().unwrap_or(encoded);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_page(&decoded)
    }

    /// Create page URL (with trailing slash). Normalizes leading/trailing slashes.
    /// Strips query string and fragment.
    pub fn from_page(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Handle root path specially
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        // Add leading slash if missing
        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{}", path)
        };

        // Add trailing slash if missing (for page URLs)
        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{}/", with_leading)
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using url crate.
    fn strip_query_fragment(path: &str) -> String {
        use percent_encoding::percent_decode_str;

        // Use a dummy base URL to parse the path
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // url crate returns percent-encoded path, decode it
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            // Fallback to simple split if url parsing fails
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if path starts with the given prefix.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Check if this is a page URL (ends with `/`).
    #[inline]
    pub fn is_page_url(&self) -> bool {
        self.0.ends_with('/')
    }

    /// Check if the URL path is empty (only contains `/`).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty() || self.0.as_ref() == "/"
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_page(&s)
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_page(s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_page(&s))
    }
}
