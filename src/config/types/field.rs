//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Static paths name fixed fields (`title`, `themeConfig.nav`); `join`
/// appends runtime segments such as list indices and sidebar prefixes,
/// producing paths like `themeConfig.sidebar./guide/.0.items.1.link`.
///
/// # Example
///
/// ```ignore
/// let field = FieldPath::new("themeConfig.nav").join(2).join("link");
/// diag.error(field, "nav item has no link");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Append a `.`-separated segment (index, map key, field name).
    pub fn join(&self, segment: impl fmt::Display) -> Self {
        Self(Cow::Owned(format!("{}.{}", self.0, segment)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_builds_dotted_path() {
        let field = FieldPath::new("themeConfig.sidebar")
            .join("/guide/")
            .join(0)
            .join("items")
            .join(1)
            .join("link");
        assert_eq!(field.as_str(), "themeConfig.sidebar./guide/.0.items.1.link");
    }

    #[test]
    fn test_static_path() {
        const FIELD: FieldPath = FieldPath::new("title");
        assert_eq!(FIELD.as_str(), "title");
    }
}
