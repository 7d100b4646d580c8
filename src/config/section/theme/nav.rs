//! Top navigation bar items.
//!
//! ```json
//! "nav": [
//!     { "text": "Home", "link": "/" },
//!     { "text": "Guide", "link": "/guide/" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A labelled link: one nav bar entry, or one link inside a sidebar group.
///
/// Order within a list is display-significant and always preserved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavItem {
    /// Display label.
    pub text: String,

    /// Target: a site-relative path (`/guide/`) or a full external URL.
    pub link: String,
}

impl NavItem {
    /// True if the link points outside the site.
    pub fn is_external(&self) -> bool {
        self.link.starts_with("http://") || self.link.starts_with("https://")
    }

    /// Validate the item. `field` is the item's own path
    /// (e.g. `themeConfig.nav.0`).
    pub(crate) fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.link.trim().is_empty() {
            diag.error_with_hint(
                field.join("link"),
                if self.text.is_empty() {
                    "nav item has no link".to_string()
                } else {
                    format!("nav item '{}' has no link", self.text)
                },
                "set link to a path like \"/guide/\" or a full URL",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let item: NavItem = serde_json::from_str(r#"{ "text": "Guide", "link": "/guide/" }"#).unwrap();
        assert_eq!(item.text, "Guide");
        assert_eq!(item.link, "/guide/");
        assert!(!item.is_external());
    }

    #[test]
    fn test_external_link() {
        let item: NavItem =
            serde_json::from_str(r#"{ "text": "Source", "link": "https://github.com/x/y" }"#).unwrap();
        assert!(item.is_external());
    }

    #[test]
    fn test_missing_link_is_diagnosed() {
        let item: NavItem = serde_json::from_str(r#"{ "text": "Broken" }"#).unwrap();

        let mut diag = ConfigDiagnostics::new();
        item.validate(&FieldPath::new("themeConfig.nav").join(1), &mut diag);

        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "themeConfig.nav.1.link");
        assert!(diag.errors()[0].message.contains("Broken"));
    }
}
