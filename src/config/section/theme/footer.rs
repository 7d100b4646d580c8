//! Footer text configuration.
//!
//! ```json
//! "footer": {
//!     "message": "Released under the MIT License.",
//!     "copyright": "Copyright © 2024-present Example"
//! }
//! ```

use serde::{Deserialize, Serialize};

/// Footer message and copyright line.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterConfig {
    /// Short message shown above the copyright line.
    pub message: String,

    /// Copyright notice.
    pub copyright: String,
}

impl FooterConfig {
    /// True if either line has content to render.
    pub fn has_content(&self) -> bool {
        !self.message.is_empty() || !self.copyright.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_empty() {
        let footer: FooterConfig = serde_json::from_str("{}").unwrap();
        assert!(footer.message.is_empty());
        assert!(footer.copyright.is_empty());
        assert!(!footer.has_content());
    }

    #[test]
    fn test_parse() {
        let footer: FooterConfig = serde_json::from_str(
            r#"{ "message": "Released under the MIT License.", "copyright": "Copyright © 2024-present Example" }"#,
        )
        .unwrap();
        assert_eq!(footer.message, "Released under the MIT License.");
        assert!(footer.has_content());
    }
}
