//! Document `<head>` injection entries.
//!
//! Each entry describes one element the rendering engine inserts into the
//! page head, written as a tag/attribute pair:
//!
//! ```json
//! "head": [
//!     ["link", { "rel": "icon", "type": "image/png", "href": "/favicon.png" }],
//!     ["script", { "defer": "true" }, "console.log('hi')"]
//! ]
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::{ConfigDiagnostics, FieldPath};

/// A single `<head>` element: tag name, attributes, optional inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HeadEntry {
    /// `[tag, attrs]` — void elements like `<link>` and `<meta>`.
    Tag(String, Map<String, Value>),
    /// `[tag, attrs, content]` — inline scripts and styles.
    TagWithContent(String, Map<String, Value>, String),
}

impl HeadEntry {
    /// Element tag name (`link`, `meta`, `script`, ...).
    pub fn tag(&self) -> &str {
        match self {
            Self::Tag(tag, _) | Self::TagWithContent(tag, _, _) => tag,
        }
    }

    /// Attributes in the order the config wrote them.
    pub fn attrs(&self) -> &Map<String, Value> {
        match self {
            Self::Tag(_, attrs) | Self::TagWithContent(_, attrs, _) => attrs,
        }
    }

    /// Look up a string attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs().get(name).and_then(Value::as_str)
    }

    /// Inline element content, if any.
    pub fn content(&self) -> Option<&str> {
        match self {
            Self::Tag(..) => None,
            Self::TagWithContent(_, _, content) => Some(content),
        }
    }

    pub(crate) fn validate(&self, field: FieldPath, diag: &mut ConfigDiagnostics) {
        if self.tag().trim().is_empty() {
            diag.error_with_hint(
                field,
                "head entry has an empty tag name",
                "use a pair like [\"link\", { \"rel\": \"icon\", \"href\": \"/favicon.png\" }]",
            );
        }
    }
}
