//! Sidebar taxonomy: link groups keyed by URL path prefix.
//!
//! ```json
//! "sidebar": {
//!     "/guide/": [{
//!         "text": "Getting Started",
//!         "items": [
//!             { "text": "Introduction", "link": "/guide/" },
//!             { "text": "Quick Start", "link": "/guide/quick-start" }
//!         ]
//!     }]
//! }
//! ```
//!
//! A request path is matched against the prefixes; the longest matching
//! prefix wins. A page outside every documented section has no sidebar.

use rustc_hash::FxHashSet;
use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{MapAccess, Visitor},
    ser::SerializeMap,
};
use std::fmt;

use super::NavItem;
use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::UrlPath;

/// A titled group of links shown in the sidebar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SidebarGroup {
    /// Group heading.
    pub text: String,

    /// Links in display order.
    pub items: Vec<NavItem>,
}

/// Sidebar map: URL path prefix -> ordered link groups.
///
/// Entries keep the order they appear in the config. Prefixes must be
/// unique strings; one prefix may be a string-prefix of another, and
/// lookup disambiguates by longest match.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SidebarConfig {
    entries: Vec<(String, Vec<SidebarGroup>)>,
}

impl SidebarConfig {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterate entries in config order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[SidebarGroup])> {
        self.entries
            .iter()
            .map(|(prefix, groups)| (prefix.as_str(), groups.as_slice()))
    }

    /// Exact-prefix lookup (no matching).
    pub fn get(&self, prefix: &str) -> Option<&[SidebarGroup]> {
        self.entries
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, groups)| groups.as_slice())
    }

    /// Resolve the sidebar for a request path by longest-prefix match.
    ///
    /// Among all prefixes that the path starts with, the one with the most
    /// characters wins. Returns an empty slice when nothing matches.
    pub fn resolve(&self, path: &UrlPath) -> &[SidebarGroup] {
        self.entries
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, groups)| groups.as_slice())
            .unwrap_or(&[])
    }

    /// Validate prefixes and every item inside every group.
    /// `field` is the map's own path (`themeConfig.sidebar`).
    pub(crate) fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        let mut seen = FxHashSet::default();
        for (prefix, groups) in &self.entries {
            if prefix.trim().is_empty() {
                diag.error_with_hint(
                    field.clone(),
                    "sidebar prefix must be a non-empty path",
                    "key sidebar sections by path prefix, e.g. \"/guide/\"",
                );
                continue;
            }

            if !seen.insert(prefix.as_str()) {
                diag.error(field.join(prefix), "duplicate sidebar prefix");
            }

            for (g, group) in groups.iter().enumerate() {
                let group_field = field.join(prefix).join(g);
                for (i, item) in group.items.iter().enumerate() {
                    item.validate(&group_field.join("items").join(i), diag);
                }
            }
        }
    }
}

impl FromIterator<(String, Vec<SidebarGroup>)> for SidebarConfig {
    fn from_iter<I: IntoIterator<Item = (String, Vec<SidebarGroup>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

// The input record writes the sidebar as a JSON object. Objects lose
// insertion order through ordinary map types, so deserialization collects
// entries by hand; duplicates are kept here and rejected by `validate`.
impl<'de> Deserialize<'de> for SidebarConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SidebarVisitor;

        impl<'de> Visitor<'de> for SidebarVisitor {
            type Value = SidebarConfig;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of path prefixes to sidebar group lists")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, Vec<SidebarGroup>>()? {
                    entries.push(entry);
                }
                Ok(SidebarConfig { entries })
            }
        }

        deserializer.deserialize_map(SidebarVisitor)
    }
}

impl Serialize for SidebarConfig {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (prefix, groups) in &self.entries {
            map.serialize_entry(prefix, groups)?;
        }
        map.end()
    }
}

// ============================================================================
// tests
// ============================================================================
