//! Site navigation configuration.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── head       # `head` (document-head injections)
//! │   └── theme      # `themeConfig` (nav, sidebar, social, footer)
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── handle     # Global config handle
//! ├── util           # Base-path normalization
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! # Keys
//!
//! | Key                        | Purpose                                  |
//! |----------------------------|------------------------------------------|
//! | `title`                    | Site title (required)                    |
//! | `description`              | Site description                         |
//! | `base`                     | Public base path, normalized to `/…/`    |
//! | `themeConfig.nav`          | Top nav bar (ordered)                    |
//! | `themeConfig.sidebar`      | Path-prefix keyed sidebar groups         |
//! | `themeConfig.socialLinks`  | Social icon links                        |
//! | `themeConfig.search`       | Search provider                          |
//! | `themeConfig.footer`       | Footer message and copyright             |
//! | `head`                     | Extra `<head>` elements                  |

pub mod section;
pub mod types;
mod util;

// Re-export from section/
pub use section::{
    FooterConfig, HeadEntry, NavItem, SearchConfig, SearchProvider, SidebarConfig, SidebarGroup,
    SocialLink, SocialPlatform, ThemeConfig,
};

// Re-export from types/
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, cfg, init_config};

use crate::core::UrlPath;
use crate::debug;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use util::normalize_base;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration for a documentation site's navigation.
///
/// Constructed once at startup from a static source, validated eagerly,
/// then held immutable: lookups never mutate, so shared readers need no
/// locking. Use [`init_config`](crate::config::init_config) to publish it
/// process-wide.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Site title (required).
    pub title: String,

    /// Short site description.
    pub description: String,

    /// Public base path the site is served under, normalized to `/…/`
    /// (e.g. `/my-project-docs/` for a GitHub Pages project site).
    pub base: String,

    /// Theme-level settings: nav bar, sidebar, social links, footer.
    pub theme_config: ThemeConfig,

    /// Extra elements injected into the document `<head>`.
    pub head: Vec<HeadEntry>,
}

impl SiteConfig {
    /// Parse and validate a configuration from a JSON string.
    ///
    /// Unknown fields are warned about and ignored; validation failures
    /// collect every problem into [`ConfigError::Diagnostics`].
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, ignored) = Self::parse_with_ignored(content)?;
        Self::finish(config, ignored)
    }

    /// Parse and validate a configuration from an in-memory JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        let mut ignored = Vec::new();
        let config = serde_ignored::deserialize(value, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Self::finish(config, ignored)
    }

    /// Load and validate a configuration file.
    ///
    /// IO errors carry the file path; parse and validation errors come
    /// through unchanged from [`SiteConfig::from_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let config = Self::from_str(&content)
            .with_context(|| format!("failed to load site config from `{}`", path.display()))?;

        debug!(
            "config";
            "loaded {} nav items, {} sidebar sections from {}",
            config.theme_config.nav.len(),
            config.theme_config.sidebar.len(),
            path.display()
        );

        Ok(config)
    }

    /// Parse JSON content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let mut deserializer = serde_json::Deserializer::from_str(content);
        let config = serde_ignored::deserialize(&mut deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        deserializer.end()?;
        Ok((config, ignored))
    }

    /// Normalize then validate a freshly parsed config.
    fn finish(mut config: Self, ignored: Vec<String>) -> Result<Self, ConfigError> {
        config.finalize();
        config.validate_with_ignored(ignored)?;
        Ok(config)
    }

    /// Normalize the config after parsing, before validation.
    fn finalize(&mut self) {
        // An absent base stays empty so validation can report it; a present
        // one is coerced to leading/trailing slash form
        if !self.base.trim().is_empty() {
            self.base = normalize_base(&self.base);
        }
    }

    // ========================================================================
    // lookup operations
    // ========================================================================

    /// Sidebar groups for a request path.
    ///
    /// The path is normalized (percent-decoded, query/fragment stripped,
    /// page form), then matched against the sidebar prefixes; the longest
    /// matching prefix wins. Returns an empty slice when the page is
    /// outside every documented section.
    pub fn sidebar_for(&self, request_path: &str) -> &[SidebarGroup] {
        self.theme_config
            .sidebar
            .resolve(&UrlPath::from_browser(request_path))
    }

    /// The flat nav bar, in config order.
    pub fn nav(&self) -> &[NavItem] {
        &self.theme_config.nav
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with_ignored(Vec::new())
    }

    fn validate_with_ignored(&self, ignored: Vec<String>) -> Result<(), ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        for field in ignored {
            diag.warn(field.into(), "unknown field");
        }

        if self.title.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("title"),
                "title is required",
                "set title to the site name",
            );
        }

        if self.base.trim().is_empty() {
            diag.error_with_hint(
                FieldPath::new("base"),
                "base is required",
                "set base to \"/\", or to the public path the site is served under, e.g. \"/docs/\"",
            );
        }

        self.theme_config.validate(&mut diag);

        let head_field = FieldPath::new("head");
        for (i, entry) in self.head.iter().enumerate() {
            entry.validate(head_field.join(i), &mut diag);
        }

        // Print collected warnings (grouped display)
        diag.print_warnings();

        // Return all collected errors
        diag.into_result().map_err(ConfigError::Diagnostics)
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_config`)
// ============================================================================

/// Parse, normalize, and validate a config from JSON.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub(crate) fn test_config(json: &str) -> SiteConfig {
    let (config, ignored) = SiteConfig::parse_with_ignored(json).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    SiteConfig::finish(config, Vec::new()).unwrap()
}

// ============================================================================
// tests
// ============================================================================
