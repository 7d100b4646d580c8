//! Docnav - a validated navigation model for documentation sites.
//!
//! The crate loads a declarative site description (title, base path, nav
//! bar, sidebar taxonomy, social links, search provider, footer, `<head>`
//! injections), validates it eagerly with field-path diagnostics, and
//! exposes it as an immutable lookup structure. Rendering is the consumer's
//! job: a rendering engine receives the validated [`SiteConfig`] and asks it
//! which sidebar applies to a request path.
//!
//! # Example
//!
//! ```
//! use docnav::SiteConfig;
//!
//! let config = SiteConfig::from_str(r#"{
//!     "title": "My Project",
//!     "base": "/docs/",
//!     "themeConfig": {
//!         "nav": [{ "text": "Guide", "link": "/guide/" }],
//!         "sidebar": {
//!             "/guide/": [{
//!                 "text": "Getting Started",
//!                 "items": [{ "text": "Introduction", "link": "/guide/" }]
//!             }]
//!         }
//!     }
//! }"#)?;
//!
//! let groups = config.sidebar_for("/guide/quick-start");
//! assert_eq!(groups[0].text, "Getting Started");
//! assert_eq!(config.nav()[0].link, "/guide/");
//! # Ok::<(), docnav::ConfigError>(())
//! ```

pub mod config;
mod core;
pub mod logger;

pub use config::{
    ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath, FooterConfig, HeadEntry, NavItem,
    SearchConfig, SearchProvider, SidebarConfig, SidebarGroup, SiteConfig, SocialLink,
    SocialPlatform, ThemeConfig, cfg, init_config,
};
pub use crate::core::UrlPath;
