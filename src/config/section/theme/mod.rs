//! `themeConfig` section: everything the theme renders around page content.
//!
//! # Example
//!
//! ```json
//! "themeConfig": {
//!     "logo": "/logo.png",
//!     "nav": [{ "text": "Guide", "link": "/guide/" }],
//!     "sidebar": { "/guide/": [{ "text": "Getting Started", "items": [] }] },
//!     "socialLinks": [{ "icon": "github", "link": "https://github.com/x/y" }],
//!     "search": { "provider": "local" },
//!     "footer": { "message": "MIT Licensed", "copyright": "© 2024" }
//! }
//! ```

mod footer;
mod nav;
mod search;
mod sidebar;
mod social;

pub use footer::FooterConfig;
pub use nav::NavItem;
pub use search::{SearchConfig, SearchProvider};
pub use sidebar::{SidebarConfig, SidebarGroup};
pub use social::{SocialLink, SocialPlatform};

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Theme-level configuration: nav bar, sidebar taxonomy, and site chrome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ThemeConfig {
    /// Logo path shown in the nav bar.
    pub logo: Option<String>,

    /// Top navigation bar, in display order.
    pub nav: Vec<NavItem>,

    /// Sidebar link groups keyed by URL path prefix.
    pub sidebar: SidebarConfig,

    /// Social icon links.
    pub social_links: Vec<SocialLink>,

    /// Search provider selection.
    pub search: SearchConfig,

    /// Footer message and copyright.
    pub footer: FooterConfig,
}

impl ThemeConfig {
    pub(crate) fn validate(&self, diag: &mut ConfigDiagnostics) {
        let nav_field = FieldPath::new("themeConfig.nav");
        for (i, item) in self.nav.iter().enumerate() {
            item.validate(&nav_field.join(i), diag);
        }

        self.sidebar
            .validate(&FieldPath::new("themeConfig.sidebar"), diag);

        let social_field = FieldPath::new("themeConfig.socialLinks");
        for (i, link) in self.social_links.iter().enumerate() {
            link.validate(&social_field.join(i), diag);
        }
    }
}
