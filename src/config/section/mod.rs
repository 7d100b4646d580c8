//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key of the input record:
//!
//! | Module  | Input Key     | Purpose                              |
//! |---------|---------------|--------------------------------------|
//! | `head`  | `head`        | Document `<head>` injections         |
//! | `theme` | `themeConfig` | Nav bar, sidebar, social, footer     |

pub mod head;
pub mod theme;

pub use head::HeadEntry;
pub use theme::{
    FooterConfig, NavItem, SearchConfig, SearchProvider, SidebarConfig, SidebarGroup, SocialLink,
    SocialPlatform, ThemeConfig,
};
