//! Social icon links.
//!
//! ```json
//! "socialLinks": [
//!     { "icon": "github", "link": "https://github.com/user/project" }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::config::{ConfigDiagnostics, FieldPath};

/// Icon name used when a platform is not recognized.
const GENERIC_ICON: &str = "link";

/// Recognized social platforms.
///
/// Unrecognized platform tags are accepted and kept verbatim in
/// [`SocialPlatform::Other`]; they render with a generic icon instead of
/// failing validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocialPlatform {
    Github,
    Twitter,
    X,
    Discord,
    Mastodon,
    Linkedin,
    Facebook,
    Instagram,
    Slack,
    Youtube,
    Other(String),
}

impl SocialPlatform {
    /// Map an icon tag from the config to a platform.
    pub fn from_icon(icon: &str) -> Self {
        match icon {
            "github" => Self::Github,
            "twitter" => Self::Twitter,
            "x" => Self::X,
            "discord" => Self::Discord,
            "mastodon" => Self::Mastodon,
            "linkedin" => Self::Linkedin,
            "facebook" => Self::Facebook,
            "instagram" => Self::Instagram,
            "slack" => Self::Slack,
            "youtube" => Self::Youtube,
            other => Self::Other(other.to_string()),
        }
    }

    /// The tag as written in the config (round-trips unknown platforms).
    pub fn as_str(&self) -> &str {
        match self {
            Self::Github => "github",
            Self::Twitter => "twitter",
            Self::X => "x",
            Self::Discord => "discord",
            Self::Mastodon => "mastodon",
            Self::Linkedin => "linkedin",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Slack => "slack",
            Self::Youtube => "youtube",
            Self::Other(tag) => tag,
        }
    }

    /// Icon name for the rendering engine. Unknown platforms get a
    /// generic icon.
    pub fn icon_name(&self) -> &str {
        match self {
            Self::Other(_) => GENERIC_ICON,
            known => known.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl Default for SocialPlatform {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl Serialize for SocialPlatform {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SocialPlatform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_icon(&tag))
    }
}

/// One icon + URL pair shown in the site chrome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    /// Platform tag, e.g. `"github"`.
    pub icon: SocialPlatform,

    /// Full external URL.
    pub link: String,
}

impl SocialLink {
    /// Validate the link. `field` is the link's own path
    /// (e.g. `themeConfig.socialLinks.0`).
    ///
    /// # Checks
    /// - `icon` must be set (any tag, known or not)
    /// - `link` must be a valid http/https URL
    pub(crate) fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        if self.icon.as_str().is_empty() {
            diag.error_with_hint(
                field.join("icon"),
                "social link has no icon",
                "set icon to a platform tag like \"github\"",
            );
        }

        if self.link.trim().is_empty() {
            diag.error_with_hint(
                field.join("link"),
                "social link has no url",
                "set link to a full URL like \"https://github.com/user/project\"",
            );
            return;
        }

        match url::Url::parse(&self.link) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        field.join("link"),
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://github.com/user/project",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    field.join("link"),
                    format!("invalid URL: {}", e),
                    "use format like https://github.com/user/project",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_platform() {
        let link: SocialLink = serde_json::from_str(
            r#"{ "icon": "github", "link": "https://github.com/user/project" }"#,
        )
        .unwrap();
        assert_eq!(link.icon, SocialPlatform::Github);
        assert!(link.icon.is_known());
        assert_eq!(link.icon.icon_name(), "github");
    }

    #[test]
    fn test_unknown_platform_kept_verbatim_with_generic_icon() {
        let link: SocialLink =
            serde_json::from_str(r#"{ "icon": "gitea", "link": "https://gitea.example.com/x" }"#)
                .unwrap();
        assert_eq!(link.icon, SocialPlatform::Other("gitea".to_string()));
        assert!(!link.icon.is_known());
        assert_eq!(link.icon.icon_name(), "link");
        assert_eq!(link.icon.as_str(), "gitea");
    }

    #[test]
    fn test_unknown_platform_is_not_an_error() {
        let link: SocialLink =
            serde_json::from_str(r#"{ "icon": "gitea", "link": "https://gitea.example.com/x" }"#)
                .unwrap();
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("themeConfig.socialLinks").join(0), &mut diag);
        assert!(diag.is_empty());
    }

    #[test]
    fn test_platform_round_trip() {
        for tag in ["github", "x", "mastodon", "gitea"] {
            let platform = SocialPlatform::from_icon(tag);
            let json = serde_json::to_string(&platform).unwrap();
            assert_eq!(json, format!("\"{tag}\""));
            let back: SocialPlatform = serde_json::from_str(&json).unwrap();
            assert_eq!(back, platform);
        }
    }

    #[test]
    fn test_missing_icon_is_diagnosed() {
        let link: SocialLink =
            serde_json::from_str(r#"{ "link": "https://github.com/user/project" }"#).unwrap();
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("themeConfig.socialLinks").join(0), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.socialLinks.0.icon"
        );
    }

    #[test]
    fn test_invalid_url_is_diagnosed() {
        let link: SocialLink =
            serde_json::from_str(r#"{ "icon": "github", "link": "not a url" }"#).unwrap();
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("themeConfig.socialLinks").join(2), &mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(
            diag.errors()[0].field.as_str(),
            "themeConfig.socialLinks.2.link"
        );
    }

    #[test]
    fn test_non_http_scheme_is_diagnosed() {
        let link: SocialLink =
            serde_json::from_str(r#"{ "icon": "github", "link": "ftp://example.com/x" }"#).unwrap();
        let mut diag = ConfigDiagnostics::new();
        link.validate(&FieldPath::new("themeConfig.socialLinks").join(0), &mut diag);
        assert_eq!(diag.len(), 1);
        assert!(diag.errors()[0].message.contains("ftp"));
    }
}
