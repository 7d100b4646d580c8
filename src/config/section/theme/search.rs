//! Search provider selection.
//!
//! ```json
//! "search": { "provider": "local" }
//! ```

use serde::{Deserialize, Serialize};

/// Which search implementation the rendering engine should embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchProvider {
    /// Client-side index built at render time.
    #[default]
    Local,

    /// Hosted Algolia DocSearch.
    Algolia,
}

/// Search configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub provider: SearchProvider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider_is_local() {
        let config: SearchConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.provider, SearchProvider::Local);
    }

    #[test]
    fn test_parse_algolia() {
        let config: SearchConfig = serde_json::from_str(r#"{ "provider": "algolia" }"#).unwrap();
        assert_eq!(config.provider, SearchProvider::Algolia);
    }

    #[test]
    fn test_unknown_provider_is_a_parse_error() {
        let result: Result<SearchConfig, _> = serde_json::from_str(r#"{ "provider": "bing" }"#);
        assert!(result.is_err());
    }
}
