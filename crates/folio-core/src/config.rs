//! CMS connection configuration.

use serde::{Deserialize, Serialize};

/// Connection settings for the headless CMS.
///
/// Every key has a default, and deserializing a partial override object
/// keeps the defaults for absent keys — the override wins per key, never
/// wholesale. The struct is immutable after load. Remote loading is only
/// attempted when both `space_id` and `token` are present; an empty
/// credential pair is a recognized mode, not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CmsConfig {
    /// Provider tag. Only `contentful` is understood.
    pub provider: String,

    /// Contentful space identifier.
    pub space_id: String,

    /// Contentful environment name.
    pub environment: String,

    /// Delivery API token.
    pub token: String,

    /// Content-model identifier for blog posts.
    pub blog_content_type: String,

    /// Content-model identifier for portfolio projects.
    pub portfolio_content_type: String,
}

impl Default for CmsConfig {
    fn default() -> Self {
        Self {
            provider: "contentful".to_string(),
            space_id: String::new(),
            environment: "master".to_string(),
            token: String::new(),
            blog_content_type: "blogPost".to_string(),
            portfolio_content_type: "project".to_string(),
        }
    }
}

impl CmsConfig {
    /// Whether remote loading should be attempted at all.
    pub fn has_credentials(&self) -> bool {
        !self.space_id.is_empty() && !self.token.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CmsConfig::default();
        assert_eq!(config.provider, "contentful");
        assert_eq!(config.environment, "master");
        assert_eq!(config.blog_content_type, "blogPost");
        assert_eq!(config.portfolio_content_type, "project");
        assert!(config.space_id.is_empty());
        assert!(config.token.is_empty());
    }

    #[test]
    fn test_defaults_have_no_credentials() {
        assert!(!CmsConfig::default().has_credentials());
    }

    #[test]
    fn test_partial_override_keeps_defaults_per_key() {
        let config: CmsConfig =
            serde_json::from_str(r#"{"spaceId": "abc123", "token": "secret"}"#).unwrap();
        assert_eq!(config.space_id, "abc123");
        assert_eq!(config.token, "secret");
        // untouched keys keep their defaults
        assert_eq!(config.environment, "master");
        assert_eq!(config.portfolio_content_type, "project");
        assert!(config.has_credentials());
    }

    #[test]
    fn test_override_wins_per_key() {
        let config: CmsConfig =
            serde_json::from_str(r#"{"environment": "staging", "blogContentType": "post"}"#)
                .unwrap();
        assert_eq!(config.environment, "staging");
        assert_eq!(config.blog_content_type, "post");
        assert!(!config.has_credentials());
    }

    #[test]
    fn test_credentials_require_both_keys() {
        let only_space: CmsConfig = serde_json::from_str(r#"{"spaceId": "abc"}"#).unwrap();
        assert!(!only_space.has_credentials());

        let only_token: CmsConfig = serde_json::from_str(r#"{"token": "t"}"#).unwrap();
        assert!(!only_token.has_credentials());
    }
}
