//! Client configuration
//!
//! Resolved once by the composition root and injected into services. The
//! mounted UI never reads configuration directly.

use url::Url;

use crate::ports::outbound::ApiError;

/// Posts endpoint used when nothing overrides it
pub const DEFAULT_POSTS_URL: &str = "https://jsonplaceholder.typicode.com/posts";

/// Number of posts requested from the API
pub const DEFAULT_POST_LIMIT: usize = 5;

/// How long the acknowledgment toast stays up
pub const DEFAULT_NOTICE_DISMISS_MS: u64 = 3000;

/// Environment variable overriding the posts endpoint (desktop only)
pub const POSTS_URL_ENV: &str = "REGDESK_POSTS_URL";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub posts_url: String,
    pub post_limit: usize,
    pub notice_dismiss_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            posts_url: DEFAULT_POSTS_URL.to_string(),
            post_limit: DEFAULT_POST_LIMIT,
            notice_dismiss_ms: DEFAULT_NOTICE_DISMISS_MS,
        }
    }
}

impl ClientConfig {
    /// Build from the process environment, falling back to defaults.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(url) = lookup(POSTS_URL_ENV)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
        {
            config.posts_url = url;
        }
        config
    }

    /// Full request URL including the `_limit` query parameter.
    ///
    /// Existing query parameters on the configured endpoint are kept.
    pub fn posts_request_url(&self) -> Result<Url, ApiError> {
        let mut url =
            Url::parse(&self.posts_url).map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("_limit", &self.post_limit.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_jsonplaceholder() {
        let config = ClientConfig::default();
        assert_eq!(config.posts_url, DEFAULT_POSTS_URL);
        assert_eq!(config.post_limit, 5);
    }

    #[test]
    fn request_url_carries_limit() {
        let url = ClientConfig::default().posts_request_url().unwrap();
        assert_eq!(
            url.as_str(),
            "https://jsonplaceholder.typicode.com/posts?_limit=5"
        );
    }

    #[test]
    fn request_url_keeps_existing_query() {
        let config = ClientConfig {
            posts_url: "http://localhost:8080/posts?userId=2".to_string(),
            ..Default::default()
        };
        let url = config.posts_request_url().unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/posts?userId=2&_limit=5");
    }

    #[test]
    fn invalid_url_is_reported() {
        let config = ClientConfig {
            posts_url: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.posts_request_url(),
            Err(ApiError::InvalidUrl(_))
        ));
    }

    #[test]
    fn lookup_overrides_posts_url() {
        let config = ClientConfig::from_lookup(|key| {
            (key == POSTS_URL_ENV).then(|| " http://localhost:3000/posts ".to_string())
        });
        assert_eq!(config.posts_url, "http://localhost:3000/posts");
        assert_eq!(config.post_limit, DEFAULT_POST_LIMIT);
    }

    #[test]
    fn blank_override_is_ignored() {
        let config = ClientConfig::from_lookup(|_| Some("   ".to_string()));
        assert_eq!(config, ClientConfig::default());
    }
}
