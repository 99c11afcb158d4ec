//! Post Service - retrieval of the post feed
//!
//! Wraps the raw HTTP port with the configured endpoint and turns the JSON
//! body into domain `Post`s.

use std::sync::Arc;

use regdesk_domain::Post;

use crate::config::ClientConfig;
use crate::ports::outbound::{ApiError, RawApiPort};

pub struct PostService {
    api: Arc<dyn RawApiPort>,
    config: ClientConfig,
}

impl PostService {
    pub fn new(api: Arc<dyn RawApiPort>, config: ClientConfig) -> Self {
        Self { api, config }
    }

    /// Fetch the latest posts.
    ///
    /// Asks the server for `post_limit` posts and never returns more than
    /// that, even if the server ignores the limit.
    pub async fn fetch_latest(&self) -> Result<Vec<Post>, ApiError> {
        let url = self.config.posts_request_url()?;
        let value = self.api.get_json(url.as_str()).await?;

        let mut posts: Vec<Post> =
            serde_json::from_value(value).map_err(|e| ApiError::ParseError(e.to_string()))?;
        posts.truncate(self.config.post_limit);
        Ok(posts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::outbound::MockRawApiPort;
    use serde_json::json;

    fn posts_json(count: u64) -> serde_json::Value {
        let posts: Vec<_> = (1..=count)
            .map(|id| {
                json!({
                    "userId": 1,
                    "id": id,
                    "title": format!("title {id}"),
                    "body": format!("body {id}"),
                })
            })
            .collect();
        json!(posts)
    }

    fn service_with(api: MockRawApiPort) -> PostService {
        PostService::new(Arc::new(api), ClientConfig::default())
    }

    #[tokio::test]
    async fn requests_limited_posts_from_configured_endpoint() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .withf(|url| url == "https://jsonplaceholder.typicode.com/posts?_limit=5")
            .times(1)
            .returning(|_| Ok(posts_json(5)));

        let posts = service_with(api).fetch_latest().await.unwrap();

        assert_eq!(posts.len(), 5);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "title 1");
        assert_eq!(posts[4].body, "body 5");
    }

    #[tokio::test]
    async fn fewer_posts_than_limit_are_returned_as_is() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json().returning(|_| Ok(posts_json(2)));

        let posts = service_with(api).fetch_latest().await.unwrap();

        assert_eq!(posts.len(), 2);
    }

    #[tokio::test]
    async fn server_ignoring_limit_is_truncated() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json().returning(|_| Ok(posts_json(100)));

        let posts = service_with(api).fetch_latest().await.unwrap();

        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[tokio::test]
    async fn transport_errors_propagate() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .returning(|_| Err(ApiError::RequestFailed("dns error".to_string())));

        let result = service_with(api).fetch_latest().await;

        assert_eq!(
            result,
            Err(ApiError::RequestFailed("dns error".to_string()))
        );
    }

    #[tokio::test]
    async fn non_array_body_is_a_parse_error() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json()
            .returning(|_| Ok(json!({ "error": "rate limited" })));

        let result = service_with(api).fetch_latest().await;

        assert!(matches!(result, Err(ApiError::ParseError(_))));
    }

    #[tokio::test]
    async fn invalid_endpoint_fails_before_any_request() {
        let mut api = MockRawApiPort::new();
        api.expect_get_json().times(0);
        let config = ClientConfig {
            posts_url: "::not-a-url::".to_string(),
            ..Default::default()
        };

        let result = PostService::new(Arc::new(api), config).fetch_latest().await;

        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
