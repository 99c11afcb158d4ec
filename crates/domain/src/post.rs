//! Posts shown in the feed section and the one-shot feed state

use serde::{Deserialize, Serialize};

/// A post record as returned by the posts API.
///
/// Fields beyond `id`, `title` and `body` are ignored on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub body: String,
}

/// Feed state for the single initial retrieval.
///
/// Starts loading with no posts. The first `settle` ends loading for good;
/// later calls do not change anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostFeed {
    posts: Vec<Post>,
    loading: bool,
}

impl PostFeed {
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            loading: true,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Posts in retrieval order; empty before settling or after a failure
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Record the outcome of the retrieval.
    ///
    /// Success stores the posts, failure keeps the list empty; either way the
    /// feed stops loading. The result is handed back (with the post count on
    /// success) so the caller can log it.
    pub fn settle<E>(&mut self, result: Result<Vec<Post>, E>) -> Result<usize, E> {
        if !self.loading {
            return result.map(|posts| posts.len());
        }
        self.loading = false;

        let posts = result?;
        self.posts = posts;
        Ok(self.posts.len())
    }
}

impl Default for PostFeed {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(id: u64) -> Post {
        Post {
            id,
            title: format!("title {id}"),
            body: format!("body {id}"),
        }
    }

    #[test]
    fn new_feed_is_loading_and_empty() {
        let feed = PostFeed::new();
        assert!(feed.is_loading());
        assert!(feed.posts().is_empty());
    }

    #[test]
    fn success_stores_posts_in_order() {
        let mut feed = PostFeed::new();

        let count = feed.settle::<String>(Ok(vec![post(3), post(1), post(2)]));

        assert_eq!(count, Ok(3));
        assert!(!feed.is_loading());
        let ids: Vec<u64> = feed.posts().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn failure_clears_loading_and_stays_empty() {
        let mut feed = PostFeed::new();

        let result = feed.settle(Err("connection refused"));

        assert_eq!(result, Err("connection refused"));
        assert!(!feed.is_loading());
        assert!(feed.posts().is_empty());
    }

    #[test]
    fn only_the_first_settle_counts() {
        let mut feed = PostFeed::new();
        feed.settle::<String>(Ok(vec![post(1)])).unwrap();

        let _ = feed.settle::<String>(Ok(vec![post(7), post(8)]));
        let _ = feed.settle(Err("late failure".to_string()));

        assert!(!feed.is_loading());
        assert_eq!(feed.posts(), &[post(1)]);
    }

    #[test]
    fn post_ignores_extra_fields() {
        let json = r#"{"userId": 1, "id": 4, "title": "eum et est", "body": "ullam et saepe"}"#;
        let parsed: Post = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed,
            Post {
                id: 4,
                title: "eum et est".to_string(),
                body: "ullam et saepe".to_string(),
            }
        );
    }

    #[test]
    fn post_requires_id() {
        let json = r#"{"title": "t", "body": "b"}"#;
        assert!(serde_json::from_str::<Post>(json).is_err());
    }
}
