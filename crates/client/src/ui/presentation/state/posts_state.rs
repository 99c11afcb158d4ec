//! Post feed state and its one-time loader

use dioxus::prelude::*;
use regdesk_domain::{Post, PostFeed};

use crate::presentation::services::use_post_service;
use crate::use_platform;

#[derive(Clone, Copy)]
pub struct PostsState {
    pub feed: Signal<PostFeed>,
}

impl PostsState {
    /// Create a new PostsState that is still loading
    pub fn new() -> Self {
        Self {
            feed: Signal::new(PostFeed::new()),
        }
    }

    /// Record the retrieval outcome; see `PostFeed::settle`
    pub fn settle<E>(&mut self, result: Result<Vec<Post>, E>) -> Result<usize, E> {
        self.feed.write().settle(result)
    }
}

impl Default for PostsState {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the PostsState from context
pub fn use_posts_state() -> PostsState {
    use_context::<PostsState>()
}

/// Fetch the post feed once, when the calling component first mounts.
///
/// The task is scoped to the calling component, so if it unmounts before the
/// request finishes the task is dropped and the feed is never written.
pub fn use_posts_loader() {
    let service = use_post_service();
    let platform = use_platform();
    let mut posts = use_posts_state();

    use_hook(move || {
        spawn(async move {
            platform.log_debug("Fetching posts");
            let result = service.fetch_latest().await;
            match posts.settle(result) {
                Ok(count) => platform.log_info(&format!("Fetched {} posts", count)),
                // Failures leave the list empty; the feed still stops loading.
                Err(e) => platform.log_error(&format!("Error fetching data: {}", e)),
            }
        });
    });
}
