//! Fetched posts section

use dioxus::prelude::*;

use crate::presentation::components::common::Card;
use crate::presentation::services::use_client_config;
use crate::presentation::state::use_posts_state;

#[component]
pub fn PostsCard() -> Element {
    let limit = use_client_config().post_limit;
    let posts = use_posts_state();
    let feed = posts.feed.read().clone();

    rsx! {
        Card {
            title: "Fetched Posts",
            description: "Latest {limit} Posts from API",
            if feed.is_loading() {
                p { "Loading..." }
            } else {
                ul {
                    class: "list-disc pl-5",
                    for post in feed.posts() {
                        li {
                            key: "{post.id}",
                            class: "mb-2 text-gray-800",
                            strong { "{post.title}" }
                            ": {post.body}"
                        }
                    }
                }
            }
        }
    }
}
