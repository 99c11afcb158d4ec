//! Service providers for the presentation layer
//!
//! Components reach application services through Dioxus context instead of
//! depending on infrastructure types.
use dioxus::prelude::*;
use std::sync::Arc;

use regdesk_app::application::services::PostService;
use regdesk_app::config::ClientConfig;
use regdesk_app::ports::outbound::RawApiPort;

/// All services wrapped for context provision
#[derive(Clone)]
pub struct Services {
    pub posts: Arc<PostService>,
    /// Resolved configuration, for the few UI timings it carries
    pub config: ClientConfig,
}

impl Services {
    pub fn new(raw_api: Arc<dyn RawApiPort>, config: ClientConfig) -> Self {
        Self {
            posts: Arc::new(PostService::new(raw_api, config.clone())),
            config,
        }
    }
}

/// Hook to access the PostService from context
pub fn use_post_service() -> Arc<PostService> {
    let services = use_context::<Services>();
    services.posts.clone()
}

/// Hook to access the resolved client configuration
pub fn use_client_config() -> ClientConfig {
    let services = use_context::<Services>();
    services.config.clone()
}
