//! Regdesk - composition root binary.

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use regdesk_app::ports::outbound::{PlatformPort, RawApiPort};

fn main() {
    #[cfg(not(target_arch = "wasm32"))]
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| regdesk_client::DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting Regdesk");

    // Config
    #[cfg(not(target_arch = "wasm32"))]
    let config = regdesk_app::ClientConfig::from_env();
    #[cfg(target_arch = "wasm32")]
    let config = regdesk_app::ClientConfig::default();

    tracing::debug!(posts_url = %config.posts_url, "Resolved client config");

    // Platform
    let platform = regdesk_app::infrastructure::platform::create_platform();
    let platform: std::sync::Arc<dyn PlatformPort> = std::sync::Arc::new(platform);

    // HTTP
    let raw_api: std::sync::Arc<dyn RawApiPort> =
        std::sync::Arc::new(regdesk_app::infrastructure::http_client::ApiAdapter::new());

    // Launch Dioxus
    #[allow(unused_mut)]
    let mut builder = dioxus::LaunchBuilder::new();

    #[cfg(not(target_arch = "wasm32"))]
    {
        let window = dioxus_desktop::WindowBuilder::new().with_title("Regdesk");
        let cfg = dioxus_desktop::Config::new().with_window(window);
        builder = builder.with_cfg(cfg);
    }

    builder
        .with_context(platform)
        .with_context(regdesk_client::presentation::Services::new(raw_api, config))
        .launch(regdesk_client::ui::app);
}
