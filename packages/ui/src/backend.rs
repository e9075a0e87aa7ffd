//! Back-end client shared through context.

use api::{ApiConfig, HttpBackend};
use dioxus::prelude::*;

/// The client every view sends its requests through.
pub fn use_backend() -> HttpBackend {
    use_context::<HttpBackend>()
}

/// Provider component that builds the HTTP client from the environment.
#[component]
pub fn BackendProvider(children: Element) -> Element {
    use_context_provider(|| {
        let config = ApiConfig::from_env();
        tracing::info!(base_url = %config.base_url, "using users back-end");
        HttpBackend::new(config)
    });

    rsx! {
        {children}
    }
}
