use std::sync::Arc;
use std::time::Duration;

use leptos::prelude::LeptosOptions;

use crate::db::repository::BlogRepository;

/// Shared server state, handed to axum handlers and provided as leptos
/// context to server functions.
#[derive(Clone)]
pub struct AppState {
    pub blog_repo: Arc<dyn BlogRepository>,
    pub response_delay: Duration,
    pub leptos_options: LeptosOptions,
}

impl axum::extract::FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.clone()
    }
}

impl AppState {
    /// Sleep for the configured artificial latency, if any.
    pub async fn simulate_latency(&self) {
        if !self.response_delay.is_zero() {
            tokio::time::sleep(self.response_delay).await;
        }
    }
}

/// Set a fresh reactive owner and provide an [`AppState`] over the embedded
/// data, so server functions can be awaited directly in tests.
#[cfg(test)]
pub(crate) fn provide_test_state() -> leptos::prelude::Owner {
    use leptos::prelude::{provide_context, Owner};

    use crate::db::data::BlogData;
    use crate::db::repository::StaticBlogRepository;

    let owner = Owner::new();
    owner.set();
    let data = BlogData::embedded().expect("Embedded blog data should be valid");
    provide_context(AppState {
        blog_repo: Arc::new(StaticBlogRepository::new(data)),
        response_delay: Duration::ZERO,
        leptos_options: LeptosOptions::builder().output_name("blogfront").build(),
    });
    owner
}
