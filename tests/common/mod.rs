use std::sync::Arc;
use std::time::Duration;

use axum::Router;

use blogfront::api::routes::api_router;
use blogfront::db::data::BlogData;
use blogfront::db::repository::{BlogRepository, StaticBlogRepository};
use blogfront::state::AppState;

/// Holds the Axum router and the data set it serves for integration tests.
pub struct TestEnv {
    pub router: Router,
    pub repo: Arc<dyn BlogRepository>,
    pub data: BlogData,
}

impl TestEnv {
    /// Build an API router over the embedded blog data.
    pub fn start() -> Self {
        Self::with_data(BlogData::embedded().expect("Embedded blog data should be valid"))
    }

    /// Build an API router over a custom data set.
    pub fn with_data(data: BlogData) -> Self {
        Self::build(data, Duration::ZERO)
    }

    /// Build an API router that delays post listings.
    pub fn with_delay(delay: Duration) -> Self {
        let data = BlogData::embedded().expect("Embedded blog data should be valid");
        Self::build(data, delay)
    }

    fn build(data: BlogData, response_delay: Duration) -> Self {
        let repo: Arc<dyn BlogRepository> = Arc::new(StaticBlogRepository::new(data.clone()));

        let leptos_options = leptos::prelude::LeptosOptions::builder()
            .output_name("blogfront")
            .build();

        let app_state = AppState {
            blog_repo: repo.clone(),
            response_delay,
            leptos_options,
        };

        // --- Build Router (API routes only, no Leptos SSR) ---
        let router = Router::new()
            .nest("/api", api_router())
            .with_state(app_state);

        Self { router, repo, data }
    }

    /// Build an `axum_test::TestServer` from this environment's router.
    pub fn server(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .expect_success_by_default()
            .build(self.router.clone())
    }

    /// Build a `TestServer` that does NOT expect success by default (for error tests).
    pub fn server_permissive(&self) -> axum_test::TestServer {
        axum_test::TestServer::builder()
            .build(self.router.clone())
    }

    /// Helper: fetch `/api/posts` with the given query parameters.
    pub async fn list_posts(
        &self,
        server: &axum_test::TestServer,
        params: &[(&str, &str)],
    ) -> serde_json::Value {
        let mut request = server.get("/api/posts");
        for (key, value) in params {
            request = request.add_query_param(key, value);
        }
        let response = request.await;
        response.assert_status_ok();
        response.json()
    }
}
