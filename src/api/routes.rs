use axum::http::Method;
use axum::routing::get;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::api::categories::list_categories_handler;
use crate::api::posts::{get_post_handler, list_posts_handler};
use crate::state::AppState;

/// REST routes, meant to be nested under `/api`.
///
/// `GET` is allowed from any origin so other front-ends can read the API.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/posts", get(list_posts_handler))
        .route("/posts/{slug}", get(get_post_handler))
        .route("/categories", get(list_categories_handler))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET]),
        )
}
