use leptos::prelude::*;

use crate::components::post_card::PostCard;
use crate::models::category::Category;
use crate::models::collection::Collection;
use crate::models::post::Post;

#[server(prefix = "/rpc")]
pub async fn list_posts(
    query: String,
    category: Option<u32>,
    page: u32,
    per_page: u32,
) -> Result<Collection<Post>, ServerFnError> {
    use crate::query::PostQuery;
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    let query = PostQuery::new(Some(query), category, page, Some(per_page));
    let posts = crate::api::posts::process_list_posts(state.blog_repo.as_ref(), &query)
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    state.simulate_latency().await;
    Ok(posts)
}

#[server(prefix = "/rpc")]
pub async fn list_categories() -> Result<Vec<Category>, ServerFnError> {
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    crate::api::categories::process_list_categories(state.blog_repo.as_ref())
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))
}

/// Grid of post cards. Dimmed while a new page is loading.
#[component]
pub fn PostGrid(
    posts: Vec<Post>,
    #[prop(into)] busy: Signal<bool>,
    on_category: Callback<u32>,
) -> impl IntoView {
    if posts.is_empty() {
        return view! { <p class="empty">"No posts found."</p> }.into_any();
    }

    view! {
        <div class="post-grid" class:loading=move || busy.get()>
            {posts
                .into_iter()
                .map(|post| view! { <PostCard post=post on_category=on_category/> })
                .collect_view()}
        </div>
    }
    .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::db::data::BlogData;
    use crate::state::provide_test_state;

    #[tokio::test]
    async fn empty_query_and_page_zero_give_first_page() {
        let _owner = provide_test_state();
        let total = BlogData::embedded().unwrap().posts.len() as u32;

        let page = list_posts(String::new(), None, 0, 6).await.unwrap();

        assert_eq!(page.meta.current_page, 1);
        assert_eq!(page.meta.total, total);
        assert_eq!(page.data.len(), 6);
        assert_eq!((page.meta.from, page.meta.to), (1, 6));
    }

    #[tokio::test]
    async fn query_and_category_are_applied() {
        let _owner = provide_test_state();
        let categories = list_categories().await.unwrap();
        let category = categories[0].id;

        let page = list_posts(String::new(), Some(category), 1, 100).await.unwrap();
        assert!(page.meta.total > 0);
        assert!(page
            .data
            .iter()
            .all(|p| p.categories.iter().any(|c| c.id == category)));

        let page = list_posts("LISBON".to_string(), None, 1, 6).await.unwrap();
        assert!(page
            .data
            .iter()
            .all(|p| p.title.to_lowercase().contains("lisbon")));
        assert!(page.meta.total > 0);
    }
}
