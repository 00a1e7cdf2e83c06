use crate::db::repository::BlogRepository;
use crate::error::AppError;
use crate::models::collection::Collection;
use crate::models::post::Post;
use crate::query::PostQuery;

/// Core listing logic, shared by the REST handler and the page server
/// functions.
///
/// Filters and paginates the post set, then resolves category ids of the
/// posts on the requested page.
pub async fn process_list_posts(
    repo: &dyn BlogRepository,
    query: &PostQuery,
) -> Result<Collection<Post>, AppError> {
    let posts = repo.list_posts().await?;
    let categories = repo.list_categories().await?;

    let page = query.apply(&posts).map(|post| post.resolve(&categories));

    tracing::debug!(
        query = ?query.query,
        category = ?query.category,
        page = page.meta.current_page,
        total = page.meta.total,
        "listed posts"
    );

    Ok(page)
}

/// Core lookup logic: the post with `slug`, categories resolved.
pub async fn process_get_post(repo: &dyn BlogRepository, slug: &str) -> Result<Post, AppError> {
    let post = repo
        .find_by_slug(slug)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Post '{}' not found", slug)))?;
    let categories = repo.list_categories().await?;
    Ok(post.resolve(&categories))
}

/// Axum handler for `GET /api/posts`.
///
/// Parameters are taken as raw pairs so that nothing in the query string can
/// be rejected. Waits for the configured response delay before answering.
pub async fn list_posts_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Query(pairs): axum::extract::Query<Vec<(String, String)>>,
) -> Result<axum::Json<Collection<Post>>, AppError> {
    let query = PostQuery::from(crate::query::RawPostQuery::from_pairs(pairs));
    let page = process_list_posts(state.blog_repo.as_ref(), &query).await?;
    state.simulate_latency().await;
    Ok(axum::Json(page))
}

/// Axum handler for `GET /api/posts/{slug}`.
pub async fn get_post_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
    axum::extract::Path(slug): axum::extract::Path<String>,
) -> Result<axum::Json<Post>, AppError> {
    let post = process_get_post(state.blog_repo.as_ref(), &slug).await?;
    Ok(axum::Json(post))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::MockBlogRepository;
    use crate::models::category::Category;
    use crate::models::post::PostRecord;

    fn categories() -> Vec<Category> {
        vec![
            Category { id: 1, name: "Travel".into(), slug: "travel".into() },
            Category { id: 2, name: "Food".into(), slug: "food".into() },
        ]
    }

    fn posts() -> Vec<PostRecord> {
        (1..=5)
            .map(|id| PostRecord {
                id,
                slug: format!("post-{id}"),
                title: format!("Post number {id}"),
                excerpt: String::new(),
                image_url: String::new(),
                categories: if id % 2 == 0 { vec![2] } else { vec![1, 2] },
            })
            .collect()
    }

    fn mock_repo() -> MockBlogRepository {
        let mut repo = MockBlogRepository::new();
        repo.expect_list_posts().returning(|| Ok(posts()));
        repo.expect_list_categories().returning(|| Ok(categories()));
        repo
    }

    #[tokio::test]
    async fn list_resolves_categories_on_the_page() {
        let repo = mock_repo();
        let query = PostQuery::new(None, Some(1), 1, Some(2));

        let page = process_list_posts(&repo, &query).await.unwrap();

        assert_eq!(page.meta.total, 3);
        assert_eq!(page.meta.last_page, 2);
        assert_eq!(page.data.len(), 2);
        let names: Vec<&str> = page.data[0].categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Travel", "Food"]);
    }

    #[tokio::test]
    async fn list_propagates_repository_errors() {
        let mut repo = MockBlogRepository::new();
        repo.expect_list_posts()
            .returning(|| Err(AppError::Data("broken".into())));
        repo.expect_list_categories().returning(|| Ok(categories()));

        let result = process_list_posts(&repo, &PostQuery::default()).await;
        assert!(matches!(result, Err(AppError::Data(_))));
    }

    #[tokio::test]
    async fn get_unknown_slug_is_not_found() {
        let mut repo = MockBlogRepository::new();
        repo.expect_find_by_slug().times(1).returning(|_| Ok(None));

        let result = process_get_post(&repo, "missing").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_resolves_categories() {
        let mut repo = mock_repo();
        repo.expect_find_by_slug()
            .returning(|slug| Ok(posts().into_iter().find(|p| p.slug == slug)));

        let post = process_get_post(&repo, "post-2").await.unwrap();
        assert_eq!(post.id, 2);
        assert_eq!(post.categories, vec![categories()[1].clone()]);
    }
}
