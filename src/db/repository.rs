use std::sync::Arc;

use async_trait::async_trait;

use crate::db::data::BlogData;
use crate::error::AppError;
use crate::models::category::Category;
use crate::models::post::PostRecord;

/// Read-only access to blog content.
///
/// This trait allows mocking the data layer in tests.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// All posts, in data-file order.
    async fn list_posts(&self) -> Result<Vec<PostRecord>, AppError>;

    /// Find a post by its slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, AppError>;

    /// All categories, in data-file order.
    async fn list_categories(&self) -> Result<Vec<Category>, AppError>;
}

/// In-memory repository over a validated [`BlogData`] set.
#[derive(Clone)]
pub struct StaticBlogRepository {
    data: Arc<BlogData>,
}

impl StaticBlogRepository {
    pub fn new(data: BlogData) -> Self {
        Self {
            data: Arc::new(data),
        }
    }

    pub fn data(&self) -> &BlogData {
        &self.data
    }
}

#[async_trait]
impl BlogRepository for StaticBlogRepository {
    async fn list_posts(&self) -> Result<Vec<PostRecord>, AppError> {
        Ok(self.data.posts.clone())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, AppError> {
        Ok(self.data.posts.iter().find(|p| p.slug == slug).cloned())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        Ok(self.data.categories.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn finds_posts_by_exact_slug() {
        let repo = StaticBlogRepository::new(BlogData::embedded().unwrap());

        let post = repo.find_by_slug("a-week-in-lisbon").await.unwrap();
        assert_eq!(post.map(|p| p.title), Some("A Week in Lisbon".to_string()));

        assert!(repo.find_by_slug("A-WEEK-IN-LISBON").await.unwrap().is_none());
        assert!(repo.find_by_slug("").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn lists_keep_file_order() {
        let repo = StaticBlogRepository::new(BlogData::embedded().unwrap());
        let posts = repo.list_posts().await.unwrap();
        assert_eq!(posts.first().map(|p| p.id), Some(1));
        assert_eq!(posts.len(), repo.data().posts.len());

        let categories = repo.list_categories().await.unwrap();
        assert_eq!(categories[0].slug, "travel");
    }
}
