use crate::db::repository::BlogRepository;
use crate::error::AppError;
use crate::models::category::Category;

pub async fn process_list_categories(repo: &dyn BlogRepository) -> Result<Vec<Category>, AppError> {
    repo.list_categories().await
}

/// Axum handler for `GET /api/categories`.
pub async fn list_categories_handler(
    axum::extract::State(state): axum::extract::State<crate::state::AppState>,
) -> Result<axum::Json<Vec<Category>>, AppError> {
    let categories = process_list_categories(state.blog_repo.as_ref()).await?;
    Ok(axum::Json(categories))
}
