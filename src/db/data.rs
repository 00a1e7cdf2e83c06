use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::category::Category;
use crate::models::post::PostRecord;

/// Blog content shipped with the binary.
pub const EMBEDDED_BLOG_JSON: &str = include_str!("../../data/blog.json");

/// The full static data set: every post and every category.
///
/// Loaded once at startup and never mutated afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogData {
    pub categories: Vec<Category>,
    pub posts: Vec<PostRecord>,
}

impl BlogData {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let data: BlogData = serde_json::from_str(json)?;
        data.validate()?;
        Ok(data)
    }

    /// The data set compiled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        Self::from_json(EMBEDDED_BLOG_JSON)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::Data(format!("failed to read {}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    /// Check the invariants the query handler relies on:
    /// unique post slugs, unique category ids, no dangling category references.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if !category_ids.insert(category.id) {
                return Err(AppError::Data(format!(
                    "duplicate category id {}",
                    category.id
                )));
            }
        }

        let mut slugs = HashSet::new();
        for post in &self.posts {
            if !slugs.insert(post.slug.as_str()) {
                return Err(AppError::Data(format!("duplicate post slug '{}'", post.slug)));
            }
            if let Some(missing) = post.categories.iter().find(|id| !category_ids.contains(*id)) {
                return Err(AppError::Data(format!(
                    "post '{}' references unknown category {missing}",
                    post.slug
                )));
            }
        }

        Ok(())
    }
}
