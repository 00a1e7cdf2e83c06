use serde::{Deserialize, Serialize};

use crate::models::category::Category;

/// A post exactly as it appears in the static data file.
///
/// Categories are referenced by id; use [`PostRecord::resolve`] to build the
/// API representation with embedded [`Category`] objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRecord {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub categories: Vec<u32>,
}

impl PostRecord {
    /// Whether this post is tagged with the given category id.
    pub fn has_category(&self, category_id: u32) -> bool {
        self.categories.contains(&category_id)
    }

    /// Case-insensitive substring match on the title.
    ///
    /// `needle` must already be lowercased.
    pub fn title_contains(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
    }

    /// Embed the referenced categories, keeping the order of `all_categories`.
    pub fn resolve(&self, all_categories: &[Category]) -> Post {
        Post {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            excerpt: self.excerpt.clone(),
            image_url: self.image_url.clone(),
            categories: all_categories
                .iter()
                .filter(|c| self.has_category(c.id))
                .cloned()
                .collect(),
        }
    }
}

/// A post with its categories resolved, as served by the API and rendered by
/// the pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u32,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: String,
    pub categories: Vec<Category>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories() -> Vec<Category> {
        vec![
            Category { id: 1, name: "Travel".into(), slug: "travel".into() },
            Category { id: 2, name: "Food".into(), slug: "food".into() },
            Category { id: 3, name: "Technology".into(), slug: "technology".into() },
        ]
    }

    fn record(categories: Vec<u32>) -> PostRecord {
        PostRecord {
            id: 7,
            slug: "street-food".into(),
            title: "Street Food in Bangkok".into(),
            excerpt: "Noodles.".into(),
            image_url: "https://example.com/a.jpg".into(),
            categories,
        }
    }

    #[test]
    fn resolve_keeps_category_set_order() {
        let post = record(vec![3, 1]).resolve(&categories());
        let ids: Vec<u32> = post.categories.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(post.slug, "street-food");
    }

    #[test]
    fn title_match_is_case_insensitive() {
        let post = record(vec![]);
        assert!(post.title_contains("bangkok"));
        assert!(post.title_contains("street food"));
        assert!(!post.title_contains("lisbon"));
    }

    #[test]
    fn post_serializes_with_camel_case_image_url() {
        let json = serde_json::to_value(record(vec![2]).resolve(&categories())).unwrap();
        assert_eq!(json["imageUrl"], "https://example.com/a.jpg");
        assert_eq!(json["categories"][0]["name"], "Food");
    }
}
