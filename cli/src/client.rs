use anyhow::{bail, Context, Result};
use reqwest::StatusCode;

use crate::models::{Category, Collection, Post};

/// Filters for `GET /api/posts`. Unset fields are left out of the query string.
#[derive(Debug, Clone, Default)]
pub struct PostFilter {
    pub query: Option<String>,
    pub category: Option<u32>,
    pub page: Option<u32>,
    pub per_page: Option<u32>,
}

impl PostFilter {
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(query) = &self.query {
            pairs.push(("query", query.clone()));
        }
        if let Some(category) = self.category {
            pairs.push(("category", category.to_string()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page", per_page.to_string()));
        }
        pairs
    }
}

pub struct BlogClient {
    http: reqwest::Client,
    base_url: String,
}

impl BlogClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<reqwest::Response> {
        let url = self.endpoint(path);
        self.http
            .get(&url)
            .query(query)
            .send()
            .await
            .with_context(|| format!("GET {url} failed"))
    }

    pub async fn list_posts(&self, filter: &PostFilter) -> Result<serde_json::Value> {
        let response = self.get("posts", &filter.to_query_pairs()).await?;
        Self::json(response).await
    }

    /// `Ok(None)` when the server answers 404.
    pub async fn get_post(&self, slug: &str) -> Result<Option<serde_json::Value>> {
        let response = self.get(&format!("posts/{slug}"), &[]).await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Self::json(response).await.map(Some)
    }

    pub async fn list_categories(&self) -> Result<serde_json::Value> {
        let response = self.get("categories", &[]).await?;
        Self::json(response).await
    }

    async fn json(response: reqwest::Response) -> Result<serde_json::Value> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("server returned {status}: {body}");
        }
        response.json().await.context("invalid JSON in response")
    }
}

/// Typed views over the raw JSON, for the text renderer.
pub fn as_posts(value: serde_json::Value) -> Result<Collection<Post>> {
    serde_json::from_value(value).context("unexpected post collection shape")
}

pub fn as_post(value: serde_json::Value) -> Result<Post> {
    serde_json::from_value(value).context("unexpected post shape")
}

pub fn as_categories(value: serde_json::Value) -> Result<Vec<Category>> {
    serde_json::from_value(value).context("unexpected category list shape")
}
