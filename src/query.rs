//! Post filtering and pagination.
//!
//! Query parameters arrive as loose strings and are coerced rather than
//! rejected: anything that does not parse falls back to its default.

use serde::{Deserialize, Serialize};

use crate::models::collection::{Collection, PageMeta};
use crate::models::post::PostRecord;

/// Query string of `GET /api/posts`, before coercion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawPostQuery {
    pub query: Option<String>,
    pub category: Option<String>,
    pub page: Option<String>,
    pub per_page: Option<String>,
}

impl RawPostQuery {
    /// Build from decoded query-string pairs.
    ///
    /// A key given more than once is treated as absent, so it falls back to
    /// its default like any other unusable value.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut raw = RawPostQuery::default();
        let mut repeated: Vec<String> = Vec::new();

        for (key, value) in pairs {
            let key = key.as_ref();
            let slot = match key {
                "query" => &mut raw.query,
                "category" => &mut raw.category,
                "page" => &mut raw.page,
                "per_page" => &mut raw.per_page,
                _ => continue,
            };
            if slot.is_some() {
                repeated.push(key.to_string());
            }
            *slot = Some(value.into());
        }

        for key in repeated {
            match key.as_str() {
                "query" => raw.query = None,
                "category" => raw.category = None,
                "page" => raw.page = None,
                "per_page" => raw.per_page = None,
                _ => {}
            }
        }

        raw
    }
}

/// A validated post query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostQuery {
    /// Title substring, already lowercased.
    pub query: Option<String>,
    pub category: Option<u32>,
    pub page: u32,
    /// `None` means "everything on one page".
    pub per_page: Option<u32>,
}

impl PostQuery {
    pub fn new(query: Option<String>, category: Option<u32>, page: u32, per_page: Option<u32>) -> Self {
        Self {
            query: query
                .map(|q| q.to_lowercase())
                .filter(|q| !q.is_empty()),
            category,
            page: page.max(1),
            per_page: per_page.filter(|&n| n > 0),
        }
    }

    fn matches(&self, post: &PostRecord) -> bool {
        if let Some(category) = self.category {
            if !post.has_category(category) {
                return false;
            }
        }
        match &self.query {
            Some(needle) => post.title_contains(needle),
            None => true,
        }
    }

    /// Filter `posts` and cut out the requested page.
    ///
    /// Without an explicit page size the whole unfiltered set fits on one
    /// page, so `per_page` defaults to `posts.len()`.
    pub fn apply<'a>(&self, posts: &'a [PostRecord]) -> Collection<&'a PostRecord> {
        let default_per_page = u32::try_from(posts.len()).unwrap_or(u32::MAX);
        let per_page = self.per_page.unwrap_or(default_per_page);
        let matching: Vec<&PostRecord> = posts.iter().filter(|p| self.matches(p)).collect();
        paginate(matching, self.page, per_page)
    }
}

impl From<RawPostQuery> for PostQuery {
    fn from(raw: RawPostQuery) -> Self {
        PostQuery::new(
            raw.query,
            parse_number(raw.category.as_deref()),
            parse_number(raw.page.as_deref()).unwrap_or(1),
            parse_number(raw.per_page.as_deref()),
        )
    }
}

fn parse_number(value: Option<&str>) -> Option<u32> {
    value.and_then(|v| v.trim().parse::<u32>().ok())
}

/// Slice `items` into page `page` of size `per_page`.
///
/// `from`/`to` are 1-based and inclusive. A page past the end, or an empty
/// input, yields no items and reports `from = to = 0`. A `per_page` of 0
/// yields an empty page with `last_page = 0`.
pub fn paginate<T>(items: Vec<T>, page: u32, per_page: u32) -> Collection<T> {
    let page = page.max(1);
    let total = u32::try_from(items.len()).unwrap_or(u32::MAX);

    let last_page = if per_page == 0 {
        0
    } else {
        total.div_ceil(per_page)
    };

    let start = u64::from(page - 1) * u64::from(per_page);
    let end = (u64::from(page) * u64::from(per_page)).min(u64::from(total));

    let (from, to, data) = if start < end {
        let data: Vec<T> = items
            .into_iter()
            .skip(start as usize)
            .take((end - start) as usize)
            .collect();
        ((start + 1) as u32, end as u32, data)
    } else {
        (0, 0, Vec::new())
    };

    Collection {
        data,
        meta: PageMeta {
            current_page: page,
            last_page,
            per_page,
            from,
            to,
            total,
        },
    }
}
