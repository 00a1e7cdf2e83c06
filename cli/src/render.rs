use crate::models::{Category, Collection, PageMeta, Post};

pub fn summary_line(meta: &PageMeta) -> String {
    format!(
        "Showing {} to {} of {} results (page {} of {})",
        meta.from, meta.to, meta.total, meta.current_page, meta.last_page
    )
}

fn category_names(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| c.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub fn render_posts(page: &Collection<Post>) -> String {
    let mut out = String::new();
    for post in &page.data {
        out.push_str(&format!(
            "{:<32} {}  [{}]\n",
            post.slug,
            post.title,
            category_names(&post.categories)
        ));
    }
    if page.data.is_empty() {
        out.push_str("No posts found.\n");
    }
    out.push_str(&summary_line(&page.meta));
    out.push('\n');
    out
}

pub fn render_post(post: &Post) -> String {
    format!(
        "{}\n{}\n\n{}\n\nImage:      {}\nCategories: {}\n",
        post.title,
        "=".repeat(post.title.chars().count()),
        post.excerpt,
        post.image_url,
        category_names(&post.categories)
    )
}

pub fn render_categories(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|c| format!("{:>4}  {:<16} {}\n", c.id, c.name, c.slug))
        .collect()
}
