use leptos::prelude::*;
use leptos_meta::Title;

use crate::models::post::Post;

/// Fetch one post for the detail page. `None` means the slug is unknown.
#[server(prefix = "/rpc")]
pub async fn get_post(slug: String) -> Result<Option<Post>, ServerFnError> {
    use crate::error::AppError;
    use crate::state::AppState;

    let state = use_context::<AppState>()
        .ok_or_else(|| ServerFnError::new("AppState not found in context"))?;

    match crate::api::posts::process_get_post(state.blog_repo.as_ref(), &slug).await {
        Ok(post) => Ok(Some(post)),
        Err(AppError::NotFound(_)) => Ok(None),
        Err(e) => Err(ServerFnError::new(e.to_string())),
    }
}

#[component]
pub fn PostView(post: Post) -> impl IntoView {
    let Post {
        slug,
        title,
        excerpt,
        image_url,
        categories,
        ..
    } = post;

    view! {
        <Title text=title.clone()/>
        <nav class="breadcrumb">
            <a href="/">"Home"</a>
            <span class="separator">"›"</span>
            <span>"Posts"</span>
            <span class="separator">"›"</span>
            <a href=format!("/post/{}", slug) class="current">{title.clone()}</a>
        </nav>
        <article class="post-detail">
            <img src=image_url alt=title.clone() loading="lazy" class="post-detail-image"/>
            <h1>{title}</h1>
            <p>{excerpt}</p>
            <div class="post-detail-categories">
                {categories
                    .into_iter()
                    .map(|category| view! { <span class="badge">{category.name}</span> })
                    .collect_view()}
            </div>
        </article>
    }
}
