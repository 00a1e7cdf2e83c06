use leptos::prelude::*;

use crate::models::post::Post;

#[component]
pub fn PostCard(post: Post, on_category: Callback<u32>) -> impl IntoView {
    let Post {
        slug,
        title,
        excerpt,
        image_url,
        categories,
        ..
    } = post;
    let href = format!("/post/{}", slug);

    view! {
        <article class="post-card">
            <a href=href.clone()>
                <img src=image_url alt=title.clone() loading="lazy" class="post-card-image"/>
            </a>
            <a href=href class="post-card-title">{title}</a>
            <p class="post-card-excerpt">{excerpt}</p>
            <div class="post-card-categories">
                {categories
                    .into_iter()
                    .map(|category| {
                        let id = category.id;
                        view! {
                            <button type="button" class="chip" on:click=move |_| on_category.run(id)>
                                {category.name}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </article>
    }
}
