use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::components::*;
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::components::pagination::Pagination;
use crate::components::post_list::{list_categories, list_posts, PostGrid};
use crate::components::post_view::{get_post, PostView};
use crate::components::search_form::SearchForm;

/// Posts per page on the home page.
pub const PAGE_SIZE: u32 = 6;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="blogfront" href="/style.css"/>
        <Title text="Blogfront"/>

        <Router>
            <main class="container">
                <Routes fallback=|| view! { "Page not found." }.into_view()>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/post/:slug") view=PostPage/>
                </Routes>
            </main>
        </Router>
    }
}

/// The search that produced the current page of posts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SearchParams {
    query: String,
    category: Option<u32>,
    page: u32,
}

#[component]
fn HomePage() -> impl IntoView {
    let draft_query = RwSignal::new(String::new());
    let draft_category = RwSignal::new(None::<u32>);
    let search = RwSignal::new(SearchParams {
        query: String::new(),
        category: None,
        page: 1,
    });
    let (busy, set_busy) = signal(false);

    let posts = Resource::new(
        move || search.get(),
        |params| list_posts(params.query, params.category, params.page, PAGE_SIZE),
    );
    let categories = Resource::new(|| (), |_| list_categories());

    let run_search = Callback::new(move |page: u32| {
        search.set(SearchParams {
            query: draft_query.get_untracked(),
            category: draft_category.get_untracked(),
            page,
        });
    });
    let pick_category = Callback::new(move |category_id: u32| {
        draft_category.set(Some(category_id));
        run_search.run(1);
    });

    view! {
        <header class="hero">
            <h1>"Welcome to my blog!"</h1>
            <h2>"Notes on travel, food, technology and everything in between."</h2>
            <Transition fallback=|| ()>
                {move || categories.get().map(|res| {
                    let categories = res.unwrap_or_default();
                    view! {
                        <SearchForm
                            query=draft_query
                            category=draft_category
                            categories=categories
                            busy=busy
                            on_search=run_search
                        />
                    }
                })}
            </Transition>
        </header>

        <section class="posts">
            <Transition
                fallback=|| view! { <p class="loading">"Loading posts..."</p> }
                set_pending=set_busy
            >
                {move || posts.get().map(|res| match res {
                    Ok(page) => {
                        let meta = page.meta;
                        view! {
                            <PostGrid posts=page.data busy=busy on_category=pick_category/>
                            <Pagination meta=meta busy=busy on_page=run_search/>
                        }
                        .into_any()
                    }
                    Err(e) => view! { <p class="error">"Error loading posts: " {e.to_string()}</p> }
                        .into_any(),
                })}
            </Transition>
        </section>
    }
}

#[component]
fn PostPage() -> impl IntoView {
    let params = use_params_map();
    let slug = Memo::new(move |_| params.get().get("slug").unwrap_or_default());

    let post = Resource::new(move || slug.get(), |s| async move { get_post(s).await });

    view! {
        <Suspense fallback=|| view! { <p>"Loading..."</p> }>
            {move || post.get().map(|res| match res {
                Ok(Some(post)) => view! { <PostView post=post/> }.into_any(),
                Ok(None) => view! {
                    <Title text="Post not found"/>
                    <p class="not-found">"Post not found." " " <a href="/">"Back to the home page"</a></p>
                }
                .into_any(),
                Err(e) => view! { <p class="error">"Error: " {e.to_string()}</p> }.into_any(),
            })}
        </Suspense>
    }
}
