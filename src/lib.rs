pub mod app;
pub mod error;
pub mod query;
pub mod models {
    pub mod category;
    pub mod collection;
    pub mod post;
}
pub mod components {
    pub mod pagination;
    pub mod post_card;
    pub mod post_list;
    pub mod post_view;
    pub mod search_form;
}

#[cfg(feature = "ssr")]
pub mod config;
#[cfg(feature = "ssr")]
pub mod state;
#[cfg(feature = "ssr")]
pub mod db {
    pub mod data;
    pub mod repository;
}
#[cfg(feature = "ssr")]
pub mod api {
    pub mod categories;
    pub mod errors;
    pub mod posts;
    pub mod routes;
}

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(app::App);
}
