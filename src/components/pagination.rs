use leptos::prelude::*;

use crate::models::collection::PageMeta;

/// "Showing X to Y of Z results" plus Previous/Next buttons.
#[component]
pub fn Pagination(
    meta: PageMeta,
    #[prop(into)] busy: Signal<bool>,
    on_page: Callback<u32>,
) -> impl IntoView {
    let current = meta.current_page;
    let has_previous = meta.has_previous();
    let has_next = meta.has_next();

    view! {
        <nav class="pagination">
            <p class="pagination-summary">
                "Showing " <span>{meta.from}</span>
                " to " <span>{meta.to}</span>
                " of " <span>{meta.total}</span>
                " results"
            </p>
            <div class="pagination-buttons">
                <button
                    type="button"
                    disabled=move || busy.get() || !has_previous
                    on:click=move |_| on_page.run(current.saturating_sub(1).max(1))
                >
                    "Previous"
                </button>
                <button
                    type="button"
                    disabled=move || busy.get() || !has_next
                    on:click=move |_| on_page.run(current + 1)
                >
                    "Next"
                </button>
            </div>
        </nav>
    }
}
