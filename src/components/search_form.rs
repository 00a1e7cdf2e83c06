use leptos::prelude::*;

use crate::models::category::Category;

/// Text query, category select and submit button.
///
/// Editing the inputs only updates the draft signals; the search runs on
/// submit, always starting from page 1.
#[component]
pub fn SearchForm(
    query: RwSignal<String>,
    category: RwSignal<Option<u32>>,
    categories: Vec<Category>,
    #[prop(into)] busy: Signal<bool>,
    on_search: Callback<u32>,
) -> impl IntoView {
    view! {
        <form
            class="search-form"
            on:submit=move |ev| {
                ev.prevent_default();
                on_search.run(1);
            }
        >
            <input
                type="text"
                placeholder="Type something..."
                disabled=move || busy.get()
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <select
                disabled=move || busy.get()
                on:change=move |ev| category.set(event_target_value(&ev).parse::<u32>().ok())
            >
                <option value="" selected=move || category.get().is_none()>"Category"</option>
                {categories
                    .into_iter()
                    .map(|c| {
                        let id = c.id;
                        view! {
                            <option value=id.to_string() selected=move || category.get() == Some(id)>
                                {c.name}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
            <button type="submit" disabled=move || busy.get()>
                {move || if busy.get() { "Searching..." } else { "Search" }}
            </button>
        </form>
    }
}
