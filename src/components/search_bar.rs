//! Search Bar Component
//!
//! Free-text search over name and purchase date, a sort toggle, and a
//! control that collapses the panel.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn SearchBar() -> impl IntoView {
    let store = use_app_store();

    let minimized = move || store.search_minimized().get();
    let toggle_minimized = move |_| store.search_minimized().update(|m| *m = !*m);
    let toggle_sort = move |_| store.query().update(|q| q.sort = q.sort.toggle());
    let sort_label = move || format!("Sort: {}", store.query().read().sort.label());

    view! {
        <div class=move || if minimized() { "search-bar minimized" } else { "search-bar" }>
            <button class="search-toggle" on:click=toggle_minimized>
                {move || if minimized() { "Search" } else { "Hide" }}
            </button>

            <Show when=move || !minimized()>
                <input
                    type="search"
                    class="search-input"
                    placeholder="Search name or 2024-06"
                    prop:value=move || store.query().read().search.clone()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        store.query().update(|q| q.search = text);
                    }
                />
                <button class="sort-btn" on:click=toggle_sort>
                    {sort_label}
                </button>
            </Show>
        </div>
    }
}
