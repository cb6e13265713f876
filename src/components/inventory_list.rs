//! Inventory List Component
//!
//! Renders the filtered, searched and sorted items, or an empty-state
//! message when nothing matches.

use leptos::prelude::*;
use inventory_core::EmptyState;

use crate::components::InventoryRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn InventoryList() -> impl IntoView {
    let store = use_app_store();

    let visible = Memo::new(move |_| {
        let query = store.query().read();
        let inventory = store.inventory().read();
        query.apply(inventory.items())
    });

    let empty_state = move || {
        let state = EmptyState::for_filter(store.query().read().location);
        view! {
            <div class="empty-state">
                <h2>{EmptyState::TITLE}</h2>
                <p>{state.message()}</p>
            </div>
        }
    };

    view! {
        <Show when=move || !visible.read().is_empty() fallback=empty_state>
            <ul class="inventory-list">
                <For
                    each=move || visible.get()
                    key=|item| (item.id.clone(), item.quantity)
                    children=move |item| view! { <InventoryRow item=item /> }
                />
            </ul>
        </Show>
    }
}
