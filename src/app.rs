//! Gaba Inventory App
//!
//! Header, search, location tabs and the item list, behind a loading screen
//! until the startup sync has settled.

use leptos::prelude::*;
use reactive_stores::Store;
use inventory_core::can_create;

use crate::components::{InventoryList, LocationTabBar, NewItemForm, SearchBar};
use crate::context::InventoryActions;
use crate::remote;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new(&remote::sync_config()));
    let actions = InventoryActions::new(store);

    // Provide context to all children
    provide_context(store);
    provide_context(actions);

    remote::load_inventory(store);

    let is_ready = move || store.inventory().read().is_ready();
    let advisory = move || store.inventory().read().advisory().map(str::to_owned);
    let show_add = move || can_create(store.query().read().location);

    view! {
        <Show
            when=is_ready
            fallback=|| view! { <div class="loading-screen">"Loading…"</div> }
        >
            <div class="app-layout">
                <header class="app-header">
                    <h1>"Gaba Inventory"</h1>
                </header>

                {move || advisory().map(|message| view! {
                    <div class="advisory-banner">{message}</div>
                })}

                <SearchBar />
                <LocationTabBar />

                <main class="main-content">
                    <InventoryList />
                </main>

                <Show when=show_add>
                    <button class="add-item-btn" on:click=move |_| actions.open_form()>
                        "+"
                    </button>
                </Show>

                <Show when=move || store.form_open().get()>
                    <NewItemForm />
                </Show>
            </div>
        </Show>
    }
}
