//! Location Tab Bar Component
//!
//! One tab per registry entry, starting with "All Locations".

use leptos::prelude::*;
use inventory_core::LocationFilter;

use crate::context::use_inventory_actions;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LocationTabBar() -> impl IntoView {
    let store = use_app_store();
    let actions = use_inventory_actions();

    view! {
        <nav class="location-tab-bar">
            {LocationFilter::iter().map(|filter| {
                let is_active = move || store.query().read().location == filter;
                let tab_class = move || {
                    if is_active() {
                        format!("location-tab active tag-{}", filter.color_tag())
                    } else {
                        format!("location-tab tag-{}", filter.color_tag())
                    }
                };

                view! {
                    <button
                        class=tab_class
                        on:click=move |_| actions.select_tab(filter)
                    >
                        {filter.display_name()}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
