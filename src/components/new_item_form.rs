//! New Item Form Component
//!
//! Modal form for adding an item to the current location.

use leptos::prelude::*;
use inventory_core::{parse_quantity_input, ItemDraft, Location};

use crate::context::use_inventory_actions;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for creating new items, prefilled from the active tab
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();
    let actions = use_inventory_actions();

    let initial = ItemDraft::for_filter(store.query().get_untracked().location);
    let (name, set_name) = signal(initial.name);
    let (location, set_location) = signal(initial.location);
    let (quantity, set_quantity) = signal(initial.quantity.to_string());
    let (purchase_date, set_purchase_date) = signal(initial.purchase_date);

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft::new(name.get(), location.get())
            .with_quantity(parse_quantity_input(&quantity.get()))
            .with_purchase_date(purchase_date.get());

        // Rejected drafts leave the form open as-is
        if actions.add_item(draft) {
            let blank = ItemDraft::for_filter(store.query().get_untracked().location);
            set_name.set(blank.name);
            set_location.set(blank.location);
            set_quantity.set(blank.quantity.to_string());
            set_purchase_date.set(blank.purchase_date);
            actions.close_form();
        }
    };

    view! {
        <div class="modal-backdrop">
            <form class="new-item-form" on:submit=create_item>
                <h2>"Add Item"</h2>

                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Location"
                    <select
                        on:change=move |ev| {
                            if let Some(picked) = Location::from_key(&event_target_value(&ev)) {
                                set_location.set(picked);
                            }
                        }
                    >
                        {Location::ALL.into_iter().map(|loc| view! {
                            <option value=loc.key() selected=move || location.get() == loc>
                                {loc.display_name()}
                            </option>
                        }).collect_view()}
                    </select>
                </label>

                <label>
                    "Quantity"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || quantity.get()
                        on:input=move |ev| set_quantity.set(event_target_value(&ev))
                    />
                </label>

                <label>
                    "Purchase Date"
                    <input
                        type="text"
                        placeholder="YYYY-MM"
                        prop:value=move || purchase_date.get()
                        on:input=move |ev| set_purchase_date.set(event_target_value(&ev))
                    />
                </label>

                <div class="form-actions">
                    <button type="button" class="cancel-btn" on:click=move |_| actions.close_form()>
                        "Cancel"
                    </button>
                    <button type="submit">"Add Item"</button>
                </div>
            </form>
        </div>
    }
}
