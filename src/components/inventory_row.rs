//! Inventory Row Component
//!
//! A single item with its location label, purchase date and quantity
//! controls.

use leptos::prelude::*;
use inventory_core::Item;

use crate::context::use_inventory_actions;

#[component]
pub fn InventoryRow(item: Item) -> impl IntoView {
    let actions = use_inventory_actions();

    let id = item.id.clone();
    let id_dec = id.clone();
    let location = item.location;
    let purchased = item.has_purchase_date().then(|| item.purchase_date.clone());

    view! {
        <li class="item-row">
            <div class="item-info">
                <span class="item-name">{item.name.clone()}</span>
                <span class=format!("item-location tag-{}", location.color_tag())>
                    {location.display_name()}
                </span>
                {purchased.map(|date| view! {
                    <span class="item-date">"Purchased: " {date}</span>
                })}
            </div>

            <div class="quantity-controls">
                <button class="qty-btn" on:click=move |_| actions.adjust_quantity(&id_dec, -1)>"−"</button>
                <span class="item-quantity">{item.quantity}</span>
                <button class="qty-btn" on:click=move |_| actions.adjust_quantity(&id, 1)>"+"</button>
            </div>
        </li>
    }
}
