//! Item Picker Component
//!
//! Search box with a dropdown of matching inventory items.

use leptos::prelude::*;
use mmis_core::search::{filter_by_name, filter_items};
use mmis_core::InventoryItem;

use crate::components::filter_dropdown::close_after_blur;
use crate::context::use_app_context;

const MAX_RESULTS: usize = 50;

#[component]
pub fn ItemPicker(
    #[prop(into)] items: Signal<Vec<InventoryItem>>,
    #[prop(into)] on_pick: Callback<InventoryItem>,
    /// Match on the item name only
    #[prop(optional)]
    name_only: bool,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let (query, set_query) = signal(String::new());
    let (open, set_open) = signal(false);

    let matches = move || {
        let items = items.get();
        let query = query.get();
        let mut found = if name_only {
            filter_by_name(&items, &query)
        } else {
            filter_items(&items, &query)
        };
        found.truncate(MAX_RESULTS);
        found
    };

    view! {
        <div class="relative">
            <input
                type="text"
                class="w-full border rounded-lg px-4 py-3 text-lg"
                autocomplete="off"
                placeholder=placeholder.unwrap_or_else(|| "Search items...".to_string())
                prop:value=move || query.get()
                on:focus=move |_| set_open.set(true)
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_open.set(true);
                }
                on:blur=move |_| close_after_blur(set_open)
            />
            <Show when=move || open.get()>
                <div class="absolute z-10 mt-1 w-full bg-white border rounded-lg shadow-lg max-h-96 overflow-y-auto">
                    <For
                        each=matches
                        key=|item| item.item_id
                        children=move |item| {
                            let image = item
                                .item_image_url
                                .clone()
                                .filter(|url| !url.is_empty())
                                .map(|url| ctx.image_url(&url));
                            let name = item.item_name.clone();
                            let description = item.item_description.clone().unwrap_or_default();
                            let part = item.item_part_number.clone().unwrap_or_else(|| "-".to_string());
                            let qty = item.item_current_quantity;
                            view! {
                                <button
                                    type="button"
                                    class="w-full flex items-center gap-3 px-4 py-3 hover:bg-blue-50 text-left border-b"
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        set_open.set(false);
                                        on_pick.run(item.clone());
                                    }
                                >
                                    {match image {
                                        Some(src) => view! { <img src=src class="w-12 h-12 object-cover rounded" /> }.into_any(),
                                        None => view! { <div class="w-12 h-12 bg-gray-200 rounded"></div> }.into_any(),
                                    }}
                                    <div class="flex-1">
                                        <div class="font-semibold">{name}</div>
                                        <div class="text-sm text-gray-500">{description}</div>
                                    </div>
                                    <div class="text-right text-sm">
                                        <div>{format!("Qty: {}", qty)}</div>
                                        <div class="text-gray-500">{format!("Part #: {}", part)}</div>
                                    </div>
                                </button>
                            }
                        }
                    />
                    <Show when=move || matches().is_empty()>
                        <p class="px-4 py-3 text-gray-500">"No items found"</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
