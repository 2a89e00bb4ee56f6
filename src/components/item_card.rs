use leptos::prelude::*;
use mmis_core::InventoryItem;

use crate::context::use_app_context;

/// Read-only summary of an inventory item
#[component]
pub fn ItemCard(
    item: InventoryItem,
    #[prop(optional, into)] title: Option<String>,
) -> impl IntoView {
    let ctx = use_app_context();
    let image = item.item_image_url.clone().filter(|url| !url.is_empty()).map(|url| ctx.image_url(&url));
    let or_dash = |value: &Option<String>| value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "-".to_string());

    view! {
        <div class="bg-white border rounded-xl shadow p-6">
            {title.map(|title| view! { <h2 class="text-lg font-semibold text-gray-700 mb-4">{title}</h2> })}
            <div class="flex gap-6">
                {image.map(|src| view! {
                    <img src=src alt=item.item_name.clone() class="w-32 h-32 object-cover rounded border" />
                })}
                <div class="grid grid-cols-2 gap-x-8 gap-y-2 text-sm flex-1">
                    <span class="text-gray-500">"Item Name"</span>
                    <span class="font-semibold">{item.item_name.clone()}</span>
                    <span class="text-gray-500">"Part Number"</span>
                    <span>{or_dash(&item.item_part_number)}</span>
                    <span class="text-gray-500">"Description"</span>
                    <span>{or_dash(&item.item_description)}</span>
                    <span class="text-gray-500">"Project"</span>
                    <span>{or_dash(&item.project_name)}</span>
                    <span class="text-gray-500">"Test Area"</span>
                    <span>{or_dash(&item.test_area)}</span>
                    <span class="text-gray-500">"Current Quantity"</span>
                    <span class="font-semibold">
                        {format!("{} {}", item.item_current_quantity, item.item_unit.clone().unwrap_or_default())}
                    </span>
                    <span class="text-gray-500">"Minimum Count"</span>
                    <span>{item.item_min_count}</span>
                </div>
            </div>
        </div>
    }
}
