//! Low Stock Report
//!
//! Items below their minimum, filterable by location, with transfer
//! candidates for the selected row.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::export::inventory_csv;
use mmis_core::search::filter_by_location;
use mmis_core::stock::{find_alternatives, Alternative};
use mmis_core::InventoryItem;

use crate::components::{BackButton, Loading, LocationFilters, PageShell};
use crate::context::use_app_context;
use crate::download::download_csv;
use crate::routes::Route;

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[component]
pub fn LowStockReportPage() -> impl IntoView {
    let ctx = use_app_context();
    let (low_items, set_low_items) = signal(Vec::<InventoryItem>::new());
    let (inventory, set_inventory) = signal(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);
    let project = RwSignal::new(String::new());
    let test_area = RwSignal::new(String::new());
    let (selected, set_selected) = signal::<Option<u32>>(None);

    Effect::new(move |_| {
        let (project, test_area) = (project.get(), test_area.get());
        set_loading.set(true);
        spawn_local(async move {
            match ctx.api().low_stock(&project, &test_area).await {
                Ok(loaded) => {
                    let _ = set_low_items.try_set(loaded);
                }
                Err(e) => {
                    let _ = set_low_items.try_set(Vec::new());
                    ctx.report_error("Failed to load low stock items", &e);
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    // Alternatives are searched across every location.
    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().list_inventory("", "").await {
                Ok(loaded) => {
                    let _ = set_inventory.try_set(loaded);
                }
                Err(e) => log::error!("Failed to load inventory for alternatives: {}", e),
            }
        });
    });

    let filtered = Memo::new(move |_| low_items.with(|items| filter_by_location(items, &project.get(), &test_area.get())));

    let selected_item = move || {
        let id = selected.get()?;
        filtered.with(|items| items.iter().find(|item| item.item_id == id).cloned())
    };

    view! {
        <PageShell title="Low Stock Report" width="max-w-7xl">
            <div class="grid grid-cols-2 gap-6 mb-4">
                <LocationFilters project=project test_area=test_area on_change=move |_| set_selected.set(None) />
            </div>
            <Show when=move || !project.get().is_empty() || !test_area.get().is_empty()>
                <button
                    class="mb-4 text-sm text-red-600 hover:underline"
                    on:click=move |_| {
                        project.set(String::new());
                        test_area.set(String::new());
                        set_selected.set(None);
                    }
                >
                    "Clear All Filters"
                </button>
            </Show>

            <div class="flex items-center justify-between mb-4">
                <p class="font-semibold text-gray-700">
                    {move || if loading.get() { "Loading...".to_string() } else { format!("Total Items: {}", filtered.with(Vec::len)) }}
                </p>
                <button
                    class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 shadow disabled:opacity-50"
                    disabled=move || loading.get() || filtered.with(Vec::is_empty)
                    on:click=move |_| filtered.with_untracked(|items| download_csv("low_stock_report", inventory_csv(items)))
                >
                    "Download CSV"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !filtered.with(Vec::is_empty)
                    fallback=|| view! { <p class="text-gray-500">"No low stock items found."</p> }
                >
                    <div class="overflow-x-auto bg-white border rounded-xl shadow">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-100">
                                <tr>
                                    {["ID", "Name", "Part Number", "Current Quantity", "Min Count", "Unit", "Test Area", "Project Name"]
                                        .into_iter()
                                        .map(|h| view! { <th class="p-3 text-left">{h}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || filtered.get()
                                    key=|item| item.item_id
                                    children=move |item| {
                                        let id = item.item_id;
                                        view! {
                                            <tr
                                                class=move || if selected.get() == Some(id) {
                                                    "border-t cursor-pointer bg-blue-100"
                                                } else {
                                                    "border-t cursor-pointer hover:bg-red-50"
                                                }
                                                on:click=move |_| set_selected.update(|s| {
                                                    *s = if *s == Some(id) { None } else { Some(id) }
                                                })
                                            >
                                                <td class="p-3">{id}</td>
                                                <td class="p-3 font-medium">{item.item_name.clone()}</td>
                                                <td class="p-3">{text(&item.item_part_number)}</td>
                                                <td class="p-3 text-red-600 font-semibold">{item.item_current_quantity}</td>
                                                <td class="p-3">{item.item_min_count}</td>
                                                <td class="p-3">{text(&item.item_unit)}</td>
                                                <td class="p-3">{text(&item.test_area)}</td>
                                                <td class="p-3">{text(&item.project_name)}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>

            {move || selected_item().map(|low| {
                let alternatives = inventory.with(|inventory| find_alternatives(&low, inventory));
                view! { <AlternativesPanel low=low alternatives=alternatives /> }
            })}

            <BackButton route=Route::Reports />
        </PageShell>
    }
}

#[component]
fn AlternativesPanel(low: InventoryItem, alternatives: Vec<Alternative>) -> impl IntoView {
    let ctx = use_app_context();
    let dest_id = low.item_id;
    let heading = format!("Alternatives for {}", low.item_name);

    view! {
        <div class="mt-8 bg-white border rounded-xl shadow p-6">
            <h2 class="text-xl font-bold text-gray-800 mb-4">{heading}</h2>
            {if alternatives.is_empty() {
                view! {
                    <p class="text-gray-500">"No other location has surplus stock of this part."</p>
                }
                .into_any()
            } else {
                view! {
                    <table class="w-full text-sm">
                        <thead class="bg-gray-100">
                            <tr>
                                <th class="p-3 text-left">"ID"</th>
                                <th class="p-3 text-left">"Name"</th>
                                <th class="p-3 text-left">"Project Name"</th>
                                <th class="p-3 text-left">"Test Area"</th>
                                <th class="p-3 text-left">"Current Quantity"</th>
                                <th class="p-3 text-left">"Surplus"</th>
                                <th class="p-3 text-left"></th>
                            </tr>
                        </thead>
                        <tbody>
                            {alternatives
                                .into_iter()
                                .map(|alt| {
                                    let source_id = alt.item.item_id;
                                    view! {
                                        <tr class="border-t">
                                            <td class="p-3">{source_id}</td>
                                            <td class="p-3 font-medium">{alt.item.item_name.clone()}</td>
                                            <td class="p-3">{text(&alt.item.project_name)}</td>
                                            <td class="p-3">{text(&alt.item.test_area)}</td>
                                            <td class="p-3">{alt.item.item_current_quantity}</td>
                                            <td class="p-3 text-green-600 font-semibold">{alt.surplus}</td>
                                            <td class="p-3">
                                                <button
                                                    class="px-3 py-1 bg-blue-600 text-white rounded hover:bg-blue-700"
                                                    on:click=move |_| ctx.navigate(Route::Transfer {
                                                        source_item_id: Some(source_id),
                                                        dest_item_id: Some(dest_id),
                                                    })
                                                >
                                                    "Transfer"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()}
                        </tbody>
                    </table>
                }
                .into_any()
            }}
        </div>
    }
}
