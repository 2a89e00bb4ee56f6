//! Current Inventory Report
//!
//! Full inventory table with row selection and CSV export, and a fixtures tab.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::export::inventory_csv;
use mmis_core::stock::is_low_stock;
use mmis_core::{Fixture, InventoryItem};

use crate::components::{BackButton, Loading, PageShell};
use crate::context::use_app_context;
use crate::download::download_csv;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Items,
    Fixtures,
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

#[component]
pub fn CurrentInventoryPage() -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (fixtures, set_fixtures) = signal(Vec::<Fixture>::new());
    let (loading, set_loading) = signal(true);
    let (tab, set_tab) = signal(Tab::Items);
    let (selected, set_selected) = signal::<Option<u32>>(None);

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            match api.list_inventory("", "").await {
                Ok(loaded) => {
                    log::info!("current inventory: {} items", loaded.len());
                    let _ = set_items.try_set(loaded);
                }
                Err(e) => ctx.report_error("Failed to load inventory", &e),
            }
            let _ = set_loading.try_set(false);
            match api.list_fixtures().await {
                Ok(loaded) => {
                    let _ = set_fixtures.try_set(loaded);
                }
                Err(e) => log::error!("Failed to load fixtures: {}", e),
            }
        });
    });

    let selected_item = move || {
        let id = selected.get()?;
        items.with(|items| items.iter().find(|item| item.item_id == id).cloned())
    };

    let tab_class = move |which: Tab| {
        if tab.get() == which {
            "px-6 py-2 rounded-t-lg bg-blue-600 text-white font-semibold"
        } else {
            "px-6 py-2 rounded-t-lg bg-gray-200 text-gray-700 hover:bg-gray-300"
        }
    };

    view! {
        <PageShell title="Reports" width="max-w-7xl">
            <div class="flex items-center justify-between mb-4">
                <div class="flex gap-2">
                    <button class=move || tab_class(Tab::Items) on:click=move |_| set_tab.set(Tab::Items)>
                        "Inventory"
                    </button>
                    <button class=move || tab_class(Tab::Fixtures) on:click=move |_| set_tab.set(Tab::Fixtures)>
                        "Fixtures"
                    </button>
                </div>
                <div class="flex gap-3">
                    {move || selected_item().map(|item| {
                        let route = Route::RestockEdit {
                            item_id: item.item_id,
                            project: text(&item.project_name),
                            test_area: text(&item.test_area),
                        };
                        view! {
                            <button
                                class="px-4 py-2 bg-yellow-500 text-white rounded hover:bg-yellow-600 shadow"
                                on:click=move |_| ctx.navigate(route.clone())
                            >
                                "Edit / Restock"
                            </button>
                        }
                    })}
                    <button
                        class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 shadow"
                        on:click=move |_| items.with_untracked(|items| download_csv("current_inventory_report", inventory_csv(items)))
                    >
                        "Download CSV"
                    </button>
                </div>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show when=move || tab.get() == Tab::Items fallback=move || view! { <FixturesTable fixtures=fixtures /> }>
                    <Show
                        when=move || !items.get().is_empty()
                        fallback=|| view! { <p class="text-gray-500">"No inventory items found."</p> }
                    >
                        <div class="overflow-x-auto bg-white border rounded-xl shadow">
                            <table class="w-full text-sm">
                                <thead class="bg-gray-100">
                                    <tr>
                                        {["ID", "Name", "Part Number", "Description", "Current Quantity", "Min Count",
                                          "Unit", "Manufacturer", "Type", "Test Area", "Project Name", "Life Cycle"]
                                            .into_iter()
                                            .map(|h| view! { <th class="p-3 text-left">{h}</th> })
                                            .collect_view()}
                                    </tr>
                                </thead>
                                <tbody>
                                    <For
                                        each=move || items.get()
                                        key=|item| item.item_id
                                        children=move |item| {
                                            let id = item.item_id;
                                            let low = is_low_stock(&item);
                                            let row_class = move || {
                                                if selected.get() == Some(id) {
                                                    "border-t cursor-pointer bg-blue-100"
                                                } else if low {
                                                    "border-t cursor-pointer bg-red-50 hover:bg-red-100"
                                                } else {
                                                    "border-t cursor-pointer hover:bg-gray-50"
                                                }
                                            };
                                            view! {
                                                <tr
                                                    class=row_class
                                                    on:click=move |_| set_selected.update(|s| {
                                                        *s = if *s == Some(id) { None } else { Some(id) }
                                                    })
                                                >
                                                    <td class="p-3">{id}</td>
                                                    <td class="p-3 font-medium">{item.item_name.clone()}</td>
                                                    <td class="p-3">{text(&item.item_part_number)}</td>
                                                    <td class="p-3">{text(&item.item_description)}</td>
                                                    <td class="p-3">{item.item_current_quantity}</td>
                                                    <td class="p-3">{item.item_min_count}</td>
                                                    <td class="p-3">{text(&item.item_unit)}</td>
                                                    <td class="p-3">{text(&item.item_manufacturer)}</td>
                                                    <td class="p-3">{text(&item.item_type)}</td>
                                                    <td class="p-3">{text(&item.test_area)}</td>
                                                    <td class="p-3">{text(&item.project_name)}</td>
                                                    <td class="p-3">{item.item_life_cycle.map(|v| v.to_string()).unwrap_or_default()}</td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </Show>
            </Show>
            <BackButton route=Route::Reports />
        </PageShell>
    }
}

#[component]
fn FixturesTable(fixtures: ReadSignal<Vec<Fixture>>) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <Show
            when=move || !fixtures.get().is_empty()
            fallback=|| view! { <p class="text-gray-500">"No fixtures found."</p> }
        >
            <div class="overflow-x-auto bg-white border rounded-xl shadow">
                <table class="w-full text-sm">
                    <thead class="bg-gray-100">
                        <tr>
                            <th class="p-3 text-left">"ID"</th>
                            <th class="p-3 text-left">"Fixture Name"</th>
                            <th class="p-3 text-left">"Project Name"</th>
                            <th class="p-3 text-left">"Test Area"</th>
                            <th class="p-3 text-left">"Asset Tag"</th>
                            <th class="p-3 text-left">"Serial Number"</th>
                            <th class="p-3 text-left"></th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || fixtures.get()
                            key=|fx| fx.fixture_id
                            children=move |fx| {
                                let fixture_id = fx.fixture_id;
                                view! {
                                    <tr class="border-t hover:bg-gray-50">
                                        <td class="p-3">{fixture_id}</td>
                                        <td class="p-3 font-medium">{fx.fixture_name}</td>
                                        <td class="p-3">{fx.project_name}</td>
                                        <td class="p-3">{fx.test_area}</td>
                                        <td class="p-3">{fx.asset_tag.unwrap_or_default()}</td>
                                        <td class="p-3">{fx.fixture_serial_number.unwrap_or_default()}</td>
                                        <td class="p-3">
                                            <button
                                                class="text-blue-600 hover:underline"
                                                on:click=move |_| ctx.navigate(Route::EditFixture { fixture_id })
                                            >
                                                "Edit"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </div>
        </Show>
    }
}
