//! Spending Report
//!
//! Two views over the same filters: current inventory value, and net
//! spending per item derived from request/return transactions.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::export::{spending_inventory_csv, spending_transactions_csv};
use mmis_core::models::TransactionFilter;
use mmis_core::pricing::{format_money, inventory_value, priced_items, total_inventory_value};
use mmis_core::search::filter_by_location;
use mmis_core::spending::{spending_by_item, total_spending, ItemSpending};
use mmis_core::InventoryItem;

use crate::components::{BackButton, Loading, LocationFilters, PageShell};
use crate::context::use_app_context;
use crate::download::download_csv;
use crate::routes::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpendingView {
    Inventory,
    Transactions,
}

impl SpendingView {
    fn key(self) -> &'static str {
        match self {
            SpendingView::Inventory => "inventory",
            SpendingView::Transactions => "transactions",
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().filter(|v| !v.is_empty()).unwrap_or_else(|| "N/A".to_string())
}

#[component]
pub fn SpendingReportPage() -> impl IntoView {
    let ctx = use_app_context();
    let view_mode = RwSignal::new(SpendingView::Inventory);
    let project = RwSignal::new(String::new());
    let test_area = RwSignal::new(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (inventory, set_inventory) = signal(Vec::<InventoryItem>::new());
    let (spending, set_spending) = signal(Vec::<ItemSpending>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let mode = view_mode.get();
        let filter = TransactionFilter {
            project: project.get(),
            test_area: test_area.get(),
            start_date: start_date.get(),
            end_date: end_date.get(),
            ..Default::default()
        };
        set_loading.set(true);
        spawn_local(async move {
            let api = ctx.api();
            match mode {
                SpendingView::Inventory => match api.list_inventory(&filter.project, &filter.test_area).await {
                    Ok(loaded) => {
                        let located = filter_by_location(&loaded, &filter.project, &filter.test_area);
                        let _ = set_inventory.try_set(priced_items(&located));
                    }
                    Err(e) => ctx.report_error("Failed to load inventory", &e),
                },
                SpendingView::Transactions => {
                    // Prices come from the full inventory, whatever the filters.
                    let prices = api.list_inventory("", "").await.unwrap_or_else(|e| {
                        log::error!("Failed to load inventory prices: {}", e);
                        Vec::new()
                    });
                    match api.all_transactions(&filter).await {
                        Ok(transactions) => {
                            log::debug!("spending over {} transactions", transactions.len());
                            let _ = set_spending.try_set(spending_by_item(&transactions, &prices));
                        }
                        Err(e) => ctx.report_error("Failed to load transactions", &e),
                    }
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    let download = move |_| match view_mode.get_untracked() {
        SpendingView::Inventory => inventory.with_untracked(|items| {
            download_csv("spending_report_inventory", spending_inventory_csv(items))
        }),
        SpendingView::Transactions => spending.with_untracked(|rows| {
            download_csv("spending_report_transactions", spending_transactions_csv(rows))
        }),
    };

    let is_empty = move || match view_mode.get() {
        SpendingView::Inventory => inventory.with(Vec::is_empty),
        SpendingView::Transactions => spending.with(Vec::is_empty),
    };

    let total = move || match view_mode.get() {
        SpendingView::Inventory => ("Total Inventory Value", inventory.with(|items| total_inventory_value(items))),
        SpendingView::Transactions => ("Total Spending", spending.with(|rows| total_spending(rows))),
    };

    view! {
        <PageShell title="Spending Report" width="max-w-7xl">
            <div class="bg-white border rounded-xl shadow p-6 mb-6">
                <div class="grid grid-cols-3 gap-6">
                    <LocationFilters project=project test_area=test_area />
                    <div>
                        <label class="block mb-1 font-semibold text-gray-700">"View"</label>
                        <select
                            class="w-full border rounded px-3 py-2"
                            prop:value=move || view_mode.get().key()
                            on:change=move |ev| view_mode.set(if event_target_value(&ev) == "transactions" {
                                SpendingView::Transactions
                            } else {
                                SpendingView::Inventory
                            })
                        >
                            <option value="inventory">"Current Inventory Value"</option>
                            <option value="transactions">"Spending from Transactions"</option>
                        </select>
                    </div>
                </div>
                <Show when=move || view_mode.get() == SpendingView::Transactions>
                    <div class="grid grid-cols-2 gap-6 mt-4">
                        <div>
                            <label class="block mb-1 font-semibold text-gray-700">"Start Date"</label>
                            <input
                                type="date"
                                class="w-full border rounded px-3 py-2"
                                prop:value=move || start_date.get()
                                on:change=move |ev| set_start_date.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block mb-1 font-semibold text-gray-700">"End Date"</label>
                            <input
                                type="date"
                                class="w-full border rounded px-3 py-2"
                                prop:value=move || end_date.get()
                                on:change=move |ev| set_end_date.set(event_target_value(&ev))
                            />
                        </div>
                    </div>
                </Show>
            </div>

            <div class="bg-blue-50 border border-blue-200 rounded-xl p-6 mb-6 text-center">
                {move || {
                    let (label, amount) = total();
                    view! {
                        <p class="text-gray-600 font-semibold">{label}</p>
                        <p class="text-3xl font-bold text-blue-700">{format_money(amount)}</p>
                    }
                }}
            </div>

            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold text-gray-700">
                    {move || match view_mode.get() {
                        SpendingView::Inventory => "Current Inventory Value by Item",
                        SpendingView::Transactions => "Spending Summary by Item",
                    }}
                </h2>
                <button
                    class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 shadow disabled:opacity-50"
                    disabled=move || loading.get() || is_empty()
                    on:click=download
                >
                    "Download CSV"
                </button>
            </div>

            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !is_empty()
                    fallback=move || view! {
                        <p class="text-gray-500">
                            {match view_mode.get_untracked() {
                                SpendingView::Inventory => "No priced inventory items found.",
                                SpendingView::Transactions => "No spending found for these filters.",
                            }}
                        </p>
                    }
                >
                    {move || match view_mode.get() {
                        SpendingView::Inventory => view! { <InventoryValueTable items=inventory /> }.into_any(),
                        SpendingView::Transactions => view! { <SpendingTable rows=spending /> }.into_any(),
                    }}
                </Show>
            </Show>
            <BackButton route=Route::Reports />
        </PageShell>
    }
}

#[component]
fn InventoryValueTable(items: ReadSignal<Vec<InventoryItem>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white border rounded-xl shadow">
            <table class="w-full text-sm">
                <thead class="bg-gray-100">
                    <tr>
                        <th class="p-3 text-left">"Name"</th>
                        <th class="p-3 text-left">"Part Number"</th>
                        <th class="p-3 text-left">"Description"</th>
                        <th class="p-3 text-left">"Project Name"</th>
                        <th class="p-3 text-left">"Test Area"</th>
                        <th class="p-3 text-right">"Current Quantity"</th>
                        <th class="p-3 text-right">"Unit Price"</th>
                        <th class="p-3 text-right">"Total Value"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || items.get()
                        key=|item| item.item_id
                        children=move |item| view! {
                            <tr class="border-t hover:bg-gray-50">
                                <td class="p-3 font-medium">{item.item_name.clone()}</td>
                                <td class="p-3">{text(&item.item_part_number)}</td>
                                <td class="p-3">{text(&item.item_description)}</td>
                                <td class="p-3">{text(&item.project_name)}</td>
                                <td class="p-3">{text(&item.test_area)}</td>
                                <td class="p-3 text-right">{item.item_current_quantity}</td>
                                <td class="p-3 text-right">{text(&item.item_unit_price)}</td>
                                <td class="p-3 text-right font-semibold">{format_money(inventory_value(&item))}</td>
                            </tr>
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[component]
fn SpendingTable(rows: ReadSignal<Vec<ItemSpending>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-white border rounded-xl shadow">
            <table class="w-full text-sm">
                <thead class="bg-gray-100">
                    <tr>
                        <th class="p-3 text-left">"Name"</th>
                        <th class="p-3 text-left">"Part Number"</th>
                        <th class="p-3 text-left">"Description"</th>
                        <th class="p-3 text-left">"Project Name"</th>
                        <th class="p-3 text-left">"Test Area"</th>
                        <th class="p-3 text-right">"Unit Price"</th>
                        <th class="p-3 text-right">"Total Quantity Used"</th>
                        <th class="p-3 text-right">"Total Spending"</th>
                        <th class="p-3 text-right">"Transaction Count"</th>
                        <th class="p-3 text-left">"Date Range"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        rows.get()
                            .into_iter()
                            .map(|row| view! {
                                <tr class="border-t hover:bg-gray-50">
                                    <td class="p-3 font-medium">{row.item_name.clone()}</td>
                                    <td class="p-3">{row.part_number.clone()}</td>
                                    <td class="p-3">{row.description.clone()}</td>
                                    <td class="p-3">{row.project_name.clone()}</td>
                                    <td class="p-3">{row.test_area.clone()}</td>
                                    <td class="p-3 text-right">{text(&row.unit_price)}</td>
                                    <td class="p-3 text-right">{row.net_quantity()}</td>
                                    <td class="p-3 text-right font-semibold">{format_money(row.net_spending())}</td>
                                    <td class="p-3 text-right">{row.transaction_count}</td>
                                    <td class="p-3">{row.date_range()}</td>
                                </tr>
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
