//! Customized Report
//!
//! Transactions filtered on demand, shown as a table and exportable as CSV.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::catalog::TRANSACTION_TYPES;
use mmis_core::export::customized_csv;
use mmis_core::models::TransactionFilter;
use mmis_core::time::format_timestamp;
use mmis_core::Transaction;

use crate::components::{BackButton, LocationFilters, PageShell};
use crate::context::use_app_context;
use crate::download::download_csv;
use crate::notify;
use crate::routes::Route;

fn type_label(kind: &str) -> String {
    let mut chars = kind.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[component]
pub fn CustomizedReportPage() -> impl IntoView {
    let ctx = use_app_context();
    let project = RwSignal::new(String::new());
    let test_area = RwSignal::new(String::new());
    let (transaction_type, set_transaction_type) = signal(String::new());
    let (start_date, set_start_date) = signal(String::new());
    let (end_date, set_end_date) = signal(String::new());
    let (transactions, set_transactions) = signal(Vec::<Transaction>::new());
    let (generated, set_generated) = signal(false);
    let (loading, set_loading) = signal(false);

    let generate = move |_| {
        let filter = TransactionFilter {
            project: project.get_untracked(),
            test_area: test_area.get_untracked(),
            transaction_type: transaction_type.get_untracked(),
            start_date: start_date.get_untracked(),
            end_date: end_date.get_untracked(),
        };
        set_loading.set(true);
        spawn_local(async move {
            match ctx.api().all_transactions(&filter).await {
                Ok(loaded) => {
                    log::info!("customized report: {} transactions", loaded.len());
                    let _ = set_transactions.try_set(loaded);
                }
                Err(e) => {
                    let _ = set_transactions.try_set(Vec::new());
                    ctx.report_error("Failed to generate report", &e);
                }
            }
            let _ = set_generated.try_set(true);
            let _ = set_loading.try_set(false);
        });
    };

    let download = move |_| {
        transactions.with_untracked(|rows| {
            if rows.is_empty() {
                notify::alert("No data to download. Please generate a report first.");
            } else {
                download_csv("customized_report", customized_csv(rows));
            }
        })
    };

    view! {
        <PageShell title="Reports" width="max-w-7xl">
            <div class="bg-white border rounded-xl shadow p-6 mb-6 space-y-4">
                <h2 class="text-xl font-semibold text-gray-700">"Customized Report"</h2>
                <div class="grid grid-cols-2 gap-6">
                    <LocationFilters project=project test_area=test_area />
                </div>
                <div>
                    <label class="block text-sm font-semibold text-gray-700 mb-2">"Transaction Type"</label>
                    <select
                        class="w-full p-2 border rounded shadow-sm"
                        prop:value=move || transaction_type.get()
                        on:change=move |ev| set_transaction_type.set(event_target_value(&ev))
                    >
                        <option value="">"All Types"</option>
                        {TRANSACTION_TYPES
                            .iter()
                            .map(|kind| view! { <option value=*kind>{type_label(kind)}</option> })
                            .collect_view()}
                    </select>
                </div>
                <div class="grid grid-cols-2 gap-4">
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">"Start Date"</label>
                        <input
                            type="date"
                            class="w-full p-2 border rounded shadow-sm"
                            prop:value=move || start_date.get()
                            on:change=move |ev| set_start_date.set(event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-semibold text-gray-700 mb-2">"End Date"</label>
                        <input
                            type="date"
                            class="w-full p-2 border rounded shadow-sm"
                            prop:value=move || end_date.get()
                            on:change=move |ev| set_end_date.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <div class="flex justify-center">
                    <button
                        class="px-8 py-2 bg-blue-600 text-white rounded hover:bg-blue-700 shadow disabled:opacity-50"
                        disabled=move || loading.get()
                        on:click=generate
                    >
                        {move || if loading.get() { "Generating..." } else { "Generate Report" }}
                    </button>
                </div>
            </div>

            <Show when=move || generated.get()>
                <div class="flex items-center justify-between mb-4">
                    <p class="font-semibold text-gray-700">{move || format!("Results: {}", transactions.with(Vec::len))}</p>
                    <button
                        class="px-4 py-2 bg-green-600 text-white rounded hover:bg-green-700 shadow"
                        on:click=download
                    >
                        "Download CSV"
                    </button>
                </div>
                <Show
                    when=move || !transactions.with(Vec::is_empty)
                    fallback=|| view! { <p class="text-gray-500">"No transactions match these filters."</p> }
                >
                    <div class="overflow-x-auto bg-white border rounded-xl shadow">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-100">
                                <tr>
                                    {["Date", "Type", "Employee", "Item", "Part Number", "Quantity", "Fixture", "Test Area", "Project"]
                                        .into_iter()
                                        .map(|h| view! { <th class="p-3 text-left">{h}</th> })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || transactions.get()
                                    key=|tx| tx.transaction_id
                                    children=move |tx| view! {
                                        <tr class="border-t hover:bg-gray-50">
                                            <td class="p-3">{format_timestamp(&tx.created_at)}</td>
                                            <td class="p-3">{type_label(&tx.transaction_type)}</td>
                                            <td class="p-3">{tx.employee_name.clone().unwrap_or_default()}</td>
                                            <td class="p-3 font-medium">{tx.item_name.clone().unwrap_or_default()}</td>
                                            <td class="p-3">{tx.item_part_number.clone().unwrap_or_default()}</td>
                                            <td class="p-3">{tx.quantity_used}</td>
                                            <td class="p-3">{tx.fixture_name.clone().unwrap_or_default()}</td>
                                            <td class="p-3">{tx.test_area.clone().unwrap_or_default()}</td>
                                            <td class="p-3">{tx.project_name.clone().unwrap_or_default()}</td>
                                        </tr>
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
            <BackButton route=Route::Reports />
        </PageShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_label_capitalizes() {
        assert_eq!(type_label("restock"), "Restock");
        assert_eq!(type_label(""), "");
    }
}
