//! Return Flow
//!
//! The signed-in user's open requests, then a return form for one of them.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::models::ReturnPayload;
use mmis_core::time::date_part;
use mmis_core::validation::{non_blank, validate_return};
use mmis_core::Transaction;

use crate::components::{BackButton, Loading, PageShell};
use crate::context::use_app_context;
use crate::notify;
use crate::routes::Route;

#[component]
pub fn ReturnListPage() -> impl IntoView {
    let ctx = use_app_context();
    let (transactions, set_transactions) = signal(Vec::<Transaction>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(employee_id) = ctx.employee_id() else { return };
        spawn_local(async move {
            match ctx.api().user_transactions(employee_id).await {
                Ok(loaded) => {
                    let _ = set_transactions.try_set(loaded);
                }
                Err(e) => ctx.report_error("Error fetching transactions", &e),
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <PageShell title="Return" width="max-w-xl">
            <h2 class="text-xl font-semibold mb-6 text-gray-700">"Select an Item to Return"</h2>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                {move || transactions.get().is_empty().then(|| view! {
                    <p class="text-center text-gray-500">"You have no active items to return."</p>
                })}
                <div class="flex flex-col gap-4">
                    <For
                        each=move || transactions.get()
                        key=|tx| tx.transaction_id
                        children=move |tx| {
                            let transaction_id = tx.transaction_id;
                            let name = tx.item_name.clone().unwrap_or_else(|| format!("Item #{}", tx.item_id));
                            view! {
                                <div
                                    class="p-4 bg-white border rounded-xl shadow cursor-pointer hover:bg-blue-100 transition"
                                    on:click=move |_| ctx.navigate(Route::ReturnItem { transaction_id })
                                >
                                    <div class="font-semibold text-lg">{name}</div>
                                    <div class="text-gray-600 text-sm">{format!("Quantity: {}", tx.quantity_used)}</div>
                                    {tx.remaining_quantity.map(|left| view! {
                                        <div class="text-gray-600 text-sm">{format!("Remaining: {}", left)}</div>
                                    })}
                                    <div class="text-gray-500 text-sm">
                                        {format!("Requested on: {}", date_part(&tx.created_at))}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
            <BackButton route=Route::Dashboard />
        </PageShell>
    }
}

#[component]
pub fn ReturnItemPage(transaction_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let (transaction, set_transaction) = signal::<Option<Transaction>>(None);
    let (quantity, set_quantity) = signal(String::new());
    let (remarks, set_remarks) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            let mut loaded = match api.get_transaction(transaction_id).await {
                Ok(loaded) => loaded,
                Err(e) => {
                    ctx.report_error("Error loading transaction details", &e);
                    return;
                }
            };
            // The single-transaction endpoint omits what is still out
            if loaded.remaining_quantity.is_none() {
                if let Some(employee_id) = ctx.employee_id() {
                    match api.user_transactions(employee_id).await {
                        Ok(active) => {
                            loaded.remaining_quantity = active
                                .iter()
                                .find(|tx| tx.transaction_id == transaction_id)
                                .and_then(|tx| tx.remaining_quantity);
                        }
                        Err(e) => log::warn!("could not load remaining quantity: {}", e),
                    }
                }
            }
            let _ = set_transaction.try_set(Some(loaded));
        });
    });

    let submit = move |_| {
        let Some(tx) = transaction.get_untracked() else { return };
        let qty = match validate_return(&quantity.get_untracked(), tx.returnable_quantity()) {
            Ok(qty) => qty,
            Err(e) => {
                notify::alert(&e.to_string());
                return;
            }
        };
        let Some(employee_id) = ctx.employee_id() else { return };
        let payload = ReturnPayload {
            item_id: tx.item_id,
            employee_id,
            fixture_id: tx.fixture_id,
            quantity_used: qty,
            remarks: non_blank(&remarks.get_untracked()),
            transaction_type: "return".to_string(),
            test_area: tx.test_area.clone(),
            project_name: tx.project_name.clone(),
        };
        set_submitting.set(true);
        spawn_local(async move {
            match ctx.api().return_item(&payload).await {
                Ok(_) => {
                    log::info!("returned {} from transaction {}", qty, transaction_id);
                    notify::alert("Return successful!");
                    ctx.navigate(Route::ReturnList);
                }
                Err(e) => ctx.report_error("Return failed", &e),
            }
            let _ = set_submitting.try_set(false);
        });
    };

    let or_na = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| "N/A".to_string());

    view! {
        <PageShell title="Return" width="max-w-3xl">
            {move || match transaction.get() {
                None => view! { <Loading /> }.into_any(),
                Some(tx) => {
                    let taken = tx.quantity_used;
                    let max = tx.returnable_quantity();
                    view! {
                        <div class="bg-white p-8 border rounded-xl shadow">
                            <div class="border p-4 rounded-xl bg-gray-50 mb-8">
                                <h2 class="text-2xl text-center font-bold mb-2">
                                    {tx.item_name.clone().unwrap_or_else(|| format!("Item #{}", tx.item_id))}
                                </h2>
                                <p><strong>"Description: "</strong>{or_na(tx.item_description.clone())}</p>
                                <p><strong>"Part Number: "</strong>{or_na(tx.item_part_number.clone())}</p>
                                <p><strong>"Manufacturer: "</strong>{or_na(tx.item_manufacturer.clone())}</p>
                                <p><strong>"Fixture: "</strong>{or_na(tx.fixture_name.clone())}</p>
                                <p><strong>"Quantity Taken: "</strong>{taken}</p>
                                <Show when=move || max != taken>
                                    <p><strong>"Still Out: "</strong>{max}</p>
                                </Show>
                                <p><strong>"Date Requested: "</strong>{date_part(&tx.created_at).to_string()}</p>
                            </div>

                            <label class="font-semibold text-gray-700">"Return Quantity"</label>
                            <input
                                type="number"
                                min="1"
                                max=max.to_string()
                                class="border p-2 rounded w-full mb-6"
                                placeholder=format!("Enter quantity (max {})", max)
                                prop:value=move || quantity.get()
                                on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            />

                            <label class="font-semibold text-gray-700">"Remarks (Optional)"</label>
                            <input
                                type="text"
                                class="border p-2 rounded w-full mb-8"
                                placeholder="Any notes..."
                                prop:value=move || remarks.get()
                                on:input=move |ev| set_remarks.set(event_target_value(&ev))
                            />

                            <div class="flex justify-center gap-6">
                                <button
                                    class="px-8 py-2 bg-gray-300 rounded hover:bg-gray-400"
                                    on:click=move |_| ctx.navigate(Route::ReturnList)
                                >
                                    "Back"
                                </button>
                                <button
                                    class="px-8 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                                    disabled=move || submitting.get()
                                    on:click=submit
                                >
                                    "Submit Return"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
            }}
        </PageShell>
    }
}
