//! Transfer
//!
//! Move stock from a surplus record into a low-stock record of the same part.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::models::TransferPayload;
use mmis_core::validation::validate_transfer;
use mmis_core::{Fixture, InventoryItem};

use crate::components::{BackButton, ItemCard, Loading, PageShell};
use crate::context::use_app_context;
use crate::notify;
use crate::routes::Route;

#[component]
pub fn TransferPage(source_item_id: Option<u32>, dest_item_id: Option<u32>) -> impl IntoView {
    let (Some(source_id), Some(dest_id)) = (source_item_id, dest_item_id) else {
        return view! {
            <PageShell title="Transfer Items Between Projects" width="max-w-4xl">
                <p class="text-center text-gray-600">
                    "Pick a low-stock item and one of its alternatives from the Low Stock report to start a transfer."
                </p>
                <BackButton route=Route::LowStockReport />
            </PageShell>
        }
        .into_any();
    };
    view! { <TransferForm source_id=source_id dest_id=dest_id /> }.into_any()
}

#[component]
fn TransferForm(source_id: u32, dest_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let (source, set_source) = signal::<Option<InventoryItem>>(None);
    let (dest, set_dest) = signal::<Option<InventoryItem>>(None);
    let (fixtures, set_fixtures) = signal(Vec::<Fixture>::new());
    let (fixture, set_fixture) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (remarks, set_remarks) = signal(String::new());
    let (transferring, set_transferring) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            let api = ctx.api();
            let loaded = async {
                let source = api.get_item(source_id).await?;
                let dest = api.get_item(dest_id).await?;
                let fixtures = api.list_fixtures().await?;
                Ok::<_, crate::api::ApiError>((source, dest, fixtures))
            }
            .await;
            match loaded {
                Ok((source, dest, fixtures)) => {
                    if let Some(first) = fixtures.first() {
                        let _ = set_fixture.try_set(first.fixture_id.to_string());
                    }
                    let _ = set_source.try_set(Some(source));
                    let _ = set_dest.try_set(Some(dest));
                    let _ = set_fixtures.try_set(fixtures);
                }
                Err(e) => ctx.report_error("Failed to load items", &e),
            }
        });
    });

    let available = move || source.with(|s| s.as_ref().map_or(0, |s| s.item_current_quantity));

    let submit = move |_| {
        let (fixture_id, qty) = match validate_transfer(&fixture.get_untracked(), &quantity.get_untracked(), available()) {
            Ok(valid) => valid,
            Err(e) => {
                notify::alert(&e.to_string());
                return;
            }
        };
        let Some(employee_id) = ctx.employee_id() else { return };
        let payload = TransferPayload {
            source_item_id: source_id,
            dest_item_id: dest_id,
            quantity: qty,
            employee_id,
            fixture_id,
            remarks: remarks.get_untracked(),
        };
        set_transferring.set(true);
        spawn_local(async move {
            match ctx.api().transfer_item(&payload).await {
                Ok(_) => {
                    log::info!("transferred {} from item {} to item {}", qty, source_id, dest_id);
                    notify::alert("Transfer successful!");
                    ctx.navigate(Route::LowStockReport);
                }
                Err(e) => {
                    let message = e.detail_or("Failed to transfer items").to_string();
                    ctx.report_error(&message, &e);
                }
            }
            let _ = set_transferring.try_set(false);
        });
    };

    let cannot_submit = move || transferring.get() || fixture.get().is_empty() || quantity.get().is_empty();

    view! {
        <PageShell title="Transfer Items Between Projects" width="max-w-4xl">
            <Show when=move || source.get().is_some() && dest.get().is_some() fallback=|| view! { <Loading /> }>
                <div class="space-y-6">
                    {move || source.get().map(|item| view! { <ItemCard item=item title="Source Item (Transfer From)" /> })}
                    {move || dest.get().map(|item| view! { <ItemCard item=item title="Destination Item (Transfer To)" /> })}

                    <div class="bg-white border rounded-xl shadow p-6 space-y-4">
                        <div>
                            <label class="block mb-1 font-semibold text-gray-700">"Fixture"</label>
                            <select
                                class="w-full p-2 border rounded"
                                prop:value=move || fixture.get()
                                on:change=move |ev| set_fixture.set(event_target_value(&ev))
                            >
                                <option value="">"Select Fixture"</option>
                                <For
                                    each=move || fixtures.get()
                                    key=|fx| fx.fixture_id
                                    children=move |fx| view! {
                                        <option value=fx.fixture_id.to_string()>{fx.fixture_name}</option>
                                    }
                                />
                            </select>
                        </div>
                        <div>
                            <label class="block mb-1 font-semibold text-gray-700">
                                {move || format!("Quantity (Max: {})", available())}
                            </label>
                            <input
                                type="number"
                                min="1"
                                max=move || available().to_string()
                                class="w-full p-2 border rounded"
                                placeholder="Enter quantity"
                                prop:value=move || quantity.get()
                                on:input=move |ev| set_quantity.set(event_target_value(&ev))
                            />
                        </div>
                        <div>
                            <label class="block mb-1 font-semibold text-gray-700">"Remarks"</label>
                            <textarea
                                rows="3"
                                class="w-full p-2 border rounded"
                                placeholder="Add any notes about this transfer..."
                                prop:value=move || remarks.get()
                                on:input=move |ev| set_remarks.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="flex justify-center gap-4 mt-6">
                            <button
                                class="px-8 py-2 bg-gray-300 rounded hover:bg-gray-400"
                                on:click=move |_| ctx.navigate(Route::LowStockReport)
                            >
                                "Cancel"
                            </button>
                            <button
                                class="px-8 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                                disabled=cannot_submit
                                on:click=submit
                            >
                                {move || if transferring.get() { "Transferring..." } else { "Confirm Transfer" }}
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </PageShell>
    }
}
