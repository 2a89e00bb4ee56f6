//! Activity History

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::activity::signed_quantity;
use mmis_core::models::TransactionFilter;
use mmis_core::time::format_timestamp;
use mmis_core::Transaction;

use crate::components::{BackButton, Loading, PageShell};
use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn ActivityPage() -> impl IntoView {
    let ctx = use_app_context();
    let (transactions, set_transactions) = signal(Vec::<Transaction>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().all_transactions(&TransactionFilter::default()).await {
                Ok(loaded) => {
                    let _ = set_transactions.try_set(loaded);
                }
                Err(e) => ctx.report_error("Failed to load activity history", &e),
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <PageShell title="Recent Activity History" width="max-w-6xl">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !transactions.with(Vec::is_empty)
                    fallback=|| view! { <p class="text-gray-500">"No activity yet."</p> }
                >
                    <div class="overflow-x-auto bg-white border rounded-xl shadow">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-100">
                                <tr>
                                    <th class="p-3 text-left">"Employee"</th>
                                    <th class="p-3 text-left">"Item"</th>
                                    <th class="p-3 text-left">"Description"</th>
                                    <th class="p-3 text-left">"Fixture"</th>
                                    <th class="p-3 text-left">"Quantity"</th>
                                    <th class="p-3 text-left">"Date"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || transactions.get()
                                    key=|tx| tx.transaction_id
                                    children=move |tx| {
                                        let (quantity, tone) = signed_quantity(&tx.kind(), tx.quantity_used);
                                        view! {
                                            <tr class="border-t hover:bg-gray-50">
                                                <td class="p-3">{tx.employee_name.clone().unwrap_or_default()}</td>
                                                <td class="p-3">{tx.item_name.clone().unwrap_or_default()}</td>
                                                <td class="p-3 max-w-xs truncate">{tx.item_description.clone().unwrap_or_default()}</td>
                                                <td class="p-3">{tx.fixture_name.clone().unwrap_or_default()}</td>
                                                <td class=format!("p-3 font-semibold {}", tone.css_class())>{quantity}</td>
                                                <td class="p-3">{format_timestamp(&tx.created_at)}</td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>
            <BackButton route=Route::Dashboard />
        </PageShell>
    }
}
