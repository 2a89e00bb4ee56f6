//! Low Stock Alerts
//!
//! Read-only list of items under their minimum count.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::InventoryItem;

use crate::components::{BackButton, Loading, PageShell};
use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn AlertsPage() -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().low_stock("", "").await {
                Ok(loaded) => {
                    let _ = set_items.try_set(loaded);
                }
                Err(e) => ctx.report_error("Failed to load low stock alerts", &e),
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <PageShell title="Low Stock Alerts" width="max-w-3xl">
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !items.with(Vec::is_empty)
                    fallback=|| view! { <p class="text-center text-gray-500">"All items are above their minimum count."</p> }
                >
                    <div class="space-y-3">
                        <For
                            each=move || items.get()
                            key=|item| item.item_id
                            children=move |item| {
                                let location = [item.project_name.clone(), item.test_area.clone()]
                                    .into_iter()
                                    .flatten()
                                    .filter(|part| !part.is_empty())
                                    .collect::<Vec<_>>()
                                    .join(" / ");
                                view! {
                                    <div class="p-4 bg-red-100 border border-red-300 text-red-700 rounded">
                                        <p class="font-semibold">
                                            {format!("{} - Only {} left!", item.item_name, item.item_current_quantity)}
                                        </p>
                                        <p class="text-sm">
                                            {format!("Minimum: {}", item.item_min_count)}
                                            {(!location.is_empty()).then(|| format!(" | {}", location))}
                                        </p>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
            <BackButton route=Route::Dashboard />
        </PageShell>
    }
}
