//! Reports Hub

use leptos::prelude::*;

use crate::components::{BackButton, PageShell};
use crate::context::use_app_context;
use crate::routes::Route;

fn reports() -> [(&'static str, &'static str, Route); 4] {
    [
        ("Current Inventory", "Every item in stock, plus fixtures", Route::CurrentInventory),
        ("Low Stock", "Items below minimum and where to transfer from", Route::LowStockReport),
        ("Spending", "Inventory value and net spending by item", Route::SpendingReport),
        ("Customized Report", "Filter transactions and export them", Route::CustomizedReport),
    ]
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <PageShell title="Reports" width="max-w-4xl">
            <div class="grid grid-cols-2 gap-6">
                {reports()
                    .into_iter()
                    .map(|(title, description, route)| view! {
                        <div
                            class="bg-white border rounded-xl shadow-md p-8 cursor-pointer hover:bg-blue-100 hover:shadow-lg transition-all"
                            on:click=move |_| ctx.navigate(route.clone())
                        >
                            <h2 class="text-xl font-bold text-gray-800 mb-2">{title}</h2>
                            <p class="text-gray-600">{description}</p>
                        </div>
                    })
                    .collect_view()}
            </div>
            <BackButton route=Route::Dashboard />
        </PageShell>
    }
}
