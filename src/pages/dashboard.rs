//! Dashboard
//!
//! Welcome banner, stock counters and navigation tiles.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::Header;
use crate::context::use_app_context;
use crate::routes::Route;

struct Tile {
    title: &'static str,
    description: &'static str,
    route: Route,
    admin_only: bool,
}

fn tiles() -> Vec<Tile> {
    vec![
        Tile { title: "Request", description: "Take items for a fixture", route: Route::RequestProject, admin_only: false },
        Tile { title: "Return", description: "Give back requested items", route: Route::ReturnList, admin_only: false },
        Tile { title: "Restock", description: "Add stock or new items", route: Route::RestockProject, admin_only: true },
        Tile { title: "Low Stock Alerts", description: "Items below minimum", route: Route::Alerts, admin_only: false },
        Tile { title: "Reports", description: "Inventory, spending and more", route: Route::Reports, admin_only: true },
        Tile { title: "Activity History", description: "Every stock movement", route: Route::Activity, admin_only: false },
        Tile { title: "Profile", description: "Your account", route: Route::Profile, admin_only: false },
    ]
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let (employee_name, set_employee_name) = signal(String::new());
    let (item_count, set_item_count) = signal::<Option<usize>>(None);
    let (low_count, set_low_count) = signal::<Option<usize>>(None);

    Effect::new(move |_| {
        let Some(employee_id) = ctx.employee_id() else { return };
        spawn_local(async move {
            let api = ctx.api();
            match api.get_employee(employee_id).await {
                Ok(employee) => {
                    let _ = set_employee_name.try_set(employee.employee_name);
                }
                Err(e) => log::error!("Error loading employee: {}", e),
            }
            match api.list_inventory("", "").await {
                Ok(items) => {
                    let _ = set_item_count.try_set(Some(items.len()));
                }
                Err(e) => log::error!("Error loading inventory: {}", e),
            }
            match api.low_stock("", "").await {
                Ok(items) => {
                    let _ = set_low_count.try_set(Some(items.len()));
                }
                Err(e) => log::error!("Error loading low stock: {}", e),
            }
        });
    });

    let count_text = |count: Option<usize>| count.map(|c| c.to_string()).unwrap_or_else(|| "-".to_string());
    let is_admin = ctx.is_admin();

    view! {
        <div class="min-h-screen bg-gray-100">
            <Header />
            <main class="max-w-6xl mx-auto p-6">
                <div class="bg-blue-600 text-white rounded-xl p-8 shadow mb-10">
                    <h1 class="text-4xl font-bold tracking-wide">"MMIS"</h1>
                    <p class="text-lg mt-3">
                        "Welcome back, " <span class="font-semibold">{move || employee_name.get()}</span> " 👋"
                    </p>
                    <p class="opacity-80 mt-1">"Manage machine maintenance inventory with ease."</p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-6 mb-10">
                    <div class="p-6 bg-white rounded-lg shadow">
                        <h3 class="text-lg font-bold">"Inventory Items"</h3>
                        <p class="text-4xl font-semibold mt-2 text-blue-600">{move || count_text(item_count.get())}</p>
                    </div>
                    <div class="p-6 bg-white rounded-lg shadow">
                        <h3 class="text-lg font-bold">"Low Stock Alerts"</h3>
                        <p class="text-4xl font-semibold mt-2 text-red-500">{move || count_text(low_count.get())}</p>
                    </div>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    {tiles()
                        .into_iter()
                        .filter(|tile| is_admin || !tile.admin_only)
                        .map(|tile| {
                            let route = tile.route.clone();
                            view! {
                                <button
                                    class="p-6 bg-white rounded-lg shadow hover:shadow-lg hover:bg-blue-50 text-left transition"
                                    on:click=move |_| ctx.navigate(route.clone())
                                >
                                    <h3 class="text-xl font-bold text-gray-800">{tile.title}</h3>
                                    <p class="text-gray-500 mt-1">{tile.description}</p>
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </main>
        </div>
    }
}
