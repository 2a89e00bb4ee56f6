//! Header Component
//!
//! Top bar with the MMIS brand link, sign-out and an initials avatar.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::initials;

use crate::context::use_app_context;
use crate::routes::Route;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();
    let (employee_name, set_employee_name) = signal(String::new());

    // Token name first, then the profile name once it loads
    Effect::new(move |_| {
        let Some(session) = ctx.session.get() else { return };
        if let Some(name) = session.claims.display_name() {
            set_employee_name.set(name.to_string());
        }
        let employee_id = session.employee_id();
        spawn_local(async move {
            match ctx.api().get_employee(employee_id).await {
                Ok(employee) => {
                    let _ = set_employee_name.try_set(employee.employee_name);
                }
                Err(e) => log::warn!("could not load employee {}: {}", employee_id, e),
            }
        });
    });

    view! {
        <header class="bg-white shadow p-4 flex justify-between items-center">
            <span
                class="text-2xl font-bold text-blue-600 cursor-pointer"
                on:click=move |_| ctx.navigate(Route::Dashboard)
            >
                "MMIS"
            </span>
            <div class="flex items-center gap-4">
                <button
                    class="px-4 py-2 bg-red-500 text-white rounded-lg hover:bg-red-600 shadow"
                    on:click=move |_| ctx.sign_out()
                >
                    "Sign out"
                </button>
                <div class="w-12 h-12 bg-gray-300 rounded-full flex items-center justify-center font-semibold text-gray-800 text-lg">
                    {move || initials(&employee_name.get())}
                </div>
            </div>
        </header>
    }
}
