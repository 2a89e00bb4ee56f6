use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

/// Shown when a signed-in user opens an admin-only page
#[component]
pub fn AccessDenied(feature: &'static str) -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="min-h-screen bg-gray-50 flex items-center justify-center">
            <div class="bg-white shadow-lg rounded-lg p-8 max-w-md text-center">
                <div class="text-6xl mb-4">"🔒"</div>
                <h2 class="text-2xl font-bold text-gray-800 mb-4">"Access Denied"</h2>
                <p class="text-gray-600 mb-6">
                    {format!("You need admin access level to use {}.", feature)}
                </p>
                <p class="text-sm text-gray-500 mb-6">
                    "Please contact your administrator if you believe you should have access."
                </p>
                <button
                    class="px-6 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    on:click=move |_| ctx.navigate(Route::Dashboard)
                >
                    "Go to Dashboard"
                </button>
            </div>
        </div>
    }
}
