use leptos::prelude::*;

use crate::context::use_app_context;
use crate::routes::Route;

/// Centered grey "Back" button at the foot of a page
#[component]
pub fn BackButton(route: Route) -> impl IntoView {
    let ctx = use_app_context();
    view! {
        <div class="flex justify-center mt-12">
            <button
                class="px-8 py-2 bg-gray-300 rounded hover:bg-gray-400 shadow"
                on:click=move |_| ctx.navigate(route.clone())
            >
                "Back"
            </button>
        </div>
    }
}
