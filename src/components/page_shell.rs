use leptos::prelude::*;

use crate::components::Header;

/// Header, blue title banner and a centered content column
#[component]
pub fn PageShell(
    #[prop(into)] title: String,
    #[prop(optional, into)] width: Option<String>,
    children: Children,
) -> impl IntoView {
    let column = format!("{} mx-auto px-6 pb-12", width.unwrap_or_else(|| "max-w-5xl".to_string()));

    view! {
        <div class="min-h-screen bg-gray-50">
            <Header />
            <div class="w-full bg-blue-600 text-white text-center py-4 mb-8 shadow-md">
                <h1 class="text-3xl font-bold">{title}</h1>
            </div>
            <div class=column>{children()}</div>
        </div>
    }
}

#[component]
pub fn Loading() -> impl IntoView {
    view! { <h2 class="text-center mt-10 text-gray-500">"Loading..."</h2> }
}
