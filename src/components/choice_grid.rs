//! Choice Grid Component
//!
//! Card grid used to pick a project or a test area.

use leptos::prelude::*;

#[component]
pub fn ChoiceGrid(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] on_pick: Callback<String>,
    #[prop(optional, into)] empty_text: Option<String>,
) -> impl IntoView {
    let empty_text = empty_text.unwrap_or_else(|| "Nothing to show".to_string());

    view! {
        <Show
            when=move || !options.get().is_empty()
            fallback=move || view! { <p class="text-gray-500 text-center py-8">{empty_text.clone()}</p> }
        >
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-4">
                <For
                    each=move || options.get()
                    key=|option| option.clone()
                    children=move |option| {
                        let label = option.clone();
                        view! {
                            <button
                                class="bg-white p-6 rounded-lg shadow hover:shadow-lg hover:bg-blue-50 text-lg font-semibold text-gray-800 transition"
                                on:click=move |_| on_pick.run(option.clone())
                            >
                                {label}
                            </button>
                        }
                    }
                />
            </div>
        </Show>
    }
}
