//! Filter Dropdown Component
//!
//! Searchable single-choice dropdown with a "Clear Filter" entry.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::catalog::filter_options;

/// Delay before a blurred dropdown closes, so option clicks still land
pub const BLUR_CLOSE_MS: u32 = 200;

/// Close a dropdown after the blur delay
pub fn close_after_blur(set_open: WriteSignal<bool>) {
    spawn_local(async move {
        TimeoutFuture::new(BLUR_CLOSE_MS).await;
        let _ = set_open.try_set(false);
    });
}

#[component]
pub fn FilterDropdown(
    #[prop(into)] options: Signal<Vec<String>>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let (query, set_query) = signal(value.get_untracked());
    let (open, set_open) = signal(false);

    // Follow the selected value when it changes from outside
    Effect::new(move |_| set_query.set(value.get()));

    let matches = move || filter_options(&options.get(), &query.get());

    let pick = move |choice: String| {
        set_query.set(choice.clone());
        set_open.set(false);
        on_change.run(choice);
    };

    view! {
        <div class="relative">
            <input
                type="text"
                class="w-full border rounded px-3 py-2"
                autocomplete="off"
                placeholder=placeholder.unwrap_or_else(|| "All".to_string())
                prop:value=move || query.get()
                on:focus=move |_| set_open.set(true)
                on:input=move |ev| {
                    set_query.set(event_target_value(&ev));
                    set_open.set(true);
                }
                on:blur=move |_| close_after_blur(set_open)
            />
            <Show when=move || open.get()>
                <div class="absolute z-10 mt-1 w-full bg-white border rounded shadow-lg max-h-60 overflow-y-auto">
                    <Show when=move || !value.get().is_empty()>
                        <button
                            type="button"
                            class="w-full text-left px-3 py-2 text-red-600 hover:bg-red-50 border-b"
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                pick(String::new());
                            }
                        >
                            "Clear Filter"
                        </button>
                    </Show>
                    <For
                        each=matches
                        key=|option| option.clone()
                        children=move |option| {
                            let label = option.clone();
                            view! {
                                <button
                                    type="button"
                                    class="w-full text-left px-3 py-2 hover:bg-blue-50"
                                    on:mousedown=move |ev| {
                                        ev.prevent_default();
                                        pick(option.clone());
                                    }
                                >
                                    {label}
                                </button>
                            }
                        }
                    />
                    <Show when=move || matches().is_empty()>
                        <p class="px-3 py-2 text-gray-500">"No matches"</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
