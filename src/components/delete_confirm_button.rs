//! Delete Confirm Button Component
//!
//! Inline delete with a confirm/cancel step.

use leptos::prelude::*;

/// Shows a × button; once clicked it turns into "Delete?" with ✓/✗.
///
/// # Arguments
/// * `button_class` - CSS class for the initial × button
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);

    // mousedown instead of click so a parent input's blur does not close the list first
    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                title="Delete"
                on:mousedown=move |ev| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                "×"
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="inline-flex items-center gap-1 text-sm">
                <span class="text-red-600">"Delete?"</span>
                <button
                    type="button"
                    class="px-1 text-green-700 hover:bg-green-100 rounded"
                    on:mousedown=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button
                    type="button"
                    class="px-1 text-gray-600 hover:bg-gray-100 rounded"
                    on:mousedown=move |ev| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        set_confirm_delete.set(false);
                    }
                >
                    "✗"
                </button>
            </span>
        </Show>
    }
}
