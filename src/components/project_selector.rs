//! Project Selector Component
//!
//! Searchable project dropdown. Unknown names can be added as custom
//! projects; custom projects can be deleted again.

use leptos::prelude::*;
use mmis_core::catalog::{self, filter_options, is_custom_project};

use crate::components::filter_dropdown::close_after_blur;
use crate::components::DeleteConfirmButton;
use crate::notify;
use crate::store::{store_add_project, store_remove_project, use_app_store, AppStateStoreFields};

#[component]
pub fn ProjectSelector(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    /// Offer "Add 'x' as new project" for unknown names
    #[prop(default = true)]
    allow_add: bool,
    /// Also list the Common project
    #[prop(optional)]
    include_common: bool,
    #[prop(optional, into)] placeholder: Option<String>,
) -> impl IntoView {
    let store = use_app_store();
    let (query, set_query) = signal(value.get_untracked());
    let (open, set_open) = signal(false);

    Effect::new(move |_| set_query.set(value.get()));

    let projects = move || {
        let projects = store.projects().get();
        if include_common {
            catalog::projects_with_common(&projects)
        } else {
            projects
        }
    };
    let matches = move || filter_options(&projects(), &query.get());
    let offer_add = move || {
        let typed = query.get();
        allow_add && typed.trim() != value.get() && catalog::is_new_project_name(&projects(), &typed)
    };

    let pick = move |choice: String| {
        set_query.set(choice.clone());
        set_open.set(false);
        on_change.run(choice);
    };

    let add_typed = move || match store_add_project(&store, &query.get_untracked()) {
        Ok(name) => pick(name),
        Err(e) => notify::alert(&e.to_string()),
    };

    let remove = move |name: String| {
        if let Err(e) = store_remove_project(&store, &name) {
            notify::alert(&e.to_string());
            return;
        }
        if value.get_untracked() == name {
            pick(String::new());
        }
    };

    view! {
        <div class="relative">
            <input
                type="text"
                class="w-full border rounded px-3 py-2"
                autocomplete="off"
                placeholder=placeholder.unwrap_or_else(|| "Select Project Name".to_string())
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
                    <For
                        each=matches
                        key=|project| project.clone()
                        children=move |project| {
                            let label = project.clone();
                            let for_delete = project.clone();
                            let custom = is_custom_project(&project);
                            view! {
                                <div class="flex items-center justify-between px-3 py-2 hover:bg-blue-50">
                                    <button
                                        type="button"
                                        class="flex-1 text-left"
                                        on:mousedown=move |ev| {
                                            ev.prevent_default();
                                            pick(project.clone());
                                        }
                                    >
                                        {label}
                                    </button>
                                    <Show when=move || custom>
                                        <DeleteConfirmButton
                                            button_class="px-2 text-red-500 hover:text-red-700"
                                            on_confirm={
                                                let name = for_delete.clone();
                                                move |_| remove(name.clone())
                                            }
                                        />
                                    </Show>
                                </div>
                            }
                        }
                    />
                    <Show when=offer_add>
                        <button
                            type="button"
                            class="w-full text-left px-3 py-2 text-blue-600 hover:bg-blue-50 border-t"
                            on:mousedown=move |ev| {
                                ev.prevent_default();
                                add_typed();
                            }
                        >
                            {move || format!("Add \"{}\" as new project", query.get().trim())}
                        </button>
                    </Show>
                    <Show when=move || matches().is_empty() && !offer_add()>
                        <p class="px-3 py-2 text-gray-500">"No projects found"</p>
                    </Show>
                </div>
            </Show>
        </div>
    }
}
