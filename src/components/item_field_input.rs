use leptos::prelude::*;
use mmis_core::forms::{ItemField, ItemForm};

/// Labelled input bound to one field of an [`ItemForm`].
///
/// When `choices` is given and the field is editable it renders a `<select>`
/// with those options instead of a text box.
#[component]
pub fn ItemFieldInput(
    form: RwSignal<ItemForm>,
    field: ItemField,
    #[prop(optional, into)] editable: Option<Signal<bool>>,
    #[prop(optional)] numeric: bool,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] choices: Option<Signal<Vec<String>>>,
) -> impl IntoView {
    let editable = editable.unwrap_or_else(|| Signal::derive(|| true));
    let value = move || form.with(|f| f.get(field).to_string());
    let input_class = move || {
        if editable.get() {
            "w-full p-2 border rounded"
        } else {
            "w-full p-2 border rounded bg-gray-100"
        }
    };

    let input = move || match choices.filter(|_| editable.get()) {
        Some(choices) => view! {
            <select
                class="w-full p-2 border rounded"
                prop:value=value
                on:change=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            >
                <option value="">{format!("Select {}", field.label())}</option>
                <For
                    each=move || choices.get()
                    key=|choice| choice.clone()
                    children=move |choice| view! { <option value=choice.clone()>{choice.clone()}</option> }
                />
            </select>
        }
        .into_any(),
        None => view! {
            <input
                type=if numeric { "number" } else { "text" }
                min=numeric.then_some("0")
                class=input_class
                placeholder=placeholder.clone().unwrap_or_default()
                readonly=move || !editable.get()
                prop:value=value
                on:input=move |ev| form.update(|f| f.set(field, event_target_value(&ev)))
            />
        }
        .into_any(),
    };

    view! {
        <div>
            <label class="block mb-1 font-semibold text-gray-700">{field.label()}</label>
            {input}
        </div>
    }
}
