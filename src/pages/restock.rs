//! Restock Flow
//!
//! Project -> test area -> item search -> edit & restock. Admin only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::catalog::{all_test_areas, filter_options, projects_with_common, test_areas_for, ITEM_TYPES};
use mmis_core::forms::{ItemField, ItemForm};
use mmis_core::models::RestockPayload;
use mmis_core::validation::validate_restock_quantity;
use mmis_core::InventoryItem;

use crate::api::ImageFile;
use crate::components::{BackButton, ChoiceGrid, ImageUpload, ItemFieldInput, ItemPicker, Loading, PageShell};
use crate::context::use_app_context;
use crate::notify;
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RestockProjectPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let (search, set_search) = signal(String::new());
    let projects = Signal::derive(move || filter_options(&store.projects().get(), &search.get()));

    view! {
        <PageShell title="Restock">
            <p class="text-center font-semibold text-gray-700 mb-6 text-lg">"Select Project Name"</p>
            <div class="mb-6 flex items-center gap-4">
                <input
                    type="text"
                    class="flex-1 p-3 border rounded shadow-sm"
                    placeholder="Project Names"
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
                <button
                    class="px-6 py-3 bg-blue-600 text-white rounded hover:bg-blue-700 shadow"
                    on:click=move |_| ctx.navigate(Route::AddNew)
                >
                    "Add New Stock"
                </button>
            </div>
            <ChoiceGrid
                options=projects
                empty_text="No projects found matching your search"
                on_pick=move |project: String| ctx.navigate(Route::RestockTestArea { project })
            />
            <BackButton route=Route::Dashboard />
        </PageShell>
    }
}

#[component]
pub fn RestockTestAreaPage(project: String) -> impl IntoView {
    let ctx = use_app_context();
    let areas: Vec<String> = test_areas_for(&project).iter().map(|a| a.to_string()).collect();
    let heading = format!("Project: {}", project);

    view! {
        <PageShell title="Restock">
            <p class="text-center font-semibold text-blue-600 mb-2 text-lg">{heading}</p>
            <p class="text-center font-semibold text-gray-700 mb-6 text-lg">"Select Test Area"</p>
            <ChoiceGrid
                options=Signal::derive(move || areas.clone())
                on_pick=move |test_area: String| {
                    ctx.navigate(Route::RestockItems { project: project.clone(), test_area })
                }
            />
            <BackButton route=Route::RestockProject />
        </PageShell>
    }
}

#[component]
pub fn RestockItemsPage(project: String, test_area: String) -> impl IntoView {
    let ctx = use_app_context();
    let (items, set_items) = signal(Vec::<InventoryItem>::new());
    let (loading, set_loading) = signal(true);

    {
        let (project, test_area) = (project.clone(), test_area.clone());
        Effect::new(move |_| {
            let (project, test_area) = (project.clone(), test_area.clone());
            spawn_local(async move {
                match ctx.api().list_inventory(&project, &test_area).await {
                    Ok(loaded) => {
                        let _ = set_items.try_set(loaded);
                    }
                    Err(e) => ctx.report_error("Failed to load items", &e),
                }
                let _ = set_loading.try_set(false);
            });
        });
    }

    let heading = format!("Project: {} / Test Area: {}", project, test_area);
    let back = Route::RestockTestArea { project: project.clone() };

    view! {
        <PageShell title="Search Inventory" width="max-w-4xl">
            <p class="text-center text-gray-700 font-semibold text-lg mb-6">{heading}</p>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <ItemPicker
                    items=items
                    placeholder="Search by name, part number, description or ID..."
                    on_pick={
                        let (project, test_area) = (project.clone(), test_area.clone());
                        move |item: InventoryItem| ctx.navigate(Route::RestockEdit {
                            item_id: item.item_id,
                            project: project.clone(),
                            test_area: test_area.clone(),
                        })
                    }
                />
                <Show when=move || items.get().is_empty()>
                    <p class="text-center text-gray-500 py-6">"No items found for this project and test area."</p>
                </Show>
            </Show>
            <BackButton route=back />
        </PageShell>
    }
}

const EDIT_LEFT: [ItemField; 4] = [ItemField::Name, ItemField::PartNumber, ItemField::Description, ItemField::Manufacturer];
const EDIT_RIGHT: [ItemField; 3] = [ItemField::Unit, ItemField::UnitPrice, ItemField::LifeCycle];

#[component]
pub fn RestockEditPage(item_id: u32, project: String, test_area: String) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let form = RwSignal::new(ItemForm::default());
    let (loaded, set_loaded) = signal(false);
    let (edit_mode, set_edit_mode) = signal(false);
    let (image, set_image) = signal::<Option<ImageFile>>(None);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().get_item(item_id).await {
                Ok(item) => {
                    let _ = form.try_set(ItemForm::from_item(&item));
                    let _ = set_loaded.try_set(true);
                }
                Err(e) => ctx.report_error("Error loading item", &e),
            }
        });
    });

    let editable = Signal::derive(move || edit_mode.get());
    let project_choices = Signal::derive(move || projects_with_common(&store.projects().get()));
    let area_choices = Signal::derive(all_test_areas);
    let type_choices = Signal::derive(|| ITEM_TYPES.iter().map(|t| t.to_string()).collect::<Vec<_>>());
    let current_image = Signal::derive(move || {
        form.with(|f| (!f.item_image_url.is_empty()).then(|| ctx.image_url(&f.item_image_url)))
    });

    let done = Route::RestockItems { project, test_area };

    let submit = {
        let done = done.clone();
        move |_| {
            let snapshot = form.get_untracked();
            let quantity = match validate_restock_quantity(&snapshot.quantity_to_add) {
                Ok(quantity) => quantity,
                Err(e) => {
                    notify::alert(&e.to_string());
                    return;
                }
            };
            let editing = edit_mode.get_untracked();
            let update = if editing {
                match snapshot.to_update() {
                    Ok(update) => Some(update),
                    Err(e) => {
                        notify::alert(&e.to_string());
                        return;
                    }
                }
            } else {
                None
            };
            let Some(employee_id) = ctx.employee_id() else { return };
            let picked = image.get_untracked();
            let done = done.clone();
            set_saving.set(true);

            spawn_local(async move {
                let api = ctx.api();
                let mut update = update;

                if let (Some(file), true) = (picked, editing) {
                    match api.upload_image(Some(item_id), file).await {
                        Ok(url) => {
                            if let Some(update) = update.as_mut() {
                                update.item_image_url = Some(url.clone());
                            }
                            let _ = form.try_update(|f| f.item_image_url = url);
                            let _ = set_image.try_set(None);
                        }
                        Err(e) => {
                            ctx.report_error("Failed to upload image. Please try again.", &e);
                            let _ = set_saving.try_set(false);
                            return;
                        }
                    }
                }

                let result = async {
                    if let Some(update) = &update {
                        api.update_item(item_id, update).await?;
                    }
                    api.restock_item(&RestockPayload {
                        item_id,
                        quantity,
                        remarks: snapshot.remarks.clone(),
                        employee_id,
                    })
                    .await
                }
                .await;

                match result {
                    Ok(_) => {
                        log::info!("restocked item {} with {}", item_id, quantity);
                        notify::alert(if editing {
                            "Item updated and restocked successfully!"
                        } else {
                            "Item restocked successfully!"
                        });
                        ctx.navigate(done);
                    }
                    Err(e) => {
                        let message = format!("Failed to restock item: {}", e);
                        ctx.report_error(&message, &e);
                    }
                }
                let _ = set_saving.try_set(false);
            });
        }
    };

    view! {
        <PageShell title="Restock">
            <Show when=move || loaded.get() fallback=|| view! { <Loading /> }>
                <div class="flex justify-end mb-4">
                    <button
                        class=move || if edit_mode.get() {
                            "px-6 py-2 rounded shadow bg-gray-500 text-white hover:bg-gray-600"
                        } else {
                            "px-6 py-2 rounded shadow bg-blue-600 text-white hover:bg-blue-700"
                        }
                        on:click=move |_| set_edit_mode.update(|on| *on = !*on)
                    >
                        {move || if edit_mode.get() { "Cancel Edit" } else { "Edit Details" }}
                    </button>
                </div>

                <div class="bg-white p-8 border rounded-xl shadow">
                    <div class="grid grid-cols-2 gap-6 mb-6">
                        <div class="space-y-4">
                            <div>
                                <label class="block mb-1 font-semibold text-gray-700">"Item ID"</label>
                                <input type="text" class="w-full p-2 border rounded bg-gray-100" readonly prop:value=item_id.to_string() />
                            </div>
                            {EDIT_LEFT.into_iter().map(|field| view! { <ItemFieldInput form=form field=field editable=editable /> }).collect_view()}
                            <ItemFieldInput form=form field=ItemField::TestArea editable=editable choices=area_choices />
                            <ItemFieldInput form=form field=ItemField::Project editable=editable choices=project_choices />
                        </div>
                        <div class="space-y-4">
                            {EDIT_RIGHT.into_iter().map(|field| view! { <ItemFieldInput form=form field=field editable=editable /> }).collect_view()}
                            <ItemFieldInput form=form field=ItemField::MinCount editable=editable numeric=true />
                            <ItemFieldInput form=form field=ItemField::ItemType editable=editable choices=type_choices />
                            <ItemFieldInput form=form field=ItemField::CurrentQuantity editable=Signal::derive(|| false) />
                            <Show
                                when=move || edit_mode.get()
                                fallback=move || current_image.get().map(|src| view! {
                                    <img src=src alt="Item" class="w-40 h-40 object-cover rounded border" />
                                })
                            >
                                <label class="block mb-1 font-semibold text-gray-700">"Item Image"</label>
                                <ImageUpload
                                    on_file={move |file: Option<ImageFile>| set_image.set(file)}
                                    current_url=current_image
                                />
                            </Show>
                        </div>
                    </div>

                    <div class="border-t pt-6 grid grid-cols-2 gap-6">
                        <ItemFieldInput form=form field=ItemField::QuantityToAdd numeric=true placeholder="Enter quantity to add" />
                        <ItemFieldInput form=form field=ItemField::Remarks placeholder="Optional notes" />
                    </div>

                    <div class="flex justify-center gap-6 mt-8">
                        <button
                            class="px-8 py-2 bg-gray-300 rounded hover:bg-gray-400"
                            on:click={
                                let done = done.clone();
                                move |_| ctx.navigate(done.clone())
                            }
                        >
                            "Back"
                        </button>
                        <button
                            class="px-8 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                            disabled=move || saving.get()
                            on:click=submit.clone()
                        >
                            {move || if edit_mode.get() { "Update & Restock" } else { "Restock" }}
                        </button>
                    </div>
                </div>
            </Show>
        </PageShell>
    }
}
