//! Add New
//!
//! Chooser plus the new stock, new fixture and edit fixture forms. Admin only.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::catalog::{test_areas_for, ITEM_TYPES};
use mmis_core::forms::{FixtureForm, ItemField, ItemForm};

use crate::api::ImageFile;
use crate::components::{
    BackButton, FilterDropdown, ImageUpload, ItemFieldInput, Loading, PageShell, ProjectSelector,
};
use crate::context::use_app_context;
use crate::notify;
use crate::routes::Route;

#[component]
pub fn AddNewPage() -> impl IntoView {
    let ctx = use_app_context();
    let card = "bg-white border rounded-xl shadow-md p-10 text-center cursor-pointer hover:bg-blue-100 hover:shadow-lg transition-all";

    view! {
        <PageShell title="Add New Stock" width="max-w-3xl">
            <p class="text-center font-semibold text-gray-700 mb-6 text-lg">"What would you like to add?"</p>
            <div class="grid grid-cols-2 gap-8">
                <div class=card on:click=move |_| ctx.navigate(Route::AddNewStock { project: String::new() })>
                    <h2 class="text-2xl font-bold text-gray-800 mb-2">"New Inventory"</h2>
                    <p class="text-gray-600">"Add a new inventory item"</p>
                </div>
                <div class=card on:click=move |_| ctx.navigate(Route::AddNewFixture)>
                    <h2 class="text-2xl font-bold text-gray-800 mb-2">"New Fixtures"</h2>
                    <p class="text-gray-600">"Add a new fixture"</p>
                </div>
            </div>
            <BackButton route=Route::RestockProject />
        </PageShell>
    }
}

/// Test areas offered for whatever project is currently chosen
fn areas_for(project: &str) -> Vec<String> {
    test_areas_for(project).iter().map(|a| a.to_string()).collect()
}

#[component]
pub fn NewStockPage(project: String) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(ItemForm::for_project(Some(project.as_str()).filter(|p| !p.is_empty())));
    let (image, set_image) = signal::<Option<ImageFile>>(None);
    let (saving, set_saving) = signal(false);

    let project_value = Signal::derive(move || form.with(|f| f.project_name.clone()));
    let area_value = Signal::derive(move || form.with(|f| f.test_area.clone()));
    let area_choices = Signal::derive(move || form.with(|f| areas_for(&f.project_name)));
    let type_choices = Signal::derive(|| ITEM_TYPES.iter().map(|t| t.to_string()).collect::<Vec<_>>());

    let submit = move |_| {
        let snapshot = form.get_untracked();
        // Validate before spending an upload on a form that cannot be saved.
        if let Err(e) = snapshot.to_new_item(None, None) {
            notify::alert(&e.to_string());
            return;
        }
        let employee_id = ctx.employee_id();
        let picked = image.get_untracked();
        set_saving.set(true);

        spawn_local(async move {
            let api = ctx.api();
            let mut uploaded = None;
            if let Some(file) = picked {
                match api.upload_image(None, file).await {
                    Ok(url) => uploaded = Some(url),
                    Err(e) => {
                        log::error!("Error uploading image: {}", e);
                        notify::alert("Failed to upload image. Please try again.");
                        if snapshot.item_image_url.trim().is_empty() {
                            let _ = set_saving.try_set(false);
                            return;
                        }
                    }
                }
            }

            let result = match snapshot.to_new_item(employee_id, uploaded) {
                Ok(item) => api.create_item(&item).await,
                Err(e) => {
                    notify::alert(&e.to_string());
                    let _ = set_saving.try_set(false);
                    return;
                }
            };
            match result {
                Ok(created) => {
                    log::info!("created item {} ({})", created.item_id, created.item_name);
                    notify::alert("New stock item added successfully!");
                    ctx.navigate(Route::RestockProject);
                }
                Err(e) => ctx.report_error("Failed to add new stock item", &e),
            }
            let _ = set_saving.try_set(false);
        });
    };

    view! {
        <PageShell title="New Stock">
            <div class="bg-white p-8 border rounded-xl shadow">
                <div class="grid grid-cols-2 gap-6 mb-6">
                    <div class="space-y-4">
                        <ItemFieldInput form=form field=ItemField::Name placeholder="Enter item name" />
                        <div>
                            <label class="block mb-1 font-semibold text-gray-700">"Project Name"</label>
                            <ProjectSelector
                                value=project_value
                                include_common=true
                                placeholder="Select Project Name"
                                on_change=move |name: String| form.update(|f| {
                                    f.project_name = name;
                                    f.test_area.clear();
                                })
                            />
                        </div>
                        <ItemFieldInput form=form field=ItemField::PartNumber />
                        <ItemFieldInput form=form field=ItemField::Description />
                        <div>
                            <label class="block mb-1 font-semibold text-gray-700">"Test Area"</label>
                            <FilterDropdown
                                options=area_choices
                                value=area_value
                                placeholder="Select Test Area"
                                on_change=move |area: String| form.update(|f| f.test_area = area)
                            />
                        </div>
                        <ItemFieldInput form=form field=ItemField::Manufacturer />
                        <ItemFieldInput form=form field=ItemField::ItemType choices=type_choices />
                    </div>
                    <div class="space-y-4">
                        <ItemFieldInput form=form field=ItemField::Unit placeholder="liters, lbs" />
                        <ItemFieldInput form=form field=ItemField::CurrentQuantity numeric=true />
                        <ItemFieldInput form=form field=ItemField::UnitPrice placeholder="e.g. 12.50" />
                        <ItemFieldInput form=form field=ItemField::MinCount numeric=true />
                        <ItemFieldInput form=form field=ItemField::LifeCycle numeric=true />
                        <ItemFieldInput form=form field=ItemField::ImageUrl placeholder="Or paste an image URL" />
                        <ImageUpload on_file={move |file: Option<ImageFile>| set_image.set(file)} />
                    </div>
                </div>

                <div class="flex justify-center gap-6 mt-8">
                    <button
                        class="px-8 py-2 bg-gray-300 rounded hover:bg-gray-400"
                        on:click=move |_| ctx.navigate(Route::AddNew)
                    >
                        "Back"
                    </button>
                    <button
                        class="px-8 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                        disabled=move || saving.get()
                        on:click=submit
                    >
                        "Add Stock"
                    </button>
                </div>
            </div>
        </PageShell>
    }
}

/// Fixture name, project and test area inputs shared by create and edit
#[component]
fn FixtureLocationFields(form: RwSignal<FixtureForm>) -> impl IntoView {
    let project_value = Signal::derive(move || form.with(|f| f.project_name.clone()));
    let area_value = Signal::derive(move || form.with(|f| f.test_area.clone()));
    let area_choices = Signal::derive(move || form.with(|f| areas_for(&f.project_name)));

    view! {
        <div>
            <label class="block mb-2 font-semibold text-gray-700">"Project Name *"</label>
            <ProjectSelector
                value=project_value
                include_common=true
                placeholder="Select Project Name"
                on_change=move |name: String| form.update(|f| {
                    f.project_name = name;
                    f.test_area.clear();
                })
            />
        </div>
        <div>
            <label class="block mb-2 font-semibold text-gray-700">"Test Area *"</label>
            <FilterDropdown
                options=area_choices
                value=area_value
                placeholder="Select Test Area"
                on_change=move |area: String| form.update(|f| f.test_area = area)
            />
        </div>
        <div>
            <label class="block mb-2 font-semibold text-gray-700">"Fixture Name *"</label>
            <input
                type="text"
                class="w-full p-2 border rounded"
                placeholder="e.g., Bondi_ICT_01"
                prop:value=move || form.with(|f| f.fixture_name.clone())
                on:input=move |ev| form.update(|f| f.fixture_name = event_target_value(&ev))
            />
        </div>
    }
}

#[component]
pub fn NewFixturePage() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(FixtureForm::default());
    let (saving, set_saving) = signal(false);

    let submit = move |_| {
        let fixture = match form.get_untracked().to_new_fixture(ctx.employee_id()) {
            Ok(fixture) => fixture,
            Err(e) => {
                notify::alert(&e.to_string());
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match ctx.api().create_fixture(&fixture).await {
                Ok(created) => {
                    log::info!("created fixture {} ({})", created.fixture_id, created.fixture_name);
                    notify::alert("New fixture added successfully!");
                    ctx.navigate(Route::RestockProject);
                }
                Err(e) => ctx.report_error("Failed to add new fixture", &e),
            }
            let _ = set_saving.try_set(false);
        });
    };

    view! {
        <PageShell title="New Fixture" width="max-w-2xl">
            <div class="bg-white p-8 border rounded-xl shadow space-y-6">
                <FixtureLocationFields form=form />
                <div class="flex justify-center gap-6 mt-8">
                    <button
                        class="px-8 py-2 bg-gray-300 rounded hover:bg-gray-400"
                        on:click=move |_| ctx.navigate(Route::AddNew)
                    >
                        "Back"
                    </button>
                    <button
                        class="px-8 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                        disabled=move || saving.get()
                        on:click=submit
                    >
                        "Add Fixture"
                    </button>
                </div>
            </div>
        </PageShell>
    }
}

#[component]
pub fn EditFixturePage(fixture_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(FixtureForm::default());
    let (loaded, set_loaded) = signal(false);
    let (saving, set_saving) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().get_fixture(fixture_id).await {
                Ok(fixture) => {
                    let _ = form.try_set(FixtureForm::from_fixture(&fixture));
                    let _ = set_loaded.try_set(true);
                }
                Err(e) => ctx.report_error("Error loading fixture", &e),
            }
        });
    });

    let submit = move |_| {
        let update = match form.get_untracked().to_update() {
            Ok(update) => update,
            Err(e) => {
                notify::alert(&e.to_string());
                return;
            }
        };
        set_saving.set(true);
        spawn_local(async move {
            match ctx.api().update_fixture(fixture_id, &update).await {
                Ok(_) => {
                    log::info!("updated fixture {}", fixture_id);
                    notify::alert("Fixture updated successfully!");
                    ctx.navigate(Route::CurrentInventory);
                }
                Err(e) => {
                    let message = format!("Failed to update fixture: {}", e);
                    ctx.report_error(&message, &e);
                }
            }
            let _ = set_saving.try_set(false);
        });
    };

    view! {
        <PageShell title="Edit Fixture" width="max-w-2xl">
            <Show when=move || loaded.get() fallback=|| view! { <Loading /> }>
                <div class="bg-white p-8 border rounded-xl shadow space-y-6">
                    <div>
                        <label class="block mb-2 font-semibold text-gray-700">"Fixture ID"</label>
                        <input type="text" class="w-full p-2 border rounded bg-gray-100" readonly prop:value=fixture_id.to_string() />
                    </div>
                    <FixtureLocationFields form=form />
                    <div>
                        <label class="block mb-2 font-semibold text-gray-700">"Asset Tag *"</label>
                        <input
                            type="text"
                            class="w-full p-2 border rounded"
                            placeholder="Enter asset tag"
                            prop:value=move || form.with(|f| f.asset_tag.clone())
                            on:input=move |ev| form.update(|f| f.asset_tag = event_target_value(&ev))
                        />
                    </div>
                    <div>
                        <label class="block mb-2 font-semibold text-gray-700">"Fixture Serial Number *"</label>
                        <input
                            type="text"
                            class="w-full p-2 border rounded"
                            placeholder="Enter fixture serial number"
                            prop:value=move || form.with(|f| f.fixture_serial_number.clone())
                            on:input=move |ev| form.update(|f| f.fixture_serial_number = event_target_value(&ev))
                        />
                    </div>
                    <div class="flex justify-center gap-6 mt-8">
                        <button
                            class="px-8 py-2 bg-gray-300 rounded hover:bg-gray-400"
                            on:click=move |_| ctx.navigate(Route::CurrentInventory)
                        >
                            "Back"
                        </button>
                        <button
                            class="px-8 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                            disabled=move || saving.get()
                            on:click=submit
                        >
                            "Update Fixture"
                        </button>
                    </div>
                </div>
            </Show>
        </PageShell>
    }
}
