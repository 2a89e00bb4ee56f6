//! Request Flow
//!
//! Project -> test area -> item search -> request form.

use leptos::prelude::*;
use leptos::task::spawn_local;
use mmis_core::catalog::{projects_with_common, test_areas_for};
use mmis_core::models::RequestPayload;
use mmis_core::validation::{non_blank, validate_request};
use mmis_core::{Fixture, InventoryItem};

use crate::components::{BackButton, ChoiceGrid, ItemPicker, Loading, PageShell};
use crate::context::use_app_context;
use crate::notify;
use crate::routes::Route;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RequestProjectPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let projects = Signal::derive(move || projects_with_common(&store.projects().get()));

    view! {
        <PageShell title="Request">
            <p class="text-center font-semibold text-gray-700 mb-6 text-lg">"Select a Project"</p>
            <ChoiceGrid
                options=projects
                on_pick=move |project: String| ctx.navigate(Route::RequestTestArea { project })
            />
            <BackButton route=Route::Dashboard />
        </PageShell>
    }
}

#[component]
pub fn RequestTestAreaPage(project: String) -> impl IntoView {
    let ctx = use_app_context();
    let areas: Vec<String> = test_areas_for(&project).iter().map(|a| a.to_string()).collect();
    let heading = format!("Select a Test Area for {}", project);

    view! {
        <PageShell title="Request">
            <p class="text-center font-semibold text-gray-700 mb-6 text-lg">{heading}</p>
            <ChoiceGrid
                options=Signal::derive(move || areas.clone())
                on_pick=move |test_area: String| {
                    ctx.navigate(Route::RequestSearch { project: project.clone(), test_area })
                }
            />
            <BackButton route=Route::RequestProject />
        </PageShell>
    }
}

#[component]
pub fn RequestSearchPage(project: String, test_area: String) -> impl IntoView {
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
                        log::info!("loaded {} items for {} / {}", loaded.len(), project, test_area);
                        let _ = set_items.try_set(loaded);
                    }
                    Err(e) => ctx.report_error("Failed to load items", &e),
                }
                let _ = set_loading.try_set(false);
            });
        });
    }

    let heading = format!("{} / {}", project, test_area);
    let back = Route::RequestTestArea { project: project.clone() };

    view! {
        <PageShell title="Request" width="max-w-3xl">
            <p class="text-center font-semibold text-gray-700 mb-6 text-lg">{heading}</p>
            <Show when=move || !loading.get() fallback=|| view! { <Loading /> }>
                <ItemPicker
                    items=items
                    name_only=true
                    placeholder="Search item name..."
                    on_pick={
                        let (project, test_area) = (project.clone(), test_area.clone());
                        move |item: InventoryItem| ctx.navigate(Route::RequestItem {
                            item_id: item.item_id,
                            project: project.clone(),
                            test_area: test_area.clone(),
                        })
                    }
                />
                <p class="text-sm text-gray-500 mt-2">{move || format!("{} items available", items.get().len())}</p>
            </Show>
            <BackButton route=back />
        </PageShell>
    }
}

#[component]
pub fn ItemRequestPage(item_id: u32, project: String, test_area: String) -> impl IntoView {
    let ctx = use_app_context();
    let (item, set_item) = signal::<Option<InventoryItem>>(None);
    let (fixtures, set_fixtures) = signal(Vec::<Fixture>::new());
    let (fixture, set_fixture) = signal(String::new());
    let (quantity, set_quantity) = signal(String::new());
    let (remarks, set_remarks) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    Effect::new(move |_| {
        spawn_local(async move {
            match ctx.api().get_item(item_id).await {
                Ok(loaded) => {
                    let _ = set_item.try_set(Some(loaded));
                }
                Err(e) => ctx.report_error("Error loading item", &e),
            }
        });
    });

    {
        let (project, test_area) = (project.clone(), test_area.clone());
        Effect::new(move |_| {
            let (project, test_area) = (project.clone(), test_area.clone());
            spawn_local(async move {
                match ctx.api().filter_fixtures(&project, &test_area).await {
                    Ok(loaded) => {
                        let _ = set_fixtures.try_set(loaded);
                    }
                    Err(e) => log::error!("Error loading fixtures: {}", e),
                }
            });
        });
    }

    let back = Route::RequestSearch {
        project: project.clone(),
        test_area: test_area.clone(),
    };

    let submit = {
        let (project, test_area) = (project.clone(), test_area.clone());
        move |_| {
            let (fixture_id, qty) = match validate_request(&fixture.get_untracked(), &quantity.get_untracked()) {
                Ok(valid) => valid,
                Err(e) => {
                    notify::alert(&e.to_string());
                    return;
                }
            };
            let Some(employee_id) = ctx.employee_id() else { return };
            let payload = RequestPayload {
                employee_id,
                item_id,
                fixture_id,
                quantity: qty,
                test_area: non_blank(&test_area),
                project_name: non_blank(&project),
                transaction_type: "Request".to_string(),
                remarks: non_blank(&remarks.get_untracked()),
            };
            set_submitting.set(true);
            spawn_local(async move {
                match ctx.api().request_item(&payload).await {
                    Ok(_) => {
                        log::info!("requested {} of item {} for fixture {}", qty, item_id, fixture_id);
                        notify::alert("Request submitted!");
                        ctx.navigate(Route::Dashboard);
                    }
                    Err(e) => ctx.report_error("Failed to submit request", &e),
                }
                let _ = set_submitting.try_set(false);
            });
        }
    };

    view! {
        <PageShell title="Request Item" width="max-w-3xl">
            {move || match item.get() {
                None => view! { <Loading /> }.into_any(),
                Some(item) => view! { <RequestItemCard item=item /> }.into_any(),
            }}

            <div class="bg-white border rounded-xl shadow p-6 flex flex-col gap-4 mt-8">
                <label class="font-semibold text-gray-700">"Fixture"</label>
                <select
                    class="border p-2 rounded"
                    prop:value=move || fixture.get()
                    on:change=move |ev| set_fixture.set(event_target_value(&ev))
                >
                    <option value="">"Select Fixture"</option>
                    <For
                        each=move || fixtures.get()
                        key=|fx| fx.fixture_id
                        children=move |fx| view! {
                            <option value=fx.fixture_id.to_string()>{fx.fixture_name}</option>
                        }
                    />
                </select>

                <label class="font-semibold text-gray-700">"Quantity"</label>
                <input
                    type="number"
                    min="1"
                    class="border p-2 rounded"
                    placeholder="Enter quantity"
                    prop:value=move || quantity.get()
                    on:input=move |ev| set_quantity.set(event_target_value(&ev))
                />

                <label class="font-semibold text-gray-700">"Remarks (Optional)"</label>
                <input
                    type="text"
                    class="border p-2 rounded"
                    placeholder="Any notes..."
                    prop:value=move || remarks.get()
                    on:input=move |ev| set_remarks.set(event_target_value(&ev))
                />

                <div class="flex justify-center gap-6 mt-6">
                    <button
                        class="px-6 py-2 bg-gray-300 rounded hover:bg-gray-400"
                        on:click=move |_| ctx.navigate(back.clone())
                    >
                        "Back"
                    </button>
                    <button
                        class="px-6 py-2 bg-green-600 text-white rounded hover:bg-green-700 disabled:opacity-50"
                        disabled=move || submitting.get()
                        on:click=submit
                    >
                        "Submit Request"
                    </button>
                </div>
            </div>
        </PageShell>
    }
}

/// Large-image item summary used on the request form
#[component]
fn RequestItemCard(item: InventoryItem) -> impl IntoView {
    let ctx = use_app_context();
    let image = item.item_image_url.clone().filter(|url| !url.is_empty()).map(|url| ctx.image_url(&url));
    let or_na = |value: Option<String>| value.filter(|v| !v.is_empty()).unwrap_or_else(|| "N/A".to_string());

    view! {
        <div class="bg-white border rounded-xl shadow p-6">
            <div class="flex gap-6">
                {match image {
                    Some(src) => view! {
                        <img src=src alt=item.item_name.clone() class="w-48 h-48 object-cover rounded-lg border shadow-md" />
                    }.into_any(),
                    None => view! {
                        <div class="w-48 h-48 bg-gray-200 rounded-lg border flex items-center justify-center text-gray-400 text-sm shadow-md">
                            "No Image"
                        </div>
                    }.into_any(),
                }}
                <div class="flex-1 space-y-2">
                    <h2 class="text-2xl font-bold mb-3 text-gray-800">{item.item_name.clone()}</h2>
                    <p><strong>"Part Number: "</strong>{or_na(item.item_part_number.clone())}</p>
                    <p><strong>"Description: "</strong>{or_na(item.item_description.clone())}</p>
                    <p><strong>"Manufacturer: "</strong>{or_na(item.item_manufacturer.clone())}</p>
                    <p class="mt-4 font-bold text-green-600 text-lg">
                        {format!("Current Quantity: {}", item.item_current_quantity)}
                    </p>
                </div>
            </div>
        </div>
    }
}
