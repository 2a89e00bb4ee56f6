use leptos::prelude::*;
use mmis_core::catalog::{all_test_areas, projects_with_common, test_areas_for};

use super::FilterDropdown;
use crate::store::{use_app_store, AppStateStoreFields};

/// Project and test-area filter dropdowns. Changing the project clears the test area.
#[component]
pub fn LocationFilters(
    project: RwSignal<String>,
    test_area: RwSignal<String>,
    /// Runs after either filter changes
    #[prop(optional, into)]
    on_change: Option<Callback<()>>,
) -> impl IntoView {
    let store = use_app_store();
    let notify = move || {
        if let Some(on_change) = on_change {
            on_change.run(());
        }
    };

    let project_options = Signal::derive(move || projects_with_common(&store.projects().get()));
    let area_options = Signal::derive(move || {
        let project = project.get();
        if project.is_empty() {
            all_test_areas()
        } else {
            test_areas_for(&project).iter().map(|a| a.to_string()).collect()
        }
    });

    view! {
        <div>
            <label class="block mb-1 font-semibold text-gray-700">"Project"</label>
            <FilterDropdown
                options=project_options
                value=project
                placeholder="All Projects"
                on_change=move |value: String| {
                    project.set(value);
                    test_area.set(String::new());
                    notify();
                }
            />
        </div>
        <div>
            <label class="block mb-1 font-semibold text-gray-700">"Test Area"</label>
            <FilterDropdown
                options=area_options
                value=test_area
                placeholder="All Test Areas"
                on_change=move |value: String| {
                    test_area.set(value);
                    notify();
                }
            />
        </div>
    }
}
