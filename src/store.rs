//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use mmis_core::catalog;
use mmis_core::ValidationError;
use reactive_stores::Store;

use crate::session;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Default projects plus the user's custom ones, sorted
    pub projects: Vec<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            projects: session::load_projects(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn store_set_projects(store: &AppStore, projects: Vec<String>) {
    session::save_projects(&projects);
    store.projects().set(projects);
}

/// Add a custom project and persist the list
pub fn store_add_project(store: &AppStore, name: &str) -> Result<String, ValidationError> {
    let updated = catalog::add_project(&store.projects().get_untracked(), name)?;
    store_set_projects(store, updated);
    log::info!("added project {}", name.trim());
    Ok(name.trim().to_string())
}

/// Remove a custom project and persist the list
pub fn store_remove_project(store: &AppStore, name: &str) -> Result<(), ValidationError> {
    let updated = catalog::remove_project(&store.projects().get_untracked(), name)?;
    store_set_projects(store, updated);
    log::info!("removed project {}", name);
    Ok(())
}
