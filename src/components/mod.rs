//! UI Components
//!
//! Reusable Leptos components.

mod access_denied;
mod back_button;
mod choice_grid;
mod delete_confirm_button;
pub(crate) mod filter_dropdown;
mod header;
mod image_upload;
mod item_card;
mod item_field_input;
mod item_picker;
mod location_filters;
mod page_shell;
mod project_selector;

pub use access_denied::AccessDenied;
pub use back_button::BackButton;
pub use choice_grid::ChoiceGrid;
pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_dropdown::FilterDropdown;
pub use header::Header;
pub use image_upload::ImageUpload;
pub use item_card::ItemCard;
pub use item_field_input::ItemFieldInput;
pub use item_picker::ItemPicker;
pub use location_filters::LocationFilters;
pub use page_shell::{Loading, PageShell};
pub use project_selector::ProjectSelector;
