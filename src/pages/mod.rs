//! Pages
//!
//! One component per screen; the app shell picks one from the current route.

mod activity;
mod add_new;
mod alerts;
mod current_inventory;
mod customized;
mod dashboard;
mod login;
mod low_stock;
mod profile;
mod reports;
mod request;
mod restock;
mod returns;
mod spending;
mod transfer;

pub use activity::ActivityPage;
pub use add_new::{AddNewPage, EditFixturePage, NewFixturePage, NewStockPage};
pub use alerts::AlertsPage;
pub use current_inventory::CurrentInventoryPage;
pub use customized::CustomizedReportPage;
pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use low_stock::LowStockReportPage;
pub use profile::{ChangePasswordPage, ProfilePage};
pub use reports::ReportsPage;
pub use request::{ItemRequestPage, RequestProjectPage, RequestSearchPage, RequestTestAreaPage};
pub use restock::{RestockEditPage, RestockItemsPage, RestockProjectPage, RestockTestAreaPage};
pub use returns::{ReturnItemPage, ReturnListPage};
pub use spending::SpendingReportPage;
pub use transfer::TransferPage;
