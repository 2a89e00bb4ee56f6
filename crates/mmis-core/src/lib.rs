//! MMIS Core
//!
//! Browser-independent pieces of the MMIS front end: backend data models,
//! the project/test-area catalog, token claims, form validation and the
//! report calculations (spending, low-stock alternatives, CSV export).

pub mod activity;
pub mod auth;
pub mod catalog;
pub mod export;
pub mod forms;
pub mod models;
pub mod pricing;
pub mod search;
pub mod spending;
pub mod stock;
pub mod time;
pub mod validation;

pub use auth::{decode_claims, initials, Claims, Role, TokenError};
pub use models::{Employee, Fixture, InventoryItem, Transaction, TransactionKind};
pub use validation::ValidationError;
