//! Top-level screens and the service context they share

pub mod plan_editor;
pub mod services;
pub mod taxes_settings;

pub use plan_editor::PlanEditor;
pub use services::{AppServices, BillingServices};
pub use taxes_settings::TaxesSettings;
