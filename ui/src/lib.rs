//! This crate contains the shared UI components for the billing screens.

pub mod app;
pub use app::{BillingServices, PlanEditor, TaxesSettings};

pub mod components;
pub mod features;
pub mod routes;
pub mod services;
pub mod utils;
