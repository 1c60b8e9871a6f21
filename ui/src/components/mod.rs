//! User Interface Components
//!
//! This module contains reusable Dioxus components for the billing screens:
//!
//! - **forms**: Plan form sections such as the fixed fee section
//! - **display**: Placeholders, loading indicators and notifications
//! - **input**: Validated input fields, selectors and validity indicators
//! - **taxes**: Tax rate rows, the delete confirmation dialog and infinite scroll
//!
//! All components are designed to work within the Dioxus framework and target
//! the browser through WASM.

pub mod display;
pub mod forms;
pub mod input;
pub mod taxes;
