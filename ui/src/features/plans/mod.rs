//! Plan Draft Editing
//!
//! Draft types, the form-state handle shared by plan sections, the draft
//! validator and the state of the fixed fee section.

pub mod fixed_fee;
pub mod form;
pub mod types;
pub mod validation;

pub use fixed_fee::*;
pub use form::PlanForm;
pub use types::*;
pub use validation::validate_plan_draft;
