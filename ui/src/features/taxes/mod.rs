//! Tax Rate Settings
//!
//! Tax rate records, the paginated list state with its deletion workflow, and
//! the gateway calls that feed it.

pub mod list_state;
pub mod types;
pub mod workflow;

pub use list_state::*;
pub use types::*;
pub use workflow::{run_destroy_tax_rate, run_tax_rates_query};
