//! Plan form sections

pub mod fixed_fee_section;

pub use fixed_fee_section::*;
