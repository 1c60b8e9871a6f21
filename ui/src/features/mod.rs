pub mod plans;
pub mod taxes;
