pub mod delete_tax_rate_dialog;
pub mod infinite_scroll;
pub mod tax_rate_item;

pub use delete_tax_rate_dialog::*;
pub use infinite_scroll::*;
pub use tax_rate_item::*;
