//! Reusable widgets for the wishlist admin screen

pub mod flash_display;
pub mod form_field;
pub mod result_table;

pub use flash_display::FlashDisplay;
pub use form_field::{FormField, FormFieldType};
pub use result_table::{ResultTable, ResultTableConfig};
