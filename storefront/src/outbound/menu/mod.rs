//! Menu source adapters.

mod json_menu_source;

pub use json_menu_source::JsonMenuSource;
