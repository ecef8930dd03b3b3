//! Restaurant menu documents for the storefront catalogue.
//!
//! This crate reads the menu document served by the restaurant's data
//! endpoint and turns it into raw item seeds. It is deliberately independent
//! of storefront domain types: validation into domain records happens in the
//! consuming crate.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Parsing menu documents from JSON strings or files
//! - Prices given either as JSON numbers or decimal strings
//! - A bundled default menu for demonstrations and tests
//!
//! # Example
//!
//! ```
//! use menu_data::MenuDocument;
//!
//! let json = r#"{
//!     "menu": [{
//!         "id": 1,
//!         "title": "Greek Salad",
//!         "description": "Crispy lettuce, peppers, olives.",
//!         "price": "10",
//!         "image": "greekSalad.jpg",
//!         "category": "starters"
//!     }]
//! }"#;
//!
//! let document = MenuDocument::from_json(json).expect("valid menu");
//! assert_eq!(document.items().len(), 1);
//! assert_eq!(document.items()[0].price, "10");
//! ```

mod document;
mod error;
mod seed;

pub use document::MenuDocument;
pub use error::MenuDataError;
pub use seed::MenuItemSeed;
