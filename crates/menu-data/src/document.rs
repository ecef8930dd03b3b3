//! Menu document parsing.
//!
//! A menu document wraps the item list in a `menu` field, matching the
//! payload served by the restaurant's data endpoint.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::MenuDataError;
use crate::seed::MenuItemSeed;

const BUNDLED_MENU: &str = include_str!("../fixtures/menu.json");

/// An ordered list of menu item seeds.
///
/// Item order follows the document; nothing here sorts or deduplicates.
///
/// # Example
///
/// ```
/// use menu_data::MenuDocument;
///
/// let document = MenuDocument::bundled().expect("bundled menu parses");
/// assert_eq!(document.items().first().map(|item| item.id), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuDocument {
    items: Vec<MenuItemSeed>,
}

#[derive(Deserialize)]
struct RawMenuDocument {
    menu: Vec<MenuItemSeed>,
}

impl MenuDocument {
    /// Parses a menu document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`MenuDataError::ParseError`] when the JSON is malformed. An
    /// empty `menu` array is a valid, empty catalogue.
    pub fn from_json(json: &str) -> Result<Self, MenuDataError> {
        let raw: RawMenuDocument =
            serde_json::from_str(json).map_err(|e| MenuDataError::ParseError {
                message: e.to_string(),
            })?;

        Ok(Self { items: raw.menu })
    }

    /// Loads a menu document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`MenuDataError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, MenuDataError> {
        let contents = fs::read_to_string(path).map_err(|e| MenuDataError::IoError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_json(&contents)
    }

    /// Parses the menu bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`MenuDataError`] only if the bundled fixture is corrupt.
    pub fn bundled() -> Result<Self, MenuDataError> {
        Self::from_json(BUNDLED_MENU)
    }

    /// Returns the item seeds in document order.
    #[must_use]
    pub fn items(&self) -> &[MenuItemSeed] {
        &self.items
    }

    /// Consumes the document and returns its item seeds.
    #[must_use]
    pub fn into_items(self) -> Vec<MenuItemSeed> {
        self.items
    }
}
