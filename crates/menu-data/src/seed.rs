//! Raw menu item seeds as they appear in a menu document.

use serde::Deserialize;

/// A single menu entry exactly as the document describes it.
///
/// Field values are not validated here; the storefront domain rejects
/// non-positive ids, blank titles, malformed prices, and unknown categories
/// when it converts a seed into a menu record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawMenuItem")]
pub struct MenuItemSeed {
    /// Identifier assigned by the menu endpoint.
    pub id: i64,
    /// Dish title shown in the catalogue.
    pub title: String,
    /// Longer dish description.
    pub description: String,
    /// Decimal price text, normalised from either a JSON string or number.
    pub price: String,
    /// Opaque image reference, usually a URL.
    pub image: String,
    /// Category slug such as `starters` or `desserts`.
    pub category: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPrice {
    Text(String),
    Number(serde_json::Number),
}

impl From<RawPrice> for String {
    fn from(value: RawPrice) -> Self {
        match value {
            RawPrice::Text(text) => text,
            RawPrice::Number(number) => number.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct RawMenuItem {
    id: i64,
    title: String,
    #[serde(default)]
    description: String,
    price: RawPrice,
    #[serde(default)]
    image: String,
    category: String,
}

impl From<RawMenuItem> for MenuItemSeed {
    fn from(raw: RawMenuItem) -> Self {
        Self {
            id: raw.id,
            title: raw.title,
            description: raw.description,
            price: raw.price.into(),
            image: raw.image,
            category: raw.category,
        }
    }
}
