//! Menu catalogue records.
//!
//! Records are created by a menu source and never mutated afterwards; the
//! catalogue filter only reads and partitions slices of them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors returned by [`MenuRecord::new`], [`Price::parse`], and
/// [`Category::from_str`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuValidationError {
    #[error("menu item id must be a positive 32-bit integer, got {id}")]
    InvalidId { id: i64 },
    #[error("menu item {id} must have a title")]
    BlankTitle { id: MenuItemId },
    #[error("price '{value}' is not a decimal amount with at most two fractional digits")]
    InvalidPrice { value: String },
    #[error("price '{value}' must not be negative")]
    NegativePrice { value: String },
    #[error("unknown menu category '{value}'")]
    UnknownCategory { value: String },
}

/// Fixed partition of the catalogue.
///
/// The serialised form is the plural slug used by menu documents and shown
/// on the category buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "starters")]
    Starter,
    #[serde(rename = "mains")]
    Main,
    #[serde(rename = "desserts")]
    Dessert,
    #[serde(rename = "drinks")]
    Drink,
}

impl Category {
    /// Every category in display order.
    pub const ALL: [Self; 4] = [Self::Starter, Self::Main, Self::Dessert, Self::Drink];

    /// Slug used in menu documents and as the button label.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Starter => "starters",
            Self::Main => "mains",
            Self::Dessert => "desserts",
            Self::Drink => "drinks",
        }
    }

    const fn singular(self) -> &'static str {
        match self {
            Self::Starter => "starter",
            Self::Main => "main",
            Self::Dessert => "dessert",
            Self::Drink => "drink",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Category {
    type Err = MenuValidationError;

    /// Accepts the slug or the singular name, ignoring case and surrounding
    /// whitespace.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalised = value.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|category| {
                normalised == category.slug() || normalised == category.singular()
            })
            .ok_or_else(|| MenuValidationError::UnknownCategory {
                value: value.to_owned(),
            })
    }
}

/// Positive menu item identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MenuItemId(u32);

impl MenuItemId {
    /// Validate a raw identifier from a menu source.
    pub fn new(id: i64) -> Result<Self, MenuValidationError> {
        u32::try_from(id)
            .ok()
            .filter(|value| *value > 0)
            .map(Self)
            .ok_or(MenuValidationError::InvalidId { id })
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Non-negative price held as whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Price(u64);

impl Price {
    /// Build a price from a cent amount.
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Parse decimal text such as `10`, `4.5`, or `12.50`.
    ///
    /// Fractional digits beyond the second must be zero; anything finer than
    /// a cent is rejected rather than rounded.
    ///
    /// # Examples
    /// ```
    /// use storefront::domain::Price;
    ///
    /// let price = Price::parse("4.5").expect("valid price");
    /// assert_eq!(price.cents(), 450);
    /// assert_eq!(price.to_string(), "$4.50");
    /// ```
    pub fn parse(text: &str) -> Result<Self, MenuValidationError> {
        let invalid = || MenuValidationError::InvalidPrice {
            value: text.to_owned(),
        };
        let trimmed = text.trim();
        if trimmed.starts_with('-') {
            return Err(MenuValidationError::NegativePrice {
                value: text.to_owned(),
            });
        }

        let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
        let all_digits = |part: &str| part.bytes().all(|byte| byte.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let (cent_digits, finer) = fraction.split_at(fraction.len().min(2));
        if finer.bytes().any(|byte| byte != b'0') {
            return Err(invalid());
        }

        let cents = format!("{cent_digits:0<2}")
            .bytes()
            .fold(0_u64, |acc, digit| acc * 10 + u64::from(digit - b'0'));
        whole
            .parse::<u64>()
            .ok()
            .and_then(|units| units.checked_mul(100))
            .and_then(|amount| amount.checked_add(cents))
            .map(Self)
            .ok_or_else(invalid)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Input payload for [`MenuRecord::new`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MenuRecordDraft {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub price: String,
    pub image: String,
    pub category: String,
}

/// One catalogue entry.
///
/// ## Invariants
/// - `id` is positive.
/// - `title` is non-empty once trimmed of whitespace.
/// - `price` is a non-negative cent amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRecord {
    id: MenuItemId,
    title: String,
    description: String,
    price: Price,
    image: String,
    category: Category,
}

impl MenuRecord {
    /// Validate and construct a menu record.
    pub fn new(draft: MenuRecordDraft) -> Result<Self, MenuValidationError> {
        Self::try_from(draft)
    }

    pub fn id(&self) -> MenuItemId {
        self.id
    }
    pub fn title(&self) -> &str {
        self.title.as_str()
    }
    pub fn description(&self) -> &str {
        self.description.as_str()
    }
    pub fn price(&self) -> Price {
        self.price
    }
    pub fn image(&self) -> &str {
        self.image.as_str()
    }
    pub fn category(&self) -> Category {
        self.category
    }
}

impl TryFrom<MenuRecordDraft> for MenuRecord {
    type Error = MenuValidationError;

    fn try_from(draft: MenuRecordDraft) -> Result<Self, Self::Error> {
        let id = MenuItemId::new(draft.id)?;
        if draft.title.trim().is_empty() {
            return Err(MenuValidationError::BlankTitle { id });
        }
        let price = Price::parse(&draft.price)?;
        let category = draft.category.parse()?;

        Ok(Self {
            id,
            title: draft.title,
            description: draft.description,
            price,
            image: draft.image,
            category,
        })
    }
}
