//! Catalogue filtering by free-text search and a single toggleable category.
//!
//! The filter owns the query for one screen session and derives the visible
//! subset of a menu on demand. Derivation is pure: it never mutates or
//! reorders the input slice.

use tracing::debug;

use super::menu::{Category, MenuRecord};

/// Current search and category selection.
///
/// ## Invariants
/// - At most one category is selected at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    search_phrase: String,
    selected_category: Option<Category>,
}

impl CatalogQuery {
    pub fn search_phrase(&self) -> &str {
        self.search_phrase.as_str()
    }

    pub fn selected_category(&self) -> Option<Category> {
        self.selected_category
    }

    /// Whether the phrase narrows the result. Whitespace-only phrases do not.
    pub fn has_text_filter(&self) -> bool {
        !self.search_phrase.trim().is_empty()
    }
}

/// Stateful catalogue filter driven by user input.
///
/// # Examples
/// ```
/// use storefront::domain::{CatalogFilter, Category};
///
/// let mut filter = CatalogFilter::new();
/// filter.toggle_category(Category::Dessert);
/// filter.toggle_category(Category::Dessert);
/// assert_eq!(filter.query().selected_category(), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct CatalogFilter {
    query: CatalogQuery,
}

impl CatalogFilter {
    /// Start with an empty phrase and no category selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &CatalogQuery {
        &self.query
    }

    /// Replace the active phrase. Any text is accepted; empty clears text
    /// filtering.
    pub fn set_search_phrase(&mut self, phrase: impl Into<String>) {
        self.query.search_phrase = phrase.into();
    }

    /// Select `category`, or clear the selection when it is already selected.
    ///
    /// Returns the selection after the toggle.
    pub fn toggle_category(&mut self, category: Category) -> Option<Category> {
        self.query.selected_category = if self.query.selected_category == Some(category) {
            None
        } else {
            Some(category)
        };
        debug!(
            category = %category,
            selected = ?self.query.selected_category,
            "category toggled"
        );
        self.query.selected_category
    }

    /// Derive the visible records from `all_items`.
    ///
    /// Text filtering runs first (case-insensitive title substring), then the
    /// category filter. Input order is preserved. An empty result is a valid
    /// outcome, not an error.
    pub fn visible_items<'a>(&self, all_items: &'a [MenuRecord]) -> Vec<&'a MenuRecord> {
        let phrase = self
            .query
            .has_text_filter()
            .then(|| self.query.search_phrase.to_lowercase());

        all_items
            .iter()
            .filter(|record| {
                phrase
                    .as_deref()
                    .is_none_or(|needle| record.title().to_lowercase().contains(needle))
            })
            .filter(|record| {
                self.query
                    .selected_category
                    .is_none_or(|category| record.category() == category)
            })
            .collect()
    }
}
