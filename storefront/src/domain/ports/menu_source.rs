//! Port for the menu data source.
//!
//! A menu source delivers a finite, ordered list of validated records per
//! call. Whether the data comes from a bundled document, a file, or a remote
//! endpoint is the adapter's concern.

use crate::domain::MenuRecord;

use super::define_port_error;

define_port_error! {
    /// Errors raised by menu source adapters.
    pub enum MenuSourceError {
        /// The underlying data could not be read or parsed.
        Unavailable { message: String } =>
            "menu source unavailable: {message}",
        /// A record failed domain validation.
        InvalidRecord { message: String } =>
            "menu source returned an invalid record: {message}",
        /// Two records share an identifier.
        DuplicateId { id: u32 } =>
            "menu source returned duplicate id {id}",
    }
}

/// Port for loading the catalogue.
#[cfg_attr(test, mockall::automock)]
pub trait MenuSource: Send + Sync {
    /// Load every menu record in source order.
    fn load_menu(&self) -> Result<Vec<MenuRecord>, MenuSourceError>;
}

/// Fixture implementation serving a fixed in-memory list.
#[derive(Debug, Default, Clone)]
pub struct FixtureMenuSource {
    records: Vec<MenuRecord>,
}

impl FixtureMenuSource {
    pub fn new(records: Vec<MenuRecord>) -> Self {
        Self { records }
    }
}

impl MenuSource for FixtureMenuSource {
    fn load_menu(&self) -> Result<Vec<MenuRecord>, MenuSourceError> {
        Ok(self.records.clone())
    }
}
