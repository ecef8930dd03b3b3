//! Domain ports for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod menu_source;
mod profile_store;

#[cfg(test)]
pub use menu_source::MockMenuSource;
pub use menu_source::{FixtureMenuSource, MenuSource, MenuSourceError};
#[cfg(test)]
pub use profile_store::MockProfileStore;
pub use profile_store::{FixtureProfileStore, ProfileStore, ProfileStoreError};
