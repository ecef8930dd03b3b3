//! Outbound adapters implementing the domain ports.
//!
//! - **persistence**: profile stores, in memory or as a JSON document on disk
//! - **menu**: menu sources backed by the `menu-data` document parser
//!
//! Adapters translate between storage representations and domain types.
//! They contain no navigation or filtering rules.

pub mod menu;
pub mod persistence;

pub use menu::JsonMenuSource;
pub use persistence::{FileProfileStore, InMemoryProfileStore};
