//! Profile store adapters.

mod atomic_write;
mod file_profile_store;
mod in_memory_profile_store;

pub use file_profile_store::{FileProfileStore, PROFILE_DOCUMENT};
pub use in_memory_profile_store::InMemoryProfileStore;
