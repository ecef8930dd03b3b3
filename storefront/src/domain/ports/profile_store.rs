//! Port for the key-value store that holds the onboarding profile.
//!
//! The [`ProfileStore`] trait is the only way the session gate touches
//! persisted profile data. Calls are synchronous; adapters that can be shared
//! across threads must make each `write_profile`/`clear_profile` a single
//! atomic unit so concurrent registrations cannot interleave.

use std::sync::Arc;

use crate::domain::{Profile, StoredProfile};

use super::define_port_error;

define_port_error! {
    /// Errors raised by profile store adapters.
    pub enum ProfileStoreError {
        /// The backing store could not be opened or locked.
        Unavailable { message: String } =>
            "profile store unavailable: {message}",
        /// Reading the stored profile failed.
        Read { message: String } =>
            "profile store read failed: {message}",
        /// Writing or clearing the stored profile failed.
        Write { message: String } =>
            "profile store write failed: {message}",
    }
}

/// Port for profile persistence.
///
/// `read_profile` returns `None` when no profile has been written or the
/// stored fields are all blank.
#[cfg_attr(test, mockall::automock)]
pub trait ProfileStore: Send + Sync {
    /// Read the stored profile, if any.
    fn read_profile(&self) -> Result<Option<StoredProfile>, ProfileStoreError>;

    /// Persist a validated profile, replacing any previous one.
    fn write_profile(&self, profile: &Profile) -> Result<(), ProfileStoreError>;

    /// Remove every profile field from the store.
    fn clear_profile(&self) -> Result<(), ProfileStoreError>;
}

impl<T: ProfileStore + ?Sized> ProfileStore for &T {
    fn read_profile(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        (**self).read_profile()
    }

    fn write_profile(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        (**self).write_profile(profile)
    }

    fn clear_profile(&self) -> Result<(), ProfileStoreError> {
        (**self).clear_profile()
    }
}

impl<T: ProfileStore + ?Sized> ProfileStore for Arc<T> {
    fn read_profile(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        (**self).read_profile()
    }

    fn write_profile(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        (**self).write_profile(profile)
    }

    fn clear_profile(&self) -> Result<(), ProfileStoreError> {
        (**self).clear_profile()
    }
}

/// Fixture implementation for tests where persistence is not under test.
///
/// Lookups always return `None` and writes are discarded.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureProfileStore;

impl ProfileStore for FixtureProfileStore {
    fn read_profile(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        Ok(None)
    }

    fn write_profile(&self, _profile: &Profile) -> Result<(), ProfileStoreError> {
        Ok(())
    }

    fn clear_profile(&self) -> Result<(), ProfileStoreError> {
        Ok(())
    }
}
