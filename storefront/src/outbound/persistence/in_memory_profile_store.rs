//! Process-local profile store.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use crate::domain::ports::{ProfileStore, ProfileStoreError};
use crate::domain::{Profile, StoredProfile};

/// Profile store that keeps the record in memory for the life of the value.
///
/// Each operation holds the lock for its whole read or write, so concurrent
/// registrations never interleave field by field.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    record: Mutex<Option<StoredProfile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `record` already stored, as if written by an earlier run.
    pub fn with_record(record: StoredProfile) -> Self {
        Self {
            record: Mutex::new(Some(record)),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Option<StoredProfile>>, ProfileStoreError> {
        self.record
            .lock()
            .map_err(|_| ProfileStoreError::unavailable("profile lock poisoned"))
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn read_profile(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        let guard = self.lock()?;
        let stored = guard
            .as_ref()
            .filter(|record| !record.is_blank())
            .cloned();
        debug!(present = stored.is_some(), "read in-memory profile");
        Ok(stored)
    }

    fn write_profile(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        let mut guard = self.lock()?;
        *guard = Some(StoredProfile::from(profile));
        debug!("wrote in-memory profile");
        Ok(())
    }

    fn clear_profile(&self) -> Result<(), ProfileStoreError> {
        let mut guard = self.lock()?;
        *guard = None;
        debug!("cleared in-memory profile");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;
    use rstest::rstest;

    fn profile(first: &str, email: &str) -> Profile {
        Profile::new(first, "Doe", email).expect("valid profile")
    }

    #[rstest]
    fn empty_store_reads_none() {
        assert_eq!(InMemoryProfileStore::new().read_profile(), Ok(None));
    }

    #[rstest]
    fn write_then_read_returns_all_fields() {
        let store = InMemoryProfileStore::new();
        store
            .write_profile(&profile("Jane", "jane@example.com"))
            .expect("write");

        let stored = store.read_profile().expect("read").expect("present");
        assert_eq!(stored.first_name, "Jane");
        assert_eq!(stored.last_name, "Doe");
        assert_eq!(stored.email, "jane@example.com");
    }

    #[rstest]
    fn clear_removes_the_record() {
        let store = InMemoryProfileStore::new();
        store
            .write_profile(&profile("Jane", "jane@example.com"))
            .expect("write");
        store.clear_profile().expect("clear");

        assert_eq!(store.read_profile(), Ok(None));
    }

    #[rstest]
    fn blank_seeded_record_reads_as_absent() {
        let store = InMemoryProfileStore::with_record(StoredProfile::default());
        assert_eq!(store.read_profile(), Ok(None));
    }

    #[rstest]
    fn concurrent_writes_never_mix_fields() {
        let store = Arc::new(InMemoryProfileStore::new());
        let writers: Vec<_> = (0..8)
            .map(|index| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let name = format!("user{index}");
                    let email = format!("user{index}@example.com");
                    store
                        .write_profile(&profile(&name, &email))
                        .expect("write");
                })
            })
            .collect();
        for writer in writers {
            writer.join().expect("writer thread");
        }

        let stored = store.read_profile().expect("read").expect("present");
        let suffix = stored.first_name.trim_start_matches("user");
        assert_eq!(stored.email, format!("user{suffix}@example.com"));
    }
}
