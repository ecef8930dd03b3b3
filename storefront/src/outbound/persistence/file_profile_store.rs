//! Profile store backed by a JSON key-value document on disk.
//!
//! The document lives at `<profile_dir>/little_lemon.json` and holds a flat
//! string map. The store owns the `FIRST_NAME`, `LAST_NAME`, and `EMAIL`
//! keys; any other keys in the document are preserved across writes.

use std::collections::BTreeMap;
use std::io;
use std::sync::{Mutex, MutexGuard};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use tracing::{debug, warn};

use super::atomic_write::write_atomic;
use crate::domain::ports::{ProfileStore, ProfileStoreError};
use crate::domain::{Profile, ProfileField, StoredProfile};

/// File name of the preference namespace document.
pub const PROFILE_DOCUMENT: &str = "little_lemon.json";

type Entries = BTreeMap<String, String>;

/// File-backed [`ProfileStore`].
///
/// Reads and writes are serialised through an internal lock and every write
/// replaces the document atomically.
#[derive(Debug)]
pub struct FileProfileStore {
    root: Utf8PathBuf,
    dir: Dir,
    lock: Mutex<()>,
}

impl FileProfileStore {
    /// Open (creating if needed) the profile directory at `root`.
    ///
    /// # Errors
    /// Returns [`ProfileStoreError::Unavailable`] when the directory cannot
    /// be created or opened.
    pub fn open(root: impl AsRef<Utf8Path>) -> Result<Self, ProfileStoreError> {
        let root = root.as_ref().to_path_buf();
        let dir = Dir::create_ambient_dir_all(&root, ambient_authority())
            .and_then(|()| Dir::open_ambient_dir(&root, ambient_authority()))
            .map_err(|err| {
                warn!(path = %root, error = %err, "profile directory unavailable");
                ProfileStoreError::unavailable(format!("{root}: {err}"))
            })?;
        debug!(path = %root, "opened profile directory");
        Ok(Self {
            root,
            dir,
            lock: Mutex::new(()),
        })
    }

    /// Directory holding the profile document.
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn guard(&self) -> Result<MutexGuard<'_, ()>, ProfileStoreError> {
        self.lock
            .lock()
            .map_err(|_| ProfileStoreError::unavailable("profile lock poisoned"))
    }

    fn load_entries(&self) -> Result<Entries, ProfileStoreError> {
        let contents = match self.dir.read_to_string(PROFILE_DOCUMENT) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Entries::new()),
            Err(err) => return Err(ProfileStoreError::read(err.to_string())),
        };
        if contents.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&contents).map_err(|err| {
            warn!(path = %self.root, error = %err, "profile document is not a string map");
            ProfileStoreError::read(format!("{PROFILE_DOCUMENT}: {err}"))
        })
    }

    fn save_entries(&self, entries: &Entries) -> Result<(), ProfileStoreError> {
        let contents = serde_json::to_string_pretty(entries)
            .map_err(|err| ProfileStoreError::write(err.to_string()))?;
        write_atomic(&self.dir, Utf8Path::new(PROFILE_DOCUMENT), &contents).map_err(|err| {
            warn!(path = %self.root, error = %err, "profile document write failed");
            ProfileStoreError::write(err.to_string())
        })
    }
}

fn stored_from(entries: &Entries) -> StoredProfile {
    let value = |field: ProfileField| {
        entries
            .get(field.store_key())
            .cloned()
            .unwrap_or_default()
    };
    StoredProfile {
        first_name: value(ProfileField::FirstName),
        last_name: value(ProfileField::LastName),
        email: value(ProfileField::Email),
    }
}

impl ProfileStore for FileProfileStore {
    fn read_profile(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        let _guard = self.guard()?;
        let stored = stored_from(&self.load_entries()?);
        debug!(path = %self.root, blank = stored.is_blank(), "read profile document");
        Ok((!stored.is_blank()).then_some(stored))
    }

    fn write_profile(&self, profile: &Profile) -> Result<(), ProfileStoreError> {
        let _guard = self.guard()?;
        let mut entries = self.load_entries()?;
        for field in ProfileField::ALL {
            entries.insert(field.store_key().to_owned(), profile.value(field).to_owned());
        }
        self.save_entries(&entries)?;
        debug!(path = %self.root, "wrote profile document");
        Ok(())
    }

    fn clear_profile(&self) -> Result<(), ProfileStoreError> {
        let _guard = self.guard()?;
        let mut entries = self.load_entries()?;
        for field in ProfileField::ALL {
            entries.remove(field.store_key());
        }
        self.save_entries(&entries)?;
        debug!(path = %self.root, "cleared profile document");
        Ok(())
    }
}
