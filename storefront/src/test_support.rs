//! Test utilities shared by unit tests (in `src/`) and integration tests (in
//! `tests/`). Compiled only for tests or with the `test-support` feature.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use crate::domain::ports::{ProfileStore, ProfileStoreError};
use crate::domain::{MenuRecord, MenuRecordDraft, Profile, StoredProfile};
use crate::outbound::FileProfileStore;

/// Build a menu record, panicking on invalid input.
///
/// # Examples
/// ```
/// use storefront::domain::Category;
/// use storefront::test_support::menu_record;
///
/// let record = menu_record(1, "Greek Salad", "starters", "12.99");
/// assert_eq!(record.category(), Category::Starter);
/// ```
pub fn menu_record(id: i64, title: &str, category: &str, price: &str) -> MenuRecord {
    let draft = MenuRecordDraft {
        id,
        title: title.to_owned(),
        description: format!("{title} from the kitchen"),
        price: price.to_owned(),
        image: String::new(),
        category: category.to_owned(),
    };
    match MenuRecord::new(draft) {
        Ok(record) => record,
        Err(err) => panic!("test menu record must be valid: {err}"),
    }
}

/// A small menu covering every category, with two titles containing "lemon".
pub fn sample_menu() -> Vec<MenuRecord> {
    vec![
        menu_record(1, "Greek Salad", "starters", "12.99"),
        menu_record(2, "Bruschetta", "starters", "7.99"),
        menu_record(3, "Grilled Fish", "mains", "20"),
        menu_record(4, "Lemon Cake", "desserts", "6.50"),
        menu_record(5, "Lemonade", "drinks", "4.50"),
    ]
}

/// The profile used across session tests.
pub fn sample_stored_profile() -> StoredProfile {
    StoredProfile {
        first_name: "Jane".to_owned(),
        last_name: "Doe".to_owned(),
        email: "jane@example.com".to_owned(),
    }
}

/// Temporary profile directory removed on drop.
#[derive(Debug)]
pub struct TempProfileDir {
    _temp: TempDir,
    path: Utf8PathBuf,
}

impl TempProfileDir {
    /// Create an empty directory under the system temp dir.
    pub fn new() -> std::io::Result<Self> {
        let temp = tempfile::tempdir()?;
        let path = Utf8PathBuf::from_path_buf(temp.path().join("profile")).map_err(|path| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("temp path is not UTF-8: {}", path.display()),
            )
        })?;
        Ok(Self { _temp: temp, path })
    }

    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Open a fresh file store over this directory, as a restarted app would.
    pub fn open_store(&self) -> Result<FileProfileStore, ProfileStoreError> {
        FileProfileStore::open(&self.path)
    }
}

/// Profile store whose every call fails with the configured error.
#[derive(Debug, Clone)]
pub struct FailingProfileStore {
    error: ProfileStoreError,
}

impl FailingProfileStore {
    pub fn new(error: ProfileStoreError) -> Self {
        Self { error }
    }
}

impl ProfileStore for FailingProfileStore {
    fn read_profile(&self) -> Result<Option<StoredProfile>, ProfileStoreError> {
        Err(self.error.clone())
    }

    fn write_profile(&self, _profile: &Profile) -> Result<(), ProfileStoreError> {
        Err(self.error.clone())
    }

    fn clear_profile(&self) -> Result<(), ProfileStoreError> {
        Err(self.error.clone())
    }
}
