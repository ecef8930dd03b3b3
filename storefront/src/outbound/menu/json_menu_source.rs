//! Menu source reading the restaurant's JSON menu document.

use std::collections::HashSet;

use camino::{Utf8Path, Utf8PathBuf};
use menu_data::{MenuDocument, MenuItemSeed};
use tracing::{debug, warn};

use crate::domain::ports::{MenuSource, MenuSourceError};
use crate::domain::{MenuRecord, MenuRecordDraft};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Origin {
    Bundled,
    File(Utf8PathBuf),
}

/// [`MenuSource`] backed by a `{"menu": [...]}` document.
///
/// The document is re-read on every call so edits to a file-backed menu are
/// picked up without restarting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonMenuSource {
    origin: Origin,
}

impl JsonMenuSource {
    /// Serve the menu compiled into the binary.
    pub fn bundled() -> Self {
        Self {
            origin: Origin::Bundled,
        }
    }

    /// Serve the menu document at `path`.
    pub fn from_path(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            origin: Origin::File(path.as_ref().to_path_buf()),
        }
    }

    fn document(&self) -> Result<MenuDocument, MenuSourceError> {
        let result = match &self.origin {
            Origin::Bundled => MenuDocument::bundled(),
            Origin::File(path) => MenuDocument::from_file(path.as_std_path()),
        };
        result.map_err(|err| {
            warn!(error = %err, "menu document unavailable");
            MenuSourceError::unavailable(err.to_string())
        })
    }
}

impl Default for JsonMenuSource {
    fn default() -> Self {
        Self::bundled()
    }
}

fn draft_from(seed: MenuItemSeed) -> MenuRecordDraft {
    MenuRecordDraft {
        id: seed.id,
        title: seed.title,
        description: seed.description,
        price: seed.price,
        image: seed.image,
        category: seed.category,
    }
}

impl MenuSource for JsonMenuSource {
    fn load_menu(&self) -> Result<Vec<MenuRecord>, MenuSourceError> {
        let seeds = self.document()?.into_items();
        let mut seen = HashSet::with_capacity(seeds.len());
        let mut records = Vec::with_capacity(seeds.len());

        for seed in seeds {
            let record = MenuRecord::new(draft_from(seed))
                .map_err(|err| MenuSourceError::invalid_record(err.to_string()))?;
            let id = record.id().get();
            if !seen.insert(id) {
                return Err(MenuSourceError::duplicate_id(id));
            }
            records.push(record);
        }

        debug!(count = records.len(), "loaded menu");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Price};
    use rstest::rstest;

    fn write_menu(contents: &str) -> (tempfile::TempDir, Utf8PathBuf) {
        let temp = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(temp.path().join("menu.json"))
            .expect("temp path is UTF-8");
        std::fs::write(&path, contents).expect("write menu");
        (temp, path)
    }

    #[rstest]
    fn bundled_menu_loads_in_document_order() {
        let records = JsonMenuSource::bundled().load_menu().expect("bundled menu");

        let titles: Vec<&str> = records.iter().map(MenuRecord::title).collect();
        assert_eq!(
            titles,
            vec![
                "Greek Salad",
                "Lemon Desert",
                "Grilled Fish",
                "Pasta",
                "Bruschetta",
                "Lemonade"
            ]
        );
        assert_eq!(records[5].category(), Category::Drink);
        assert_eq!(records[5].price(), Price::from_cents(450));
    }

    #[rstest]
    fn file_menu_accepts_numeric_prices() {
        let (_temp, path) = write_menu(
            r#"{"menu":[{"id":7,"title":"Soup","price":6.5,"category":"starters"}]}"#,
        );

        let records = JsonMenuSource::from_path(&path).load_menu().expect("menu");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].price().to_string(), "$6.50");
    }

    #[rstest]
    fn empty_menu_loads_as_no_records() {
        let (_temp, path) = write_menu(r#"{"menu": []}"#);
        assert_eq!(JsonMenuSource::from_path(&path).load_menu(), Ok(Vec::new()));
    }

    #[rstest]
    fn duplicate_ids_are_rejected() {
        let (_temp, path) = write_menu(
            r#"{"menu":[
                {"id":1,"title":"Soup","price":"5","category":"starters"},
                {"id":1,"title":"Stew","price":"9","category":"mains"}
            ]}"#,
        );

        assert_eq!(
            JsonMenuSource::from_path(&path).load_menu(),
            Err(MenuSourceError::duplicate_id(1_u32))
        );
    }

    #[rstest]
    #[case(r#"{"menu":[{"id":1,"title":"Soup","price":"5","category":"brunch"}]}"#)]
    #[case(r#"{"menu":[{"id":0,"title":"Soup","price":"5","category":"starters"}]}"#)]
    #[case(r#"{"menu":[{"id":1,"title":" ","price":"5","category":"starters"}]}"#)]
    fn invalid_records_are_reported(#[case] contents: &str) {
        let (_temp, path) = write_menu(contents);
        assert!(matches!(
            JsonMenuSource::from_path(&path).load_menu(),
            Err(MenuSourceError::InvalidRecord { .. })
        ));
    }

    #[rstest]
    fn missing_file_is_unavailable() {
        let source = JsonMenuSource::from_path("/nonexistent/storefront/menu.json");
        assert!(matches!(
            source.load_menu(),
            Err(MenuSourceError::Unavailable { .. })
        ));
    }
}
