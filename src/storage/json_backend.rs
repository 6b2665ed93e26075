use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{budget::BudgetBook, errors::StoreError};

use super::{Result, StorageBackend};

const STORE_FILE_NAME: &str = "budget.json";

/// Stores the budget book as a single pretty-printed JSON document.
#[derive(Debug, Clone, Default)]
pub struct JsonStorage;

impl StorageBackend for JsonStorage {
    fn save(&self, book: &BudgetBook, path: &Path) -> Result<()> {
        save_book_to_path(book, path)
    }

    fn load(&self, path: &Path) -> Result<BudgetBook> {
        load_book_from_path(path)
    }
}

/// Writes the book to disk atomically by staging to a temporary file.
pub fn save_book_to_path(book: &BudgetBook, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let tmp = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(book)?;
    fs::write(&tmp, json)?;
    fs::rename(tmp, path)?;
    Ok(())
}

/// Loads a book snapshot from disk, returning structured errors on failure.
pub fn load_book_from_path(path: &Path) -> Result<BudgetBook> {
    let data = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&data)?)
}

/// Default location of the store file, under the platform data directory.
pub fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("budget_recurrence")
        .join(STORE_FILE_NAME)
}
