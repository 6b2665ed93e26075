pub mod json_backend;

use std::path::Path;

use crate::{budget::BudgetBook, errors::StoreError};

pub type Result<T> = std::result::Result<T, StoreError>;

/// Abstraction over persistence backends capable of storing a budget book.
pub trait StorageBackend: Send + Sync {
    fn save(&self, book: &BudgetBook, path: &Path) -> Result<()>;
    fn load(&self, path: &Path) -> Result<BudgetBook>;

    /// Loads the book at `path`, falling back to an empty book when the
    /// file does not exist yet.
    fn load_or_default(&self, path: &Path) -> Result<BudgetBook> {
        if path.exists() {
            self.load(path)
        } else {
            Ok(BudgetBook::default())
        }
    }
}

pub use json_backend::{default_store_path, JsonStorage};
