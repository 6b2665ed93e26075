//! Budget domain model: categories, transactions, and the stored book.

pub mod book;
pub mod category;
pub mod split;
pub mod transaction;

pub use book::BudgetBook;
pub use category::{BudgetKind, MainCategory, SubCategory};
pub use split::BudgetSplit;
pub use transaction::{Transaction, TransactionDraft, TransactionKind};
