use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction of a transaction's cash flow.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum TransactionKind {
    Expense,
    Income,
}

/// A persisted transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: NaiveDate,
    pub main_category_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Transaction {
    pub fn new(
        kind: TransactionKind,
        amount: f64,
        date: NaiveDate,
        main_category_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            date,
            main_category_id,
            sub_category_id: None,
            note: None,
        }
    }

    /// Assigns a fresh identity to a draft produced by the recurrence
    /// engine. Identity lives here, never in the engine.
    pub fn from_draft(draft: TransactionDraft) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: draft.kind,
            amount: draft.amount,
            date: draft.date,
            main_category_id: draft.main_category_id,
            sub_category_id: draft.sub_category_id,
            note: draft.note,
        }
    }
}

/// An identity-less transaction awaiting persistence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDraft {
    pub kind: TransactionKind,
    pub amount: f64,
    pub date: NaiveDate,
    pub main_category_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
