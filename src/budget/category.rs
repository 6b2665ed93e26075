use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Budget bucket a main category belongs to (the 50/30/20 split).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum BudgetKind {
    Needs,
    Wants,
    Savings,
    Income,
}

/// Top-level spending category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MainCategory {
    pub id: Uuid,
    pub name: String,
    pub budget_kind: BudgetKind,
}

impl MainCategory {
    pub fn new(name: impl Into<String>, budget_kind: BudgetKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            budget_kind,
        }
    }
}

/// Optional refinement of a main category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubCategory {
    pub id: Uuid,
    pub name: String,
    pub parent_category_id: Uuid,
}

impl SubCategory {
    pub fn new(name: impl Into<String>, parent_category_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            parent_category_id,
        }
    }
}
