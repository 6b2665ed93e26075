use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schedule::RecurrenceRule;

use super::{BudgetSplit, MainCategory, SubCategory, Transaction};

/// The whole persisted state of a budget: categories, the income split,
/// transactions, and the recurring rules that feed them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BudgetBook {
    #[serde(default)]
    pub main_categories: Vec<MainCategory>,
    #[serde(default)]
    pub sub_categories: Vec<SubCategory>,
    #[serde(default)]
    pub budget_split: BudgetSplit,
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub recurring_rules: Vec<RecurrenceRule>,
}

impl BudgetBook {
    pub fn add_main_category(&mut self, category: MainCategory) -> Uuid {
        let id = category.id;
        self.main_categories.push(category);
        id
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn add_rule(&mut self, rule: RecurrenceRule) -> Uuid {
        let id = rule.id;
        self.recurring_rules.push(rule);
        id
    }

    pub fn rule_mut(&mut self, id: Uuid) -> Option<&mut RecurrenceRule> {
        self.recurring_rules.iter_mut().find(|rule| rule.id == id)
    }
}
