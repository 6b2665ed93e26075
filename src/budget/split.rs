use serde::{Deserialize, Serialize};

use super::BudgetKind;

/// Percentage split of income across budget buckets. Defaults to the
/// classic 50/30/20 allocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BudgetSplit {
    pub needs: f64,
    pub wants: f64,
    pub savings: f64,
}

impl Default for BudgetSplit {
    fn default() -> Self {
        Self {
            needs: 50.0,
            wants: 30.0,
            savings: 20.0,
        }
    }
}

impl BudgetSplit {
    /// Budgeted amount for one bucket given the month's total income.
    /// Income has no budget of its own.
    pub fn budgeted_for(&self, kind: BudgetKind, total_income: f64) -> f64 {
        let percentage = match kind {
            BudgetKind::Needs => self.needs,
            BudgetKind::Wants => self.wants,
            BudgetKind::Savings => self.savings,
            BudgetKind::Income => return 0.0,
        };
        total_income * (percentage / 100.0)
    }
}
