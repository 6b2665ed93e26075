//! Monthly dashboard aggregation over persisted transactions.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::budget::{BudgetKind, BudgetSplit, MainCategory, Transaction, TransactionKind};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BucketSummary {
    pub budgeted: f64,
    pub spent: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category_id: Uuid,
    pub name: String,
    pub amount: f64,
}

/// Income, expenses, and budget-bucket usage for one calendar month.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySummary {
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub needs: BucketSummary,
    pub wants: BucketSummary,
    pub savings: BucketSummary,
    pub category_spending: Vec<CategorySpending>,
}

/// Aggregates the transactions falling in `month`'s calendar month.
///
/// Budgeted amounts per bucket derive from the month's income and the
/// configured split; expenses accumulate into the bucket of their main
/// category. Income categories contribute nothing to spending.
pub fn monthly_summary(
    transactions: &[Transaction],
    split: &BudgetSplit,
    main_categories: &[MainCategory],
    month: NaiveDate,
) -> MonthlySummary {
    let category_map: HashMap<Uuid, &MainCategory> =
        main_categories.iter().map(|cat| (cat.id, cat)).collect();
    let in_month = |txn: &&Transaction| {
        txn.date.year() == month.year() && txn.date.month() == month.month()
    };

    let total_income: f64 = transactions
        .iter()
        .filter(in_month)
        .filter(|txn| txn.kind == TransactionKind::Income)
        .map(|txn| txn.amount)
        .sum();
    let total_expenses: f64 = transactions
        .iter()
        .filter(in_month)
        .filter(|txn| txn.kind == TransactionKind::Expense)
        .map(|txn| txn.amount)
        .sum();

    let mut summary = MonthlySummary {
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        needs: BucketSummary {
            budgeted: split.budgeted_for(BudgetKind::Needs, total_income),
            spent: 0.0,
        },
        wants: BucketSummary {
            budgeted: split.budgeted_for(BudgetKind::Wants, total_income),
            spent: 0.0,
        },
        savings: BucketSummary {
            budgeted: split.budgeted_for(BudgetKind::Savings, total_income),
            spent: 0.0,
        },
        category_spending: Vec::new(),
    };

    let mut per_category: HashMap<Uuid, f64> = HashMap::new();
    for txn in transactions
        .iter()
        .filter(in_month)
        .filter(|txn| txn.kind == TransactionKind::Expense)
    {
        let Some(category) = category_map.get(&txn.main_category_id) else {
            continue;
        };
        match category.budget_kind {
            BudgetKind::Needs => summary.needs.spent += txn.amount,
            BudgetKind::Wants => summary.wants.spent += txn.amount,
            BudgetKind::Savings => summary.savings.spent += txn.amount,
            BudgetKind::Income => {}
        }
        *per_category.entry(category.id).or_default() += txn.amount;
    }

    summary.category_spending = per_category
        .into_iter()
        .filter_map(|(id, amount)| {
            category_map.get(&id).map(|cat| CategorySpending {
                category_id: id,
                name: cat.name.clone(),
                amount,
            })
        })
        .collect();
    summary
        .category_spending
        .sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::budget::TransactionKind;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn summary_splits_income_and_buckets_expenses() {
        let rent = MainCategory::new("Logement", BudgetKind::Needs);
        let fun = MainCategory::new("Loisirs", BudgetKind::Wants);
        let salary = MainCategory::new("Salaire", BudgetKind::Income);
        let categories = vec![rent.clone(), fun.clone(), salary.clone()];

        let transactions = vec![
            Transaction::new(TransactionKind::Income, 2000.0, date(2024, 3, 1), salary.id),
            Transaction::new(TransactionKind::Expense, 800.0, date(2024, 3, 5), rent.id),
            Transaction::new(TransactionKind::Expense, 150.0, date(2024, 3, 12), fun.id),
            // Outside the selected month, must be ignored.
            Transaction::new(TransactionKind::Expense, 999.0, date(2024, 4, 1), rent.id),
        ];

        let summary = monthly_summary(
            &transactions,
            &BudgetSplit::default(),
            &categories,
            date(2024, 3, 15),
        );

        assert_eq!(summary.total_income, 2000.0);
        assert_eq!(summary.total_expenses, 950.0);
        assert_eq!(summary.balance, 1050.0);
        assert_eq!(summary.needs.budgeted, 1000.0);
        assert_eq!(summary.needs.spent, 800.0);
        assert_eq!(summary.wants.spent, 150.0);
        assert_eq!(summary.savings.spent, 0.0);
        assert_eq!(summary.category_spending.len(), 2);
        assert_eq!(summary.category_spending[0].name, "Logement");
    }

    #[test]
    fn unknown_categories_are_skipped() {
        let transactions = vec![Transaction::new(
            TransactionKind::Expense,
            42.0,
            date(2024, 3, 5),
            Uuid::new_v4(),
        )];
        let summary =
            monthly_summary(&transactions, &BudgetSplit::default(), &[], date(2024, 3, 1));
        assert_eq!(summary.total_expenses, 42.0);
        assert!(summary.category_spending.is_empty());
        assert_eq!(summary.needs.spent, 0.0);
    }
}
