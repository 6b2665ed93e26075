//! Startup catch-up: materializes every recurring transaction owed up to a
//! reference date.

use chrono::NaiveDate;

use crate::budget::{BudgetBook, Transaction};
use crate::schedule::generate_occurrences;

/// Summary of one catch-up pass over a book.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatchUpReport {
    /// Active rules inspected.
    pub rules_processed: usize,
    /// Transactions appended to the book.
    pub transactions_generated: usize,
    /// Rules whose `next_due_date` moved forward.
    pub rules_advanced: usize,
}

/// Runs the recurrence engine over every active rule in the book.
pub struct CatchUpService;

impl CatchUpService {
    /// Generates all occurrences due on or before `today`, appends them as
    /// transactions, and advances each rule's schedule state.
    ///
    /// Re-running with the same `today` is a no-op: the advanced
    /// `next_due_date` lies past the cutoff, so every rule yields zero
    /// drafts. Inactive rules are skipped entirely.
    pub fn run(book: &mut BudgetBook, today: NaiveDate) -> CatchUpReport {
        let mut report = CatchUpReport::default();
        let mut created: Vec<Transaction> = Vec::new();

        for rule in &mut book.recurring_rules {
            if !rule.is_active {
                continue;
            }
            report.rules_processed += 1;

            let outcome = generate_occurrences(rule, today);
            let generated = outcome.drafts.len();
            if outcome.new_next_due_date != rule.next_due_date {
                report.rules_advanced += 1;
            }
            tracing::debug!(
                rule = %rule.name,
                generated,
                next_due = %outcome.new_next_due_date,
                "processed recurring rule"
            );

            created.extend(outcome.drafts.iter().cloned().map(Transaction::from_draft));
            rule.advance(&outcome);
            report.transactions_generated += generated;
        }

        book.transactions.extend(created);
        tracing::info!(
            rules = report.rules_processed,
            generated = report.transactions_generated,
            "catch-up run complete"
        );
        report
    }
}
