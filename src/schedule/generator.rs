//! Catch-up generation: walks a rule's schedule forward from its stored
//! `next_due_date` and materializes one draft per occurrence up to the
//! cutoff.

use chrono::NaiveDate;

use crate::budget::TransactionDraft;

use super::due_date::next_due_date;
use super::rule::RecurrenceRule;

/// Result of one generation pass over a single rule.
#[derive(Debug, Clone)]
pub struct GenerationOutcome {
    /// One draft per occurrence, in chronological order.
    pub drafts: Vec<TransactionDraft>,
    /// Date of the last draft emitted in this pass, if any.
    pub new_last_generated_date: Option<NaiveDate>,
    /// The rule's next occurrence to consider on the following pass. Equals
    /// the stored `next_due_date` when nothing was generated.
    pub new_next_due_date: NaiveDate,
}

impl GenerationOutcome {
    fn untouched(rule: &RecurrenceRule) -> Self {
        Self {
            drafts: Vec::new(),
            new_last_generated_date: None,
            new_next_due_date: rule.next_due_date,
        }
    }
}

/// Materializes every occurrence of `rule` due on or before `cutoff`.
///
/// Pure over its inputs: the caller owns applying the returned schedule
/// state back to the rule (see [`RecurrenceRule::advance`]). Inactive rules
/// are left untouched. Both `cutoff` and the rule's `end_date` are
/// inclusive bounds, and a rule whose `next_due_date` already lies past the
/// cutoff gets its stored value back unchanged.
///
/// Day-of-month clamping is re-derived at every step, so an anchor of 31
/// lands on February 28th and still returns to the 31st in March.
pub fn generate_occurrences(rule: &RecurrenceRule, cutoff: NaiveDate) -> GenerationOutcome {
    if !rule.is_active {
        return GenerationOutcome::untouched(rule);
    }

    let mut drafts = Vec::new();
    let mut last_generated = None;
    let mut cursor = rule.next_due_date;

    while cursor <= cutoff && rule.end_date.map_or(true, |end| cursor <= end) {
        drafts.push(rule.draft_for(cursor));
        last_generated = Some(cursor);
        cursor = next_due_date(
            cursor,
            rule.frequency,
            rule.interval,
            rule.anchor_weekday,
            rule.anchor_day_of_month,
        );
    }

    GenerationOutcome {
        drafts,
        new_last_generated_date: last_generated,
        new_next_due_date: cursor,
    }
}
