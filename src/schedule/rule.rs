use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::budget::{TransactionDraft, TransactionKind};

use super::due_date::first_due_date;
use super::generator::GenerationOutcome;

/// How often a recurrence rule produces occurrences.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// A template for automatically generated transactions.
///
/// The schedule is driven by `next_due_date`: the generator walks forward
/// from it and writes the advanced value back through [`advance`]. The only
/// legitimate way the schedule moves backward is [`reschedule`], used after
/// a human edits the rule's parameters.
///
/// [`advance`]: RecurrenceRule::advance
/// [`reschedule`]: RecurrenceRule::reschedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecurrenceRule {
    pub id: Uuid,
    pub name: String,
    pub kind: TransactionKind,
    pub amount: f64,
    pub main_category_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_category_id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub frequency: Frequency,
    pub interval: u32,
    pub start_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_weekday: Option<Weekday>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anchor_day_of_month: Option<u32>,
    #[serde(default)]
    pub last_generated_date: Option<NaiveDate>,
    pub next_due_date: NaiveDate,
    pub is_active: bool,
}

impl RecurrenceRule {
    /// Creates a rule with `next_due_date` seeded from the first-occurrence
    /// calculation.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        kind: TransactionKind,
        amount: f64,
        main_category_id: Uuid,
        frequency: Frequency,
        interval: u32,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            amount,
            main_category_id,
            sub_category_id: None,
            note: None,
            frequency,
            interval: interval.max(1),
            start_date,
            end_date: None,
            anchor_weekday: None,
            anchor_day_of_month: None,
            last_generated_date: None,
            next_due_date: start_date,
            is_active: true,
        }
        .with_recomputed_first_due()
    }

    pub fn with_weekday_anchor(mut self, weekday: Weekday) -> Self {
        self.anchor_weekday = Some(weekday);
        self.with_recomputed_first_due()
    }

    pub fn with_day_of_month_anchor(mut self, day: u32) -> Self {
        self.anchor_day_of_month = Some(day);
        self.with_recomputed_first_due()
    }

    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Re-derives the schedule after an edit of frequency, interval, anchor,
    /// or start date. Clears `last_generated_date`; already materialized
    /// transactions are left alone.
    pub fn reschedule(
        &mut self,
        frequency: Frequency,
        interval: u32,
        start_date: NaiveDate,
        anchor_weekday: Option<Weekday>,
        anchor_day_of_month: Option<u32>,
    ) {
        self.frequency = frequency;
        self.interval = interval.max(1);
        self.start_date = start_date;
        self.anchor_weekday = anchor_weekday;
        self.anchor_day_of_month = anchor_day_of_month;
        self.last_generated_date = None;
        self.next_due_date = self.first_due();
    }

    /// Applies a generation run's outcome to the schedule state.
    pub fn advance(&mut self, outcome: &GenerationOutcome) {
        if let Some(generated) = outcome.new_last_generated_date {
            self.last_generated_date = Some(generated);
        }
        self.next_due_date = outcome.new_next_due_date;
    }

    /// Builds the identity-less transaction for one occurrence date. The
    /// note carries the rule name and a marker so generated entries are
    /// recognizable in the transaction list.
    pub fn draft_for(&self, date: NaiveDate) -> TransactionDraft {
        let note = match &self.note {
            Some(note) => format!("{} - {} (Récurrent)", self.name, note),
            None => format!("{} (Récurrent)", self.name),
        };
        TransactionDraft {
            kind: self.kind,
            amount: self.amount,
            date,
            main_category_id: self.main_category_id,
            sub_category_id: self.sub_category_id,
            note: Some(note),
        }
    }

    fn first_due(&self) -> NaiveDate {
        first_due_date(
            self.start_date,
            self.frequency,
            self.anchor_weekday,
            self.anchor_day_of_month,
        )
    }

    fn with_recomputed_first_due(mut self) -> Self {
        self.next_due_date = self.first_due();
        self
    }
}
