//! Recurrence schedules: due-date arithmetic and occurrence generation.

pub mod due_date;
pub mod generator;
pub mod rule;

pub use due_date::{first_due_date, next_due_date};
pub use generator::{generate_occurrences, GenerationOutcome};
pub use rule::{Frequency, RecurrenceRule};
