#![doc(test(attr(deny(warnings))))]

//! Budget Recurrence offers the domain model and recurring-transaction
//! engine behind a personal budgeting workflow: deterministic due-date
//! arithmetic, idempotent catch-up generation, and a JSON-backed store.

pub mod budget;
pub mod errors;
pub mod reporting;
pub mod schedule;
pub mod services;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budget Recurrence tracing initialized.");
    });
}
