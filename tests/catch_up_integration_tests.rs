use budget_recurrence::budget::{BudgetBook, BudgetKind, MainCategory, TransactionKind};
use budget_recurrence::reporting::monthly_summary;
use budget_recurrence::schedule::{Frequency, RecurrenceRule};
use budget_recurrence::services::CatchUpService;
use budget_recurrence::storage::{JsonStorage, StorageBackend};
use chrono::NaiveDate;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn seeded_book() -> BudgetBook {
    let mut book = BudgetBook::default();
    let housing = book.add_main_category(MainCategory::new("Logement", BudgetKind::Needs));
    let salary = book.add_main_category(MainCategory::new("Salaire", BudgetKind::Income));

    book.add_rule(
        RecurrenceRule::new(
            "Loyer",
            TransactionKind::Expense,
            850.0,
            housing,
            Frequency::Monthly,
            1,
            date(2024, 1, 1),
        )
        .with_day_of_month_anchor(1),
    );
    book.add_rule(
        RecurrenceRule::new(
            "Salaire",
            TransactionKind::Income,
            2400.0,
            salary,
            Frequency::Monthly,
            1,
            date(2024, 1, 28),
        )
        .with_day_of_month_anchor(28),
    );
    book
}

#[test]
fn catch_up_persists_and_reruns_cleanly() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("budget.json");
    let storage = JsonStorage;

    let mut book = seeded_book();
    let today = date(2024, 3, 15);

    let report = CatchUpService::run(&mut book, today);
    // Rent: Jan 1, Feb 1, Mar 1. Salary: Jan 28, Feb 28.
    assert_eq!(report.transactions_generated, 5);
    storage.save(&book, &path).expect("save");

    let mut reloaded = storage.load(&path).expect("load");
    let second = CatchUpService::run(&mut reloaded, today);
    assert_eq!(second.transactions_generated, 0);
    assert_eq!(reloaded.transactions.len(), 5);
}

#[test]
fn generated_transactions_feed_the_monthly_dashboard() {
    let mut book = seeded_book();
    CatchUpService::run(&mut book, date(2024, 3, 15));

    let february = monthly_summary(
        &book.transactions,
        &book.budget_split,
        &book.main_categories,
        date(2024, 2, 1),
    );

    assert_eq!(february.total_income, 2400.0);
    assert_eq!(february.total_expenses, 850.0);
    assert_eq!(february.needs.budgeted, 1200.0);
    assert_eq!(february.needs.spent, 850.0);
}

#[test]
fn rescheduling_a_rule_restarts_generation_from_the_new_schedule() {
    let mut book = seeded_book();
    CatchUpService::run(&mut book, date(2024, 3, 15));
    let rule_id = book.recurring_rules[0].id;

    // Move rent to the 15th from April onward.
    let rule = book.rule_mut(rule_id).expect("rule exists");
    rule.reschedule(Frequency::Monthly, 1, date(2024, 4, 1), None, Some(15));
    assert_eq!(rule.next_due_date, date(2024, 4, 15));
    assert_eq!(rule.last_generated_date, None);

    let before = book.transactions.len();
    let report = CatchUpService::run(&mut book, date(2024, 4, 20));
    // New rent occurrence on Apr 15 plus the salary occurrences for Mar 28
    // and, not yet, Apr 28.
    assert_eq!(report.transactions_generated, 2);
    assert_eq!(book.transactions.len(), before + 2);
}

#[test]
fn stale_rule_beyond_end_date_is_a_silent_noop() {
    let mut book = BudgetBook::default();
    let category = book.add_main_category(MainCategory::new("Divers", BudgetKind::Wants));
    let mut rule = RecurrenceRule::new(
        "Essai",
        TransactionKind::Expense,
        5.0,
        category,
        Frequency::Daily,
        1,
        date(2024, 1, 1),
    )
    .with_end_date(date(2024, 1, 3));
    rule.next_due_date = date(2024, 1, 10);
    book.add_rule(rule);

    let report = CatchUpService::run(&mut book, date(2024, 3, 1));

    assert_eq!(report.transactions_generated, 0);
    assert_eq!(report.rules_advanced, 0);
    assert!(book.transactions.is_empty());
}
