//! Due-date arithmetic for recurrence schedules.
//!
//! All functions operate on naive calendar dates. Weeks start on Sunday and
//! day-of-month anchors clamp to the target month's length, so an anchor of
//! 31 lands on February 28th (or 29th) and is retried against the full
//! anchor on the following step.

use chrono::{Datelike, Duration, NaiveDate, Weekday};

use super::rule::Frequency;

/// Computes the earliest valid occurrence on or after `start` that is
/// consistent with the supplied anchor.
///
/// Daily schedules have no anchor and return `start` unchanged. When an
/// anchor is expected but absent, `start` is returned as-is.
///
/// A yearly schedule's first occurrence advances month-by-month, exactly
/// like a monthly one: the first hit is the nearest qualifying day-of-month
/// at or after `start`, not a full year jump.
pub fn first_due_date(
    start: NaiveDate,
    frequency: Frequency,
    anchor_weekday: Option<Weekday>,
    anchor_day_of_month: Option<u32>,
) -> NaiveDate {
    match frequency {
        Frequency::Daily => start,
        Frequency::Weekly => {
            let Some(anchor) = anchor_weekday else {
                return start;
            };
            let candidate = weekday_in_week_of(start, anchor);
            if candidate < start {
                candidate + Duration::days(7)
            } else {
                candidate
            }
        }
        Frequency::Monthly | Frequency::Yearly => {
            let Some(day) = anchor_day_of_month else {
                return start;
            };
            let candidate = with_clamped_day(start, day);
            if candidate < start {
                with_clamped_day(shift_months(candidate, 1), day)
            } else {
                candidate
            }
        }
    }
}

/// Computes the occurrence strictly following `current` for the given
/// frequency, interval, and anchor.
pub fn next_due_date(
    current: NaiveDate,
    frequency: Frequency,
    interval: u32,
    anchor_weekday: Option<Weekday>,
    anchor_day_of_month: Option<u32>,
) -> NaiveDate {
    let interval = interval.max(1);
    match frequency {
        Frequency::Daily => current + Duration::days(i64::from(interval)),
        Frequency::Weekly => {
            let reference = current + Duration::weeks(i64::from(interval));
            let Some(anchor) = anchor_weekday else {
                return reference;
            };
            if reference.weekday() == anchor {
                return reference;
            }
            let candidate = weekday_in_week_of(reference, anchor);
            if candidate < reference {
                candidate + Duration::days(7)
            } else {
                candidate
            }
        }
        Frequency::Monthly => {
            let advanced = shift_months(current, interval as i32);
            match anchor_day_of_month {
                Some(day) => with_clamped_day(advanced, day),
                None => advanced,
            }
        }
        Frequency::Yearly => {
            let advanced = shift_years(current, interval as i32);
            match anchor_day_of_month {
                Some(day) => with_clamped_day(advanced, day),
                None => advanced,
            }
        }
    }
}

/// Returns the date with `date`'s weekday replaced by `target`, within the
/// same Sunday-starting week.
fn weekday_in_week_of(date: NaiveDate, target: Weekday) -> NaiveDate {
    let offset = i64::from(target.num_days_from_sunday())
        - i64::from(date.weekday().num_days_from_sunday());
    date + Duration::days(offset)
}

/// Replaces the day-of-month, clamping to the month's last valid day.
fn with_clamped_day(date: NaiveDate, day: u32) -> NaiveDate {
    let clamped = day.max(1).min(days_in_month(date.year(), date.month()));
    date.with_day(clamped).unwrap_or(date)
}

fn shift_months(date: NaiveDate, months: i32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    while month < 1 {
        month += 12;
        year -= 1;
    }
    let day = date.day().min(days_in_month(year, month as u32));
    NaiveDate::from_ymd_opt(year, month as u32, day).unwrap_or(date)
}

fn shift_years(date: NaiveDate, years: i32) -> NaiveDate {
    let year = date.year() + years;
    let day = date.day().min(days_in_month(year, date.month()));
    NaiveDate::from_ymd_opt(year, date.month(), day).unwrap_or(date)
}

fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap_or_else(|| NaiveDate::from_ymd_opt(year, month, 28).unwrap_or_default());
    (first_of_next - Duration::days(1)).day()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2023, 12), 31);
        assert_eq!(days_in_month(2023, 4), 30);
    }

    #[test]
    fn shift_months_clamps_and_wraps() {
        assert_eq!(shift_months(date(2023, 1, 31), 1), date(2023, 2, 28));
        assert_eq!(shift_months(date(2023, 11, 15), 3), date(2024, 2, 15));
    }

    #[test]
    fn shift_years_clamps_leap_day() {
        assert_eq!(shift_years(date(2024, 2, 29), 1), date(2025, 2, 28));
        assert_eq!(shift_years(date(2024, 2, 29), 4), date(2028, 2, 29));
    }

    #[test]
    fn weekday_in_week_is_sunday_anchored() {
        // 2023-10-03 is a Tuesday; Sunday of that week is 2023-10-01.
        assert_eq!(
            weekday_in_week_of(date(2023, 10, 3), Weekday::Sun),
            date(2023, 10, 1)
        );
        assert_eq!(
            weekday_in_week_of(date(2023, 10, 3), Weekday::Sat),
            date(2023, 10, 7)
        );
    }
}
