use chrono::{Datelike, Duration, Months, NaiveDate};

use crate::constants::MONTH_LABELS;

/// First day of the calendar month containing `date`.
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(i64::from(date.day0()))
}

/// Short label ("Jan", "Feb", ...) of the month containing `date`.
pub fn month_label(date: NaiveDate) -> &'static str {
    MONTH_LABELS[date.month0() as usize]
}

/// Label of the month `offset` months after the month labelled `label`,
/// wrapping around a 12-month cycle. Unknown labels are treated as January.
pub fn label_after(label: &str, offset: usize) -> &'static str {
    let index = MONTH_LABELS.iter().position(|l| *l == label).unwrap_or(0);
    MONTH_LABELS[(index + offset) % 12]
}

/// Whole days from `start` to `end`; negative when `end` precedes `start`.
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Whole calendar months from `start` to `end`.
///
/// A month only counts once the day-of-month of `start` has been reached, so
/// 2024-01-15 to 2024-03-14 is one month and 2024-01-01 to 2024-04-01 is three.
/// The result is negative when `end` precedes `start`.
pub fn whole_months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let mut months = (end.year() - start.year()) * 12 + end.month() as i32 - start.month() as i32;
    if months > 0 && end.day() < start.day() {
        months -= 1;
    } else if months < 0 && end.day() > start.day() {
        months += 1;
    }
    months
}

/// First day of the month `count` months after the month containing `date`.
pub fn add_months(date: NaiveDate, count: u32) -> Option<NaiveDate> {
    month_start(date).checked_add_months(Months::new(count))
}

/// First days of every calendar month from the month of `start` through the
/// month of `end`, inclusive. Empty when `start` is after `end`.
pub fn get_months_between(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let last = month_start(end);
    let mut current = month_start(start);
    let mut months = Vec::new();
    while current <= last {
        months.push(current);
        match current.checked_add_months(Months::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    months
}
