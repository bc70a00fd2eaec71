use crate::predicate::ops::{CompareOp, RangeOp};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

///
/// CalendarOp
///
/// Structural calendar queries. Deliberately contains no clock-relative
/// operators; evaluation must stay pure.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum CalendarOp {
    IsFirstDayOfMonth,
    IsFirstDayOfYear,
    IsLastDayOfMonth,
    IsLastDayOfYear,
    IsWeekday,
    IsWeekend,
}

///
/// DateStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum DateStateOp {
    IsLeapDay,
    IsLeapYear,
}

#[must_use]
pub fn calendar(value: NaiveDate, op: CalendarOp) -> bool {
    match op {
        CalendarOp::IsFirstDayOfMonth => value.day() == 1,
        CalendarOp::IsFirstDayOfYear => value.ordinal() == 1,
        CalendarOp::IsLastDayOfMonth => value.day() == last_day_of_month(value),
        CalendarOp::IsLastDayOfYear => value.month() == 12 && value.day() == 31,
        CalendarOp::IsWeekday => !is_weekend(value),
        CalendarOp::IsWeekend => is_weekend(value),
    }
}

#[must_use]
pub fn comparison(value: NaiveDate, op: CompareOp, target: NaiveDate) -> bool {
    op.matches(value.cmp(&target))
}

/// Inclusive range membership.
#[must_use]
pub fn range(value: NaiveDate, op: RangeOp, low: NaiveDate, high: NaiveDate) -> bool {
    op.matches(value >= low && value <= high)
}

#[must_use]
pub fn state(value: NaiveDate, op: DateStateOp) -> bool {
    match op {
        DateStateOp::IsLeapDay => value.month() == 2 && value.day() == 29,
        DateStateOp::IsLeapYear => value.leap_year(),
    }
}

fn is_weekend(value: NaiveDate) -> bool {
    matches!(value.weekday(), Weekday::Sat | Weekday::Sun)
}

fn last_day_of_month(value: NaiveDate) -> u32 {
    // chrono has no days_in_month; probe the four possible lengths.
    [31, 30, 29, 28]
        .into_iter()
        .find(|&day| NaiveDate::from_ymd_opt(value.year(), value.month(), day).is_some())
        .unwrap_or(28)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn weekend_detection() {
        // 2024-01-06 is a Saturday.
        assert!(calendar(date(2024, 1, 6), CalendarOp::IsWeekend));
        assert!(calendar(date(2024, 1, 8), CalendarOp::IsWeekday));
    }

    #[test]
    fn month_boundaries() {
        assert!(calendar(date(2024, 2, 29), CalendarOp::IsLastDayOfMonth));
        assert!(calendar(date(2023, 2, 28), CalendarOp::IsLastDayOfMonth));
        assert!(calendar(date(2024, 4, 30), CalendarOp::IsLastDayOfMonth));
        assert!(!calendar(date(2024, 4, 29), CalendarOp::IsLastDayOfMonth));
        assert!(calendar(date(2024, 12, 31), CalendarOp::IsLastDayOfYear));
    }

    #[test]
    fn leap_state() {
        assert!(state(date(2024, 2, 29), DateStateOp::IsLeapDay));
        assert!(state(date(2024, 6, 1), DateStateOp::IsLeapYear));
        assert!(!state(date(2023, 6, 1), DateStateOp::IsLeapYear));
    }

    #[test]
    fn range_is_inclusive() {
        assert!(range(
            date(2024, 1, 1),
            RangeOp::Between,
            date(2024, 1, 1),
            date(2024, 12, 31)
        ));
        assert!(range(
            date(2023, 12, 31),
            RangeOp::NotBetween,
            date(2024, 1, 1),
            date(2024, 12, 31)
        ));
    }
}
