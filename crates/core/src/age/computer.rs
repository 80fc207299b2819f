//! Elapsed-age computation in whole years and months.
//!
//! The day of month only participates as a threshold (`today.day >= birth.day`)
//! and is never subtracted, so the month count can sit one month off near month
//! boundaries with unequal days. That rounding is part of the contract and is
//! kept as-is. A birth date after `today` produces a negative year count; no
//! clamping or future-date validation happens here.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Elapsed age in whole years and months, months always reduced to `0..=11`
/// by borrowing from the year count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Age {
    pub years: i32,
    pub months: i32,
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} years and {} months old", self.years, self.months)
    }
}

/// Compute the age at `today` for someone born on `birth`.
#[must_use]
pub fn compute_age(birth: NaiveDate, today: NaiveDate) -> Age {
    let raw_years = today.year() - birth.year();
    let raw_months = today.month() as i32 - birth.month() as i32;
    let day_threshold_met = today.day() >= birth.day();

    if raw_months < 0 || (raw_months == 0 && !day_threshold_met) {
        Age { years: raw_years - 1, months: raw_months + 12 }
    } else {
        Age { years: raw_years, months: raw_months }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_exact_birthday() {
        let age = compute_age(date(2000, 5, 15), date(2024, 5, 15));
        assert_eq!(age, Age { years: 24, months: 0 });
    }

    #[test]
    fn test_day_before_birthday_borrows() {
        let age = compute_age(date(2000, 5, 15), date(2024, 5, 14));
        assert_eq!(age, Age { years: 23, months: 11 });
    }

    #[test]
    fn test_negative_month_difference_borrows() {
        let age = compute_age(date(2000, 6, 15), date(2024, 5, 20));
        assert_eq!(age, Age { years: 23, months: 11 });
    }

    #[test]
    fn test_under_one_year() {
        let age = compute_age(date(2000, 1, 1), date(2000, 6, 1));
        assert_eq!(age, Age { years: 0, months: 5 });
    }

    #[test]
    fn test_december_to_january() {
        let age = compute_age(date(2000, 12, 31), date(2024, 1, 1));
        assert_eq!(age, Age { years: 23, months: 1 });
    }

    #[test]
    fn test_day_threshold_only_checked_at_zero_months() {
        // Day threshold not met, but raw months is positive: no borrow.
        let age = compute_age(date(2000, 5, 31), date(2024, 6, 1));
        assert_eq!(age, Age { years: 24, months: 1 });
    }

    #[test]
    fn test_future_birth_date_goes_negative() {
        let age = compute_age(date(2030, 1, 1), date(2024, 5, 20));
        assert_eq!(age, Age { years: -6, months: 4 });
    }

    #[test]
    fn test_same_day() {
        let age = compute_age(date(2024, 5, 15), date(2024, 5, 15));
        assert_eq!(age, Age { years: 0, months: 0 });
    }

    #[test]
    fn test_display_rendering() {
        let age = Age { years: 24, months: 0 };
        assert_eq!(age.to_string(), "24 years and 0 months old");

        let age = Age { years: 1, months: 1 };
        assert_eq!(age.to_string(), "1 years and 1 months old");
    }
}
