//! Calendar time primitives for the simulation
//!
//! The simulation advances in whole calendar months (UTC). This module
//! provides deterministic month arithmetic on `chrono::NaiveDate` plus the
//! date formatting rules shared by the whole engine.

use chrono::{Datelike, Months, NaiveDate};

/// Earliest date the engine accepts anywhere in its input.
///
/// Career records predating the 3rd pay commission tables cannot be
/// simulated; validation rejects anything before this date.
pub const MIN_SUPPORTED_DATE: NaiveDate = match NaiveDate::from_ymd_opt(1980, 1, 1) {
    Some(d) => d,
    None => panic!("1980-01-01 is a valid date"),
};

/// Construct a date from literal components.
///
/// Intended for reference-table literals and tests where the components are
/// known-valid. Panics on an impossible calendar date.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day)
        .unwrap_or_else(|| panic!("invalid calendar date {:04}-{:02}-{:02}", year, month, day))
}

/// Advance a date by `n` calendar months, clamping the day to the target
/// month's length (31 Jan + 1 month = 28/29 Feb).
pub fn add_months(date: NaiveDate, n: u32) -> NaiveDate {
    date.checked_add_months(Months::new(n))
        .unwrap_or_else(|| panic!("date arithmetic overflow adding {} months to {}", n, date))
}

/// Advance a date by `n` calendar years (day clamped as in [`add_months`]).
pub fn add_years(date: NaiveDate, n: u32) -> NaiveDate {
    add_months(date, n * 12)
}

/// Shift a date forward or backward by a number of calendar days.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(chrono::Duration::days(days))
        .unwrap_or_else(|| panic!("date arithmetic overflow adding {} days to {}", days, date))
}

/// True when both dates fall in the same calendar month of the same year.
pub fn same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// `(year, month)` ordering key used by the monthly loop.
pub fn month_key(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.month())
}

/// First day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    ymd(date.year(), date.month(), 1)
}

/// Last day of the month containing `date`.
pub fn last_day_of_month(date: NaiveDate) -> NaiveDate {
    let next = add_months(first_of_month(date), 1);
    add_days(next, -1)
}

/// Replace the month of `date`, resetting the day to the 1st.
///
/// Scheduled increment dates always sit on the 1st of their month.
pub fn with_month_day_one(date: NaiveDate, month: u32) -> NaiveDate {
    ymd(date.year(), month, 1)
}

/// English month name for a 1-based month number.
pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}

/// Render a date as `DD/MM/YYYY`, the format used in all output metadata.
pub fn format_dmy(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_months_clamps_day() {
        assert_eq!(add_months(ymd(2021, 1, 31), 1), ymd(2021, 2, 28));
        assert_eq!(add_months(ymd(2020, 1, 31), 1), ymd(2020, 2, 29));
        assert_eq!(add_months(ymd(2018, 7, 1), 6), ymd(2019, 1, 1));
    }

    #[test]
    fn test_add_days() {
        // 60-day shift used by break-in-service postponement
        assert_eq!(add_days(ymd(2021, 7, 1), 60), ymd(2021, 8, 30));
    }

    #[test]
    fn test_last_day_of_month() {
        assert_eq!(last_day_of_month(ymd(2024, 2, 10)), ymd(2024, 2, 29));
        assert_eq!(last_day_of_month(ymd(2023, 12, 1)), ymd(2023, 12, 31));
    }

    #[test]
    fn test_format_dmy() {
        assert_eq!(format_dmy(ymd(2016, 1, 1)), "01/01/2016");
    }

    #[test]
    fn test_month_key_ordering() {
        assert!(month_key(ymd(2019, 12, 31)) < month_key(ymd(2020, 1, 1)));
        assert_eq!(month_key(ymd(2020, 5, 1)), month_key(ymd(2020, 5, 28)));
    }
}
