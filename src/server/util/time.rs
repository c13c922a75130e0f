//! Time and date calculation utilities.
//!
//! All dates are local calendar dates: machines are maintained on the shop floor's
//! calendar, not UTC.

use chrono::{Days, Local, NaiveDate, NaiveDateTime, TimeDelta};

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Current local date and time
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Adds `days` to `date`, saturating at the latest representable date.
///
/// # Arguments
/// - `date` - Date to start from
/// - `days` - Number of days to add
///
/// # Returns
/// - `NaiveDate` - `date` plus `days`, or [`NaiveDate::MAX`] on overflow
///
/// # Example
/// ```ignore
/// let date = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
/// assert_eq!(add_days(date, 7), NaiveDate::from_ymd_opt(2024, 6, 8).unwrap());
/// ```
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days))
        .unwrap_or(NaiveDate::MAX)
}

/// Adds `days` to `timestamp`, saturating at the latest representable timestamp
pub fn add_days_to_timestamp(timestamp: NaiveDateTime, days: i64) -> NaiveDateTime {
    TimeDelta::try_days(days)
        .and_then(|delta| timestamp.checked_add_signed(delta))
        .unwrap_or(NaiveDateTime::MAX)
}
