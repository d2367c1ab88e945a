//! Gregorian (proleptic) calendar utilities
//!
//! Leap years, month lengths, weekday and month names, and the conversions
//! between civil dates and days since the Unix epoch.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

pub const NANOS_PER_MICRO: i128 = 1_000;
pub const NANOS_PER_MILLI: i128 = 1_000_000;
pub const NANOS_PER_SECOND: i128 = 1_000_000_000;
pub const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
pub const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
pub const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;
pub const NANOS_PER_WEEK: i128 = 7 * NANOS_PER_DAY;

/// Days in each month (non-leap year)
const DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Days from 0000-03-01 to 1970-01-01
const UNIX_EPOCH_DAYS: i64 = 719_468;

const MONTH_NAMES: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

// ============================================================================
// Leap years and month lengths
// ============================================================================

/// Check if year is a leap year
pub fn is_leap_year(year: i64) -> bool {
    (year % 100 != 0 && year % 4 == 0) || year % 400 == 0
}

/// Number of days in a year: 366 for leap years, else 365
pub fn days_in_year(year: i64) -> u32 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Get days in a month (0 for a month outside 1-12)
pub fn days_in_month(year: i64, month: u32) -> u32 {
    match month {
        2 if is_leap_year(year) => 29,
        1..=12 => DAYS_IN_MONTH[(month - 1) as usize],
        _ => 0,
    }
}

/// Full English month name ("January"); empty for a month outside 1-12
pub fn month_name(month: u32) -> &'static str {
    match month {
        1..=12 => MONTH_NAMES[(month - 1) as usize],
        _ => "",
    }
}

/// Three letter month abbreviation ("Jan")
pub fn month_abbrev(month: u32) -> &'static str {
    let name = month_name(month);
    &name[..name.len().min(3)]
}

// ============================================================================
// Day counting
// ============================================================================

/// Convert civil date to days since Unix epoch
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
pub fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400; // [0, 399]
    let m = month as i64;
    let doy = (153 * (if m > 2 { m - 3 } else { m + 9 }) + 2) / 5 + day as i64 - 1; // [0, 365]
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]
    era * 146_097 + doe - UNIX_EPOCH_DAYS
}

/// Convert days since Unix epoch to civil date
/// Algorithm from Howard Hinnant: http://howardhinnant.github.io/date_algorithms.html
pub fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + UNIX_EPOCH_DAYS;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097; // [0, 146096]
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365; // [0, 399]
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
    let mp = (5 * doy + 2) / 153; // [0, 11]
    let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
    let m = if mp < 10 { mp + 3 } else { mp - 9 }; // [1, 12]
    let year = if m <= 2 { y + 1 } else { y };
    (year, m as u32, d as u32)
}

// ============================================================================
// Weekday
// ============================================================================

/// Day of the week, Sunday first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Weekday of a day counted from the Unix epoch (1970-01-01 was a Thursday)
    pub fn from_days_since_epoch(days: i64) -> Self {
        Self::ALL[(days + 4).rem_euclid(7) as usize]
    }

    /// Sunday = 0 ... Saturday = 6
    pub fn number_from_sunday(self) -> u32 {
        self as u32
    }

    /// ISO 8601 numbering: Monday = 1 ... Sunday = 7
    pub fn number_from_monday(self) -> u32 {
        match self {
            Weekday::Sunday => 7,
            other => other as u32,
        }
    }

    /// Days elapsed since the most recent `start` (0 when `self == start`)
    pub fn days_since(self, start: Weekday) -> u32 {
        (self as u32 + 7 - start as u32) % 7
    }

    pub fn name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }

    pub fn abbrev(self) -> &'static str {
        &self.name()[..3]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap_year() {
        for year in [2000, 2020, 2024, 1600, -4] {
            assert!(is_leap_year(year), "{} should be a leap year", year);
        }
        for year in [1900, 2019, 2021, 2100, -1] {
            assert!(!is_leap_year(year), "{} should not be a leap year", year);
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2019, 1), 31);
        assert_eq!(days_in_month(2019, 2), 28);
        assert_eq!(days_in_month(2020, 2), 29);
        assert_eq!(days_in_month(2019, 4), 30);
        assert_eq!(days_in_month(2019, 13), 0);
        assert_eq!(days_in_year(2019), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_civil_round_trip() {
        assert_eq!(days_from_civil(1970, 1, 1), 0);
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        assert_eq!(civil_from_days(-1), (1969, 12, 31));
        assert_eq!(days_from_civil(2000, 3, 1), 11_017);

        for days in [-800_000, -1, 0, 59, 365, 10_957, 2_932_896] {
            let (y, m, d) = civil_from_days(days);
            assert_eq!(days_from_civil(y, m, d), days);
        }
    }

    #[test]
    fn test_weekday() {
        assert_eq!(Weekday::from_days_since_epoch(0), Weekday::Thursday);
        assert_eq!(Weekday::from_days_since_epoch(-4), Weekday::Sunday);
        // 2025-06-15 is a Sunday
        let days = days_from_civil(2025, 6, 15);
        assert_eq!(Weekday::from_days_since_epoch(days), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.number_from_monday(), 7);
        assert_eq!(Weekday::Monday.number_from_sunday(), 1);
        assert_eq!(Weekday::Sunday.days_since(Weekday::Monday), 6);
        assert_eq!(Weekday::Wednesday.abbrev(), "Wed");
    }

    #[test]
    fn test_month_names() {
        assert_eq!(month_name(2), "February");
        assert_eq!(month_abbrev(1), "Jan");
        assert_eq!(month_name(0), "");
        assert_eq!(month_abbrev(13), "");
    }
}
