//! Units of calendar and clock arithmetic

use crate::civil::{
    NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MICRO, NANOS_PER_MILLI, NANOS_PER_MINUTE,
    NANOS_PER_SECOND, NANOS_PER_WEEK,
};
use crate::CarbonError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Granularity targeted by an arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Millisecond,
    Microsecond,
    Nanosecond,
    Week,
}

impl Unit {
    pub const ALL: [Unit; 10] = [
        Unit::Year,
        Unit::Month,
        Unit::Day,
        Unit::Hour,
        Unit::Minute,
        Unit::Second,
        Unit::Millisecond,
        Unit::Microsecond,
        Unit::Nanosecond,
        Unit::Week,
    ];

    /// Exact length of the unit in nanoseconds
    ///
    /// `None` for years and months, whose length depends on the calendar.
    pub fn fixed_nanos(self) -> Option<i128> {
        match self {
            Unit::Year | Unit::Month => None,
            Unit::Week => Some(NANOS_PER_WEEK),
            Unit::Day => Some(NANOS_PER_DAY),
            Unit::Hour => Some(NANOS_PER_HOUR),
            Unit::Minute => Some(NANOS_PER_MINUTE),
            Unit::Second => Some(NANOS_PER_SECOND),
            Unit::Millisecond => Some(NANOS_PER_MILLI),
            Unit::Microsecond => Some(NANOS_PER_MICRO),
            Unit::Nanosecond => Some(1),
        }
    }

    /// Whether the unit is measured on the calendar rather than the clock
    pub fn is_calendar(self) -> bool {
        self.fixed_nanos().is_none()
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Year => "year",
            Unit::Month => "month",
            Unit::Day => "day",
            Unit::Hour => "hour",
            Unit::Minute => "minute",
            Unit::Second => "second",
            Unit::Millisecond => "millisecond",
            Unit::Microsecond => "microsecond",
            Unit::Nanosecond => "nanosecond",
            Unit::Week => "week",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Unit {
    type Err = CarbonError;

    /// Accepts singular, plural and short names, case-insensitively
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yr" | "yrs" | "year" | "years" => Unit::Year,
            "mo" | "mon" | "month" | "months" => Unit::Month,
            "w" | "wk" | "wks" | "week" | "weeks" => Unit::Week,
            "d" | "day" | "days" => Unit::Day,
            "h" | "hr" | "hrs" | "hour" | "hours" => Unit::Hour,
            "m" | "min" | "mins" | "minute" | "minutes" => Unit::Minute,
            "s" | "sec" | "secs" | "second" | "seconds" => Unit::Second,
            "ms" | "milli" | "millis" | "millisecond" | "milliseconds" => Unit::Millisecond,
            "us" | "µs" | "micro" | "micros" | "microsecond" | "microseconds" => Unit::Microsecond,
            "ns" | "nano" | "nanos" | "nanosecond" | "nanoseconds" => Unit::Nanosecond,
            _ => return Err(CarbonError::InvalidUnit(s.to_string())),
        };
        Ok(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("years".parse::<Unit>().unwrap(), Unit::Year);
        assert_eq!("Month".parse::<Unit>().unwrap(), Unit::Month);
        assert_eq!(" d ".parse::<Unit>().unwrap(), Unit::Day);
        assert_eq!("m".parse::<Unit>().unwrap(), Unit::Minute);
        assert_eq!("ms".parse::<Unit>().unwrap(), Unit::Millisecond);
        assert_eq!("weeks".parse::<Unit>().unwrap(), Unit::Week);
    }

    #[test]
    fn test_from_str_invalid() {
        let err = "fortnight".parse::<Unit>().unwrap_err();
        assert_eq!(err, CarbonError::InvalidUnit("fortnight".to_string()));
    }

    #[test]
    fn test_names_round_trip() {
        for unit in Unit::ALL {
            assert_eq!(unit.name().parse::<Unit>().unwrap(), unit);
        }
    }

    #[test]
    fn test_fixed_nanos() {
        assert_eq!(Unit::Year.fixed_nanos(), None);
        assert!(Unit::Month.is_calendar());
        assert_eq!(Unit::Millisecond.fixed_nanos(), Some(1_000_000));
        assert_eq!(Unit::Week.fixed_nanos(), Some(7 * 86_400 * 1_000_000_000));
    }
}
