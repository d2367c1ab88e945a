//! Carbon Core - calendar values
//!
//! This crate provides a date-time value for application code:
//! - `Carbon`: an instant plus its decomposed calendar fields in a fixed offset
//! - `Unit`, `Quarter`, `Weekday`, `Offset`: the vocabulary it is built from
//! - `Calendar`/`Clock`: "now" with an injectable clock
//! - `CarbonError`: structured errors with machine-readable codes

mod carbon;
mod clock;
mod error;
mod humanize;
mod offset;
mod quarter;
mod settings;
mod unit;

pub mod civil;
pub mod layout;

pub use carbon::{
    Carbon, Components, DATE_LAYOUT, DATE_TIME_LAYOUT, FORMATTED_DATE_LAYOUT, ISO_LAYOUT,
    TIME_LAYOUT,
};
pub use civil::Weekday;
pub use clock::{Calendar, Clock, FixedClock, SystemClock};
pub use error::{codes, CarbonError};
pub use humanize::humanize;
pub use offset::Offset;
pub use quarter::Quarter;
pub use settings::Settings;
pub use unit::Unit;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{Calendar, Carbon, CarbonError, Offset, Quarter, Unit, Weekday};
    pub use crate::error::codes;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(timestamp: i64) -> Carbon {
        Carbon::create_from_timestamp(timestamp, Offset::UTC)
    }

    mod field_tests {
        use super::*;

        #[test]
        fn test_fields_match_timestamp_in_every_offset() {
            let offsets = ["-11:30", "-08:00", "Z", "+05:45", "+14:00"];
            for ts in [-62_135_596_800, -1, 0, 951_782_400, 1_540_181_532, 4_102_444_800] {
                for raw in offsets {
                    let offset: Offset = raw.parse().unwrap();
                    let c = Carbon::create_from_timestamp(ts, offset);
                    let rebuilt = Carbon::create(
                        c.year(),
                        c.month() as i64,
                        c.day() as i64,
                        c.hour() as i64,
                        c.minute() as i64,
                        c.second() as i64,
                        offset,
                    )
                    .unwrap();
                    assert_eq!(rebuilt.timestamp(), ts, "{} at {}", ts, raw);
                }
            }
        }

        #[test]
        fn test_fields_stay_in_range_after_arithmetic() {
            let mut c = at(1_546_300_799);
            for step in 0..200 {
                c.add(Unit::ALL[step % Unit::ALL.len()], (step as i64 * 37) % 11 - 5);
                let f = c.components();
                assert!((1..=12).contains(&f.month));
                assert!(f.day >= 1 && f.day <= c.count_day_for_month());
                assert!(f.hour < 24 && f.minute < 60 && f.second < 60);
                assert!(f.nanosecond < 1_000_000_000);
            }
        }

        #[test]
        fn test_weekday_is_consistent_with_days() {
            let mut c = at(0);
            let mut expected = Weekday::Thursday.number_from_sunday();
            for _ in 0..30 {
                assert_eq!(c.weekday().number_from_sunday(), expected);
                c.add_day();
                expected = (expected + 1) % 7;
            }
        }
    }

    mod arithmetic_tests {
        use super::*;

        #[test]
        fn test_add_then_sub_fixed_units() {
            for unit in Unit::ALL.into_iter().filter(|u| !u.is_calendar()) {
                let original = at(1_555_200_000);
                let mut c = original.clone();
                c.add(unit, 17).sub(unit, 17);
                assert_eq!(c, original, "{}", unit);
            }
        }

        #[test]
        fn test_day_is_twenty_four_hours() {
            let mut a = at(1_555_200_000);
            let mut b = a.clone();
            a.add_day();
            b.add_hours(24);
            assert_eq!(a, b);
            a.add_week();
            b.add_days(7);
            assert_eq!(a, b);
        }

        #[test]
        fn test_chaining() {
            let mut c = Carbon::create(2019, 1, 1, 0, 0, 0, Offset::UTC).unwrap();
            c.add_year().add_month().add_day().add_hour().add_minute().add_second();
            assert_eq!(c.to_date_time_string(), "2020-02-02 01:01:01");
            c.sub_year().sub_month().sub_day().sub_hour().sub_minute().sub_second();
            assert_eq!(c.to_date_time_string(), "2019-01-01 00:00:00");
        }

        #[test]
        fn test_week_wrappers() {
            let mut c = Carbon::create(2019, 4, 14, 0, 0, 0, Offset::UTC).unwrap();
            c.sub_week().sub_weeks(2);
            assert_eq!(c.to_date_string(), "2019-03-24");
            c.add_weeks(3);
            assert_eq!(c.to_date_string(), "2019-04-14");
        }

        #[test]
        fn test_quarter_after_month_arithmetic() {
            let mut c = Carbon::create(2019, 3, 31, 0, 0, 0, Offset::UTC).unwrap();
            assert_eq!(c.current_quarter(), Quarter::Q1);
            c.add_months_no_overflow(1);
            assert_eq!(c.current_quarter(), Quarter::Q2);
            c.add_months(9);
            assert_eq!(c.current_quarter(), Quarter::Q1);
            assert_eq!(c.year(), 2020);
        }
    }

    mod comparison_tests {
        use super::*;

        #[test]
        fn test_exactly_one_ordering_holds() {
            let stamps = [-5, 0, 0, 3, 1_000_000];
            for a in stamps {
                for b in stamps {
                    let (x, y) = (at(a), at(b));
                    let held = [x.less_than(&y), x.equal_to(&y), x.greater_than(&y)];
                    assert_eq!(held.iter().filter(|h| **h).count(), 1);
                    assert_eq!(x.less_than_or_equal_to(&y), !x.greater_than(&y));
                    assert_eq!(x.greater_than_or_equal_to(&y), !x.less_than(&y));
                    assert_eq!(x.not_equal_to(&y), !x.equal_to(&y));
                }
            }
        }

        #[test]
        fn test_sorting() {
            let mut values = vec![at(30), at(-10), at(20), at(0)];
            values.sort();
            let stamps: Vec<i64> = values.iter().map(Carbon::timestamp).collect();
            assert_eq!(stamps, vec![-10, 0, 20, 30]);
        }
    }

    mod prelude_tests {
        use crate::prelude::*;

        #[test]
        fn test_prelude_imports() {
            let c = Carbon::create(2019, 10, 1, 0, 0, 0, Offset::UTC).unwrap();
            assert_eq!(c.current_quarter(), Quarter::Q4);
            let err = "eon".parse::<Unit>().unwrap_err();
            assert_eq!(err.code(), codes::INVALID_UNIT);
            assert!(matches!(err, CarbonError::InvalidUnit(_)));
        }
    }
}
