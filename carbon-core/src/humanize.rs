//! Human readable differences ("3 days ago", "1 hour before")

use crate::clock::{Calendar, Clock};
use crate::Carbon;

const MINUTE: u128 = 60;
const HOUR: u128 = 60 * MINUTE;
const DAY: u128 = 24 * HOUR;
const WEEK: u128 = 7 * DAY;
/// A month counts as 30 days
const MONTH: u128 = 30 * DAY;
/// Years are counted in blocks of 30 * 365 days
const YEAR: u128 = 30 * 365 * DAY;

/// (exclusive upper bound in seconds, seconds per unit, unit name)
const SCALE: [(u128, u128, &str); 6] = [
    (MINUTE, 1, "second"),
    (HOUR, MINUTE, "minute"),
    (DAY, HOUR, "hour"),
    (MONTH, DAY, "day"),
    (7 * MONTH, WEEK, "week"),
    (12 * MONTH, MONTH, "month"),
];

/// Describe a signed difference in seconds (`reference - value`)
///
/// A positive difference means the value lies before the reference. With
/// `explicit_reference` the direction reads "before"/"after", otherwise
/// "ago"/"from now".
pub fn humanize(diff: i128, explicit_reference: bool) -> String {
    let seconds = diff.unsigned_abs();
    let (count, unit) = SCALE
        .iter()
        .find(|(limit, _, _)| seconds < *limit)
        .map(|(_, per, unit)| (seconds / per, *unit))
        .unwrap_or((seconds / YEAR, "year"));
    let plural = if count > 1 { "s" } else { "" };
    let direction = match (diff < 0, explicit_reference) {
        (false, true) => "before",
        (true, true) => "after",
        (false, false) => "ago",
        (true, false) => "from now",
    };
    format!("{} {}{} {}", count, unit, plural, direction)
}

impl Carbon {
    /// Difference from `other`, or from the current time when `None`
    pub fn diff_for_humans(&self, other: Option<&Carbon>) -> String {
        match other {
            Some(reference) => self.describe_from(reference, true),
            None => self.describe_from(&Carbon::now(), false),
        }
    }

    /// Difference from a caller-supplied "now", worded as "ago"/"from now"
    pub fn diff_for_humans_from_now(&self, now: &Carbon) -> String {
        self.describe_from(now, false)
    }

    fn describe_from(&self, reference: &Carbon, explicit_reference: bool) -> String {
        let diff = reference.timestamp() as i128 - self.timestamp() as i128;
        humanize(diff, explicit_reference)
    }
}

impl<C: Clock> Calendar<C> {
    /// Difference between `value` and this calendar's current time
    pub fn diff_for_humans(&self, value: &Carbon) -> String {
        value.diff_for_humans_from_now(&self.now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, Offset};

    #[test]
    fn test_thresholds() {
        let cases = [
            (0, "0 second ago"),
            (1, "1 second ago"),
            (59, "59 seconds ago"),
            (60, "1 minute ago"),
            (3_599, "59 minutes ago"),
            (3_600, "1 hour ago"),
            (86_399, "23 hours ago"),
            (86_400, "1 day ago"),
            (2_591_999, "29 days ago"),
            (2_592_000, "4 weeks ago"),
            (18_143_999, "29 weeks ago"),
            (18_144_000, "7 months ago"),
            (31_103_999, "11 months ago"),
            (31_104_000, "0 year ago"),
            (31_536_000, "0 year ago"),
            (2 * 31_536_000, "0 year ago"),
            (946_079_999, "0 year ago"),
            (946_080_000, "1 year ago"),
            (2 * 946_080_000, "2 years ago"),
        ];
        for (diff, expected) in cases {
            assert_eq!(humanize(diff, false), expected, "diff {}", diff);
        }
    }

    #[test]
    fn test_direction() {
        assert_eq!(humanize(-7_200, false), "2 hours from now");
        assert_eq!(humanize(7_200, true), "2 hours before");
        assert_eq!(humanize(-7_200, true), "2 hours after");
    }

    #[test]
    fn test_reference_one_hour_later() {
        let value = Carbon::create(2019, 4, 14, 12, 0, 0, Offset::UTC).unwrap();
        let mut reference = value.clone();
        reference.add_hour();
        assert_eq!(value.diff_for_humans(Some(&reference)), "1 hour before");
        assert_eq!(value.diff_for_humans_from_now(&reference), "1 hour ago");
    }

    #[test]
    fn test_extreme_difference() {
        let text = humanize(i64::MAX as i128 - i64::MIN as i128, false);
        assert!(text.ends_with("years ago"), "{}", text);
    }

    #[test]
    fn test_diff_for_humans_with_reference() {
        let reference = Carbon::create(2019, 4, 14, 12, 0, 0, Offset::UTC).unwrap();
        let mut value = reference.clone();
        value.sub_days(3);
        assert_eq!(value.diff_for_humans(Some(&reference)), "3 days before");
        value.add_weeks(2);
        assert_eq!(value.diff_for_humans(Some(&reference)), "1 week after");
        assert_eq!(reference.diff_for_humans_from_now(&value), "1 week ago");
    }

    #[test]
    fn test_diff_for_humans_against_clock() {
        let value = Carbon::now();
        let text = value.diff_for_humans(None);
        assert!(text.ends_with("ago") || text.ends_with("from now"), "{}", text);

        let now = Carbon::create(2020, 1, 1, 0, 0, 0, Offset::UTC).unwrap();
        let calendar = Calendar::new(FixedClock::from_carbon(&now), Offset::UTC);
        let mut later = now.clone();
        later.add_hours(5);
        assert_eq!(calendar.diff_for_humans(&later), "5 hours from now");
    }
}
