//! Carbon: a calendar value that is both decomposed and absolute
//!
//! A `Carbon` holds an instant (nanoseconds since the Unix epoch), the fixed
//! offset it is viewed in, and the decomposed calendar fields of that view.
//! The instant is the source of truth: every mutation moves the instant and
//! then recomputes the fields from it.
//!
//! Arithmetic mutates in place and returns `&mut Self` for chaining:
//!
//! ```
//! use carbon_core::{Carbon, Offset};
//!
//! let mut c = Carbon::create(2019, 1, 31, 8, 0, 0, Offset::UTC).unwrap();
//! c.add_month().add_days(2);
//! assert_eq!(c.to_date_string(), "2019-03-05");
//! ```

use crate::civil::{
    self, days_from_civil, days_in_month, Weekday, NANOS_PER_DAY, NANOS_PER_HOUR,
    NANOS_PER_MINUTE, NANOS_PER_SECOND,
};
use crate::clock::Calendar;
use crate::{CarbonError, Offset, Quarter, Unit};
use serde::{Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Earliest instant: the smallest whole-second `i64` timestamp
const MIN_INSTANT: i128 = i64::MIN as i128 * NANOS_PER_SECOND;
/// Latest instant: the last nanosecond of the largest `i64` timestamp
const MAX_INSTANT: i128 = i64::MAX as i128 * NANOS_PER_SECOND + (NANOS_PER_SECOND - 1);
/// Years beyond this cannot hold a representable instant
const YEAR_LIMIT: i128 = 400_000_000_000;

pub const DATE_TIME_LAYOUT: &str = "YYYY-MM-DD HH:mm:ss";
pub const DATE_LAYOUT: &str = "YYYY-MM-DD";
pub const TIME_LAYOUT: &str = "HH:mm:ss";
pub const FORMATTED_DATE_LAYOUT: &str = "MMM DD,YYYY";
pub const ISO_LAYOUT: &str = "YYYY-MM-DD[T]HH:mm:ssZ";

// ============================================================================
// Components
// ============================================================================

/// Decomposed calendar fields of a [`Carbon`]
///
/// The three sub-second fields all derive from one count of nanoseconds
/// within the second: `millisecond = ns / 10^6`, `microsecond = ns / 10^3`
/// and `nanosecond = ns`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Components {
    pub year: i64,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub millisecond: u32,
    pub microsecond: u32,
    pub nanosecond: u32,
    #[serde(rename = "week")]
    pub weekday: Weekday,
}

impl Components {
    /// Decompose nanoseconds of wall-clock time counted from 1970-01-01T00:00
    fn from_local_nanos(local: i128) -> Self {
        let days = local.div_euclid(NANOS_PER_DAY) as i64;
        let day_nanos = local.rem_euclid(NANOS_PER_DAY);
        let (year, month, day) = civil::civil_from_days(days);
        let nanos = (day_nanos % NANOS_PER_SECOND) as u32;
        Self {
            year,
            month,
            day,
            hour: (day_nanos / NANOS_PER_HOUR) as u32,
            minute: ((day_nanos % NANOS_PER_HOUR) / NANOS_PER_MINUTE) as u32,
            second: ((day_nanos % NANOS_PER_MINUTE) / NANOS_PER_SECOND) as u32,
            millisecond: nanos / 1_000_000,
            microsecond: nanos / 1_000,
            nanosecond: nanos,
            weekday: Weekday::from_days_since_epoch(days),
        }
    }
}

// ============================================================================
// Carbon
// ============================================================================

/// A point in calendar time, decomposed and absolute
#[derive(Debug, Clone)]
pub struct Carbon {
    /// Nanoseconds since Unix epoch (negative for pre-1970 instants)
    instant: i128,
    offset: Offset,
    fields: Components,
}

/// Wall-clock nanoseconds for possibly out-of-range fields, normalized the
/// way a calendar carries them (month 14 is February of the next year,
/// hour 25 is 01:00 the next day, negative values borrow).
fn local_from_parts(
    year: i64,
    month: i64,
    day: i64,
    time_nanos: i128,
) -> Result<i128, CarbonError> {
    let total_months = year as i128 * 12 + (month as i128 - 1);
    let year = total_months.div_euclid(12);
    let month = (total_months.rem_euclid(12) + 1) as u32;
    if year.abs() > YEAR_LIMIT {
        return Err(CarbonError::Overflow);
    }
    let days = days_from_civil(year as i64, month, 1) as i128 + (day as i128 - 1);
    Ok(days * NANOS_PER_DAY + time_nanos)
}

impl Carbon {
    // ========== Construction ==========

    fn from_valid_instant(instant: i128, offset: Offset) -> Self {
        let fields = Components::from_local_nanos(instant + offset.as_nanos());
        Self { instant, offset, fields }
    }

    /// Create from nanoseconds since the Unix epoch
    pub fn from_instant(instant: i128, offset: Offset) -> Result<Self, CarbonError> {
        if !(MIN_INSTANT..=MAX_INSTANT).contains(&instant) {
            return Err(CarbonError::Overflow);
        }
        Ok(Self::from_valid_instant(instant, offset))
    }

    /// Create from an instant, saturating at the ends of the representable range
    pub(crate) fn from_instant_saturating(instant: i128, offset: Offset) -> Self {
        Self::from_valid_instant(instant.clamp(MIN_INSTANT, MAX_INSTANT), offset)
    }

    /// Create from wall-clock nanoseconds in `offset`
    fn from_local(local: i128, offset: Offset) -> Result<Self, CarbonError> {
        Self::from_instant(local - offset.as_nanos(), offset)
    }

    /// Create from explicit fields
    ///
    /// Out-of-range fields are carried into the next larger unit:
    /// `create(2018, 14, 13, ...)` is 2019-02-13 and hour 25 is 01:00 on the
    /// following day.
    pub fn create(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        offset: Offset,
    ) -> Result<Self, CarbonError> {
        Self::create_with_nanos(year, month, day, hour, minute, second, 0, offset)
    }

    /// Create from explicit fields with nanoseconds
    #[allow(clippy::too_many_arguments)]
    pub fn create_with_nanos(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        nanosecond: i64,
        offset: Offset,
    ) -> Result<Self, CarbonError> {
        let time_nanos = hour as i128 * NANOS_PER_HOUR
            + minute as i128 * NANOS_PER_MINUTE
            + second as i128 * NANOS_PER_SECOND
            + nanosecond as i128;
        let local = local_from_parts(year, month, day, time_nanos)?;
        Self::from_local(local, offset)
    }

    /// Current time from the system clock in the local offset
    pub fn now() -> Self {
        Calendar::local().now()
    }

    /// Today at midnight in the local offset
    pub fn today() -> Self {
        Calendar::local().today()
    }

    /// Now plus one day
    pub fn tomorrow() -> Self {
        Calendar::local().tomorrow()
    }

    /// Now minus one day
    pub fn yesterday() -> Self {
        Calendar::local().yesterday()
    }

    /// Create from a date; the time of day is the current time in `offset`
    pub fn create_from_date(year: i64, month: i64, day: i64, offset: Offset) -> Result<Self, CarbonError> {
        Calendar::system(offset).create_from_date(year, month, day)
    }

    /// Create from a time; the date is the current date in `offset`
    pub fn create_from_time(hour: i64, minute: i64, second: i64, offset: Offset) -> Result<Self, CarbonError> {
        Calendar::system(offset).create_from_time(hour, minute, second)
    }

    /// Create from an `HH:MM:SS` string on the current date in `offset`
    pub fn create_from_time_string(value: &str, offset: Offset) -> Result<Self, CarbonError> {
        Calendar::system(offset).create_from_time_string(value)
    }

    /// Create from seconds since the Unix epoch
    pub fn create_from_timestamp(seconds: i64, offset: Offset) -> Self {
        Self::from_valid_instant(seconds as i128 * NANOS_PER_SECOND, offset)
    }

    /// Create from a decimal string of seconds since the Unix epoch
    pub fn create_from_timestamp_string(value: &str, offset: Offset) -> Result<Self, CarbonError> {
        let seconds: i64 = value.parse().map_err(|_| {
            tracing::debug!(value, "timestamp is not an integer");
            CarbonError::TimestampParse(format!("'{}' is not an integer number of seconds", value))
        })?;
        Ok(Self::create_from_timestamp(seconds, offset))
    }

    // ========== Accessors ==========

    pub fn year(&self) -> i64 {
        self.fields.year
    }

    /// Month (1-12)
    pub fn month(&self) -> u32 {
        self.fields.month
    }

    /// Day of month (1-31)
    pub fn day(&self) -> u32 {
        self.fields.day
    }

    pub fn hour(&self) -> u32 {
        self.fields.hour
    }

    pub fn minute(&self) -> u32 {
        self.fields.minute
    }

    pub fn second(&self) -> u32 {
        self.fields.second
    }

    /// Milliseconds within the second (0-999)
    pub fn millisecond(&self) -> u32 {
        self.fields.millisecond
    }

    /// Microseconds within the second (0-999_999)
    pub fn microsecond(&self) -> u32 {
        self.fields.microsecond
    }

    /// Nanoseconds within the second (0-999_999_999)
    pub fn nanosecond(&self) -> u32 {
        self.fields.nanosecond
    }

    pub fn weekday(&self) -> Weekday {
        self.fields.weekday
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    /// Snapshot of all decomposed fields
    pub fn components(&self) -> Components {
        self.fields
    }

    /// Seconds since Unix epoch, rounded toward negative infinity
    pub fn timestamp(&self) -> i64 {
        self.instant.div_euclid(NANOS_PER_SECOND) as i64
    }

    /// Same as [`Carbon::timestamp`]
    pub fn unix(&self) -> i64 {
        self.timestamp()
    }

    pub fn timestamp_millis(&self) -> i128 {
        self.instant.div_euclid(1_000_000)
    }

    pub fn timestamp_nanos(&self) -> i128 {
        self.instant
    }

    /// Same instant seen from another offset
    pub fn in_offset(&self, offset: Offset) -> Self {
        Self::from_valid_instant(self.instant, offset)
    }

    fn local_nanos(&self) -> i128 {
        self.instant + self.offset.as_nanos()
    }

    fn local_days(&self) -> i64 {
        self.local_nanos().div_euclid(NANOS_PER_DAY) as i64
    }

    // ========== Calendar facts ==========

    pub fn is_leap_year(&self) -> bool {
        civil::is_leap_year(self.fields.year)
    }

    /// 366 in a leap year, else 365
    pub fn count_day_for_year(&self) -> u32 {
        civil::days_in_year(self.fields.year)
    }

    /// Length of the current month in days
    pub fn count_day_for_month(&self) -> u32 {
        days_in_month(self.fields.year, self.fields.month)
    }

    pub fn current_quarter(&self) -> Quarter {
        Quarter::ALL[(self.fields.month as usize - 1) / 3]
    }

    // ========== Arithmetic ==========

    fn set_instant(&mut self, instant: i128) -> Result<(), CarbonError> {
        if !(MIN_INSTANT..=MAX_INSTANT).contains(&instant) {
            return Err(CarbonError::Overflow);
        }
        self.instant = instant;
        self.fields = Components::from_local_nanos(self.local_nanos());
        Ok(())
    }

    /// Instant after moving `months` calendar months, keeping day and time
    ///
    /// With `clamp` the day is limited to the last day of the target month,
    /// otherwise it rolls over into the following month.
    fn shifted_by_months(&self, months: i128, clamp: bool) -> Result<i128, CarbonError> {
        let total = self.fields.year as i128 * 12 + (self.fields.month as i128 - 1) + months;
        let year = total.div_euclid(12);
        let month = (total.rem_euclid(12) + 1) as u32;
        if year.abs() > YEAR_LIMIT {
            return Err(CarbonError::Overflow);
        }
        let day = if clamp {
            self.fields.day.min(days_in_month(year as i64, month))
        } else {
            self.fields.day
        };
        let time_nanos = self.local_nanos().rem_euclid(NANOS_PER_DAY);
        let local = local_from_parts(year as i64, month as i64, day as i64, time_nanos)?;
        Ok(local - self.offset.as_nanos())
    }

    /// Add `count` units, or fail with `Overflow` leaving the value untouched
    ///
    /// Years and months move on the calendar: the month index is shifted and
    /// a day past the end of the target month rolls over (January 31 plus
    /// one month is March 3 in a common year). Every other unit is an exact
    /// duration.
    pub fn checked_add(&mut self, unit: Unit, count: i64) -> Result<&mut Self, CarbonError> {
        let instant = match unit.fixed_nanos() {
            Some(nanos) => nanos
                .checked_mul(count as i128)
                .and_then(|delta| self.instant.checked_add(delta))
                .ok_or(CarbonError::Overflow)?,
            None => {
                let months = if unit == Unit::Year { count as i128 * 12 } else { count as i128 };
                self.shifted_by_months(months, false)?
            }
        };
        self.set_instant(instant)?;
        tracing::trace!(%unit, count, timestamp = self.timestamp(), "shifted");
        Ok(self)
    }

    /// Subtract `count` units, or fail with `Overflow` leaving the value untouched
    pub fn checked_sub(&mut self, unit: Unit, count: i64) -> Result<&mut Self, CarbonError> {
        let count = count.checked_neg().ok_or(CarbonError::Overflow)?;
        self.checked_add(unit, count)
    }

    /// Add `count` units; an overflowing result is logged and ignored
    pub fn add(&mut self, unit: Unit, count: i64) -> &mut Self {
        if let Err(err) = self.checked_add(unit, count) {
            tracing::warn!(%unit, count, error = %err, "addition ignored");
        }
        self
    }

    /// Subtract `count` units; an overflowing result is logged and ignored
    pub fn sub(&mut self, unit: Unit, count: i64) -> &mut Self {
        if let Err(err) = self.checked_sub(unit, count) {
            tracing::warn!(%unit, count, error = %err, "subtraction ignored");
        }
        self
    }

    /// Add `count` of a unit given by name ("days", "h", ...)
    pub fn add_str(&mut self, count: i64, unit: &str) -> Result<&mut Self, CarbonError> {
        let unit: Unit = unit.parse()?;
        self.checked_add(unit, count)
    }

    /// Subtract `count` of a unit given by name
    pub fn sub_str(&mut self, count: i64, unit: &str) -> Result<&mut Self, CarbonError> {
        let unit: Unit = unit.parse()?;
        self.checked_sub(unit, count)
    }

    /// Add months, clamping the day to the end of the target month
    pub fn add_months_no_overflow(&mut self, months: i64) -> &mut Self {
        match self
            .shifted_by_months(months as i128, true)
            .and_then(|instant| self.set_instant(instant))
        {
            Ok(()) => {}
            Err(err) => tracing::warn!(months, error = %err, "month addition ignored"),
        }
        self
    }

    pub fn sub_months_no_overflow(&mut self, months: i64) -> &mut Self {
        self.add_months_no_overflow(months.saturating_neg())
    }

    pub fn add_years_no_overflow(&mut self, years: i64) -> &mut Self {
        self.add_months_no_overflow(years.saturating_mul(12))
    }

    pub fn sub_years_no_overflow(&mut self, years: i64) -> &mut Self {
        self.add_months_no_overflow(years.saturating_mul(-12))
    }

    pub fn add_year(&mut self) -> &mut Self {
        self.add(Unit::Year, 1)
    }

    pub fn add_years(&mut self, years: i64) -> &mut Self {
        self.add(Unit::Year, years)
    }

    pub fn sub_year(&mut self) -> &mut Self {
        self.sub(Unit::Year, 1)
    }

    pub fn sub_years(&mut self, years: i64) -> &mut Self {
        self.sub(Unit::Year, years)
    }

    pub fn add_month(&mut self) -> &mut Self {
        self.add(Unit::Month, 1)
    }

    pub fn add_months(&mut self, months: i64) -> &mut Self {
        self.add(Unit::Month, months)
    }

    pub fn sub_month(&mut self) -> &mut Self {
        self.sub(Unit::Month, 1)
    }

    pub fn sub_months(&mut self, months: i64) -> &mut Self {
        self.sub(Unit::Month, months)
    }

    pub fn add_week(&mut self) -> &mut Self {
        self.add(Unit::Week, 1)
    }

    pub fn add_weeks(&mut self, weeks: i64) -> &mut Self {
        self.add(Unit::Week, weeks)
    }

    pub fn sub_week(&mut self) -> &mut Self {
        self.sub(Unit::Week, 1)
    }

    pub fn sub_weeks(&mut self, weeks: i64) -> &mut Self {
        self.sub(Unit::Week, weeks)
    }

    pub fn add_day(&mut self) -> &mut Self {
        self.add(Unit::Day, 1)
    }

    pub fn add_days(&mut self, days: i64) -> &mut Self {
        self.add(Unit::Day, days)
    }

    pub fn sub_day(&mut self) -> &mut Self {
        self.sub(Unit::Day, 1)
    }

    pub fn sub_days(&mut self, days: i64) -> &mut Self {
        self.sub(Unit::Day, days)
    }

    pub fn add_hour(&mut self) -> &mut Self {
        self.add(Unit::Hour, 1)
    }

    pub fn add_hours(&mut self, hours: i64) -> &mut Self {
        self.add(Unit::Hour, hours)
    }

    pub fn sub_hour(&mut self) -> &mut Self {
        self.sub(Unit::Hour, 1)
    }

    pub fn sub_hours(&mut self, hours: i64) -> &mut Self {
        self.sub(Unit::Hour, hours)
    }

    pub fn add_minute(&mut self) -> &mut Self {
        self.add(Unit::Minute, 1)
    }

    pub fn add_minutes(&mut self, minutes: i64) -> &mut Self {
        self.add(Unit::Minute, minutes)
    }

    pub fn sub_minute(&mut self) -> &mut Self {
        self.sub(Unit::Minute, 1)
    }

    pub fn sub_minutes(&mut self, minutes: i64) -> &mut Self {
        self.sub(Unit::Minute, minutes)
    }

    pub fn add_second(&mut self) -> &mut Self {
        self.add(Unit::Second, 1)
    }

    pub fn add_seconds(&mut self, seconds: i64) -> &mut Self {
        self.add(Unit::Second, seconds)
    }

    pub fn sub_second(&mut self) -> &mut Self {
        self.sub(Unit::Second, 1)
    }

    pub fn sub_seconds(&mut self, seconds: i64) -> &mut Self {
        self.sub(Unit::Second, seconds)
    }

    // ========== Period boundaries ==========

    /// Value at wall-clock `local` in the same offset, or a copy of `self`
    /// when that lies outside the representable range
    fn with_local(&self, local: i128) -> Self {
        Self::from_local(local, self.offset).unwrap_or_else(|_| self.clone())
    }

    fn with_local_date_start(&self, year: i64, month: u32, day: u32) -> Self {
        self.with_local(days_from_civil(year, month, day) as i128 * NANOS_PER_DAY)
    }

    /// 00:00:00 of the same day
    pub fn start_of_day(&self) -> Self {
        self.with_local(self.local_days() as i128 * NANOS_PER_DAY)
    }

    /// 23:59:59.999999999 of the same day
    pub fn end_of_day(&self) -> Self {
        self.with_local((self.local_days() as i128 + 1) * NANOS_PER_DAY - 1)
    }

    /// Midnight of the most recent `week_start` (today if it is `week_start`)
    pub fn start_of_week(&self, week_start: Weekday) -> Self {
        let back = self.fields.weekday.days_since(week_start) as i128;
        self.with_local((self.local_days() as i128 - back) * NANOS_PER_DAY)
    }

    /// Last nanosecond of the week that begins on `week_start`
    pub fn end_of_week(&self, week_start: Weekday) -> Self {
        let back = self.fields.weekday.days_since(week_start) as i128;
        self.with_local((self.local_days() as i128 - back + 7) * NANOS_PER_DAY - 1)
    }

    pub fn start_of_month(&self) -> Self {
        self.with_local_date_start(self.fields.year, self.fields.month, 1)
    }

    pub fn end_of_month(&self) -> Self {
        let last = self.count_day_for_month();
        self.with_local_date_start(self.fields.year, self.fields.month, last)
            .end_of_day()
    }

    pub fn start_of_quarter(&self) -> Self {
        let month = self.current_quarter().first_month();
        self.with_local_date_start(self.fields.year, month, 1)
    }

    pub fn end_of_quarter(&self) -> Self {
        let month = self.current_quarter().last_month();
        let last = days_in_month(self.fields.year, month);
        self.with_local_date_start(self.fields.year, month, last)
            .end_of_day()
    }

    pub fn start_of_year(&self) -> Self {
        self.with_local_date_start(self.fields.year, 1, 1)
    }

    pub fn end_of_year(&self) -> Self {
        self.with_local_date_start(self.fields.year, 12, 31).end_of_day()
    }

    // ========== Comparison ==========
    //
    // The named comparisons below work on whole seconds; `after`, `before`
    // and the `Ord` impl use the full nanosecond instant.

    pub fn equal_to(&self, other: &Carbon) -> bool {
        self.timestamp() == other.timestamp()
    }

    pub fn not_equal_to(&self, other: &Carbon) -> bool {
        self.timestamp() != other.timestamp()
    }

    pub fn greater_than(&self, other: &Carbon) -> bool {
        self.timestamp() > other.timestamp()
    }

    pub fn greater_than_or_equal_to(&self, other: &Carbon) -> bool {
        self.timestamp() >= other.timestamp()
    }

    pub fn less_than(&self, other: &Carbon) -> bool {
        self.timestamp() < other.timestamp()
    }

    pub fn less_than_or_equal_to(&self, other: &Carbon) -> bool {
        self.timestamp() <= other.timestamp()
    }

    /// Whether `first <= self <= second`, to the second
    pub fn between(&self, first: &Carbon, second: &Carbon) -> bool {
        let ts = self.timestamp();
        first.timestamp() <= ts && ts <= second.timestamp()
    }

    /// Whether this instant is strictly after `other`, to the nanosecond
    pub fn after(&self, other: &Carbon) -> bool {
        self.instant > other.instant
    }

    /// Whether this instant is strictly before `other`, to the nanosecond
    pub fn before(&self, other: &Carbon) -> bool {
        self.instant < other.instant
    }

    // ========== Relative predicates ==========

    /// Index of the period of `unit` containing this value, in its own offset
    fn period_index(&self, unit: Unit) -> i128 {
        match unit.fixed_nanos() {
            None if unit == Unit::Year => self.fields.year as i128,
            None => self.fields.year as i128 * 12 + self.fields.month as i128 - 1,
            // 1969-12-29 was a Monday
            Some(_) if unit == Unit::Week => (self.local_days() as i128 + 3).div_euclid(7),
            Some(nanos) => self.local_nanos().div_euclid(nanos),
        }
    }

    /// Periods of `unit` from `reference` to `self`, counted in `self`'s offset
    fn periods_from(&self, reference: &Carbon, unit: Unit) -> i128 {
        self.period_index(unit) - reference.in_offset(self.offset).period_index(unit)
    }

    /// Whether both values fall in the same period of `unit`
    ///
    /// Weeks start on Monday.
    pub fn is_current(&self, unit: Unit, reference: &Carbon) -> bool {
        self.periods_from(reference, unit) == 0
    }

    /// Whether this value falls in the period of `unit` right after the reference's
    pub fn is_next(&self, unit: Unit, reference: &Carbon) -> bool {
        self.periods_from(reference, unit) == 1
    }

    /// Whether this value falls in the period of `unit` right before the reference's
    pub fn is_last(&self, unit: Unit, reference: &Carbon) -> bool {
        self.periods_from(reference, unit) == -1
    }

    pub fn is_current_year(&self, reference: &Carbon) -> bool {
        self.is_current(Unit::Year, reference)
    }

    pub fn is_next_year(&self, reference: &Carbon) -> bool {
        self.is_next(Unit::Year, reference)
    }

    pub fn is_last_year(&self, reference: &Carbon) -> bool {
        self.is_last(Unit::Year, reference)
    }

    pub fn is_current_month(&self, reference: &Carbon) -> bool {
        self.is_current(Unit::Month, reference)
    }

    pub fn is_next_month(&self, reference: &Carbon) -> bool {
        self.is_next(Unit::Month, reference)
    }

    pub fn is_last_month(&self, reference: &Carbon) -> bool {
        self.is_last(Unit::Month, reference)
    }

    pub fn is_current_week(&self, reference: &Carbon) -> bool {
        self.is_current(Unit::Week, reference)
    }

    pub fn is_next_week(&self, reference: &Carbon) -> bool {
        self.is_next(Unit::Week, reference)
    }

    pub fn is_last_week(&self, reference: &Carbon) -> bool {
        self.is_last(Unit::Week, reference)
    }

    pub fn is_current_day(&self, reference: &Carbon) -> bool {
        self.is_current(Unit::Day, reference)
    }

    pub fn is_next_day(&self, reference: &Carbon) -> bool {
        self.is_next(Unit::Day, reference)
    }

    pub fn is_last_day(&self, reference: &Carbon) -> bool {
        self.is_last(Unit::Day, reference)
    }

    pub fn is_current_hour(&self, reference: &Carbon) -> bool {
        self.is_current(Unit::Hour, reference)
    }

    pub fn is_next_hour(&self, reference: &Carbon) -> bool {
        self.is_next(Unit::Hour, reference)
    }

    pub fn is_last_hour(&self, reference: &Carbon) -> bool {
        self.is_last(Unit::Hour, reference)
    }

    pub fn is_current_minute(&self, reference: &Carbon) -> bool {
        self.is_current(Unit::Minute, reference)
    }

    pub fn is_next_minute(&self, reference: &Carbon) -> bool {
        self.is_next(Unit::Minute, reference)
    }

    pub fn is_last_minute(&self, reference: &Carbon) -> bool {
        self.is_last(Unit::Minute, reference)
    }

    pub fn is_current_second(&self, reference: &Carbon) -> bool {
        self.is_current(Unit::Second, reference)
    }

    pub fn is_next_second(&self, reference: &Carbon) -> bool {
        self.is_next(Unit::Second, reference)
    }

    pub fn is_last_second(&self, reference: &Carbon) -> bool {
        self.is_last(Unit::Second, reference)
    }

    /// Whether this value's quarter is the reference's quarter
    ///
    /// Quarters are compared by number only: the year is ignored.
    pub fn is_current_quarter(&self, reference: &Carbon) -> bool {
        self.current_quarter() == reference.current_quarter()
    }

    /// Whether this value's quarter follows the reference's quarter (cyclic, year ignored)
    pub fn is_next_quarter(&self, reference: &Carbon) -> bool {
        self.current_quarter() == reference.current_quarter().next()
    }

    /// Whether this value's quarter precedes the reference's quarter (cyclic, year ignored)
    pub fn is_last_quarter(&self, reference: &Carbon) -> bool {
        self.current_quarter() == reference.current_quarter().last()
    }

    pub fn is_current_quarter_now(&self) -> bool {
        self.is_current_quarter(&Carbon::now())
    }

    pub fn is_next_quarter_now(&self) -> bool {
        self.is_next_quarter(&Carbon::now())
    }

    pub fn is_last_quarter_now(&self) -> bool {
        self.is_last_quarter(&Carbon::now())
    }

    pub fn is_sunday(&self) -> bool {
        self.fields.weekday == Weekday::Sunday
    }

    pub fn is_monday(&self) -> bool {
        self.fields.weekday == Weekday::Monday
    }

    pub fn is_tuesday(&self) -> bool {
        self.fields.weekday == Weekday::Tuesday
    }

    pub fn is_wednesday(&self) -> bool {
        self.fields.weekday == Weekday::Wednesday
    }

    pub fn is_thursday(&self) -> bool {
        self.fields.weekday == Weekday::Thursday
    }

    pub fn is_friday(&self) -> bool {
        self.fields.weekday == Weekday::Friday
    }

    pub fn is_saturday(&self) -> bool {
        self.fields.weekday == Weekday::Saturday
    }

    /// Saturday or Sunday
    pub fn is_weekend(&self) -> bool {
        self.is_saturday() || self.is_sunday()
    }

    /// Monday through Friday
    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    // ========== Output ==========

    /// `2006-01-02 15:04:05`
    pub fn to_date_time_string(&self) -> String {
        self.format(DATE_TIME_LAYOUT)
    }

    /// `2006-01-02`
    pub fn to_date_string(&self) -> String {
        self.format(DATE_LAYOUT)
    }

    /// `15:04:05`
    pub fn to_time_string(&self) -> String {
        self.format(TIME_LAYOUT)
    }

    /// `Jan 02,2006`
    pub fn to_formatted_date_string(&self) -> String {
        self.format(FORMATTED_DATE_LAYOUT)
    }

    /// `2006-01-02T15:04:05+07:00`
    pub fn to_iso_string(&self) -> String {
        self.format(ISO_LAYOUT)
    }

    /// Decomposed fields as a JSON object keyed by field name
    pub fn to_map(&self) -> serde_json::Map<String, serde_json::Value> {
        match serde_json::to_value(self.fields) {
            Ok(serde_json::Value::Object(map)) => map,
            _ => serde_json::Map::new(),
        }
    }
}

impl fmt::Display for Carbon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_date_time_string())
    }
}

impl PartialEq for Carbon {
    fn eq(&self, other: &Self) -> bool {
        self.instant == other.instant
    }
}

impl Eq for Carbon {}

impl PartialOrd for Carbon {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Carbon {
    fn cmp(&self, other: &Self) -> Ordering {
        self.instant.cmp(&other.instant)
    }
}

impl Hash for Carbon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instant.hash(state);
    }
}

impl Serialize for Carbon {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

// ============================================================================
// Tests
// ============================================================================
