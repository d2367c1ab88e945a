//! Wall-clock sources and clock-backed constructors
//!
//! [`Calendar`] binds a [`Clock`] to an [`Offset`] and builds the values that
//! need "now": `now`, `today`, `create_from_date` and friends. The associated
//! functions on [`Carbon`] go through `Calendar<SystemClock>`; tests inject a
//! [`FixedClock`].

use crate::civil::NANOS_PER_SECOND;
use crate::{Carbon, CarbonError, Offset};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of the current instant
pub trait Clock: Send + Sync {
    /// Nanoseconds since the Unix epoch
    fn now_nanos(&self) -> i128;
}

/// The operating system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_nanos(&self) -> i128 {
        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => elapsed.as_nanos() as i128,
            Err(err) => -(err.duration().as_nanos() as i128),
        }
    }
}

/// A clock stopped at one instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    nanos: i128,
}

impl FixedClock {
    pub fn new(nanos: i128) -> Self {
        Self { nanos }
    }

    pub fn at_timestamp(seconds: i64) -> Self {
        Self::new(seconds as i128 * NANOS_PER_SECOND)
    }

    pub fn from_carbon(value: &Carbon) -> Self {
        Self::new(value.timestamp_nanos())
    }
}

impl Clock for FixedClock {
    fn now_nanos(&self) -> i128 {
        self.nanos
    }
}

/// A clock viewed in a fixed offset
#[derive(Debug, Clone)]
pub struct Calendar<C: Clock = SystemClock> {
    clock: C,
    offset: Offset,
}

impl Calendar<SystemClock> {
    /// System clock in the process-wide local offset
    pub fn local() -> Self {
        Self::new(SystemClock, Offset::local())
    }

    /// System clock in `offset`
    pub fn system(offset: Offset) -> Self {
        Self::new(SystemClock, offset)
    }
}

impl<C: Clock> Calendar<C> {
    pub fn new(clock: C, offset: Offset) -> Self {
        Self { clock, offset }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn now(&self) -> Carbon {
        Carbon::from_instant_saturating(self.clock.now_nanos(), self.offset)
    }

    /// Midnight of the current day
    pub fn today(&self) -> Carbon {
        self.now().start_of_day()
    }

    /// Now plus one day
    pub fn tomorrow(&self) -> Carbon {
        let mut value = self.now();
        value.add_day();
        value
    }

    /// Now minus one day
    pub fn yesterday(&self) -> Carbon {
        let mut value = self.now();
        value.sub_day();
        value
    }

    /// The given date at the current time of day, nanoseconds included
    pub fn create_from_date(&self, year: i64, month: i64, day: i64) -> Result<Carbon, CarbonError> {
        let now = self.now();
        Carbon::create_with_nanos(
            year,
            month,
            day,
            now.hour() as i64,
            now.minute() as i64,
            now.second() as i64,
            now.nanosecond() as i64,
            self.offset,
        )
    }

    /// The given time of day on the current date; the nanoseconds come from now
    pub fn create_from_time(&self, hour: i64, minute: i64, second: i64) -> Result<Carbon, CarbonError> {
        let now = self.now();
        Carbon::create_with_nanos(
            now.year(),
            now.month() as i64,
            now.day() as i64,
            hour,
            minute,
            second,
            now.nanosecond() as i64,
            self.offset,
        )
    }

    /// Parse `HH:MM:SS` (three colon-separated integers) on the current date
    pub fn create_from_time_string(&self, value: &str) -> Result<Carbon, CarbonError> {
        let invalid = || CarbonError::TimeParse(format!("'{}' is not HH:MM:SS", value));
        let parts: Vec<&str> = value.split(':').collect();
        if parts.len() != 3 {
            return Err(invalid());
        }
        let mut numbers = [0i64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| invalid())?;
        }
        let [hour, minute, second] = numbers;
        self.create_from_time(hour, minute, second)
    }
}
