//! Timestamps and clocks.
//!
//! Lots never read the wall clock directly; they ask a [`Clock`]. Production
//! code uses [`SystemClock`], tests and simulations drive a [`ManualClock`].
//!
//! A [`Timestamp`] is an instant that remembers the UTC offset it was read
//! at. Elapsed time is measured between instants, so a daylight-saving
//! fall-back does not run a stay backwards; the offset only affects how the
//! timestamp renders.

use crate::error::{LotError, LotResult};
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Seconds in one billable hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Layout used when rendering tickets and receipts.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A point in time with the UTC offset of the clock that produced it.
///
/// Equality and ordering compare instants, not wall-clock readings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<FixedOffset>);

impl Timestamp {
    /// Reads the local wall clock, keeping its current offset.
    #[must_use]
    pub fn now() -> Self {
        Self(Local::now().fixed_offset())
    }

    /// Wraps a chrono date-time.
    #[must_use]
    pub const fn from_datetime(dt: DateTime<FixedOffset>) -> Self {
        Self(dt)
    }

    /// Builds a UTC timestamp from calendar fields.
    ///
    /// Returns `None` if any field is out of range.
    #[must_use]
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        min: u32,
        sec: u32,
    ) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|d| d.and_hms_opt(hour, min, sec))
            .map(|naive| Self(naive.and_utc().fixed_offset()))
    }

    /// Returns the underlying chrono value.
    #[must_use]
    pub const fn as_datetime(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// Returns this timestamp shifted by `duration`, or `None` if the result
    /// falls outside chrono's calendar.
    #[must_use]
    pub fn checked_add(self, duration: Duration) -> Option<Self> {
        self.0.checked_add_signed(duration).map(Self)
    }

    /// Whole hours elapsed from `earlier` to `self`, truncated.
    ///
    /// Returns `None` when `earlier` is a later instant than `self`.
    #[must_use]
    pub fn whole_hours_since(&self, earlier: Timestamp) -> Option<u64> {
        let seconds = self
            .0
            .with_timezone(&Utc)
            .signed_duration_since(earlier.0.with_timezone(&Utc))
            .num_seconds();
        if seconds < 0 {
            return None;
        }
        u64::try_from(seconds / SECONDS_PER_HOUR).ok()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

/// Source of the current time for a lot.
pub trait Clock: Send + Sync {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

/// Clock backed by the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::now()
    }
}

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    current: Mutex<Timestamp>,
}

impl ManualClock {
    /// Creates a clock frozen at `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            current: Mutex::new(start),
        }
    }

    /// Sets the current time.
    pub fn set(&self, at: Timestamp) {
        *self.current.lock() = at;
    }

    /// Moves the clock by `duration` and returns the new time.
    ///
    /// # Errors
    ///
    /// Returns `ClockOutOfRange`, leaving the clock unchanged, if the move
    /// would leave the representable calendar.
    pub fn advance(&self, duration: Duration) -> LotResult<Timestamp> {
        let mut current = self.current.lock();
        let next = current
            .checked_add(duration)
            .ok_or(LotError::ClockOutOfRange {
                from: *current,
                seconds: duration.num_seconds(),
            })?;
        *current = next;
        Ok(next)
    }

    /// Moves the clock by whole hours and returns the new time.
    ///
    /// # Errors
    ///
    /// Returns `ClockOutOfRange` under the same conditions as
    /// [`ManualClock::advance`].
    pub fn advance_hours(&self, hours: i64) -> LotResult<Timestamp> {
        match Duration::try_hours(hours) {
            Some(duration) => self.advance(duration),
            None => Err(LotError::ClockOutOfRange {
                from: self.now(),
                seconds: hours.saturating_mul(SECONDS_PER_HOUR),
            }),
        }
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        *self.current.lock()
    }
}
