// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Add, Sub};

const NANOS_PER_SEC: f64 = 1e9;

/// Point in time, in nanoseconds since an epoch shared by every trajectory.
///
/// The epoch itself is opaque to this crate; only differences and ordering
/// matter. The newtype keeps timestamps from being mixed up with durations.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Time {
    nanos: i64,
}

impl Time {
    /// Creates a time from nanoseconds since the epoch.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Creates a time from seconds since the epoch, rounded to the nearest nanosecond.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self::from_nanos((secs * NANOS_PER_SEC).round() as i64)
    }

    /// Nanoseconds since the epoch.
    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    /// Seconds since the epoch.
    pub fn as_secs_f64(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_SEC
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.nanos)
    }
}

/// Signed span of time in nanoseconds.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    /// Zero-length duration.
    pub const ZERO: Self = Self { nanos: 0 };

    /// Creates a duration from nanoseconds.
    pub const fn from_nanos(nanos: i64) -> Self {
        Self { nanos }
    }

    /// Creates a duration from seconds, rounded to the nearest nanosecond.
    pub fn from_secs_f64(secs: f64) -> Self {
        Self::from_nanos((secs * NANOS_PER_SEC).round() as i64)
    }

    /// Length in nanoseconds.
    pub const fn as_nanos(&self) -> i64 {
        self.nanos
    }

    /// Length in seconds.
    pub fn as_secs_f64(&self) -> f64 {
        self.nanos as f64 / NANOS_PER_SEC
    }

    /// Scales the duration by `factor`, rounding to the nearest nanosecond.
    pub fn mul_f64(self, factor: f64) -> Self {
        Self::from_nanos((self.nanos as f64 * factor).round() as i64)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.nanos)
    }
}

impl Sub for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        Duration::from_nanos(self.nanos - rhs.nanos)
    }
}

impl Add<Duration> for Time {
    type Output = Time;

    fn add(self, rhs: Duration) -> Time {
        Time::from_nanos(self.nanos + rhs.nanos)
    }
}

impl Sub<Duration> for Time {
    type Output = Time;

    fn sub(self, rhs: Duration) -> Time {
        Time::from_nanos(self.nanos - rhs.nanos)
    }
}
