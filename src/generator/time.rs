//! Time sources for Snowflake generation
//!
//! Provides wall-clock time in milliseconds since the Unix epoch

use std::sync::Arc;

use chrono::Utc;

/// A source of wall-clock time in milliseconds since the Unix epoch.
///
/// The generator samples this on every call, so implementations must be
/// cheap. Tests plug in manual clocks to reproduce regressions.
pub trait TimeSource {
    fn current_millis(&self) -> i64;
}

/// System wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        unix_time_ms()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for &T {
    #[inline(always)]
    fn current_millis(&self) -> i64 {
        (**self).current_millis()
    }
}

/// Get current wall-clock time in milliseconds since Unix epoch
#[inline(always)]
pub fn unix_time_ms() -> i64 {
    Utc::now().timestamp_millis()
}
