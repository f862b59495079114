//! Wait strategies for clock regression and sequence exhaustion

use std::thread;
use std::time::Duration;

use super::time::TimeSource;

/// Sample the clock, guarding once against a regression behind `last_timestamp`.
///
/// When the first sample is behind and `max_wait` is non-zero the thread
/// sleeps for `max_wait` once. The clock is then resampled and that value is
/// returned even if it is still behind.
#[inline]
pub fn sample_with_guard<T>(clock: &T, last_timestamp: i64, max_wait: Duration) -> i64
where
    T: TimeSource + ?Sized,
{
    let now = clock.current_millis();
    if now >= last_timestamp {
        return now;
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        now,
        last_timestamp,
        wait_ms = max_wait.as_millis() as u64,
        "clock regression observed"
    );

    if !max_wait.is_zero() {
        thread::sleep(max_wait);
    }
    clock.current_millis()
}

/// Poll the clock until it moves strictly past `from_timestamp`.
///
/// Never sleeps. Yields the processor every `yield_every` polls; 0 disables
/// yielding. Blocks forever if the clock is frozen.
#[inline]
pub fn spin_until_after<T>(from_timestamp: i64, clock: &T, yield_every: u32) -> i64
where
    T: TimeSource + ?Sized,
{
    let mut polls: u32 = 0;
    loop {
        let now = clock.current_millis();
        if now > from_timestamp {
            return now;
        }

        std::hint::spin_loop();

        polls = polls.wrapping_add(1);
        if yield_every != 0 && polls % yield_every == 0 {
            thread::yield_now();
        }
    }
}
