//! Per-mode resolution of the next timestamp and sequence
//!
//! Both policies share the same shape: a fresh millisecond resets the
//! sequence, the same millisecond increments it. They differ only in how a
//! clock behind the last timestamp and an exhausted millisecond are handled.

use std::cmp::Ordering;

use super::state::State;
use super::time::TimeSource;
use super::wait::spin_until_after;
use crate::error::SnowflakeError;
use crate::mode::Mode;

impl Mode {
    /// Resolve the state for the next ID from a guarded clock sample.
    ///
    /// Returns the new state without applying it; on error the caller's state
    /// is left untouched.
    #[inline]
    pub(crate) fn resolve<T>(
        self,
        now: i64,
        current: State,
        clock: &T,
        yield_every: u32,
    ) -> Result<State, SnowflakeError>
    where
        T: TimeSource + ?Sized,
    {
        match self {
            Mode::Normal => resolve_normal(now, current, clock, yield_every),
            Mode::AutoTime => Ok(resolve_auto_time(now, current)),
        }
    }
}

fn resolve_normal<T>(
    now: i64,
    current: State,
    clock: &T,
    yield_every: u32,
) -> Result<State, SnowflakeError>
where
    T: TimeSource + ?Sized,
{
    let last = current.last_timestamp();
    match now.cmp(&last) {
        Ordering::Less => {
            #[cfg(feature = "tracing")]
            tracing::debug!(now, last_timestamp = last, "rejecting id, clock moved backwards");
            Err(SnowflakeError::ClockRollback {
                delta_ms: last.saturating_sub(now),
            })
        }
        Ordering::Equal => {
            let sequence = current.next_sequence();
            if sequence != 0 {
                return Ok(State::new(last, sequence));
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(last_timestamp = last, "sequence exhausted, waiting for next millisecond");
            Ok(State::new(spin_until_after(last, clock, yield_every), 0))
        }
        Ordering::Greater => Ok(State::new(now, 0)),
    }
}

fn resolve_auto_time(now: i64, current: State) -> State {
    let last = current.last_timestamp();
    // A clock behind the last timestamp is treated as the same millisecond
    if now > last {
        return State::new(now, 0);
    }

    let sequence = current.next_sequence();
    if sequence != 0 {
        return State::new(last, sequence);
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        now,
        last_timestamp = last,
        "sequence exhausted, advancing logical clock"
    );
    State::new(last.wrapping_add(1), 0)
}
