//! Mutable generator state: last issued timestamp and sequence

use crate::config::MAX_SEQUENCE;

/// State guarded by the generator lock
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct State {
    /// Milliseconds since Unix epoch of the last issued ID, 0 before first use
    pub(crate) last_timestamp: i64,
    pub(crate) sequence: u16,
}

impl State {
    #[inline(always)]
    pub const fn new(last_timestamp: i64, sequence: u16) -> Self {
        Self {
            last_timestamp,
            sequence,
        }
    }

    #[inline(always)]
    pub const fn last_timestamp(self) -> i64 {
        self.last_timestamp
    }

    #[inline(always)]
    pub const fn sequence(self) -> u16 {
        self.sequence
    }

    /// Next sequence within the same millisecond, wrapping to 0 once the
    /// millisecond is exhausted
    #[inline(always)]
    pub const fn next_sequence(self) -> u16 {
        (self.sequence + 1) & MAX_SEQUENCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_default_is_uninitialized() {
        let state = State::default();
        assert_eq!(state.last_timestamp(), 0);
        assert_eq!(state.sequence(), 0);
    }

    #[test]
    fn test_next_sequence_increments() {
        assert_eq!(State::new(10, 0).next_sequence(), 1);
        assert_eq!(State::new(10, 4094).next_sequence(), 4095);
    }

    #[test]
    fn test_next_sequence_wraps() {
        assert_eq!(State::new(10, MAX_SEQUENCE).next_sequence(), 0);
    }
}
