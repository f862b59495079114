//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `state` - Last timestamp and sequence guarded by the generator lock
//! - `time` - Wall-clock time sources
//! - `wait` - Regression guard and busy-poll
//! - `policy` - Per-mode timestamp and sequence resolution
//! - `generate` - ID generation and parsing
//! - `interface` - Generator trait

mod generate;
mod interface;
mod policy;
pub(crate) mod state;
mod time;
mod wait;

use parking_lot::Mutex;

use crate::config::{SnowflakeConfig, MAX_NODE_ID, STEP_BITS, TIMESTAMP_SHIFT};
use crate::error::SnowflakeError;
use crate::extractor::SnowflakeExtractor;
use crate::mode::Mode;

pub use interface::IdGenerator;
pub use time::{unix_time_ms, SystemClock, TimeSource};

use state::State;

/// Snowflake ID generator
///
/// ```text
/// +--------------------------------------------------------------------------+
/// | 1 Bit Unused | 41 Bit Timestamp |  10 Bit Node ID  |  12 Bit Sequence    |
/// +--------------------------------------------------------------------------+
/// ```
///
/// One instance serializes all ID issuance behind a single lock. Share it
/// across threads with `Arc`.
#[derive(Debug)]
pub struct Snowflake<T = SystemClock> {
    pub(crate) state: Mutex<State>,
    node_prefix: i64,
    clock: T,

    pub config: SnowflakeConfig,
    pub extract: SnowflakeExtractor,
}

impl Snowflake<SystemClock> {
    /// Create a generator backed by the system wall clock
    pub fn new(config: SnowflakeConfig) -> Result<Self, SnowflakeError> {
        Self::with_clock(config, SystemClock)
    }
}

impl<T: TimeSource> Snowflake<T> {
    /// Create a generator backed by a custom time source
    pub fn with_clock(config: SnowflakeConfig, clock: T) -> Result<Self, SnowflakeError> {
        Self::validate_start_time(&config, &clock)?;
        Self::validate_node_id(&config)?;
        Ok(Self::build(config, clock))
    }

    fn validate_start_time(config: &SnowflakeConfig, clock: &T) -> Result<(), SnowflakeError> {
        let now_ms = clock.current_millis();
        if config.epoch() > now_ms {
            return Err(SnowflakeError::StartTimeAhead {
                epoch_ms: config.epoch(),
                now_ms,
            });
        }
        Ok(())
    }

    fn validate_node_id(config: &SnowflakeConfig) -> Result<(), SnowflakeError> {
        let node_id = config.node_id();
        if node_id > MAX_NODE_ID {
            return Err(SnowflakeError::InvalidNodeId {
                node_id,
                max: MAX_NODE_ID,
            });
        }
        Ok(())
    }

    fn build(config: SnowflakeConfig, clock: T) -> Self {
        Self {
            state: Mutex::new(State::default()),
            node_prefix: (config.node_id() as i64) << STEP_BITS,
            clock,
            config,
            extract: SnowflakeExtractor::new(config.epoch()),
        }
    }

    #[inline(always)]
    pub fn node_id(&self) -> u16 {
        self.config.node_id()
    }

    #[inline(always)]
    pub fn mode(&self) -> Mode {
        self.config.mode()
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub fn epoch(&self) -> i64 {
        self.config.epoch()
    }

    #[inline(always)]
    pub fn clock(&self) -> &T {
        &self.clock
    }

    #[inline(always)]
    pub(crate) fn assemble_id(&self, timestamp: i64, sequence: u16) -> i64 {
        (timestamp.wrapping_sub(self.config.epoch()) << TIMESTAMP_SHIFT)
            | self.node_prefix
            | sequence as i64
    }

    #[cfg(test)]
    pub(crate) fn snapshot(&self) -> State {
        *self.state.lock()
    }
}
