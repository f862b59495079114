//! Configuration for the Snowflake generator

mod builder;

use std::time::Duration;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;

pub use builder::SnowflakeConfigBuilder;
use builder::{
    DEFAULT_EPOCH_MS, DEFAULT_MAX_WAIT_TIME, DEFAULT_MODE, DEFAULT_NODE_ID,
    DEFAULT_SPIN_YIELD_EVERY,
};

use crate::mode::Mode;

/// Bits reserved for the node ID
pub const NODE_BITS: u8 = 10;
/// Bits reserved for the intra-millisecond sequence
pub const STEP_BITS: u8 = 12;
/// Bits reserved for the timestamp offset (bit 63 stays zero)
pub const TIMESTAMP_BITS: u8 = 41;
/// Left shift of the timestamp offset inside an ID
pub const TIMESTAMP_SHIFT: u8 = NODE_BITS + STEP_BITS;
/// Largest node ID a generator accepts
pub const MAX_NODE_ID: u16 = ((1u32 << NODE_BITS) - 1) as u16;
/// Largest sequence value within one millisecond
pub const MAX_SEQUENCE: u16 = ((1u32 << STEP_BITS) - 1) as u16;

/// Default start time, January 1, 2024 UTC
pub static DEFAULT_START_TIME: Lazy<DateTime<Utc>> =
    Lazy::new(|| DateTime::<Utc>::from_timestamp_millis(DEFAULT_EPOCH_MS).unwrap_or_default());

/// Configuration for the Snowflake generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    mode: Mode,
    node_id: u16,
    epoch: i64,
    max_wait_time: Duration,
    spin_yield_every: u32,
}

impl SnowflakeConfig {
    /// Create config from builder
    pub(crate) fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            mode: b.mode,
            node_id: b.node_id,
            epoch: b.epoch,
            max_wait_time: b.max_wait_time,
            spin_yield_every: b.spin_yield_every,
        }
    }

    /// Create a new configuration builder
    pub fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    #[inline(always)]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    #[inline(always)]
    pub const fn node_id(&self) -> u16 {
        self.node_id
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.epoch
    }

    /// Epoch as a UTC date time, `None` if out of chrono's range
    pub fn start_time(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.epoch)
    }

    #[inline(always)]
    pub const fn max_wait_time(&self) -> Duration {
        self.max_wait_time
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        Self {
            mode: DEFAULT_MODE,
            node_id: DEFAULT_NODE_ID,
            epoch: DEFAULT_EPOCH_MS,
            max_wait_time: DEFAULT_MAX_WAIT_TIME,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
