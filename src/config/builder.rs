//! SnowflakeConfig builder for constructing configuration

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::SnowflakeConfig;
use crate::mode::Mode;

/// Default configuration values
pub(super) const DEFAULT_MODE: Mode = Mode::Normal;
pub(super) const DEFAULT_NODE_ID: u16 = 0;
pub(super) const DEFAULT_EPOCH_MS: i64 = 1704067200000; // January 1, 2024 UTC
pub(super) const DEFAULT_MAX_WAIT_TIME: Duration = Duration::ZERO;
pub(super) const DEFAULT_SPIN_YIELD_EVERY: u32 = 16;

/// Builder for SnowflakeConfig
///
/// Validation of node ID and start time happens when the generator is
/// created, since the start time check depends on the generator's clock.
#[derive(Debug, Clone)]
pub struct SnowflakeConfigBuilder {
    pub(super) mode: Mode,
    pub(super) node_id: u16,
    pub(super) epoch: i64,
    pub(super) max_wait_time: Duration,
    pub(super) spin_yield_every: u32,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            mode: DEFAULT_MODE,
            node_id: DEFAULT_NODE_ID,
            epoch: DEFAULT_EPOCH_MS,
            max_wait_time: DEFAULT_MAX_WAIT_TIME,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    pub const fn mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    /// Set the node ID (0-1023), assigned externally per running generator
    pub const fn node_id(mut self, node_id: u16) -> Self {
        self.node_id = node_id;
        self
    }

    /// Set the start time all embedded timestamps are measured from
    pub fn start_time(mut self, start_time: DateTime<Utc>) -> Self {
        self.epoch = start_time.timestamp_millis();
        self
    }

    /// Set the epoch directly in milliseconds since the Unix epoch
    pub const fn epoch(mut self, epoch_ms: i64) -> Self {
        self.epoch = epoch_ms;
        self
    }

    /// Set how long to sleep once when the clock is seen moving backwards.
    /// Zero disables the sleep
    pub const fn max_wait_time(mut self, wait: Duration) -> Self {
        self.max_wait_time = wait;
        self
    }

    /// Yield every N polls while waiting out an exhausted millisecond; 0 disables yielding
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Build the final SnowflakeConfig
    pub fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
