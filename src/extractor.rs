use chrono::{DateTime, Utc};

use crate::config::{MAX_NODE_ID, MAX_SEQUENCE, STEP_BITS, TIMESTAMP_SHIFT};

/// Components decoded from a Snowflake ID
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SnowflakeParts {
    /// Absolute milliseconds since the Unix epoch
    pub timestamp: i64,
    pub node_id: u16,
    pub sequence: u16,
}

impl SnowflakeParts {
    /// Embedded timestamp as a UTC date time
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}

/// Snowflake component extractor
///
/// Decoding is plain bit arithmetic on the ID and the epoch, so it is total
/// over `i64` and never touches generator state.
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    epoch: i64,
}

impl SnowflakeExtractor {
    /// Create a new extractor for IDs generated against `epoch`
    pub(crate) fn new(epoch: i64) -> Self {
        Self { epoch }
    }

    /// Extract the absolute timestamp (ms since Unix epoch) from a Snowflake ID
    #[inline(always)]
    pub fn timestamp(&self, id: i64) -> i64 {
        (id >> TIMESTAMP_SHIFT).wrapping_add(self.epoch)
    }

    /// Extract node component from a Snowflake ID
    #[inline(always)]
    pub fn node(&self, id: i64) -> u16 {
        ((id >> STEP_BITS) & MAX_NODE_ID as i64) as u16
    }

    /// Extract sequence component from a Snowflake ID
    #[inline(always)]
    pub fn sequence(&self, id: i64) -> u16 {
        (id & MAX_SEQUENCE as i64) as u16
    }

    /// Decompose a Snowflake ID into timestamp, node ID and sequence
    #[inline]
    pub fn decompose(&self, id: i64) -> SnowflakeParts {
        SnowflakeParts {
            timestamp: self.timestamp(id),
            node_id: self.node(id),
            sequence: self.sequence(id),
        }
    }

    /// Embedded timestamp of a Snowflake ID as a UTC date time
    pub fn datetime(&self, id: i64) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp(id))
    }
}
