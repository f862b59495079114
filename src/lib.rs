//! # Snowflake
//!
//! A Rust implementation of a Snowflake ID generator with 41-bit timestamp.
//!
//! Generate 64-bit unique identifiers that are:
//! - 📈 Time-sorted
//! - 🔄 Monotonic per generator
//! - 🔒 Thread-safe
//! - 🌐 Distributed-ready (one externally assigned node ID per generator)
//! - ⏪ Resilient to clock rollback (`Mode::AutoTime`)
//!
//! ```
//! use snowflake::{Mode, Snowflake, SnowflakeConfig};
//!
//! let config = SnowflakeConfig::builder()
//!     .node_id(1)
//!     .mode(Mode::AutoTime)
//!     .build();
//! let generator = Snowflake::new(config).unwrap();
//!
//! let id = generator.generate_id().unwrap();
//! let parts = generator.parse(id).unwrap();
//! assert_eq!(parts.node_id, 1);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
mod mode;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{
    SnowflakeConfig, SnowflakeConfigBuilder, DEFAULT_START_TIME, MAX_NODE_ID, MAX_SEQUENCE,
    NODE_BITS, STEP_BITS, TIMESTAMP_BITS, TIMESTAMP_SHIFT,
};
pub use error::SnowflakeError;
pub use extractor::{SnowflakeExtractor, SnowflakeParts};
pub use generator::{unix_time_ms, IdGenerator, Snowflake, SystemClock, TimeSource};
pub use mode::Mode;
