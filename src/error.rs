use thiserror::Error;

/// Represents errors that can occur during Snowflake operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Error when the configured start time is later than the current time
    #[error("Start time {epoch_ms} is ahead of current time {now_ms}")]
    StartTimeAhead { epoch_ms: i64, now_ms: i64 },
    /// Error when node ID exceeds the maximum allowed value
    #[error("Node ID {node_id} is invalid. Maximum allowed value is {max}")]
    InvalidNodeId { node_id: u16, max: u16 },
    /// Error when clock moves backwards in `Mode::Normal`
    #[error("Clock moved backwards. Refusing to generate id for {delta_ms} milliseconds")]
    ClockRollback { delta_ms: i64 },
    /// Error when a mode value is neither `Normal` nor `AutoTime`
    #[error("Unknown generator mode: {0}")]
    UnknownMode(String),
}
