//! Generator operating modes

use std::fmt;
use std::str::FromStr;

use crate::error::SnowflakeError;

/// How the generator reacts to clock regression and sequence exhaustion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// Depends on the wall clock. A clock rollback is returned as an error
    /// and the caller is expected to retry; an exhausted millisecond is
    /// waited out by polling the clock.
    #[default]
    Normal,
    /// Keeps issuing IDs through clock rollback by holding the last
    /// timestamp, and advances it by one millisecond whenever the sequence
    /// is exhausted. Follows the wall clock again once it catches up.
    AutoTime,
}

impl Mode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Mode::Normal => "normal",
            Mode::AutoTime => "auto_time",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u8> for Mode {
    type Error = SnowflakeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Mode::Normal),
            1 => Ok(Mode::AutoTime),
            other => Err(SnowflakeError::UnknownMode(other.to_string())),
        }
    }
}

impl From<Mode> for u8 {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Normal => 0,
            Mode::AutoTime => 1,
        }
    }
}

impl FromStr for Mode {
    type Err = SnowflakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "normal" => Ok(Mode::Normal),
            "auto_time" | "autotime" | "auto-time" => Ok(Mode::AutoTime),
            _ => Err(SnowflakeError::UnknownMode(s.to_string())),
        }
    }
}
