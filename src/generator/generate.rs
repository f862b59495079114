//! ID generation and parsing

#[cfg(feature = "tracing")]
use tracing::instrument;

use super::time::TimeSource;
use super::wait::sample_with_guard;
use super::Snowflake;
use crate::error::SnowflakeError;
use crate::extractor::SnowflakeParts;

impl<T: TimeSource> Snowflake<T> {
    /// Generate a new Snowflake ID
    ///
    /// Holds the generator lock for the whole call, including the regression
    /// sleep and the `Mode::Normal` wait for the next millisecond.
    ///
    /// # Errors
    /// Returns [`SnowflakeError::ClockRollback`] in `Mode::Normal` when the
    /// clock is still behind the last issued timestamp after the regression
    /// guard. No state is changed, so the call can be retried.
    #[cfg_attr(
        feature = "tracing",
        instrument(level = "trace", skip(self), fields(node_id = self.node_id()))
    )]
    pub fn generate_id(&self) -> Result<i64, SnowflakeError> {
        let mut state = self.state.lock();

        let now = sample_with_guard(
            &self.clock,
            state.last_timestamp(),
            self.config.max_wait_time(),
        );
        let next = self.config.mode().resolve(
            now,
            *state,
            &self.clock,
            self.config.spin_yield_every(),
        )?;

        *state = next;
        Ok(self.assemble_id(next.last_timestamp(), next.sequence()))
    }

    /// Decompose an ID into its absolute timestamp, node ID and sequence.
    ///
    /// Takes no lock. Never fails for any `i64`; the decoded fields are not
    /// validated against this generator's node ID.
    #[inline]
    pub fn parse(&self, id: i64) -> Result<SnowflakeParts, SnowflakeError> {
        Ok(self.extract.decompose(id))
    }
}
