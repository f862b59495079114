use std::sync::Arc;

use super::time::TimeSource;
use super::Snowflake;
use crate::error::SnowflakeError;
use crate::extractor::SnowflakeParts;

/// A generator of Snowflake IDs.
///
/// Lets callers depend on ID issuance without naming the clock type, e.g.
/// `Arc<dyn IdGenerator + Send + Sync>`.
pub trait IdGenerator {
    /// Issue the next ID
    fn generate_id(&self) -> Result<i64, SnowflakeError>;

    /// Decompose an ID issued by this generator
    fn parse(&self, id: i64) -> Result<SnowflakeParts, SnowflakeError>;
}

impl<T: TimeSource> IdGenerator for Snowflake<T> {
    fn generate_id(&self) -> Result<i64, SnowflakeError> {
        Snowflake::<T>::generate_id(self)
    }

    fn parse(&self, id: i64) -> Result<SnowflakeParts, SnowflakeError> {
        Snowflake::<T>::parse(self, id)
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Arc<G> {
    fn generate_id(&self) -> Result<i64, SnowflakeError> {
        (**self).generate_id()
    }

    fn parse(&self, id: i64) -> Result<SnowflakeParts, SnowflakeError> {
        (**self).parse(id)
    }
}
