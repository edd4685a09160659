//! Source of raw user records.

use crate::error::Result;
use async_trait::async_trait;
use roster_core::RawRecord;

/// Anything that can produce the raw record payload.
///
/// [`RosterClient`](crate::RosterClient) implements this over HTTP;
/// [`UserLoader`](crate::UserLoader) only depends on the trait.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch the full raw payload
    ///
    /// # Errors
    /// Returns an error if the payload cannot be retrieved or decoded
    async fn fetch_records(&self) -> Result<Vec<RawRecord>>;
}
