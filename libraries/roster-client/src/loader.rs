//! Fetch-and-replace loading of the user store.
//!
//! [`UserLoader::load`] is the single failure boundary around fetch,
//! decode and normalization: on any error the store is left exactly as it
//! was and the failure is only logged.

use crate::error::Result;
use crate::source::RecordSource;
use roster_core::{normalize, UserStore};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Result of a [`UserLoader::load`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The store now holds `count` freshly loaded records
    Replaced { count: usize },

    /// Loading failed; the store still holds its previous `held` records
    Kept { held: usize },
}

/// Loads records from a [`RecordSource`] into a shared [`UserStore`].
///
/// Concurrent loads are not coordinated: each one replaces the store when
/// it completes, so the last to finish wins.
pub struct UserLoader<S> {
    source: S,
    store: Arc<UserStore>,
}

impl<S: RecordSource> UserLoader<S> {
    pub fn new(source: S, store: Arc<UserStore>) -> Self {
        Self { source, store }
    }

    /// The store this loader writes to.
    pub fn store(&self) -> &Arc<UserStore> {
        &self.store
    }

    /// Fetch, normalize and replace the store.
    ///
    /// Returns the number of stored records. Nothing is written on error.
    pub async fn try_load(&self) -> Result<usize> {
        let raw = self.source.fetch_records().await?;
        let users = normalize(&raw)?;
        let count = users.len();

        debug!(received = raw.len(), retained = count, "Normalized user records");

        self.store.replace_all(users);
        Ok(count)
    }

    /// Fetch, normalize and replace the store, never failing.
    ///
    /// Errors are logged and swallowed; callers only observe a store that
    /// was either fully replaced or left untouched.
    pub async fn load(&self) -> LoadOutcome {
        match self.try_load().await {
            Ok(count) => {
                info!(count, "Loaded users");
                LoadOutcome::Replaced { count }
            }
            Err(e) => {
                let held = self.store.len();
                error!(error = %e, held, "Failed to fetch users");
                LoadOutcome::Kept { held }
            }
        }
    }
}
