//! Aggregate store for canonical user records
//!
//! Holds the currently loaded set behind a single `Arc<[UserRecord]>`.
//! Mutation only ever swaps the whole set, so a reader either sees the old
//! sequence or the new one, never a mix.

use crate::types::UserRecord;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Explicit state container for the canonical user set.
///
/// Share it between the loader and readers through an `Arc<UserStore>`.
#[derive(Debug)]
pub struct UserStore {
    users: RwLock<Arc<[UserRecord]>>,
}

impl Default for UserStore {
    fn default() -> Self {
        Self {
            users: RwLock::new(Arc::from(Vec::new())),
        }
    }
}

impl UserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the held set with `records`.
    ///
    /// The new set is fully built before the lock is taken; the swap is a
    /// single assignment.
    pub fn replace_all(&self, records: Vec<UserRecord>) {
        let next: Arc<[UserRecord]> = records.into();
        let count = next.len();

        // The guarded value is always a whole Arc, so a poisoned lock is still consistent
        let mut guard = self.users.write().unwrap_or_else(PoisonError::into_inner);
        *guard = next;
        drop(guard);

        debug!(count, "Replaced user set");
    }

    /// Snapshot of the held set.
    ///
    /// The snapshot is unaffected by later calls to [`replace_all`](Self::replace_all).
    pub fn users(&self) -> Arc<[UserRecord]> {
        let guard = self.users.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Number of held records
    pub fn len(&self) -> usize {
        self.users().len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.users().is_empty()
    }

    /// Sum of `fees_paid` over the held set, recomputed on every call.
    ///
    /// Returns `0.0` when the store is empty.
    pub fn total_fees_paid(&self) -> f64 {
        self.users().iter().map(|user| user.fees_paid).sum()
    }

    /// One [`summary_line`](UserRecord::summary_line) per held record, newline separated
    pub fn summary_text(&self) -> String {
        self.users()
            .iter()
            .map(UserRecord::summary_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
