/// Canonical user record
use super::UserId;
use serde::{Deserialize, Serialize};

/// A validated user record, as held by the store and shown by the display layer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    /// Display key
    pub id: UserId,

    /// `"{first} {last}"`
    pub name: String,

    /// Always non-negative
    pub age: u32,

    /// Amount copied from the raw `fee` field
    pub fees_paid: f64,

    /// Opaque, passed through unchanged
    pub date: String,

    /// Opaque, passed through unchanged
    pub location: String,
}

impl UserRecord {
    /// One line of the users text block, e.g. `Ada Byron | Age: 36 | Fees: $12.5`
    pub fn summary_line(&self) -> String {
        format!(
            "{} | Age: {} | Fees: ${}",
            self.name, self.age, self.fees_paid
        )
    }
}
