/// Raw payload types as sent by the remote endpoint
use serde::{Deserialize, Serialize};

/// One entry of the remote JSON array.
///
/// Every field is optional: the payload is untrusted, and whether a missing
/// field matters depends on whether the record survives the age filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    pub id: Option<RawId>,
    pub user: Option<RawUser>,
    pub date: Option<String>,
    pub location: Option<String>,
}

/// Nested user object of a raw record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawUser {
    pub name: Option<String>,
    pub lastname: Option<String>,
    pub age: Option<f64>,
    pub fee: Option<f64>,
}

/// Raw id, which the endpoint sends either as a number or as a string.
///
/// Integral JSON numbers decode exactly as `Integer`; only fractional or
/// out-of-range numbers fall through to `Number`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Integer(i64),
    Number(f64),
    Text(String),
}
