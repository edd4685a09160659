//! Raw payload normalization
//!
//! Turns the untrusted records of the remote payload into canonical
//! [`UserRecord`]s. The age filter runs before any mapping: the predicate
//! reads the nested `user.age` field, so records it drops are never
//! shape-checked or constructed.

use crate::error::{Result, ShapeError};
use crate::types::{RawId, RawRecord, RawUser, UserId, UserRecord};
use std::collections::HashSet;
use tracing::{trace, warn};

/// Normalize a raw payload into canonical records.
///
/// Records whose `user.age` is absent or negative are dropped silently.
/// Retained records keep their relative order. When several retained
/// records share an id, the first one is kept and the rest are dropped.
///
/// # Errors
/// Returns [`RosterError::Shape`](crate::RosterError::Shape) for the first
/// record that lacks its `user` object, or for a retained record with a
/// missing or unusable field.
pub fn normalize(raw: &[RawRecord]) -> Result<Vec<UserRecord>> {
    let mut retained = Vec::with_capacity(raw.len());
    for (index, record) in raw.iter().enumerate() {
        let user = record
            .user
            .as_ref()
            .ok_or_else(|| ShapeError::missing(index, "user"))?;

        if is_eligible(user) {
            retained.push((index, record, user));
        } else {
            trace!(index, age = ?user.age, "Dropping record without a non-negative age");
        }
    }

    let mut seen = HashSet::with_capacity(retained.len());
    let mut records = Vec::with_capacity(retained.len());
    for (index, record, user) in retained {
        let canonical = to_canonical(index, record, user)?;
        if seen.insert(canonical.id) {
            records.push(canonical);
        } else {
            warn!(index, id = %canonical.id, "Dropping record with duplicate id");
        }
    }

    Ok(records)
}

fn is_eligible(user: &RawUser) -> bool {
    matches!(user.age, Some(age) if age >= 0.0)
}

fn to_canonical(index: usize, record: &RawRecord, user: &RawUser) -> Result<UserRecord> {
    let id = coerce_id(index, record.id.as_ref())?;

    let first = required(index, "user.name", user.name.as_ref())?;
    let last = required(index, "user.lastname", user.lastname.as_ref())?;

    let age = user.age.ok_or_else(|| ShapeError::missing(index, "user.age"))?;
    if age.fract() != 0.0 || age > f64::from(u32::MAX) {
        return Err(ShapeError::invalid(
            index,
            "user.age",
            format!("is not a valid age: {}", age),
        )
        .into());
    }

    let fees_paid = user
        .fee
        .ok_or_else(|| ShapeError::missing(index, "user.fee"))?;

    Ok(UserRecord {
        id,
        name: format!("{} {}", first, last),
        age: age as u32,
        fees_paid,
        date: required(index, "date", record.date.as_ref())?.clone(),
        location: required(index, "location", record.location.as_ref())?.clone(),
    })
}

fn coerce_id(index: usize, id: Option<&RawId>) -> Result<UserId> {
    let not_an_integer =
        |shown: String| ShapeError::invalid(index, "id", format!("is not an integer: {}", shown));

    match id {
        None => Err(ShapeError::missing(index, "id").into()),
        Some(RawId::Integer(n)) => Ok(UserId::new(*n)),
        Some(RawId::Number(n)) => {
            integral_id(*n).ok_or_else(|| not_an_integer(n.to_string()).into())
        }
        Some(RawId::Text(s)) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .map(UserId::new)
                // Numeric text such as "1.0" or "1e3"
                .or_else(|| trimmed.parse::<f64>().ok().and_then(integral_id))
                .ok_or_else(|| not_an_integer(format!("{:?}", s)).into())
        }
    }
}

/// `Some` when `n` is a whole number inside the `i64` range
fn integral_id(n: f64) -> Option<UserId> {
    // 2^63 itself is out of range; i64::MAX is not representable as f64
    let bound = 2f64.powi(63);
    if n.is_finite() && n.fract() == 0.0 && n >= -bound && n < bound {
        Some(UserId::new(n as i64))
    } else {
        None
    }
}

fn required<'a>(
    index: usize,
    field: &'static str,
    value: Option<&'a String>,
) -> Result<&'a String> {
    value.ok_or_else(|| ShapeError::missing(index, field).into())
}
