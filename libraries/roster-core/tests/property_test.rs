//! Property-based tests for the normalization pipeline and the store
//!
//! Uses proptest to verify invariants across many random payloads.

use proptest::prelude::*;
use roster_core::{normalize, RawId, RawRecord, RawUser, UserStore};

// ===== Helpers =====

/// A well-formed record whose age may be negative or absent.
/// Ids are assigned by [`arbitrary_records`].
fn arbitrary_record() -> impl Strategy<Value = RawRecord> {
    (
        "[A-Za-z]{1,10}",                   // name
        "[A-Za-z]{1,10}",                   // lastname
        proptest::option::of(-50i32..120),  // age
        0u32..100_000,                      // fee in cents
        "[0-9]{1,2}/[0-9]{1,2}/20[0-9]{2}", // date
        "[A-Za-z ]{1,20}",                  // location
        any::<bool>(),                      // id sent as string
    )
        .prop_map(
            |(name, lastname, age, cents, date, location, id_as_text)| RawRecord {
                id: Some(if id_as_text {
                    RawId::Text(String::new())
                } else {
                    RawId::Integer(0)
                }),
                user: Some(RawUser {
                    name: Some(name),
                    lastname: Some(lastname),
                    age: age.map(f64::from),
                    fee: Some(f64::from(cents) / 100.0),
                }),
                date: Some(date),
                location: Some(location),
            },
        )
}

/// Records with unique ids, numbered by position
fn arbitrary_records() -> impl Strategy<Value = Vec<RawRecord>> {
    prop::collection::vec(arbitrary_record(), 0..40).prop_map(|mut records| {
        for (index, record) in records.iter_mut().enumerate() {
            record.id = match record.id {
                Some(RawId::Text(_)) => Some(RawId::Text(index.to_string())),
                _ => Some(RawId::Integer(index as i64)),
            };
        }
        records
    })
}

fn raw_id(record: &RawRecord) -> i64 {
    match record.id.as_ref() {
        Some(RawId::Integer(n)) => *n,
        Some(RawId::Number(n)) => *n as i64,
        Some(RawId::Text(s)) => s.parse().unwrap(),
        None => unreachable!("generated records always carry an id"),
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: no canonical record ever has a negative age
    #[test]
    fn normalize_never_emits_negative_age(raw in arbitrary_records()) {
        let records = normalize(&raw).unwrap();
        // age is unsigned; check it traces back to a non-negative raw age
        for record in &records {
            let source = raw.iter().find(|r| raw_id(r) == record.id.get()).unwrap();
            let age = source.user.as_ref().unwrap().age.unwrap();
            prop_assert!(age >= 0.0);
        }
    }

    /// Property: the filter never adds records
    #[test]
    fn normalize_never_grows(raw in arbitrary_records()) {
        let records = normalize(&raw).unwrap();
        prop_assert!(records.len() <= raw.len());
    }

    /// Property: retained records keep their relative order
    #[test]
    fn normalize_preserves_order(raw in arbitrary_records()) {
        let records = normalize(&raw).unwrap();

        let mut cursor = 0;
        for record in &records {
            let position = raw[cursor..]
                .iter()
                .position(|r| raw_id(r) == record.id.get());
            prop_assert!(position.is_some(), "record {} out of order", record.id);
            cursor += position.unwrap() + 1;
        }
    }

    /// Property: every record with a non-negative age is retained
    #[test]
    fn normalize_retains_every_eligible_record(raw in arbitrary_records()) {
        let records = normalize(&raw).unwrap();

        let expected = raw
            .iter()
            .filter(|r| r.user.as_ref().unwrap().age.map_or(false, |age| age >= 0.0))
            .count();

        prop_assert_eq!(records.len(), expected);
    }

    /// Property: normalize is a pure function
    #[test]
    fn normalize_is_idempotent(raw in arbitrary_records()) {
        prop_assert_eq!(normalize(&raw).unwrap(), normalize(&raw).unwrap());
    }

    /// Property: the total equals the exact sum over the held set
    #[test]
    fn total_matches_sum_of_held_records(raw in arbitrary_records()) {
        let records = normalize(&raw).unwrap();
        let expected: f64 = records.iter().map(|r| r.fees_paid).sum();

        let store = UserStore::new();
        store.replace_all(records);

        prop_assert_eq!(store.total_fees_paid(), expected);
    }

    /// Property: replacing never merges with the previous set
    #[test]
    fn replace_all_replaces_entirely(first in arbitrary_records(), second in arbitrary_records()) {
        let store = UserStore::new();
        store.replace_all(normalize(&first).unwrap());

        let next = normalize(&second).unwrap();
        store.replace_all(next.clone());

        prop_assert_eq!(store.users().to_vec(), next);
    }
}

// ===== Concrete scenarios =====

#[test]
fn scenario_two_eligible_records_sum_in_order() {
    let raw: Vec<RawRecord> = serde_json::from_str(
        r#"[
            {"id":1,"user":{"name":"A","lastname":"B","age":20,"fee":10},"date":"d1","location":"L1"},
            {"id":2,"user":{"name":"C","lastname":"D","age":30,"fee":20},"date":"d2","location":"L2"}
        ]"#,
    )
    .unwrap();

    let store = UserStore::new();
    store.replace_all(normalize(&raw).unwrap());

    assert_eq!(store.total_fees_paid(), 30.0);
    let names: Vec<_> = store.users().iter().map(|u| u.name.clone()).collect();
    assert_eq!(names, vec!["A B", "C D"]);
}
