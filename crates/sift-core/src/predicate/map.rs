use crate::{
    predicate::{
        ops::{CompareOp, ContainerStateOp, KeyOp},
        value_eq,
    },
    value::{MapValue, Value},
};
use serde::{Deserialize, Serialize};

///
/// EntryOp
///
/// Presence of an exact key/value pairing.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum EntryOp {
    HasEntry,
    LacksEntry,
}

///
/// ValueOp
///
/// Presence of a value under any key.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ValueOp {
    HasValue,
    LacksValue,
}

#[must_use]
pub fn entry(map: &MapValue, op: EntryOp, key: &Value, expected: &Value) -> bool {
    let present = map
        .get(key)
        .is_some_and(|stored| value_eq(stored, expected));
    match op {
        EntryOp::HasEntry => present,
        EntryOp::LacksEntry => !present,
    }
}

#[must_use]
pub fn key(map: &MapValue, op: KeyOp, key: &Value) -> bool {
    op.matches(map.contains_key(key))
}

#[must_use]
pub fn size(map: &MapValue, op: CompareOp, count: usize) -> bool {
    op.matches(map.len().cmp(&count))
}

#[must_use]
pub fn state(map: &MapValue, op: ContainerStateOp) -> bool {
    op.matches(map.is_empty())
}

#[must_use]
pub fn value(map: &MapValue, op: ValueOp, expected: &Value) -> bool {
    match op {
        ValueOp::HasValue => map.contains_value(expected),
        ValueOp::LacksValue => !map.contains_value(expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: Vec<(&str, i32)>) -> MapValue {
        MapValue::new(
            entries
                .into_iter()
                .map(|(k, v)| (Value::from(k), Value::from(v)))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn entry_requires_both_key_and_value() {
        let m = map(vec![("a", 1), ("b", 2)]);
        assert!(entry(&m, EntryOp::HasEntry, &Value::from("a"), &Value::from(1)));
        assert!(entry(&m, EntryOp::LacksEntry, &Value::from("a"), &Value::from(2)));
        assert!(entry(&m, EntryOp::LacksEntry, &Value::from("c"), &Value::from(1)));
    }

    #[test]
    fn key_and_value_presence() {
        let m = map(vec![("a", 1)]);
        assert!(key(&m, KeyOp::HasKey, &Value::from("a")));
        assert!(key(&m, KeyOp::LacksKey, &Value::from("b")));
        assert!(value(&m, ValueOp::HasValue, &Value::from(1)));
        assert!(value(&m, ValueOp::LacksValue, &Value::from(2)));
    }

    #[test]
    fn size_and_state() {
        assert!(size(&map(vec![("a", 1), ("b", 2)]), CompareOp::Eq, 2));
        assert!(state(&map(vec![]), ContainerStateOp::IsEmpty));
        assert!(state(&map(vec![("a", 1)]), ContainerStateOp::IsNotEmpty));
    }
}
