use crate::{
    predicate::ops::{CompareOp, ContainerStateOp, KeyOp},
    value::{RecordValue, Value},
};
use serde::{Deserialize, Serialize};

///
/// TypeOp
///
/// Exact declared-type match, lineage excluded.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeOp {
    IsType,
    IsNotType,
}

///
/// TypeRelationOp
///
/// Instance check that also walks the lineage, the way a dynamic
/// runtime's instance-of does.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum TypeRelationOp {
    InstanceOf,
    NotInstanceOf,
}

///
/// KeySetOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum KeySetOp {
    HasAllKeys,
    HasAnyKey,
    HasNoKeys,
}

///
/// KeysRelationOp
///
/// Relation between the record's key set and a target key list.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum KeysRelationOp {
    KeysEqual,
    KeysSubsetOf,
    KeysSupersetOf,
}

///
/// KeysStateOp
///
/// State of the key set itself, as opposed to the entry container.
/// Records keep keys and entries in lockstep, so the two agree; both
/// shapes exist because callers ask both questions.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum KeysStateOp {
    HasKeys,
    HasNoKeys,
}

///
/// LineageStateOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum LineageStateOp {
    /// Has at least one ancestor.
    IsDerived,
    /// Has no ancestors.
    IsRoot,
}

///
/// LineageRelationOp
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum LineageRelationOp {
    DerivesFromAny,
    DerivesFromNone,
}

/// Compare the number of entries.
#[must_use]
pub fn attributes(record: &RecordValue, op: CompareOp, count: usize) -> bool {
    op.matches(record.len().cmp(&count))
}

#[must_use]
pub fn instance_type(record: &RecordValue, op: TypeOp, type_name: &str) -> bool {
    let matched = record.type_name() == Some(type_name);
    match op {
        TypeOp::IsType => matched,
        TypeOp::IsNotType => !matched,
    }
}

/// Declared type or any ancestor.
#[must_use]
pub fn instance_relation(record: &RecordValue, op: TypeRelationOp, type_name: &str) -> bool {
    let matched = record.type_name() == Some(type_name) || record.derives_from(type_name);
    match op {
        TypeRelationOp::InstanceOf => matched,
        TypeRelationOp::NotInstanceOf => !matched,
    }
}

#[must_use]
pub fn key(record: &RecordValue, op: KeyOp, key: &str) -> bool {
    op.matches(record.contains_key(key))
}

/// All/any/none presence of the given keys.
///
/// `HasAllKeys` over an empty key list holds vacuously.
#[must_use]
pub fn key_membership(record: &RecordValue, op: KeySetOp, keys: &[String]) -> bool {
    match op {
        KeySetOp::HasAllKeys => keys.iter().all(|key| record.contains_key(key)),
        KeySetOp::HasAnyKey => keys.iter().any(|key| record.contains_key(key)),
        KeySetOp::HasNoKeys => !keys.iter().any(|key| record.contains_key(key)),
    }
}

/// Relate the record's key set to a target key list, duplicates in the
/// target ignored.
#[must_use]
pub fn keys(record: &RecordValue, op: KeysRelationOp, target: &[String]) -> bool {
    let subset = record.keys().all(|key| target.iter().any(|t| t == key));
    let superset = target.iter().all(|key| record.contains_key(key));
    match op {
        KeysRelationOp::KeysEqual => subset && superset,
        KeysRelationOp::KeysSubsetOf => subset,
        KeysRelationOp::KeysSupersetOf => superset,
    }
}

#[must_use]
pub fn keys_state(record: &RecordValue, op: KeysStateOp) -> bool {
    match op {
        KeysStateOp::HasKeys => !record.is_empty(),
        KeysStateOp::HasNoKeys => record.is_empty(),
    }
}

#[must_use]
pub fn lineage_relation(
    record: &RecordValue,
    op: LineageRelationOp,
    ancestors: &[String],
) -> bool {
    let matched = ancestors
        .iter()
        .any(|ancestor| record.derives_from(ancestor));
    match op {
        LineageRelationOp::DerivesFromAny => matched,
        LineageRelationOp::DerivesFromNone => !matched,
    }
}

#[must_use]
pub fn lineage_state(record: &RecordValue, op: LineageStateOp) -> bool {
    match op {
        LineageStateOp::IsDerived => !record.lineage().is_empty(),
        LineageStateOp::IsRoot => record.lineage().is_empty(),
    }
}

/// Compare the value stored under `key` against an expected value.
///
/// A missing key is a non-match for every operator, including `Ne`.
#[must_use]
pub fn property(record: &RecordValue, key: &str, op: CompareOp, expected: &Value) -> bool {
    record
        .get(key)
        .is_some_and(|stored| op.matches(Value::canonical_cmp(stored, expected)))
}

#[must_use]
pub fn state(record: &RecordValue, op: ContainerStateOp) -> bool {
    op.matches(record.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> RecordValue {
        RecordValue::typed(
            "Admin",
            vec!["User".to_string(), "Base".to_string()],
            vec![
                ("name".to_string(), Value::from("ada")),
                ("level".to_string(), Value::from(9)),
            ],
        )
        .unwrap()
    }

    #[test]
    fn exact_type_excludes_lineage() {
        let record = admin();
        assert!(instance_type(&record, TypeOp::IsType, "Admin"));
        assert!(instance_type(&record, TypeOp::IsNotType, "User"));
        assert!(instance_relation(&record, TypeRelationOp::InstanceOf, "User"));
        assert!(instance_relation(
            &record,
            TypeRelationOp::NotInstanceOf,
            "Guest"
        ));
    }

    #[test]
    fn key_set_queries() {
        let record = admin();
        let have = vec!["name".to_string(), "level".to_string()];
        assert!(key_membership(&record, KeySetOp::HasAllKeys, &have));
        assert!(key_membership(
            &record,
            KeySetOp::HasNoKeys,
            &["email".to_string()]
        ));
        assert!(keys(&record, KeysRelationOp::KeysEqual, &have));
        assert!(keys(
            &record,
            KeysRelationOp::KeysSubsetOf,
            &["name".to_string(), "level".to_string(), "email".to_string()]
        ));
        assert!(keys(
            &record,
            KeysRelationOp::KeysSupersetOf,
            &["name".to_string()]
        ));
    }

    #[test]
    fn property_missing_key_never_matches() {
        let record = admin();
        assert!(property(&record, "level", CompareOp::Gte, &Value::from(5)));
        assert!(!property(&record, "missing", CompareOp::Ne, &Value::from(5)));
    }

    #[test]
    fn lineage_queries() {
        let record = admin();
        assert!(lineage_state(&record, LineageStateOp::IsDerived));
        assert!(lineage_relation(
            &record,
            LineageRelationOp::DerivesFromAny,
            &["Base".to_string()]
        ));

        let root = RecordValue::new(vec![]).unwrap();
        assert!(lineage_state(&root, LineageStateOp::IsRoot));
        assert!(state(&root, ContainerStateOp::IsEmpty));
        assert!(keys_state(&root, KeysStateOp::HasNoKeys));
        assert!(keys_state(&admin(), KeysStateOp::HasKeys));
    }
}
