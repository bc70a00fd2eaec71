//! End-to-end filter behavior over dynamic rows and schema-backed items.

use sift_core::prelude::*;
use std::collections::BTreeMap;

///
/// Row
///
/// Schema-less test item; fields are whatever the map holds.
///

#[derive(Clone, Debug)]
struct Row(BTreeMap<String, Value>);

impl Row {
    fn new(fields: Vec<(&str, Value)>) -> Self {
        Self(
            fields
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}

impl FieldAccess for Row {
    fn get_value(&self, field: &str) -> Option<Value> {
        self.0.get(field).cloned()
    }
}

fn age_field() -> NumberField {
    NumberField::assume("age")
}

#[test]
fn mismatched_category_is_excluded() {
    let rows = Collection::<Chain<Row>>::new(vec![
        Row::new(vec![("age", Value::from(30))]),
        Row::new(vec![("age", Value::from("30"))]),
        Row::new(vec![]),
    ]);

    let adults = rows.chain().number_compare(age_field(), CompareOp::Gte, 18.0);

    assert_eq!(adults.count(), 1);
    assert_eq!(adults.items()[0].get_value("age"), Some(Value::from(30)));
}

#[test]
fn not_between_includes_unreadable_values() {
    let rows = Collection::<Chain<Row>>::new(vec![
        Row::new(vec![("age", Value::from(30))]),
        Row::new(vec![("age", Value::from(15))]),
        Row::new(vec![("age", Value::from("n/a"))]),
        Row::new(vec![]),
    ]);

    let outside = rows
        .chain()
        .number_range(age_field(), RangeOp::NotBetween, 10.0, 20.0);

    // 30 is outside; 15 is inside; the unreadable and missing rows are
    // "not in range" and kept.
    assert_eq!(outside.count(), 3);

    let inside = rows
        .chain()
        .number_range(age_field(), RangeOp::Between, 10.0, 20.0);
    assert_eq!(inside.count(), 1);
}

#[test]
fn chained_filters_narrow_progressively() {
    let tags = |names: &[&str]| {
        Value::from_list(names.iter().map(|&s| Value::from(s)).collect::<Vec<_>>())
    };

    let rows = Collection::<Chain<Row>>::new(vec![
        Row::new(vec![
            ("name", Value::from("ada")),
            ("age", Value::from(36)),
            ("tags", tags(&["admin"])),
        ]),
        Row::new(vec![
            ("name", Value::from("bob")),
            ("age", Value::from(17)),
            ("tags", tags(&["admin"])),
        ]),
        Row::new(vec![
            ("name", Value::from("cy")),
            ("age", Value::from(44)),
            ("tags", tags(&[])),
        ]),
    ]);

    let kept = rows
        .chain()
        .number_compare(age_field(), CompareOp::Gte, 18.0)
        .list_state(ListField::assume("tags"), sift_core::predicate::list::ListStateOp::IsNotEmpty);

    assert_eq!(kept.count(), 1);
    assert_eq!(kept.items()[0].get_value("name"), Some(Value::from("ada")));
}

#[test]
fn empty_tags_filter_end_to_end() {
    let rows = Collection::<Chain<Row>>::new(vec![
        Row::new(vec![("tags", Value::from_list(Vec::<Value>::new()))]),
        Row::new(vec![("tags", Value::from_list(vec![Value::from("a")]))]),
    ]);

    let untagged = rows.chain().list_state(
        ListField::assume("tags"),
        sift_core::predicate::list::ListStateOp::IsEmpty,
    );

    assert_eq!(untagged.count(), 1);
    assert_eq!(
        untagged.items()[0].get_value("tags"),
        Some(Value::from_list(Vec::<Value>::new()))
    );
}

#[test]
fn null_fails_every_guard() {
    let rows = Collection::<Chain<Row>>::new(vec![Row::new(vec![("age", Value::Null)])]);

    let kept = rows.chain().number_compare(age_field(), CompareOp::Ne, 1.0);
    assert_eq!(kept.count(), 0);
}

///
/// Person
///
/// Schema-backed item exercising definition-time field validation.
///

#[derive(Clone, Debug)]
struct Person {
    name: String,
    age: f64,
}

impl Schema for Person {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec::new("name", Category::Text),
        FieldSpec::new("age", Category::Number),
    ];
}

impl FieldAccess for Person {
    fn get_value(&self, field: &str) -> Option<Value> {
        match field {
            "name" => Some(Value::from(self.name.clone())),
            "age" => Some(Value::from(self.age)),
            _ => None,
        }
    }
}

#[test]
fn schema_checked_fields_reject_bad_declarations() {
    assert!(NumberField::new::<Person>("age").is_ok());
    assert!(TextField::new::<Person>("name").is_ok());

    // Wrong category for a declared field.
    assert!(TextField::new::<Person>("age").is_err());
    // Undeclared field.
    assert!(NumberField::new::<Person>("height").is_err());
}

#[test]
fn schema_backed_filtering_end_to_end() {
    let people = Collection::<Chain<Person>>::new(vec![
        Person {
            name: "ada".to_string(),
            age: 36.0,
        },
        Person {
            name: "bob".to_string(),
            age: 17.0,
        },
    ]);

    let age = NumberField::new::<Person>("age").unwrap();
    let adults = people.chain().number_compare(age, CompareOp::Gte, 18.0);

    assert_eq!(adults.count(), 1);
    assert_eq!(adults.items()[0].name, "ada");
}
