use crate::value::Value;
use serde::Serialize;
use thiserror::Error as ThisError;

///
/// RecordValueError
///
/// Invariant violations for `Value::Record` construction.
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum RecordValueError {
    #[error("record declares duplicate key '{key}'")]
    DuplicateKey { key: String },
}

///
/// RecordValue
///
/// String-keyed nested record with optional type identity.
///
/// `type_name` is the declared type of the record; `lineage` is the
/// ordered list of ancestor type names, nearest first. Together they
/// carry the instance/ancestry queries that dynamic runtimes answer via
/// reflection. Entries are sorted by key and keys are unique.
///

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RecordValue {
    type_name: Option<String>,
    lineage: Vec<String>,
    entries: Vec<(String, Value)>,
}

impl RecordValue {
    /// Build an untyped record from owned entries.
    pub fn new(entries: Vec<(String, Value)>) -> Result<Self, RecordValueError> {
        Self::build(None, Vec::new(), entries)
    }

    /// Build a typed record with an ancestry lineage.
    pub fn typed(
        type_name: impl Into<String>,
        lineage: Vec<String>,
        entries: Vec<(String, Value)>,
    ) -> Result<Self, RecordValueError> {
        Self::build(Some(type_name.into()), lineage, entries)
    }

    fn build(
        type_name: Option<String>,
        lineage: Vec<String>,
        mut entries: Vec<(String, Value)>,
    ) -> Result<Self, RecordValueError> {
        entries.sort_by(|(left, _), (right, _)| left.cmp(right));

        for i in 1..entries.len() {
            if entries[i - 1].0 == entries[i].0 {
                return Err(RecordValueError::DuplicateKey {
                    key: entries[i].0.clone(),
                });
            }
        }

        Ok(Self {
            type_name,
            lineage,
            entries,
        })
    }

    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.type_name.as_deref()
    }

    #[must_use]
    pub fn lineage(&self) -> &[String] {
        &self.lineage
    }

    /// True if `ancestor` appears anywhere in the lineage.
    #[must_use]
    pub fn derives_from(&self, ancestor: &str) -> bool {
        self.lineage.iter().any(|name| name == ancestor)
    }

    #[must_use]
    pub fn entries(&self) -> &[(String, Value)] {
        &self.entries
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries
            .binary_search_by(|(candidate, _)| candidate.as_str().cmp(key))
            .ok()
            .map(|index| &self.entries[index].1)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
