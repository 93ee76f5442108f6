use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thisisplural::Plural;

/// Current entered value (or selection) per field id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
#[serde(transparent)]
pub struct FieldValues(IndexMap<String, String>);

impl FieldValues {
    /// Value bound to `id`; unbound fields read as `""`.
    pub fn value(&self, id: &str) -> &str {
        self.0.get(id).map(String::as_str).unwrap_or("")
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }

    pub fn insert(&mut self, id: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(id.into(), value.into())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(id, value)| (id.into(), value.into()))
                .collect(),
        )
    }
}
