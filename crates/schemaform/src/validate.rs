//! Per-field validation
//!
//! Rules apply to one field at a time; there are no cross-field rules.
//!
//! 1. `required` and the trimmed value is empty → required message
//! 2. a pattern is set, the value is non-empty and does not match → mismatch message
//! 3. otherwise the field passes
//!
//! A custom `validation.message` replaces both built-in messages.

use indexmap::IndexMap;
use serde::Serialize;
use thisisplural::Plural;

use crate::schema::{FieldDef, FormSchema};
use crate::values::FieldValues;

/// Check a single value against its field definition.
pub fn check(field: &FieldDef, value: &str) -> Option<String> {
    if field.required && value.trim().is_empty() {
        return Some(
            field
                .custom_message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} is required", field.label)),
        );
    }

    if let Some(pattern) = field.pattern()
        && !value.is_empty()
        && !pattern.is_match(value)
    {
        return Some(
            field
                .custom_message()
                .map(str::to_string)
                .unwrap_or_else(|| format!("{} does not match the expected format", field.label)),
        );
    }

    None
}

/// Check every field of the schema; unbound fields are checked as `""`.
pub fn check_all(schema: &FormSchema, values: &FieldValues) -> ValidationState {
    schema
        .fields
        .iter()
        .map(|field| (field.id.clone(), check(field, values.value(&field.id))))
        .collect()
}

/// True iff no field carries an error.
pub fn is_form_valid(state: &ValidationState) -> bool {
    state.is_valid()
}

// =============================================================================
// ValidationState
// =============================================================================

/// Error message (or `None` when passing) per field id, in schema order.
///
/// A field without an entry passes as well.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref, new)]
#[serde(transparent)]
pub struct ValidationState(IndexMap<String, Option<String>>);

impl ValidationState {
    /// A state where every field of the schema passes.
    pub fn passing(schema: &FormSchema) -> Self {
        schema.fields.iter().map(|field| (field.id.clone(), None)).collect()
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.0.get(id).and_then(|message| message.as_deref())
    }

    pub fn set(&mut self, id: impl Into<String>, error: Option<String>) {
        self.0.insert(id.into(), error);
    }

    /// Offending fields with their messages, in schema order.
    pub fn errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .filter_map(|(id, message)| message.as_deref().map(|m| (id.as_str(), m)))
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn is_valid(&self) -> bool {
        self.0.values().all(Option::is_none)
    }
}

impl FromIterator<(String, Option<String>)> for ValidationState {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        Self(IndexMap::from_iter(iter))
    }
}
