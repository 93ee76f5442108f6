//! Result collection

use indexmap::IndexMap;
use serde::Serialize;
use thisisplural::Plural;
use tracing::{debug, info};

use crate::schema::FormSchema;
use crate::validate::{ValidationState, check_all};
use crate::values::FieldValues;

/// Submitted value per field id, in schema order.
///
/// Owned copy of the values at submission time; later edits never reach it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Plural)]
#[plural(len, is_empty, iter, into_iter, into_iter_ref)]
#[serde(transparent)]
pub struct ResultRecord(IndexMap<String, String>);

impl ResultRecord {
    pub fn get(&self, id: &str) -> Option<&str> {
        self.0.get(id).map(String::as_str)
    }
}

/// Validate every field and, when all pass, freeze the values into a record.
///
/// `Err` carries the full validation state so that every offending field can
/// be shown at once. Values for ids outside the schema are dropped; unbound
/// fields are recorded as `""`.
pub fn submit(schema: &FormSchema, values: &FieldValues) -> Result<ResultRecord, ValidationState> {
    let state = check_all(schema, values);
    if !state.is_valid() {
        debug!(errors = state.error_count(), "submission rejected");
        return Err(state);
    }

    let ignored = values
        .iter()
        .filter(|(id, _)| schema.field(id).is_none())
        .count();
    if ignored > 0 {
        debug!(ignored, "dropping values without a matching field");
    }

    let record = ResultRecord(
        schema
            .fields
            .iter()
            .map(|field| (field.id.clone(), values.value(&field.id).to_string()))
            .collect(),
    );
    info!(title = %schema.title, fields = record.len(), "form submitted");
    Ok(record)
}
