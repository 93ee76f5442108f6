//! Schema document → [`FormSchema`]
//!
//! ```text
//! schema text
//!     ↓ serde_json                  (SchemaError::Syntax)
//! serde_json::Value
//!     ↓ RawFormSchema (serde)       (SchemaError::MalformedDocument)
//!     ↓ per-field checks            (remaining SchemaError variants)
//! FormSchema
//! ```

use std::collections::HashSet;

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::error::SchemaError;
use crate::schema::{ChoiceOption, FieldDef, FieldType, FieldValidation, FormSchema, Pattern};

// ============================================================================
// Document shape
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFormSchema {
    #[serde(default)]
    form_title: String,
    #[serde(default)]
    form_description: String,
    fields: Vec<RawFieldDef>,
}

#[derive(Debug, Deserialize)]
struct RawFieldDef {
    id: String,
    #[serde(rename = "type")]
    field_type: String,
    label: String,
    #[serde(default)]
    required: bool,
    #[serde(default)]
    placeholder: Option<String>,
    #[serde(default)]
    options: Option<Vec<RawOption>>,
    #[serde(default)]
    validation: Option<RawValidation>,
}

#[derive(Debug, Deserialize)]
struct RawOption {
    value: String,
    label: String,
}

#[derive(Debug, Deserialize)]
struct RawValidation {
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

// ============================================================================
// Public API
// ============================================================================

/// Parse schema text and validate the resulting document.
pub fn parse_schema(source: &str) -> Result<FormSchema, SchemaError> {
    let document: Value = serde_json::from_str(source).map_err(|e| SchemaError::Syntax {
        message: syntax_message(&e),
        line: e.line(),
        column: e.column(),
    })?;
    validate(&document)
}

/// Validate an already parsed document and build the immutable schema.
///
/// Fields are checked in document order; the first offending field decides the
/// error.
pub fn validate(document: &Value) -> Result<FormSchema, SchemaError> {
    let raw = RawFormSchema::deserialize(document).map_err(|e| {
        SchemaError::MalformedDocument {
            reason: e.to_string(),
        }
    })?;

    let mut seen_ids = HashSet::new();
    let mut fields = Vec::with_capacity(raw.fields.len());
    for (index, raw_field) in raw.fields.into_iter().enumerate() {
        if raw_field.id.is_empty() {
            return Err(SchemaError::MalformedDocument {
                reason: format!("field at index {index} has an empty id"),
            });
        }
        if !seen_ids.insert(raw_field.id.clone()) {
            return Err(SchemaError::DuplicateFieldId { id: raw_field.id });
        }
        fields.push(convert_field(raw_field)?);
    }

    debug!(
        title = %raw.form_title,
        fields = fields.len(),
        "validated form schema"
    );

    Ok(FormSchema {
        title: raw.form_title,
        description: raw.form_description,
        fields,
    })
}

// ============================================================================
// Field conversion
// ============================================================================

fn convert_field(raw: RawFieldDef) -> Result<FieldDef, SchemaError> {
    let Some(field_type) = FieldType::from_name(&raw.field_type) else {
        return Err(SchemaError::UnsupportedFieldType {
            id: raw.id,
            type_name: raw.field_type,
        });
    };

    let options: Vec<ChoiceOption> = raw
        .options
        .unwrap_or_default()
        .into_iter()
        .map(|option| ChoiceOption {
            value: option.value,
            label: option.label,
        })
        .collect();

    if field_type.is_choice() {
        if options.is_empty() {
            return Err(SchemaError::MissingOptions {
                id: raw.id,
                field_type,
            });
        }
        let mut seen_values = HashSet::new();
        for option in &options {
            if !seen_values.insert(option.value.as_str()) {
                return Err(SchemaError::DuplicateOptionValue {
                    id: raw.id.clone(),
                    value: option.value.clone(),
                });
            }
        }
    }

    let validation = match raw.validation {
        Some(validation) => Some(convert_validation(&raw.id, validation)?),
        None => None,
    };

    Ok(FieldDef {
        id: raw.id,
        field_type,
        label: raw.label,
        required: raw.required,
        placeholder: raw.placeholder,
        options,
        validation,
    })
}

fn convert_validation(id: &str, raw: RawValidation) -> Result<FieldValidation, SchemaError> {
    let pattern = match raw.pattern {
        Some(source) => Some(Pattern::new(&source).map_err(|e| SchemaError::InvalidPattern {
            id: id.to_string(),
            pattern: source.clone(),
            reason: e.to_string(),
        })?),
        None => None,
    };
    Ok(FieldValidation {
        pattern,
        message: raw.message,
    })
}

/// serde_json appends " at line X column Y" to its messages; the position is
/// reported separately.
fn syntax_message(error: &serde_json::Error) -> String {
    let message = error.to_string();
    match message.rfind(" at line ") {
        Some(pos) => message[..pos].to_string(),
        None => message,
    }
}
