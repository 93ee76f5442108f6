//! Error types for schema validation

use thiserror::Error;

use crate::schema::FieldType;

/// Why a schema document was rejected.
///
/// Detected once, before any widget is planned. The form is not rendered while
/// a `SchemaError` is outstanding.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SchemaError {
    /// The schema text is not valid JSON.
    #[error("invalid JSON at line {line}, column {column}: {message}")]
    Syntax {
        message: String,
        line: usize,
        column: usize,
    },

    /// The document does not have the shape of a form schema.
    #[error("malformed form document: {reason}")]
    MalformedDocument { reason: String },

    #[error("field '{id}' has unsupported type '{type_name}'")]
    UnsupportedFieldType { id: String, type_name: String },

    #[error("duplicate field id '{id}'")]
    DuplicateFieldId { id: String },

    #[error("field '{id}' of type '{field_type}' has no options")]
    MissingOptions { id: String, field_type: FieldType },

    #[error("field '{id}' has more than one option with value '{value}'")]
    DuplicateOptionValue { id: String, value: String },

    #[error("field '{id}' has an invalid pattern '{pattern}': {reason}")]
    InvalidPattern {
        id: String,
        pattern: String,
        reason: String,
    },
}

impl SchemaError {
    /// Id of the offending field, for errors tied to one field.
    pub fn field_id(&self) -> Option<&str> {
        match self {
            SchemaError::Syntax { .. } | SchemaError::MalformedDocument { .. } => None,
            SchemaError::UnsupportedFieldType { id, .. }
            | SchemaError::DuplicateFieldId { id }
            | SchemaError::MissingOptions { id, .. }
            | SchemaError::DuplicateOptionValue { id, .. }
            | SchemaError::InvalidPattern { id, .. } => Some(id),
        }
    }
}
