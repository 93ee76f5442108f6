//! Form session state
//!
//! [`FormState`] is the whole state of one rendered form. Event handlers take
//! it by value and hand back the next state:
//!
//! ```text
//!            with_value                 submit (valid)
//!   Editing ───────────▶ Editing ───────────────────▶ Submitted
//!      ▲                                                  │
//!      └──────────────────── with_value ──────────────────┘
//! ```
//!
//! A rejected submission keeps the phase and replaces the validation state
//! with the errors of every field. The last record survives later edits.

use tracing::{trace, warn};

use crate::render::{WidgetSpec, plan};
use crate::schema::FormSchema;
use crate::submit::{ResultRecord, submit};
use crate::validate::{ValidationState, check};
use crate::values::FieldValues;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState {
    schema: FormSchema,
    values: FieldValues,
    validation: ValidationState,
    phase: FormPhase,
    last_record: Option<ResultRecord>,
}

impl FormState {
    /// Fresh session: every field bound to `""`, nothing reported yet.
    pub fn new(schema: FormSchema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| (field.id.clone(), String::new()))
            .collect();
        let validation = ValidationState::passing(&schema);
        Self {
            schema,
            values,
            validation,
            phase: FormPhase::Editing,
            last_record: None,
        }
    }

    /// Bind a new value and re-check that field.
    ///
    /// Ids outside the schema are ignored.
    #[must_use]
    pub fn with_value(mut self, id: &str, value: impl Into<String>) -> Self {
        let Some(field) = self.schema.field(id) else {
            warn!(id, "ignoring value for unknown field");
            return self;
        };
        let value = value.into();
        let error = check(field, &value);
        trace!(id, valid = error.is_none(), "field changed");

        self.validation.set(id, error);
        self.values.insert(id, value);
        self.phase = FormPhase::Editing;
        self
    }

    /// Validate the whole form and produce a record when it passes.
    #[must_use]
    pub fn submit(mut self) -> (Self, Result<ResultRecord, ValidationState>) {
        let outcome = submit(&self.schema, &self.values);
        match &outcome {
            Ok(record) => {
                self.validation = ValidationState::passing(&self.schema);
                self.phase = FormPhase::Submitted;
                self.last_record = Some(record.clone());
            }
            Err(state) => {
                self.validation = state.clone();
            }
        }
        (self, outcome)
    }

    pub fn schema(&self) -> &FormSchema {
        &self.schema
    }

    pub fn values(&self) -> &FieldValues {
        &self.values
    }

    pub fn value(&self, id: &str) -> &str {
        self.values.value(id)
    }

    pub fn validation(&self) -> &ValidationState {
        &self.validation
    }

    pub fn error(&self, id: &str) -> Option<&str> {
        self.validation.error(id)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Record of the most recent successful submission.
    pub fn last_record(&self) -> Option<&ResultRecord> {
        self.last_record.as_ref()
    }

    pub fn widgets(&self) -> Vec<WidgetSpec> {
        plan(&self.schema)
    }
}
