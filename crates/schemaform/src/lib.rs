#![doc = include_str!("../README.md")]

pub mod error;
pub mod export;
pub mod form;
pub mod parse;
pub mod render;
pub mod report;
pub mod schema;
pub mod submit;
pub mod validate;
pub mod values;

pub use error::SchemaError;
pub use form::{FormPhase, FormState};
pub use parse::{parse_schema, validate};
pub use render::{Choice, InputMode, SELECT_PLACEHOLDER, WidgetKind, WidgetSpec, plan};
pub use schema::{ChoiceOption, FieldDef, FieldType, FieldValidation, FormSchema, Pattern};
pub use submit::{ResultRecord, submit};
pub use validate::{ValidationState, check, check_all, is_form_valid};
pub use values::FieldValues;
