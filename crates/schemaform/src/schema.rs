//! Form schema representation
//!
//! A [`FormSchema`] is only ever produced by [`crate::validate`] or
//! [`crate::parse_schema`], so every value of these types already satisfies the
//! schema invariants: unique field ids, non-empty option lists for choice
//! fields and compiled patterns.

use std::fmt;

use regex::Regex;

/// A validated form document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormSchema {
    pub title: String,
    pub description: String,
    /// Fields in rendering order.
    pub fields: Vec<FieldDef>,
}

impl FormSchema {
    /// Look up a field by id.
    pub fn field(&self, id: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Field ids in rendering order.
    pub fn field_ids(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|field| field.id.as_str())
    }
}

/// A single field definition.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDef {
    pub id: String,
    pub field_type: FieldType,
    pub label: String,
    pub required: bool,
    pub placeholder: Option<String>,
    /// Choices for `SingleSelect` and `RadioGroup`; never empty for those types.
    pub options: Vec<ChoiceOption>,
    pub validation: Option<FieldValidation>,
}

impl FieldDef {
    /// Custom message from the `validation` block, if any.
    ///
    /// An empty message counts as unset.
    pub fn custom_message(&self) -> Option<&str> {
        self.validation
            .as_ref()
            .and_then(|validation| validation.message.as_deref())
            .filter(|message| !message.is_empty())
    }

    /// Compiled pattern from the `validation` block, if any.
    pub fn pattern(&self) -> Option<&Pattern> {
        self.validation
            .as_ref()
            .and_then(|validation| validation.pattern.as_ref())
    }
}

/// Closed set of supported field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    SingleLineText,
    Email,
    MultiLineText,
    SingleSelect,
    RadioGroup,
}

impl FieldType {
    pub const ALL: &'static [FieldType] = &[
        FieldType::SingleLineText,
        FieldType::Email,
        FieldType::MultiLineText,
        FieldType::SingleSelect,
        FieldType::RadioGroup,
    ];

    /// Name used in schema documents.
    pub fn as_str(self) -> &'static str {
        match self {
            FieldType::SingleLineText => "text",
            FieldType::Email => "email",
            FieldType::MultiLineText => "textarea",
            FieldType::SingleSelect => "select",
            FieldType::RadioGroup => "radio",
        }
    }

    /// Resolve a document name or its descriptive alias.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "text" | "single_line_text" => Some(FieldType::SingleLineText),
            "email" => Some(FieldType::Email),
            "textarea" | "multi_line_text" => Some(FieldType::MultiLineText),
            "select" | "single_select" => Some(FieldType::SingleSelect),
            "radio" | "radio_group" => Some(FieldType::RadioGroup),
            _ => None,
        }
    }

    /// Whether the field picks one value out of a fixed option list.
    pub fn is_choice(self) -> bool {
        matches!(self, FieldType::SingleSelect | FieldType::RadioGroup)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One selectable option of a choice field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
}

/// Per-field validation rules.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValidation {
    pub pattern: Option<Pattern>,
    /// Replaces both the required message and the mismatch message.
    pub message: Option<String>,
}

/// A compiled regular expression that compares by its source.
#[derive(Debug, Clone)]
pub struct Pattern(Regex);

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Regex::new(source).map(Self)
    }

    /// Unanchored search, anchors must be part of the pattern.
    pub fn is_match(&self, value: &str) -> bool {
        self.0.is_match(value)
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.as_str() == other.as_str()
    }
}

impl Eq for Pattern {}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
