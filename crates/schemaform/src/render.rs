//! Widget planning
//!
//! Maps every field of a [`FormSchema`] to exactly one [`WidgetSpec`]. The
//! mapping is a total `match` over [`FieldType`]; planning is pure and holds no
//! state, so the same schema always yields the same plan.

use serde::Serialize;
use tracing::trace;

use crate::schema::{ChoiceOption, FieldDef, FieldType, FormSchema};

/// Label of the leading, non-selectable choice of a select widget.
pub const SELECT_PLACEHOLDER: &str = "Select an option";

/// Presentation parameters of one widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WidgetSpec {
    pub id: String,
    pub label: String,
    /// Shown as a `*` marker next to the label.
    pub required: bool,
    #[serde(flatten)]
    pub kind: WidgetKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "widget", rename_all = "snake_case")]
pub enum WidgetKind {
    SingleLineInput {
        input_mode: InputMode,
        placeholder: Option<String>,
    },
    MultiLineInput {
        placeholder: Option<String>,
    },
    /// `choices[0]` is the non-selectable placeholder.
    SingleSelect {
        choices: Vec<Choice>,
    },
    RadioGroup {
        choices: Vec<Choice>,
    },
}

impl WidgetKind {
    pub fn placeholder(&self) -> Option<&str> {
        match self {
            WidgetKind::SingleLineInput { placeholder, .. }
            | WidgetKind::MultiLineInput { placeholder } => placeholder.as_deref(),
            WidgetKind::SingleSelect { .. } | WidgetKind::RadioGroup { .. } => None,
        }
    }

    pub fn choices(&self) -> &[Choice] {
        match self {
            WidgetKind::SingleSelect { choices } | WidgetKind::RadioGroup { choices } => choices,
            WidgetKind::SingleLineInput { .. } | WidgetKind::MultiLineInput { .. } => &[],
        }
    }
}

/// Input mode hint of a single-line input. Does not add validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    Text,
    Email,
}

impl InputMode {
    /// Value for an HTML `type` attribute.
    pub fn html_type(self) -> &'static str {
        match self {
            InputMode::Text => "text",
            InputMode::Email => "email",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
    pub selectable: bool,
}

impl Choice {
    fn placeholder() -> Self {
        Self {
            value: String::new(),
            label: SELECT_PLACEHOLDER.to_string(),
            selectable: false,
        }
    }
}

impl From<&ChoiceOption> for Choice {
    fn from(option: &ChoiceOption) -> Self {
        Self {
            value: option.value.clone(),
            label: option.label.clone(),
            selectable: true,
        }
    }
}

/// Plan one widget per field, in field order.
pub fn plan(schema: &FormSchema) -> Vec<WidgetSpec> {
    let widgets: Vec<WidgetSpec> = schema.fields.iter().map(plan_field).collect();
    trace!(widgets = widgets.len(), "planned form widgets");
    widgets
}

fn plan_field(field: &FieldDef) -> WidgetSpec {
    let kind = match field.field_type {
        FieldType::SingleLineText => WidgetKind::SingleLineInput {
            input_mode: InputMode::Text,
            placeholder: field.placeholder.clone(),
        },
        FieldType::Email => WidgetKind::SingleLineInput {
            input_mode: InputMode::Email,
            placeholder: field.placeholder.clone(),
        },
        FieldType::MultiLineText => WidgetKind::MultiLineInput {
            placeholder: field.placeholder.clone(),
        },
        FieldType::SingleSelect => WidgetKind::SingleSelect {
            choices: std::iter::once(Choice::placeholder())
                .chain(field.options.iter().map(Choice::from))
                .collect(),
        },
        FieldType::RadioGroup => WidgetKind::RadioGroup {
            choices: field.options.iter().map(Choice::from).collect(),
        },
    };

    WidgetSpec {
        id: field.id.clone(),
        label: field.label.clone(),
        required: field.required,
        kind,
    }
}
