//! Widget planning

use schemaform::{
    Choice, FormSchema, InputMode, SELECT_PLACEHOLDER, WidgetKind, WidgetSpec, plan, validate,
};
use serde_json::json;

fn contact_schema() -> FormSchema {
    validate(&json!({
        "formTitle": "Contact",
        "formDescription": "",
        "fields": [
            { "id": "name", "type": "text", "label": "Name", "required": true,
              "placeholder": "Ada Lovelace" },
            { "id": "email", "type": "email", "label": "Email", "placeholder": "you@example.com" },
            { "id": "message", "type": "textarea", "label": "Message" },
            { "id": "topic", "type": "select", "label": "Topic",
              "options": [
                  { "value": "sales", "label": "Sales" },
                  { "value": "support", "label": "Support" }
              ] },
            { "id": "reply", "type": "radio", "label": "Reply by",
              "options": [
                  { "value": "mail", "label": "Mail" },
                  { "value": "phone", "label": "Phone" }
              ] }
        ]
    }))
    .unwrap()
}

fn choice(value: &str, label: &str) -> Choice {
    Choice {
        value: value.to_string(),
        label: label.to_string(),
        selectable: true,
    }
}

#[test]
fn test_one_widget_per_field_in_order() {
    let widgets = plan(&contact_schema());
    let ids: Vec<&str> = widgets.iter().map(|w| w.id.as_str()).collect();
    assert_eq!(ids, ["name", "email", "message", "topic", "reply"]);
}

#[test]
fn test_text_and_email_are_single_line_inputs() {
    let widgets = plan(&contact_schema());
    assert_eq!(
        widgets[0],
        WidgetSpec {
            id: "name".to_string(),
            label: "Name".to_string(),
            required: true,
            kind: WidgetKind::SingleLineInput {
                input_mode: InputMode::Text,
                placeholder: Some("Ada Lovelace".to_string()),
            },
        }
    );
    assert_eq!(
        widgets[1].kind,
        WidgetKind::SingleLineInput {
            input_mode: InputMode::Email,
            placeholder: Some("you@example.com".to_string()),
        }
    );
    assert_eq!(InputMode::Email.html_type(), "email");
}

#[test]
fn test_textarea_is_multi_line_input() {
    let widgets = plan(&contact_schema());
    assert_eq!(
        widgets[2].kind,
        WidgetKind::MultiLineInput { placeholder: None }
    );
    assert!(!widgets[2].required);
}

#[test]
fn test_select_starts_with_placeholder_choice() {
    let widgets = plan(&contact_schema());
    assert_eq!(
        widgets[3].kind,
        WidgetKind::SingleSelect {
            choices: vec![
                Choice {
                    value: String::new(),
                    label: SELECT_PLACEHOLDER.to_string(),
                    selectable: false,
                },
                choice("sales", "Sales"),
                choice("support", "Support"),
            ],
        }
    );
    assert_eq!(SELECT_PLACEHOLDER, "Select an option");
}

#[test]
fn test_radio_group_has_one_control_per_option() {
    let widgets = plan(&contact_schema());
    assert_eq!(
        widgets[4].kind.choices(),
        [choice("mail", "Mail"), choice("phone", "Phone")]
    );
    assert_eq!(widgets[4].kind.placeholder(), None);
}

#[test]
fn test_plan_is_idempotent() {
    let schema = contact_schema();
    assert_eq!(plan(&schema), plan(&schema));
}

#[test]
fn test_plan_of_empty_schema() {
    assert!(plan(&FormSchema::default()).is_empty());
}

#[test]
fn test_widget_serializes_with_kind_tag() {
    let widgets = plan(&contact_schema());
    let value = serde_json::to_value(&widgets[1]).unwrap();
    assert_eq!(
        value,
        json!({
            "id": "email",
            "label": "Email",
            "required": false,
            "widget": "single_line_input",
            "input_mode": "email",
            "placeholder": "you@example.com"
        })
    );
}
