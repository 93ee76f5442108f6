//! Schema document validation

use schemaform::{FieldType, SchemaError, parse_schema, validate};
use serde_json::json;

#[test]
fn test_valid_schema_preserves_field_order() {
    let schema = validate(&json!({
        "formTitle": "Contact",
        "formDescription": "Get in touch",
        "fields": [
            { "id": "name", "type": "text", "label": "Name", "required": true },
            { "id": "email", "type": "email", "label": "Email" },
            { "id": "message", "type": "textarea", "label": "Message" },
            {
                "id": "topic", "type": "select", "label": "Topic",
                "options": [
                    { "value": "sales", "label": "Sales" },
                    { "value": "support", "label": "Support" }
                ]
            },
            {
                "id": "reply", "type": "radio", "label": "Reply by",
                "options": [
                    { "value": "mail", "label": "Mail" },
                    { "value": "phone", "label": "Phone" }
                ]
            }
        ]
    }))
    .unwrap();

    assert_eq!(schema.title, "Contact");
    assert_eq!(schema.description, "Get in touch");
    let ids: Vec<&str> = schema.field_ids().collect();
    assert_eq!(ids, ["name", "email", "message", "topic", "reply"]);
    let types: Vec<FieldType> = schema.fields.iter().map(|f| f.field_type).collect();
    assert_eq!(
        types,
        [
            FieldType::SingleLineText,
            FieldType::Email,
            FieldType::MultiLineText,
            FieldType::SingleSelect,
            FieldType::RadioGroup,
        ]
    );
    assert!(schema.fields[0].required);
    assert!(!schema.fields[1].required);
}

#[test]
fn test_descriptive_type_names_are_accepted() {
    let schema = validate(&json!({
        "fields": [
            { "id": "a", "type": "single_line_text", "label": "A" },
            { "id": "b", "type": "multi_line_text", "label": "B" },
            { "id": "c", "type": "single_select", "label": "C",
              "options": [{ "value": "x", "label": "X" }] },
            { "id": "d", "type": "radio_group", "label": "D",
              "options": [{ "value": "y", "label": "Y" }] }
        ]
    }))
    .unwrap();
    assert_eq!(schema.fields.len(), 4);
    assert_eq!(schema.fields[3].field_type, FieldType::RadioGroup);
}

#[test]
fn test_option_order_is_preserved() {
    let schema = validate(&json!({
        "fields": [{
            "id": "size", "type": "radio", "label": "Size",
            "options": [
                { "value": "l", "label": "Large" },
                { "value": "s", "label": "Small" },
                { "value": "m", "label": "Medium" }
            ]
        }]
    }))
    .unwrap();
    let values: Vec<&str> = schema.fields[0]
        .options
        .iter()
        .map(|o| o.value.as_str())
        .collect();
    assert_eq!(values, ["l", "s", "m"]);
}

#[test]
fn test_duplicate_field_id() {
    let result = validate(&json!({
        "fields": [
            { "id": "email", "type": "email", "label": "Email" },
            { "id": "name", "type": "text", "label": "Name" },
            { "id": "email", "type": "text", "label": "Email again" }
        ]
    }));
    assert_eq!(
        result,
        Err(SchemaError::DuplicateFieldId {
            id: "email".to_string()
        })
    );
}

#[test]
fn test_select_without_options() {
    let result = validate(&json!({
        "fields": [{ "id": "plan", "type": "select", "label": "Plan", "options": [] }]
    }));
    assert_eq!(
        result,
        Err(SchemaError::MissingOptions {
            id: "plan".to_string(),
            field_type: FieldType::SingleSelect,
        })
    );
}

#[test]
fn test_radio_without_options_key() {
    let result = validate(&json!({
        "fields": [{ "id": "size", "type": "radio", "label": "Size" }]
    }));
    assert_eq!(
        result,
        Err(SchemaError::MissingOptions {
            id: "size".to_string(),
            field_type: FieldType::RadioGroup,
        })
    );
}

#[test]
fn test_text_field_does_not_need_options() {
    assert!(
        validate(&json!({
            "fields": [{ "id": "name", "type": "text", "label": "Name", "options": [] }]
        }))
        .is_ok()
    );
}

#[test]
fn test_duplicate_option_value() {
    let result = validate(&json!({
        "fields": [{
            "id": "plan", "type": "select", "label": "Plan",
            "options": [
                { "value": "free", "label": "Free" },
                { "value": "free", "label": "Also free" }
            ]
        }]
    }));
    assert_eq!(
        result,
        Err(SchemaError::DuplicateOptionValue {
            id: "plan".to_string(),
            value: "free".to_string(),
        })
    );
}

#[test]
fn test_invalid_pattern() {
    let result = validate(&json!({
        "fields": [{
            "id": "zip", "type": "text", "label": "ZIP",
            "validation": { "pattern": "^[0-9{5}$", "message": "bad" }
        }]
    }));
    match result {
        Err(SchemaError::InvalidPattern { id, pattern, reason }) => {
            assert_eq!(id, "zip");
            assert_eq!(pattern, "^[0-9{5}$");
            assert!(!reason.is_empty());
        }
        other => panic!("Expected InvalidPattern, got: {other:?}"),
    }
}

#[test]
fn test_look_around_pattern_is_rejected() {
    let result = validate(&json!({
        "fields": [{
            "id": "password", "type": "text", "label": "Password",
            "validation": { "pattern": "^(?=.*\\d).{8,}$" }
        }]
    }));
    match result {
        Err(SchemaError::InvalidPattern { id, pattern, reason }) => {
            assert_eq!(id, "password");
            assert_eq!(pattern, "^(?=.*\\d).{8,}$");
            assert!(reason.contains("look-around"), "{reason}");
        }
        other => panic!("Expected InvalidPattern, got: {other:?}"),
    }
}

#[test]
fn test_unsupported_field_type() {
    let result = validate(&json!({
        "fields": [
            { "id": "name", "type": "text", "label": "Name" },
            { "id": "agree", "type": "checkbox", "label": "I agree" }
        ]
    }));
    assert_eq!(
        result,
        Err(SchemaError::UnsupportedFieldType {
            id: "agree".to_string(),
            type_name: "checkbox".to_string(),
        })
    );
}

#[test]
fn test_missing_fields_is_malformed() {
    let result = validate(&json!({ "formTitle": "T", "formDescription": "D" }));
    match result {
        Err(SchemaError::MalformedDocument { reason }) => assert!(reason.contains("fields")),
        other => panic!("Expected MalformedDocument, got: {other:?}"),
    }
}

#[test]
fn test_wrong_value_types_are_malformed() {
    for document in [
        json!([]),
        json!({ "fields": "name" }),
        json!({ "fields": [{ "id": 1, "type": "text", "label": "Name" }] }),
        json!({ "fields": [{ "id": "a", "type": "text", "label": "A", "required": "yes" }] }),
        json!({ "fields": [{ "id": "a", "type": "text" }] }),
        json!({ "formTitle": 3, "fields": [] }),
    ] {
        assert!(
            matches!(
                validate(&document),
                Err(SchemaError::MalformedDocument { .. })
            ),
            "expected MalformedDocument for {document}"
        );
    }
}

#[test]
fn test_empty_id_is_malformed() {
    let result = validate(&json!({
        "fields": [{ "id": "", "type": "text", "label": "Nameless" }]
    }));
    assert!(matches!(
        result,
        Err(SchemaError::MalformedDocument { .. })
    ));
}

#[test]
fn test_first_offending_field_wins() {
    let result = validate(&json!({
        "fields": [
            { "id": "a", "type": "select", "label": "A", "options": [] },
            { "id": "b", "type": "unknown", "label": "B" }
        ]
    }));
    assert!(matches!(result, Err(SchemaError::MissingOptions { .. })));
}

#[test]
fn test_parse_schema_from_text() {
    let schema = parse_schema(
        r#"{
            "formTitle": "Sample Form",
            "formDescription": "This is a dynamically generated form.",
            "fields": []
        }"#,
    )
    .unwrap();
    assert_eq!(schema.title, "Sample Form");
    assert!(schema.fields.is_empty());
}

#[test]
fn test_parse_schema_syntax_error() {
    let result = parse_schema("{ \"fields\": [ }");
    match result {
        Err(SchemaError::Syntax { line, column, .. }) => {
            assert_eq!(line, 1);
            assert!(column > 0);
        }
        other => panic!("Expected Syntax, got: {other:?}"),
    }
}

#[test]
fn test_error_display() {
    let error = SchemaError::DuplicateFieldId {
        id: "email".to_string(),
    };
    assert_eq!(error.to_string(), "duplicate field id 'email'");
    assert_eq!(error.field_id(), Some("email"));

    let error = SchemaError::MissingOptions {
        id: "plan".to_string(),
        field_type: FieldType::SingleSelect,
    };
    assert_eq!(error.to_string(), "field 'plan' of type 'select' has no options");
}
