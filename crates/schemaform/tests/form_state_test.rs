use schemaform::export::{self, DEFAULT_FILE_NAME, JSON_MIME_TYPE};
use schemaform::{FormPhase, FormSchema, FormState, parse_schema};

fn signup_schema() -> FormSchema {
    parse_schema(
        r#"{
            "formTitle": "Sign up",
            "formDescription": "Create an account",
            "fields": [
                { "id": "email", "type": "email", "label": "Email", "required": true },
                { "id": "zip", "type": "text", "label": "ZIP",
                  "validation": { "pattern": "^[0-9]{5}$", "message": "ZIP must be 5 digits" } },
                { "id": "plan", "type": "radio", "label": "Plan", "required": true,
                  "options": [
                      { "value": "free", "label": "Free" },
                      { "value": "pro", "label": "Pro" }
                  ] }
            ]
        }"#,
    )
    .unwrap()
}

#[test]
fn test_new_form_starts_editing_without_errors() {
    let form = FormState::new(signup_schema());
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.validation().is_valid());
    assert_eq!(form.value("email"), "");
    assert_eq!(form.values().len(), 3);
    assert!(form.last_record().is_none());
    assert_eq!(form.widgets().len(), 3);
}

#[test]
fn test_value_change_checks_that_field_only() {
    let form = FormState::new(signup_schema()).with_value("zip", "12");
    assert_eq!(form.error("zip"), Some("ZIP must be 5 digits"));
    assert_eq!(form.error("email"), None);

    let form = form.with_value("zip", "12345");
    assert_eq!(form.error("zip"), None);
}

#[test]
fn test_rejected_submission_reports_every_field() {
    let (form, outcome) = FormState::new(signup_schema())
        .with_value("zip", "1")
        .submit();

    let state = outcome.unwrap_err();
    assert_eq!(state.error_count(), 3);
    assert_eq!(form.error("email"), Some("Email is required"));
    assert_eq!(form.error("zip"), Some("ZIP must be 5 digits"));
    assert_eq!(form.error("plan"), Some("Plan is required"));
    assert_eq!(form.phase(), FormPhase::Editing);
    assert!(form.last_record().is_none());
}

#[test]
fn test_successful_submission_then_edit_keeps_record() {
    let (form, outcome) = FormState::new(signup_schema())
        .with_value("email", "ada@example.com")
        .with_value("plan", "pro")
        .submit();

    let record = outcome.unwrap();
    assert_eq!(form.phase(), FormPhase::Submitted);
    assert_eq!(form.last_record(), Some(&record));

    let form = form.with_value("email", "grace@example.com");
    assert_eq!(form.phase(), FormPhase::Editing);
    assert_eq!(
        form.last_record().and_then(|r| r.get("email")),
        Some("ada@example.com")
    );
    assert_eq!(record.get("email"), Some("ada@example.com"));
}

#[test]
fn test_resubmission_replaces_last_record() {
    let (form, first) = FormState::new(signup_schema())
        .with_value("email", "ada@example.com")
        .with_value("plan", "free")
        .submit();
    let (form, second) = form.with_value("plan", "pro").submit();

    assert_eq!(first.unwrap().get("plan"), Some("free"));
    assert_eq!(second.unwrap().get("plan"), Some("pro"));
    assert_eq!(form.last_record().and_then(|r| r.get("plan")), Some("pro"));
}

#[test]
fn test_unknown_field_is_ignored() {
    let before = FormState::new(signup_schema());
    let after = before.clone().with_value("nope", "x");
    assert_eq!(before, after);
}

#[test]
fn test_export_submitted_record() {
    let (_, outcome) = FormState::new(signup_schema())
        .with_value("email", "ada@example.com")
        .with_value("zip", "12345")
        .with_value("plan", "free")
        .submit();
    let record = outcome.unwrap();

    let artifact = export::export(&record, &export::Config::default()).unwrap();
    assert_eq!(artifact.file_name, DEFAULT_FILE_NAME);
    assert_eq!(artifact.mime_type, JSON_MIME_TYPE);
    assert_eq!(
        artifact.contents,
        "{\n  \"email\": \"ada@example.com\",\n  \"zip\": \"12345\",\n  \"plan\": \"free\"\n}"
    );

    let compact = export::export(
        &record,
        &export::Config {
            file_name: "out.json".to_string(),
            pretty: false,
        },
    )
    .unwrap();
    assert_eq!(compact.file_name, "out.json");
    assert_eq!(
        compact.contents,
        r#"{"email":"ada@example.com","zip":"12345","plan":"free"}"#
    );
}
