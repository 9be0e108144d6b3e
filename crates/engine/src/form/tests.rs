//! Lifecycle tests for live forms

use crate::error::{EngineError, SubmissionError};
use crate::form::submission::{OutputEntry, REQUIRED_MESSAGE};
use crate::form::DynamicForm;
use crate::schema::{Condition, FieldType, FormField, FormSchema};
use crate::test_fixtures;
use crate::value::FieldValue;
use serde_json::json;

fn conditional_form() -> DynamicForm {
    DynamicForm::new(test_fixtures::schema(test_fixtures::conditional_schema()))
}

fn present(form: &DynamicForm) -> Vec<&str> {
    form.tree().names().collect()
}

#[test]
fn test_length_errors_follow_value_changes() {
    let schema = test_fixtures::schema(json!({
        "title": "T",
        "fields": [
            {
                "label": "Name",
                "name": "name",
                "type": "text",
                "required": true,
                "minLength": 3,
                "maxLength": 50
            }
        ]
    }));
    let mut form = DynamicForm::new(schema);

    form.set_value("name", "Al").unwrap();
    form.mark_as_touched("name").unwrap();
    let message = form.get_error("name").unwrap();
    assert!(message.contains("at least"));
    assert!(message.contains('3'));

    form.set_value("name", "Alice").unwrap();
    assert_eq!(form.get_error("name"), None);
}

#[test]
fn test_parent_value_drives_dependent_controls() {
    let mut form = conditional_form();

    form.set_value("employmentStatus", "Employed").unwrap();
    assert!(form.tree().contains("companyName"));
    assert!(!form.tree().contains("universityName"));

    form.set_value("employmentStatus", "Student").unwrap();
    assert!(!form.tree().contains("companyName"));
    assert!(form.tree().contains("universityName"));

    form.set_value("employmentStatus", "Unemployed").unwrap();
    assert!(!form.tree().contains("companyName"));
    assert!(!form.tree().contains("universityName"));
    assert_eq!(present(&form), vec!["employmentStatus"]);
}

#[test]
fn test_submit_with_empty_required_fields() {
    let mut form = DynamicForm::new(test_fixtures::schema(test_fixtures::simple_schema()));

    assert_eq!(form.submit(), Err(SubmissionError::Invalid));
    assert!(form.tree().iter().all(|(_, control)| control.touched()));
    assert_eq!(form.get_error("name").as_deref(), Some(REQUIRED_MESSAGE));
    assert_eq!(form.get_error("email").as_deref(), Some(REQUIRED_MESSAGE));
}

#[test]
fn test_submit_succeeds_once_values_are_valid() {
    let mut form = DynamicForm::new(test_fixtures::schema(test_fixtures::simple_schema()));
    form.set_value("name", "Alice").unwrap();
    form.set_value("email", "alice@example.com").unwrap();

    let record = form.submit().unwrap();
    assert_eq!(
        record,
        vec![
            OutputEntry {
                field_name: "name".to_string(),
                label: "Name".to_string(),
                value: FieldValue::from("Alice"),
            },
            OutputEntry {
                field_name: "email".to_string(),
                label: "Email".to_string(),
                value: FieldValue::from("alice@example.com"),
            },
        ]
    );
}

#[test]
fn test_hidden_required_fields_do_not_block_submission() {
    let mut form = conditional_form();
    form.set_value("employmentStatus", "Employed").unwrap();
    assert_eq!(form.submit(), Err(SubmissionError::Invalid));
    assert_eq!(form.get_error("companyName").as_deref(), Some(REQUIRED_MESSAGE));
    assert_eq!(form.get_error("universityName"), None);

    form.set_value("companyName", "Acme").unwrap();
    let record = form.submit().unwrap();
    let names: Vec<&str> = record.iter().map(|e| e.field_name.as_str()).collect();
    assert_eq!(names, vec!["employmentStatus", "companyName"]);
}

#[test]
fn test_re_shown_field_starts_empty_and_moves_to_end() {
    let mut form = conditional_form();
    form.set_value("employmentStatus", "Student").unwrap();
    form.set_value("universityName", "MIT").unwrap();

    form.set_value("employmentStatus", "Employed").unwrap();
    form.set_value("employmentStatus", "Student").unwrap();

    assert_eq!(
        form.tree().get("universityName").unwrap().value(),
        &FieldValue::empty_text()
    );
    assert_eq!(present(&form), vec!["employmentStatus", "universityName"]);
}

#[test]
fn test_repeated_parent_value_is_idempotent() {
    let mut form = conditional_form();
    form.set_value("employmentStatus", "Employed").unwrap();
    form.set_value("companyName", "Acme").unwrap();
    form.set_value("employmentStatus", "Employed").unwrap();

    assert_eq!(
        form.tree().get("companyName").unwrap().value(),
        &FieldValue::from("Acme")
    );
}

#[test]
fn test_set_value_on_absent_control_fails() {
    let mut form = conditional_form();
    form.set_value("employmentStatus", "Unemployed").unwrap();

    match form.set_value("companyName", "Acme") {
        Err(EngineError::ControlNotFound(name)) => assert_eq!(name, "companyName"),
        other => panic!("Expected ControlNotFound, got {other:?}"),
    }
    assert!(form.mark_as_touched("companyName").is_err());
}

#[test]
fn test_direct_toggle_is_idempotent() {
    let mut form = conditional_form();
    let company = form.schema().field("companyName").unwrap().clone();

    form.toggle_field_visibility(&company, true);
    form.toggle_field_visibility(&company, true);
    assert_eq!(form.tree().len(), 3);

    form.toggle_field_visibility(&company, false);
    form.toggle_field_visibility(&company, false);
    assert_eq!(form.tree().len(), 2);
}

#[test]
fn test_visible_fields_follow_parent() {
    let mut form = conditional_form();
    let visible: Vec<&str> = form.visible_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(visible, vec!["employmentStatus"]);

    form.set_value("employmentStatus", "Student").unwrap();
    let visible: Vec<&str> = form.visible_fields().map(|f| f.name.as_str()).collect();
    assert_eq!(visible, vec!["employmentStatus", "universityName"]);
}

#[test]
fn test_non_string_condition_values() {
    let mut subscribe = FormField::new("Subscribe", "subscribe", FieldType::Checkbox);
    subscribe.required = Some(false);
    let mut frequency = FormField::new("Frequency", "frequency", FieldType::Radiobutton);
    frequency.condition = Some(Condition::new("subscribe", true));
    let mut topics = FormField::new("Topics", "topics", FieldType::Multiselect);
    topics.condition = Some(Condition::new("subscribe", vec!["all"]));

    let mut form = DynamicForm::new(FormSchema {
        title: "Newsletter".to_string(),
        fields: vec![subscribe, frequency, topics],
    });

    form.set_value("subscribe", true).unwrap();
    assert!(form.tree().contains("frequency"));
    assert!(!form.tree().contains("topics"));

    form.set_value("subscribe", "true").unwrap();
    assert!(!form.tree().contains("frequency"));

    form.set_value("subscribe", vec!["all"]).unwrap();
    assert!(form.tree().contains("topics"));
}

#[test]
fn test_re_added_parent_keeps_driving_dependents() {
    let mut form = conditional_form();
    let status = form.schema().field("employmentStatus").unwrap().clone();

    form.toggle_field_visibility(&status, false);
    form.toggle_field_visibility(&status, true);
    form.set_value("employmentStatus", "Unemployed").unwrap();

    assert_eq!(present(&form), vec!["employmentStatus"]);
}

#[test]
fn test_value_snapshot_in_tree_order() {
    let mut form = DynamicForm::new(test_fixtures::schema(
        test_fixtures::multiple_field_types_schema(),
    ));
    form.set_value("hobbies", vec!["Music", "Travel"]).unwrap();
    form.set_value("subscribe", true).unwrap();

    let value = form.value();
    let names: Vec<&str> = value.keys().map(String::as_str).collect();
    assert_eq!(
        names,
        vec!["fullName", "dob", "gender", "hobbies", "subscribe", "comments"]
    );
    assert_eq!(value["hobbies"], FieldValue::from(vec!["Music", "Travel"]));
    assert_eq!(value["subscribe"], FieldValue::Bool(true));
}

#[test]
fn test_forms_from_same_schema_are_independent() {
    let schema = test_fixtures::schema(test_fixtures::conditional_schema());
    let mut first = DynamicForm::new(schema.clone());
    let second = DynamicForm::new(schema);

    first.set_value("employmentStatus", "Unemployed").unwrap();
    assert_eq!(first.tree().len(), 1);
    assert_eq!(second.tree().len(), 3);
    assert_eq!(second.subscriptions().len(), 2);
}

#[test]
fn test_look_ahead_pattern_schema_gates_values() {
    let raw = json!({
        "title": "Account",
        "fields": [
            {
                "label": "Password",
                "name": "password",
                "type": "text",
                "required": true,
                "validation": {
                    "pattern": "^(?=.*[0-9]).{8,}$",
                    "message": "At least 8 characters including a digit"
                }
            }
        ]
    });
    let report = crate::validate_schema(&raw);
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);

    let mut form = DynamicForm::new(FormSchema::from_value(&raw).unwrap());
    form.set_value("password", "letmein!").unwrap();
    assert!(matches!(form.submit(), Err(SubmissionError::Invalid)));
    assert_eq!(
        form.get_error("password").as_deref(),
        Some("At least 8 characters including a digit")
    );

    form.set_value("password", "letmein42").unwrap();
    assert!(form.submit().is_ok());
}
