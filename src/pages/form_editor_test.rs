use super::*;
use crate::net::types::FieldType;
use crate::util::validation::REQUIRED_MESSAGE;

fn draft(title: &str, structure_json: &str) -> EditorDraft {
    EditorDraft { title: title.to_owned(), description: String::new(), structure_json: structure_json.to_owned() }
}

#[test]
fn new_draft_has_empty_structure_that_parses() {
    let draft = EditorDraft { title: "Inscription".to_owned(), ..EditorDraft::default() };
    let payload = draft.to_payload().unwrap();
    assert!(payload.structure.fields.is_empty());
}

#[test]
fn payload_trims_title_and_drops_blank_description() {
    let mut d = draft("  Inscription ", r#"{"fields": [{"id": "nom", "label": "Nom"}]}"#);
    d.description = "   ".to_owned();
    let payload = d.to_payload().unwrap();
    assert_eq!(payload.title, "Inscription");
    assert_eq!(payload.description, None);
    assert_eq!(payload.structure.fields[0].kind, FieldType::Input("text".to_owned()));
}

#[test]
fn missing_title_is_reported() {
    let errors = draft("  ", r#"{"fields": []}"#).to_payload().unwrap_err();
    assert_eq!(errors.get("title"), Some(REQUIRED_MESSAGE));
    assert_eq!(errors.get("structure"), None);
}

#[test]
fn overlong_title_is_reported() {
    let errors = draft(&"x".repeat(TITLE_MAX_LENGTH + 1), r#"{"fields": []}"#).to_payload().unwrap_err();
    assert_eq!(errors.get("title"), Some("Maximum 200 caractères autorisés"));
}

#[test]
fn malformed_structure_is_reported_with_title_errors() {
    let errors = draft("", "{not json").to_payload().unwrap_err();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors.get("structure"), Some(INVALID_STRUCTURE_MESSAGE));
}

#[test]
fn draft_from_form_round_trips_structure() {
    let form: Form = serde_json::from_value(serde_json::json!({
        "id": 4,
        "title": "Contact",
        "description": "Nous écrire",
        "structure": { "fields": [{ "id": "msg", "label": "Message", "type": "textarea" }] }
    }))
    .unwrap();
    let payload = EditorDraft::from_form(&form).to_payload().unwrap();
    assert_eq!(payload.title, "Contact");
    assert_eq!(payload.description.as_deref(), Some("Nous écrire"));
    assert_eq!(payload.structure, form.structure);
}
