use super::*;
use crate::util::validation::REQUIRED_MESSAGE;

#[test]
fn compose_trims_and_omits_blank_subject() {
    let message = compose("  ", "  Bonjour  ").unwrap();
    assert_eq!(message.subject, None);
    assert_eq!(message.content, "Bonjour");
    assert!(!message.is_global);
    assert_eq!(message.receiver_id, None);
}

#[test]
fn compose_keeps_subject() {
    let message = compose(" Réunion ", "Demain 10h").unwrap();
    assert_eq!(message.subject.as_deref(), Some("Réunion"));
}

#[test]
fn compose_requires_content() {
    let errors = compose("Objet", " \n ").unwrap_err();
    assert_eq!(errors.get("content"), Some(REQUIRED_MESSAGE));
}

#[test]
fn compose_body_omits_absent_optionals() {
    let body = serde_json::to_value(compose("", "Salut").unwrap()).unwrap();
    assert_eq!(body, serde_json::json!({ "content": "Salut", "is_global": false }));
}

#[test]
fn subject_label_falls_back_for_missing_subject() {
    let message: Message = serde_json::from_value(serde_json::json!({ "id": 1, "content": "x" })).unwrap();
    assert_eq!(subject_label(&message), "(sans objet)");
}
