use super::*;

#[test]
fn empty_required_field_reports_required_message() {
    let rules = FormRules::new().field("name", FieldRules::required());
    let errors = validate([("name", "")], &rules).unwrap_err();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get("name"), Some("Ce champ est requis"));
}

#[test]
fn filled_required_field_passes() {
    let rules = FormRules::new().field("name", FieldRules::required());
    assert_eq!(validate([("name", "ok")], &rules), Ok(()));
}

#[test]
fn required_short_circuits_later_rules() {
    let rules = FormRules::new().field(
        "code",
        FieldRules::required().min_length(3).pattern(Regex::new("^[0-9]+$").unwrap(), Some("Chiffres uniquement")),
    );
    let errors = validate([("code", "")], &rules).unwrap_err();
    assert_eq!(errors.get("code"), Some(REQUIRED_MESSAGE));
}

#[test]
fn min_length_counts_characters() {
    let rules = FormRules::new().field("title", FieldRules::default().min_length(3));
    assert_eq!(validate([("title", "été")], &rules), Ok(()));
    let errors = validate([("title", "ab")], &rules).unwrap_err();
    assert_eq!(errors.get("title"), Some("Minimum 3 caractères requis"));
}

#[test]
fn max_length_reports_limit() {
    let rules = FormRules::new().field("title", FieldRules::default().max_length(4));
    let errors = validate([("title", "abcde")], &rules).unwrap_err();
    assert_eq!(errors.get("title"), Some("Maximum 4 caractères autorisés"));
}

#[test]
fn later_failing_rule_overwrites_earlier_message() {
    let rules = FormRules::new()
        .field("code", FieldRules::default().min_length(5).pattern(Regex::new("^[0-9]+$").unwrap(), None));
    let errors = validate([("code", "ab")], &rules).unwrap_err();
    assert_eq!(errors.get("code"), Some(INVALID_FORMAT_MESSAGE));
}

#[test]
fn pattern_uses_custom_message() {
    let email = Regex::new(r"^[^@\s]+@[^@\s]+$").unwrap();
    let rules = FormRules::new().field("email", FieldRules::required().pattern(email, Some("Adresse e-mail invalide")));
    let errors = validate([("email", "not-an-email")], &rules).unwrap_err();
    assert_eq!(errors.get("email"), Some("Adresse e-mail invalide"));
}

#[test]
fn fields_without_rules_are_ignored() {
    let rules = FormRules::new().field("name", FieldRules::required());
    assert_eq!(validate([("name", "x"), ("comment", "")], &rules), Ok(()));
}

#[test]
fn rules_for_absent_fields_are_not_checked() {
    let rules = FormRules::new().field("name", FieldRules::required());
    assert_eq!(validate(std::iter::empty::<(&str, &str)>(), &rules), Ok(()));
}

#[test]
fn errors_iterate_in_field_order() {
    let rules = FormRules::new().field("b", FieldRules::required()).field("a", FieldRules::required());
    let errors = validate([("b", ""), ("a", "")], &rules).unwrap_err();
    let names: Vec<_> = errors.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["a", "b"]);
}
