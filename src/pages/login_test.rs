use super::*;
use crate::util::validation::REQUIRED_MESSAGE;

#[test]
fn check_credentials_trims_email_and_keeps_password() {
    assert_eq!(
        check_credentials("  alice@example.com ", " secret "),
        Ok(("alice@example.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn check_credentials_requires_both_fields() {
    let errors = check_credentials("   ", "").unwrap_err();
    assert_eq!(errors.get("email"), Some(REQUIRED_MESSAGE));
    assert_eq!(errors.get("password"), Some(REQUIRED_MESSAGE));
}

#[test]
fn check_credentials_rejects_malformed_email() {
    let errors = check_credentials("alice", "secret").unwrap_err();
    assert_eq!(errors.get("email"), Some(INVALID_EMAIL_MESSAGE));
    assert_eq!(errors.get("password"), None);
}
