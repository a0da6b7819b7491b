use super::*;
use crate::pages::register::validate_register_input;

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  pm@corp.io ", "secret"),
        Ok(("pm@corp.io".to_owned(), "secret".to_owned()))
    );
    assert_eq!(validate_login_input("", "secret"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("pm@corp.io", "   "), Err("Enter both email and password."));
}

#[test]
fn login_sends_password_exactly_as_registered() {
    let registered = validate_register_input("Asha", "a@b.io", "555-0100", " secret1 ").unwrap();
    let (_, password) = validate_login_input("a@b.io", " secret1 ").unwrap();
    assert_eq!(password, registered.password);
    assert_eq!(password, " secret1 ");
}

#[test]
fn login_failure_reads_invalid_credentials() {
    assert_eq!(login_failure_message(), "Invalid credentials");
}
