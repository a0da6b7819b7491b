use super::*;

#[test]
fn validate_register_input_builds_trimmed_request() {
    let request = validate_register_input(" Asha ", " asha@corp.io ", " 555-0100 ", "hunter22").unwrap();
    assert_eq!(
        request,
        RegisterRequest {
            name: "Asha".to_owned(),
            email: "asha@corp.io".to_owned(),
            phone_number: "555-0100".to_owned(),
            password: "hunter22".to_owned(),
        }
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(
        validate_register_input("", "a@b.io", "1", "secret"),
        Err("All fields are required.")
    );
    assert_eq!(
        validate_register_input("Asha", "a@b.io", "  ", "secret"),
        Err("All fields are required.")
    );
}

#[test]
fn validate_register_input_checks_email_and_password() {
    assert_eq!(
        validate_register_input("Asha", "asha.corp.io", "1", "secret"),
        Err("Enter a valid email address.")
    );
    assert_eq!(
        validate_register_input("Asha", "a@b.io", "1", "12345"),
        Err("Password must be at least 6 characters.")
    );
    assert!(validate_register_input("Asha", "a@b.io", "1", "123456").is_ok());
}
