use crate::pages::{validate_form, AuthField, AuthForm, AuthMode};

#[test]
fn test_valid_signup_has_no_errors() {
    let form = AuthForm::filled("Ada Lovelace", "ada@example.com", "secret1", "secret1");
    assert!(validate_form(AuthMode::Signup, &form).is_empty());
}

#[test]
fn test_signup_reports_every_field() {
    let form = AuthForm::filled("   ", "not-an-email", "abc", "abd");
    let errors = validate_form(AuthMode::Signup, &form);

    assert_eq!(errors.get(&AuthField::Name), Some(&"Name is required"));
    assert_eq!(errors.get(&AuthField::Email), Some(&"Email is invalid"));
    assert_eq!(
        errors.get(&AuthField::Password),
        Some(&"Password must be at least 6 characters")
    );
    assert_eq!(
        errors.get(&AuthField::ConfirmPassword),
        Some(&"Passwords do not match")
    );
}

#[test]
fn test_empty_email_and_password_are_required() {
    let form = AuthForm::filled("", "", "", "");
    let errors = validate_form(AuthMode::Login, &form);

    assert_eq!(errors.get(&AuthField::Email), Some(&"Email is required"));
    assert_eq!(errors.get(&AuthField::Password), Some(&"Password is required"));
}

#[test]
fn test_login_ignores_name_and_confirmation() {
    let form = AuthForm::filled("", "ada@example.com", "secret1", "something else");
    assert!(validate_form(AuthMode::Login, &form).is_empty());
}

#[test]
fn test_password_length_boundary() {
    let short = AuthForm::filled("", "ada@example.com", "12345", "");
    let exact = AuthForm::filled("", "ada@example.com", "123456", "");

    assert!(validate_form(AuthMode::Login, &short).contains_key(&AuthField::Password));
    assert!(validate_form(AuthMode::Login, &exact).is_empty());
}

#[test]
fn test_email_pattern() {
    for ok in ["a@b.co", "first.last@sub.domain.org", "x@y.z"] {
        let form = AuthForm::filled("", ok, "secret1", "");
        assert!(validate_form(AuthMode::Login, &form).is_empty(), "{} should pass", ok);
    }
    for bad in ["plain", "a@b", "@.", "a b@c"] {
        let form = AuthForm::filled("", bad, "secret1", "");
        assert_eq!(
            validate_form(AuthMode::Login, &form).get(&AuthField::Email),
            Some(&"Email is invalid"),
            "{} should fail",
            bad
        );
    }
}

#[test]
fn test_field_keys() {
    assert_eq!(AuthField::Name.to_string(), "name");
    assert_eq!(AuthField::ConfirmPassword.to_string(), "confirmPassword");
}

#[test]
fn test_password_length_counts_utf16_units() {
    // each emoji is a surrogate pair, so three of them are six units
    let emoji = AuthForm::filled("", "ada@example.com", "😀😀😀", "");
    assert!(validate_form(AuthMode::Login, &emoji).is_empty());

    let accented = AuthForm::filled("", "ada@example.com", "ééééé", "");
    assert_eq!(
        validate_form(AuthMode::Login, &accented).get(&AuthField::Password),
        Some(&"Password must be at least 6 characters")
    );
}
