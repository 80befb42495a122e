use std::time::{Duration, Instant};

use super::support::{type_text, FailingGateway};
use crate::backend::MockAuthGateway;
use crate::pages::{AuthField, AuthMode, AuthPage, Edit};

fn page() -> AuthPage {
    AuthPage::new(Duration::from_secs(2))
}

fn fill_signup(page: &mut AuthPage) {
    page.switch_mode(AuthMode::Signup);
    type_text(&mut page.form.name, "Ada Lovelace");
    type_text(&mut page.form.email, "ada@example.com");
    type_text(&mut page.form.password, "secret1");
    type_text(&mut page.form.confirm_password, "secret1");
}

#[test]
fn test_starts_on_login() {
    let page = page();
    assert_eq!(page.mode(), AuthMode::Login);
    assert_eq!(page.focus(), AuthField::Email);
    assert_eq!(page.mode().submit_label(page.is_loading()), "Sign In");
}

#[test]
fn test_switching_mode_clears_values_and_errors() {
    let mut page = page();
    type_text(&mut page.form.email, "bad");
    assert!(!page.begin_submit());
    assert!(!page.errors().is_empty());

    page.toggle_mode();

    assert_eq!(page.mode(), AuthMode::Signup);
    assert!(page.errors().is_empty());
    assert!(page.form.email.value().is_empty());
    assert_eq!(page.focus(), AuthField::Name);
}

#[test]
fn test_typing_clears_field_error() {
    let mut page = page();
    assert!(!page.begin_submit());
    assert_eq!(page.error(AuthField::Email), Some("Email is required"));

    page.edit(Edit::Insert('a'));
    assert_eq!(page.error(AuthField::Email), None);
    assert_eq!(page.error(AuthField::Password), Some("Password is required"));

    // moving the cursor is not a change
    page.focus_next();
    page.edit(Edit::Left);
    assert_eq!(page.error(AuthField::Password), Some("Password is required"));
}

#[test]
fn test_focus_cycles_through_mode_fields() {
    let mut page = page();
    page.focus_next();
    assert_eq!(page.focus(), AuthField::Password);
    page.focus_next();
    assert_eq!(page.focus(), AuthField::Email);
    page.focus_prev();
    assert_eq!(page.focus(), AuthField::Password);
}

#[tokio::test]
async fn test_login_success() {
    let mut page = page();
    type_text(&mut page.form.email, "ada@example.com");
    type_text(&mut page.form.password, "secret1");

    assert!(page.begin_submit());
    assert!(page.is_loading());
    assert_eq!(page.mode().submit_label(true), "Signing In...");
    assert!(!page.begin_submit(), "no double submit while loading");

    page.complete_submit(&MockAuthGateway::immediate()).await;

    assert!(!page.is_loading());
    let message = page.message().unwrap();
    assert!(message.success);
    assert_eq!(message.text, "Login successful! Redirecting...");
}

#[tokio::test]
async fn test_signup_redirects_to_login_after_delay() {
    let mut page = page();
    fill_signup(&mut page);
    assert!(page.begin_submit());

    let now = Instant::now();
    page.complete_submit_at(&MockAuthGateway::immediate(), now).await;
    assert_eq!(
        page.message().map(|m| m.text.as_str()),
        Some("Account created successfully! Please login.")
    );

    page.tick(now + Duration::from_millis(1999));
    assert_eq!(page.mode(), AuthMode::Signup);

    page.tick(now + Duration::from_secs(2));
    assert_eq!(page.mode(), AuthMode::Login);
    assert!(page.message().is_some());
}

#[tokio::test]
async fn test_gateway_failure_shows_generic_message() {
    let mut page = page();
    fill_signup(&mut page);
    assert!(page.begin_submit());

    page.complete_submit(&FailingGateway).await;

    let message = page.message().unwrap();
    assert!(!message.success);
    assert_eq!(message.text, "Something went wrong. Please try again.");
    assert_eq!(page.mode(), AuthMode::Signup);
}

#[test]
fn test_edit_ignored_while_loading() {
    let mut page = page();
    type_text(&mut page.form.email, "ada@example.com");
    type_text(&mut page.form.password, "secret1");
    assert!(page.begin_submit());

    page.edit(Edit::Insert('x'));
    assert_eq!(page.form.email.value(), "ada@example.com");
}

#[test]
fn test_toggle_password_visibility() {
    let mut page = page();
    assert!(!page.show_password());
    page.toggle_password();
    assert!(page.show_password());
    page.toggle_password();
    assert!(!page.show_password());
}
