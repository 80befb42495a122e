//! Login / signup screen state and its field validation.

use std::collections::BTreeMap;
use std::fmt;
use std::time::{Duration, Instant};

use regex::Regex;

use super::input::{Edit, TextInput};
use crate::backend::AuthGateway;
use crate::constants::MIN_PASSWORD_LEN;
use crate::logging::{log_error, log_info};

lazy_static::lazy_static! {
    static ref EMAIL_PATTERN: Regex = Regex::new(r"\S+@\S+\.\S+").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

impl AuthMode {
    pub fn other(self) -> Self {
        match self {
            AuthMode::Login => AuthMode::Signup,
            AuthMode::Signup => AuthMode::Login,
        }
    }

    pub fn fields(self) -> &'static [AuthField] {
        match self {
            AuthMode::Login => &[AuthField::Email, AuthField::Password],
            AuthMode::Signup => &[
                AuthField::Name,
                AuthField::Email,
                AuthField::Password,
                AuthField::ConfirmPassword,
            ],
        }
    }

    pub fn submit_label(self, loading: bool) -> &'static str {
        match (self, loading) {
            (AuthMode::Login, false) => "Sign In",
            (AuthMode::Login, true) => "Signing In...",
            (AuthMode::Signup, false) => "Create Account",
            (AuthMode::Signup, true) => "Creating Account...",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum AuthField {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl AuthField {
    pub fn label(self) -> &'static str {
        match self {
            AuthField::Name => "Full Name",
            AuthField::Email => "Email Address",
            AuthField::Password => "Password",
            AuthField::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AuthField::Name => "Enter your full name",
            AuthField::Email => "Enter your email",
            AuthField::Password => "Enter your password",
            AuthField::ConfirmPassword => "Confirm your password",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, AuthField::Password | AuthField::ConfirmPassword)
    }
}

impl fmt::Display for AuthField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key = match self {
            AuthField::Name => "name",
            AuthField::Email => "email",
            AuthField::Password => "password",
            AuthField::ConfirmPassword => "confirmPassword",
        };
        write!(f, "{}", key)
    }
}

/// Field name to error message; empty means the form may be submitted
pub type FieldErrors = BTreeMap<AuthField, &'static str>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthForm {
    pub name: TextInput,
    pub email: TextInput,
    pub password: TextInput,
    pub confirm_password: TextInput,
}

impl AuthForm {
    pub fn filled(name: &str, email: &str, password: &str, confirm_password: &str) -> Self {
        Self {
            name: TextInput::from_content(name),
            email: TextInput::from_content(email),
            password: TextInput::from_content(password),
            confirm_password: TextInput::from_content(confirm_password),
        }
    }

    pub fn field(&self, field: AuthField) -> &TextInput {
        match field {
            AuthField::Name => &self.name,
            AuthField::Email => &self.email,
            AuthField::Password => &self.password,
            AuthField::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn field_mut(&mut self, field: AuthField) -> &mut TextInput {
        match field {
            AuthField::Name => &mut self.name,
            AuthField::Email => &mut self.email,
            AuthField::Password => &mut self.password,
            AuthField::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check the form for the given mode. Name and password confirmation are
/// only looked at when signing up.
pub fn validate_form(mode: AuthMode, form: &AuthForm) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if mode == AuthMode::Signup && form.name.is_blank() {
        errors.insert(AuthField::Name, "Name is required");
    }

    let email = form.email.value();
    if email.trim().is_empty() {
        errors.insert(AuthField::Email, "Email is required");
    } else if !is_valid_email(email) {
        errors.insert(AuthField::Email, "Email is invalid");
    }

    let password = form.password.value();
    if password.is_empty() {
        errors.insert(AuthField::Password, "Password is required");
    } else if password.encode_utf16().count() < MIN_PASSWORD_LEN {
        errors.insert(AuthField::Password, "Password must be at least 6 characters");
    }

    if mode == AuthMode::Signup && password != form.confirm_password.value() {
        errors.insert(AuthField::ConfirmPassword, "Passwords do not match");
    }

    errors
}

#[derive(Debug, Clone, PartialEq)]
pub struct AuthMessage {
    pub text: String,
    pub success: bool,
}

pub struct AuthPage {
    mode: AuthMode,
    pub form: AuthForm,
    errors: FieldErrors,
    focus: AuthField,
    show_password: bool,
    loading: bool,
    message: Option<AuthMessage>,
    redirect_at: Option<Instant>,
    redirect_after: Duration,
}

impl AuthPage {
    pub fn new(redirect_after: Duration) -> Self {
        Self {
            mode: AuthMode::Login,
            form: AuthForm::default(),
            errors: FieldErrors::new(),
            focus: AuthField::Email,
            show_password: false,
            loading: false,
            message: None,
            redirect_at: None,
            redirect_after,
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: AuthField) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }

    pub fn focus(&self) -> AuthField {
        self.focus
    }

    pub fn show_password(&self) -> bool {
        self.show_password
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn message(&self) -> Option<&AuthMessage> {
        self.message.as_ref()
    }

    /// Switch between login and signup, discarding everything typed so far
    pub fn switch_mode(&mut self, mode: AuthMode) {
        self.mode = mode;
        self.form = AuthForm::default();
        self.errors.clear();
        self.message = None;
        self.redirect_at = None;
        self.focus = mode.fields()[0];
    }

    pub fn toggle_mode(&mut self) {
        self.switch_mode(self.mode.other());
    }

    pub fn toggle_password(&mut self) {
        self.show_password = !self.show_password;
    }

    pub fn focus_next(&mut self) {
        self.step_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.step_focus(false);
    }

    fn step_focus(&mut self, forward: bool) {
        let fields = self.mode.fields();
        let len = fields.len();
        let pos = fields.iter().position(|&f| f == self.focus).unwrap_or(0);
        let next = if forward { (pos + 1) % len } else { (pos + len - 1) % len };
        self.focus = fields[next];
    }

    /// Apply a keystroke to the focused field. Changing a field clears its error.
    pub fn edit(&mut self, edit: Edit) {
        if self.loading {
            return;
        }
        let field = self.focus;
        self.form.field_mut(field).apply(edit);
        if TextInput::changes_content(edit) {
            self.errors.remove(&field);
        }
    }

    /// Validate and, if the form is acceptable, enter the loading state.
    /// Returns whether the caller should go on to [`AuthPage::complete_submit`].
    pub fn begin_submit(&mut self) -> bool {
        if self.loading {
            return false;
        }
        self.errors = validate_form(self.mode, &self.form);
        if !self.errors.is_empty() {
            return false;
        }
        self.loading = true;
        self.message = None;
        true
    }

    pub async fn complete_submit(&mut self, gateway: &dyn AuthGateway) {
        self.complete_submit_at(gateway, Instant::now()).await;
    }

    pub async fn complete_submit_at(&mut self, gateway: &dyn AuthGateway, now: Instant) {
        let email = self.form.email.value().trim().to_string();
        let password = self.form.password.value().to_string();

        let result = match self.mode {
            AuthMode::Login => gateway.login(&email, &password).await,
            AuthMode::Signup => {
                let name = self.form.name.value().trim().to_string();
                gateway.signup(&name, &email, &password).await
            }
        };

        self.message = Some(match result {
            Ok(()) if self.mode == AuthMode::Login => {
                log_info("Login submitted");
                AuthMessage {
                    text: "Login successful! Redirecting...".to_string(),
                    success: true,
                }
            }
            Ok(()) => {
                log_info("Signup submitted");
                self.redirect_at = Some(now + self.redirect_after);
                AuthMessage {
                    text: "Account created successfully! Please login.".to_string(),
                    success: true,
                }
            }
            Err(e) => {
                log_error(&format!("Auth submit failed: {}", e));
                AuthMessage {
                    text: "Something went wrong. Please try again.".to_string(),
                    success: false,
                }
            }
        });
        self.loading = false;
    }

    /// After a successful signup, flip to the login tab once the redirect
    /// delay has passed. The success message stays visible.
    pub fn tick(&mut self, now: Instant) {
        if let Some(at) = self.redirect_at {
            if now >= at {
                self.redirect_at = None;
                self.mode = AuthMode::Login;
                if !self.mode.fields().contains(&self.focus) {
                    self.focus = AuthField::Email;
                }
            }
        }
    }
}
