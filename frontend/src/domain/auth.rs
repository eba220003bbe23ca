//! Credential and registration form validation.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;

/// Login form fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Why a login form was rejected before reaching the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialsError {
    MissingFields,
}

impl fmt::Display for CredentialsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "email and password are required"),
        }
    }
}

impl std::error::Error for CredentialsError {}

impl Credentials {
    /// Require both fields to be non-blank. Password whitespace is
    /// significant and is not trimmed.
    pub fn try_new(email: &str, password: &str) -> Result<Self, CredentialsError> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err(CredentialsError::MissingFields);
        }
        Ok(Self {
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

/// Loose shape check: something at sign something dot something.
pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// At least 8 characters with an uppercase letter, a lowercase letter, and
/// a digit.
pub fn is_strong_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// Registration form fields after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registration {
    pub display_name: String,
    pub email: String,
    pub password: String,
}

/// Why a registration form was rejected. Checks run in this order and the
/// first failure wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationError {
    MissingFields,
    InvalidEmail,
    WeakPassword,
    PasswordMismatch,
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingFields => write!(f, "required registration fields are blank"),
            Self::InvalidEmail => write!(f, "email address is malformed"),
            Self::WeakPassword => write!(f, "password does not meet the strength rules"),
            Self::PasswordMismatch => write!(f, "passwords do not match"),
        }
    }
}

impl std::error::Error for RegistrationError {}

impl RegistrationError {
    /// Symbolic code carried on the redirect back to the register form.
    pub fn redirect_code(self) -> &'static str {
        match self {
            Self::MissingFields => "missing-fields",
            Self::InvalidEmail => "invalid-email",
            Self::WeakPassword => "weak-password",
            Self::PasswordMismatch => "password-mismatch",
        }
    }
}

impl Registration {
    /// Validate raw register form fields.
    pub fn try_new(
        display_name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, RegistrationError> {
        let display_name = display_name.trim();
        let email = email.trim();
        if display_name.is_empty()
            || email.is_empty()
            || password.is_empty()
            || confirm_password.is_empty()
        {
            return Err(RegistrationError::MissingFields);
        }
        if !is_valid_email(email) {
            return Err(RegistrationError::InvalidEmail);
        }
        if !is_strong_password(password) {
            return Err(RegistrationError::WeakPassword);
        }
        if password != confirm_password {
            return Err(RegistrationError::PasswordMismatch);
        }
        Ok(Self {
            display_name: display_name.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        })
    }
}
