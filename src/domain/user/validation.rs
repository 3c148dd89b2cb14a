//! Field validation for user accounts

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Errors that can occur during user field validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email cannot contain consecutive dots")]
    ConsecutiveDots,

    #[error("Email '{0}' does not match local-part@domain.tld")]
    MalformedEmail(String),

    #[error("Password is too short. Minimum length is {0} characters")]
    PasswordTooShort(usize),

    #[error("Password must contain at least one uppercase letter")]
    PasswordMissingUppercase,

    #[error("Password must contain at least one lowercase letter")]
    PasswordMissingLowercase,

    #[error("Password must contain at least one digit")]
    PasswordMissingDigit,
}

const MIN_PASSWORD_LENGTH: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9][a-zA-Z0-9._+%-]*[a-zA-Z0-9]@[a-zA-Z0-9]([a-zA-Z0-9.-]*[a-zA-Z0-9])?\.[a-zA-Z]{2,}$",
    )
    .expect("email pattern is a valid regex")
});

static DIGIT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d").expect("digit pattern is a valid regex"));

/// Validate an email address
///
/// Rules:
/// - No consecutive dots anywhere, checked before the structural match
/// - Local part of alphanumerics and `. _ + % -`, starting and ending alphanumeric
/// - Domain starting and ending alphanumeric, interior dots and hyphens allowed
/// - Alphabetic extension of at least 2 characters
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.contains("..") {
        return Err(UserValidationError::ConsecutiveDots);
    }

    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::MalformedEmail(email.to_string()));
    }

    Ok(())
}

/// Validate password strength
///
/// Rules:
/// - Minimum 8 characters, counted as chars
/// - At least one ASCII uppercase and one ASCII lowercase letter
/// - At least one decimal digit from any script (`\d`, so `'١'` counts)
pub fn validate_password(password: &str) -> Result<(), UserValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(UserValidationError::PasswordTooShort(MIN_PASSWORD_LENGTH));
    }

    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        return Err(UserValidationError::PasswordMissingUppercase);
    }

    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        return Err(UserValidationError::PasswordMissingLowercase);
    }

    if !DIGIT_PATTERN.is_match(password) {
        return Err(UserValidationError::PasswordMissingDigit);
    }

    Ok(())
}

/// Check whether an email address is well formed
pub fn is_valid_email(email: &str) -> bool {
    validate_email(email).is_ok()
}

/// Check whether a password is strong enough
pub fn is_valid_password(password: &str) -> bool {
    validate_password(password).is_ok()
}
