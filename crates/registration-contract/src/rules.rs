//! Individual field rules.

use crate::error::ValidationFailure;
use once_cell::sync::Lazy;
use regex::Regex;

pub const MIN_USERNAME_LEN: usize = 4;
pub const MAX_USERNAME_LEN: usize = 20;
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$").expect("valid email pattern")
});

// Mainland mobile numbers: 1, a carrier digit 3-9, then nine digits.
static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^1[3-9][0-9]{9}$").expect("valid phone pattern"));

static USERNAME_CHARSET_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9_]*$").expect("valid username pattern"));

/// Thresholds and switches the contract evaluates against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_username_len: usize,
    pub max_username_len: usize,
    pub min_password_len: usize,
    /// Require `^[A-Za-z][A-Za-z0-9_]*$` usernames
    pub enforce_username_charset: bool,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self {
            min_username_len: MIN_USERNAME_LEN,
            max_username_len: MAX_USERNAME_LEN,
            min_password_len: MIN_PASSWORD_LEN,
            enforce_username_charset: false,
        }
    }
}

impl ValidationRules {
    /// Default thresholds plus the username charset rule.
    pub fn strict() -> Self {
        Self {
            enforce_username_charset: true,
            ..Self::default()
        }
    }
}

/// Username length, then (if enabled) charset.
pub fn check_username(rules: &ValidationRules, username: &str) -> Result<(), ValidationFailure> {
    let len = username.chars().count();
    if len < rules.min_username_len || len > rules.max_username_len {
        return Err(ValidationFailure::UsernameLength {
            min: rules.min_username_len,
            max: rules.max_username_len,
        });
    }

    if rules.enforce_username_charset && !USERNAME_CHARSET_REGEX.is_match(username) {
        return Err(ValidationFailure::UsernameCharset);
    }

    Ok(())
}

/// Password length, then composition.
pub fn check_password(rules: &ValidationRules, password: &str) -> Result<(), ValidationFailure> {
    if password.chars().count() < rules.min_password_len {
        return Err(ValidationFailure::PasswordLength {
            min: rules.min_password_len,
        });
    }

    // Number forms such as Roman numerals are alphabetic too; they count as neither
    let has_letter = password.chars().any(|c| c.is_alphabetic() && !c.is_numeric());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());
    if !(has_letter && has_digit) {
        return Err(ValidationFailure::PasswordComposition);
    }

    Ok(())
}

/// Format check for a provided (non-empty) email address.
pub fn check_email(email: &str) -> Result<(), ValidationFailure> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(ValidationFailure::EmailFormat)
    }
}

/// Format check for a provided (non-empty) phone number.
pub fn check_phone(phone: &str) -> Result<(), ValidationFailure> {
    if PHONE_REGEX.is_match(phone) {
        Ok(())
    } else {
        Err(ValidationFailure::PhoneFormat)
    }
}
