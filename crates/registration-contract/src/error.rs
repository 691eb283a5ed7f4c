//! Contract error types.

use crate::types::RegisterErrorCode;
use thiserror::Error;

/// First validation rule a request failed.
///
/// The `Display` text is sent back verbatim as the response message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationFailure {
    #[error("username must be between {min} and {max} characters")]
    UsernameLength { min: usize, max: usize },

    #[error("username must start with a letter and contain only letters, digits and underscores")]
    UsernameCharset,

    #[error("password must be at least {min} characters")]
    PasswordLength { min: usize },

    #[error("password must contain at least one letter and one digit")]
    PasswordComposition,

    #[error("email address format is invalid")]
    EmailFormat,

    #[error("phone number must be an 11-digit mobile number")]
    PhoneFormat,
}

impl ValidationFailure {
    /// Code reported alongside the message.
    pub fn code(&self) -> RegisterErrorCode {
        match self {
            ValidationFailure::UsernameLength { .. } | ValidationFailure::UsernameCharset => {
                RegisterErrorCode::InvalidUsername
            }
            ValidationFailure::PasswordLength { .. } | ValidationFailure::PasswordComposition => {
                RegisterErrorCode::InvalidPassword
            }
            ValidationFailure::EmailFormat => RegisterErrorCode::InvalidEmail,
            ValidationFailure::PhoneFormat => RegisterErrorCode::InvalidPhone,
        }
    }
}

/// Wire codec errors.
#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Unexpected message type: {0}")]
    UnexpectedType(String),
}
