//! Wire types for the registration exchange.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminator carried by every registration request.
pub const REGISTER_REQUEST_TYPE: &str = "RegisterType";

/// Discriminator carried by every registration response.
pub const REGISTER_RESPONSE_TYPE: &str = "RegisterResponse";

/// Role text sent when the caller does not choose one.
pub const DEFAULT_ROLE: &str = "student";

/// Request to create a new user account.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    /// Always "RegisterType".
    #[serde(rename = "type", default = "default_request_type")]
    pub kind: String,

    pub username: String,

    pub password: String,

    /// Empty or missing means "not provided"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Empty or missing means "not provided"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub major: Option<String>,

    #[serde(default = "default_role")]
    pub role: String,
}

impl RegistrationRequest {
    /// Create a request with only the mandatory credentials set.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            kind: default_request_type(),
            username: username.into(),
            password: password.into(),
            email: None,
            phone: None,
            grade: None,
            major: None,
            role: default_role(),
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    pub fn with_grade(mut self, grade: impl Into<String>) -> Self {
        self.grade = Some(grade.into());
        self
    }

    pub fn with_major(mut self, major: impl Into<String>) -> Self {
        self.major = Some(major.into());
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }

    /// Email, if one was actually provided.
    pub fn provided_email(&self) -> Option<&str> {
        non_empty(self.email.as_deref())
    }

    /// Phone number, if one was actually provided.
    pub fn provided_phone(&self) -> Option<&str> {
        non_empty(self.phone.as_deref())
    }

    /// Parsed role. Anything other than "admin" is a student.
    pub fn role(&self) -> Role {
        Role::parse(&self.role)
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("kind", &self.kind)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("grade", &self.grade)
            .field("major", &self.major)
            .field("role", &self.role)
            .finish()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn default_request_type() -> String {
    REGISTER_REQUEST_TYPE.into()
}

fn default_role() -> String {
    DEFAULT_ROLE.into()
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Admin,
}

impl Role {
    pub fn parse(text: &str) -> Self {
        if text == "admin" {
            Role::Admin
        } else {
            Role::Student
        }
    }
}

/// Outcome of a registration attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResponseStatus::Success => "success",
            ResponseStatus::Error => "error",
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric outcome codes shared with the registration server.
///
/// `UsernameExists`, `EmailExists` and `DatabaseError` are only ever sent by
/// a server with a user store; validation maps its failures to 3..=6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum RegisterErrorCode {
    #[default]
    Success = 0,
    UsernameExists = 1,
    EmailExists = 2,
    InvalidUsername = 3,
    InvalidPassword = 4,
    InvalidEmail = 5,
    InvalidPhone = 6,
    DatabaseError = 7,
}

impl RegisterErrorCode {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Some(match code {
            0 => Self::Success,
            1 => Self::UsernameExists,
            2 => Self::EmailExists,
            3 => Self::InvalidUsername,
            4 => Self::InvalidPassword,
            5 => Self::InvalidEmail,
            6 => Self::InvalidPhone,
            7 => Self::DatabaseError,
            _ => return None,
        })
    }
}

/// Response to a registration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    /// Always "RegisterResponse" when produced by the contract.
    #[serde(rename = "type")]
    pub kind: String,

    pub status: ResponseStatus,

    pub message: String,

    /// Raw code; see [`RegisterErrorCode`]
    #[serde(default)]
    pub error_code: i64,

    /// Id of the newly created account, if the server reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl RegistrationResponse {
    /// Build a success response.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: REGISTER_RESPONSE_TYPE.into(),
            status: ResponseStatus::Success,
            message: message.into(),
            error_code: RegisterErrorCode::Success.code(),
            user_id: None,
        }
    }

    /// Build an error response.
    pub fn error(code: RegisterErrorCode, message: impl Into<String>) -> Self {
        Self {
            kind: REGISTER_RESPONSE_TYPE.into(),
            status: ResponseStatus::Error,
            message: message.into(),
            error_code: code.code(),
            user_id: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Typed error code, or `None` if the peer sent an unknown value.
    pub fn error_code(&self) -> Option<RegisterErrorCode> {
        RegisterErrorCode::from_code(self.error_code)
    }
}
