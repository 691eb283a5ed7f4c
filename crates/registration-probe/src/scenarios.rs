//! Built-in registration scenarios.

use chrono::{DateTime, Utc};
use registration_contract::{RegistrationRequest, ResponseStatus};

/// Password every scenario uses unless it tests the password itself.
pub const VALID_PASSWORD: &str = "Pass1234";

/// A named request and the status the server should answer with.
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: String,
    pub request: RegistrationRequest,
    pub expected: ResponseStatus,
}

impl Scenario {
    pub fn new(
        name: impl Into<String>,
        request: RegistrationRequest,
        expected: ResponseStatus,
    ) -> Self {
        Self {
            name: name.into(),
            request,
            expected,
        }
    }
}

/// Suffix for suite usernames: Unix seconds modulo 10000.
pub fn suite_suffix(now: DateTime<Utc>) -> u32 {
    now.timestamp().rem_euclid(10_000) as u32
}

/// Suffix for the quick probe: Unix milliseconds modulo 1000000.
pub fn quick_suffix(now: DateTime<Utc>) -> u32 {
    now.timestamp_millis().rem_euclid(1_000_000) as u32
}

fn blank(username: impl Into<String>, password: &str) -> RegistrationRequest {
    RegistrationRequest::new(username, password)
        .with_email("")
        .with_phone("")
        .with_grade("")
        .with_major("")
}

/// The full suite, in the order it is run.
pub fn full_suite(suffix: u32) -> Vec<Scenario> {
    let fresh_user = format!("user{}", suffix);

    vec![
        Scenario::new(
            format!("normal registration (username: test{})", suffix),
            RegistrationRequest::new(format!("test{}", suffix), VALID_PASSWORD)
                .with_email(format!("test{}@example.com", suffix))
                .with_phone("13800138000")
                .with_grade("2023")
                .with_major("Computer Science and Technology"),
            ResponseStatus::Success,
        ),
        Scenario::new(
            "username too short (under 4 characters)",
            blank("abc", VALID_PASSWORD),
            ResponseStatus::Error,
        ),
        Scenario::new(
            "username too long (over 20 characters)",
            blank("a".repeat(25), VALID_PASSWORD),
            ResponseStatus::Error,
        ),
        Scenario::new(
            "password too short (under 8 characters)",
            blank(fresh_user.clone(), "pass123"),
            ResponseStatus::Error,
        ),
        Scenario::new(
            "password digits only (no letters)",
            blank(fresh_user.clone(), "12345678"),
            ResponseStatus::Error,
        ),
        Scenario::new(
            "malformed email",
            blank(fresh_user.clone(), VALID_PASSWORD).with_email("invalid-email"),
            ResponseStatus::Error,
        ),
        Scenario::new(
            "malformed phone number",
            blank(fresh_user, VALID_PASSWORD).with_phone("12345"),
            ResponseStatus::Error,
        ),
    ]
}

/// A single registration that should always succeed on a healthy server.
pub fn quick_case(suffix: u32) -> Scenario {
    let username = format!("user{}", suffix);

    Scenario::new(
        format!("quick registration (username: {})", username),
        RegistrationRequest::new(username, VALID_PASSWORD)
            .with_email("test@example.com")
            .with_phone("13800138000")
            .with_grade("2023")
            .with_major("Computer Science and Technology"),
        ResponseStatus::Success,
    )
}
