//! Registration validation contract.
//!
//! Decides whether a registration request is acceptable and builds the
//! response the server is expected to send back:
//! - Username length (and optionally charset)
//! - Password length and composition
//! - Email and phone shape, only when provided
//!
//! Rules run in form order and the first failure determines the message.

mod contract;
mod error;
mod rules;
mod types;

pub use contract::{evaluate, evaluate_default, parse_request, validate};
pub use error::{ContractError, ValidationFailure};
pub use rules::{
    check_email, check_password, check_phone, check_username, ValidationRules, MAX_USERNAME_LEN,
    MIN_PASSWORD_LEN, MIN_USERNAME_LEN,
};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> RegistrationRequest {
        RegistrationRequest::new("test001", "Pass1234")
            .with_email("")
            .with_phone("")
    }

    #[test]
    fn test_valid_request_succeeds() {
        let response = evaluate_default(&valid_request());

        assert_eq!(response.kind, REGISTER_RESPONSE_TYPE);
        assert_eq!(response.status, ResponseStatus::Success);
        assert_eq!(response.error_code(), Some(RegisterErrorCode::Success));
        assert!(response.message.contains("test001"));
    }

    #[test]
    fn test_valid_request_with_contact_details() {
        let request = RegistrationRequest::new("user4821", "Pass1234")
            .with_email("user4821@example.com")
            .with_phone("13800138000")
            .with_grade("2023")
            .with_major("Computer Science");

        assert!(evaluate_default(&request).is_success());
    }

    #[test]
    fn test_short_username_fails() {
        let request = RegistrationRequest::new("abc", "Pass1234");
        let response = evaluate_default(&request);

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error_code(), Some(RegisterErrorCode::InvalidUsername));
        assert_eq!(response.message, "username must be between 4 and 20 characters");
    }

    #[test]
    fn test_long_username_fails() {
        let request = RegistrationRequest::new("a".repeat(25), "Pass1234");
        let response = evaluate_default(&request);

        assert_eq!(response.status, ResponseStatus::Error);
        assert!(response.message.contains("username"));
    }

    #[test]
    fn test_username_error_wins_over_every_other_field() {
        let request = RegistrationRequest::new("ab", "1")
            .with_email("invalid-email")
            .with_phone("12345");

        assert_eq!(
            validate(&ValidationRules::default(), &request),
            Err(ValidationFailure::UsernameLength { min: 4, max: 20 })
        );
    }

    #[test]
    fn test_empty_username_fails_length_rule() {
        let request = RegistrationRequest::new("", "Pass1234");
        assert!(matches!(
            validate(&ValidationRules::default(), &request),
            Err(ValidationFailure::UsernameLength { .. })
        ));
    }

    #[test]
    fn test_short_password_fails_before_composition() {
        let request = RegistrationRequest::new("user1234", "pass123");
        let response = evaluate_default(&request);

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error_code(), Some(RegisterErrorCode::InvalidPassword));
        assert_eq!(response.message, "password must be at least 8 characters");
    }

    #[test]
    fn test_empty_password_fails_length_rule() {
        let request = RegistrationRequest::new("user1234", "");
        assert_eq!(
            validate(&ValidationRules::default(), &request),
            Err(ValidationFailure::PasswordLength { min: 8 })
        );
    }

    #[test]
    fn test_digit_only_password_fails() {
        let request = RegistrationRequest::new("user1234", "12345678");
        let response = evaluate_default(&request);

        assert_eq!(response.status, ResponseStatus::Error);
        assert!(response.message.contains("letter"));
    }

    #[test]
    fn test_invalid_email_fails() {
        let request = RegistrationRequest::new("user1234", "Pass1234").with_email("invalid-email");
        let response = evaluate_default(&request);

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error_code(), Some(RegisterErrorCode::InvalidEmail));
        assert!(response.message.contains("email"));
    }

    #[test]
    fn test_invalid_phone_fails() {
        let request = RegistrationRequest::new("user1234", "Pass1234").with_phone("12345");
        let response = evaluate_default(&request);

        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error_code(), Some(RegisterErrorCode::InvalidPhone));
        assert!(response.message.contains("phone"));
    }

    #[test]
    fn test_email_checked_before_phone() {
        let request = RegistrationRequest::new("user1234", "Pass1234")
            .with_email("nope")
            .with_phone("12345");

        assert_eq!(
            validate(&ValidationRules::default(), &request),
            Err(ValidationFailure::EmailFormat)
        );
    }

    #[test]
    fn test_missing_and_empty_contacts_are_skipped() {
        let missing = RegistrationRequest::new("user1234", "Pass1234");
        assert!(evaluate_default(&missing).is_success());
        assert!(evaluate_default(&valid_request()).is_success());
    }

    #[test]
    fn test_every_length_in_range_passes() {
        for len in MIN_USERNAME_LEN..=MAX_USERNAME_LEN {
            let request = RegistrationRequest::new("u".repeat(len), "Pass1234");
            assert!(evaluate_default(&request).is_success(), "length {}", len);
        }
    }

    #[test]
    fn test_strict_rules_reject_bad_charset() {
        let request = RegistrationRequest::new("user-name", "Pass1234");

        assert!(evaluate_default(&request).is_success());

        let response = evaluate(&ValidationRules::strict(), &request);
        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error_code(), Some(RegisterErrorCode::InvalidUsername));
    }

    #[test]
    fn test_custom_thresholds() {
        let rules = ValidationRules {
            min_password_len: 12,
            ..ValidationRules::default()
        };
        let request = RegistrationRequest::new("user1234", "Pass1234");

        let response = evaluate(&rules, &request);
        assert_eq!(response.message, "password must be at least 12 characters");
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let requests = [
            valid_request(),
            RegistrationRequest::new("abc", "Pass1234"),
            RegistrationRequest::new("user1234", "Pass1234").with_phone("12345"),
        ];

        for request in &requests {
            assert_eq!(evaluate_default(request), evaluate_default(request));
        }
    }

    #[test]
    fn test_request_serialization() {
        let request = RegistrationRequest::new("test001", "Pass1234")
            .with_email("test@example.com")
            .with_phone("13800138000");

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"type\":\"RegisterType\""));
        assert!(json.contains("\"username\":\"test001\""));
        assert!(json.contains("\"role\":\"student\""));
        assert!(!json.contains("grade"));
    }

    #[test]
    fn test_request_deserialization_with_missing_optionals() {
        let json = r#"{"type": "RegisterType", "username": "abcd", "password": "Pass1234"}"#;

        let request = parse_request(json.as_bytes()).unwrap();
        assert_eq!(request.username, "abcd");
        assert!(request.email.is_none());
        assert_eq!(request.role(), Role::Student);
    }

    #[test]
    fn test_parse_request_rejects_other_types() {
        let json = r#"{"type": "LoginType", "username": "abcd", "password": "x"}"#;

        let result = parse_request(json.as_bytes());
        assert!(matches!(result, Err(ContractError::UnexpectedType(t)) if t == "LoginType"));
    }

    #[test]
    fn test_parse_request_rejects_garbage() {
        let result = parse_request(b"{not json");
        assert!(matches!(result, Err(ContractError::MalformedPayload(_))));
    }

    #[test]
    fn test_role_parsing() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("student"), Role::Student);
        assert_eq!(Role::parse("teacher"), Role::Student);
        assert_eq!(Role::parse(""), Role::Student);
    }

    #[test]
    fn test_request_debug_redacts_password() {
        let request = RegistrationRequest::new("test001", "Pass1234");
        let debug = format!("{:?}", request);

        assert!(debug.contains("test001"));
        assert!(!debug.contains("Pass1234"));
    }

    #[test]
    fn test_response_serialization() {
        let response = RegistrationResponse::error(RegisterErrorCode::InvalidPhone, "bad phone");

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"type\":\"RegisterResponse\""));
        assert!(json.contains("\"status\":\"error\""));
        assert!(json.contains("\"error_code\":6"));
        assert!(!json.contains("user_id"));
    }

    #[test]
    fn test_response_deserialization_from_server() {
        let json = r#"{
            "type": "RegisterResponse",
            "status": "success",
            "error_code": 0,
            "message": "ok",
            "user_id": 17
        }"#;

        let response = RegistrationResponse::from_json_slice(json.as_bytes()).unwrap();
        assert!(response.is_success());
        assert_eq!(response.user_id, Some(17));
    }

    #[test]
    fn test_response_deserialization_without_code() {
        let json = r#"{"type": "RegisterResponse", "status": "error", "message": "no"}"#;

        let response = RegistrationResponse::from_json_slice(json.as_bytes()).unwrap();
        assert_eq!(response.status, ResponseStatus::Error);
        assert_eq!(response.error_code, 0);
    }

    #[test]
    fn test_response_with_unknown_code_still_parses() {
        for code in [-1_i64, 300] {
            let json = serde_json::json!({
                "type": "RegisterResponse",
                "status": "error",
                "message": "no",
                "error_code": code
            });

            let bytes = serde_json::to_vec(&json).unwrap();
            let response = RegistrationResponse::from_json_slice(&bytes).unwrap();
            assert_eq!(response.status, ResponseStatus::Error);
            assert_eq!(response.error_code, code);
            assert_eq!(response.error_code(), None);
        }
    }

    #[test]
    fn test_error_code_round_trip_table() {
        assert_eq!(RegisterErrorCode::from_code(1), Some(RegisterErrorCode::UsernameExists));
        assert_eq!(RegisterErrorCode::from_code(7), Some(RegisterErrorCode::DatabaseError));
        assert_eq!(RegisterErrorCode::from_code(8), None);
    }
}
