//! Request evaluation and wire codec.

use crate::error::{ContractError, ValidationFailure};
use crate::rules::{check_email, check_password, check_phone, check_username, ValidationRules};
use crate::types::{RegistrationRequest, RegistrationResponse, REGISTER_REQUEST_TYPE};

/// Run every rule in form order and stop at the first failure.
pub fn validate(
    rules: &ValidationRules,
    request: &RegistrationRequest,
) -> Result<(), ValidationFailure> {
    check_username(rules, &request.username)?;
    check_password(rules, &request.password)?;

    if let Some(email) = request.provided_email() {
        check_email(email)?;
    }

    if let Some(phone) = request.provided_phone() {
        check_phone(phone)?;
    }

    Ok(())
}

/// Evaluate a request into the response the contract prescribes.
pub fn evaluate(rules: &ValidationRules, request: &RegistrationRequest) -> RegistrationResponse {
    match validate(rules, request) {
        Ok(()) => RegistrationResponse::success(format!(
            "user {} registered successfully, please log in",
            request.username
        )),
        Err(failure) => RegistrationResponse::error(failure.code(), failure.to_string()),
    }
}

/// [`evaluate`] with the default thresholds.
pub fn evaluate_default(request: &RegistrationRequest) -> RegistrationResponse {
    evaluate(&ValidationRules::default(), request)
}

/// Decode a request document, rejecting other message types.
pub fn parse_request(bytes: &[u8]) -> Result<RegistrationRequest, ContractError> {
    let request: RegistrationRequest = serde_json::from_slice(bytes)?;
    if request.kind != REGISTER_REQUEST_TYPE {
        return Err(ContractError::UnexpectedType(request.kind));
    }
    Ok(request)
}

impl RegistrationResponse {
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, ContractError> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ContractError> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
