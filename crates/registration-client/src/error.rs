//! Registration client errors.

use registration_contract::ContractError;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No response within {0:?}")]
    Timeout(Duration),

    #[error("Connection refused by {0}")]
    ConnectionRefused(String),

    #[error("Malformed payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Server closed the connection without a response")]
    EmptyResponse,

    #[error("Unexpected response type: {0}")]
    UnexpectedType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ContractError> for ClientError {
    fn from(err: ContractError) -> Self {
        match err {
            ContractError::MalformedPayload(e) => ClientError::MalformedPayload(e),
            ContractError::UnexpectedType(kind) => ClientError::UnexpectedType(kind),
        }
    }
}
