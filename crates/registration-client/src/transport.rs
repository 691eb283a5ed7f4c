//! Transport abstraction over the registration exchange.

use crate::error::ClientError;
use async_trait::async_trait;
use registration_contract::{evaluate, RegistrationRequest, RegistrationResponse, ValidationRules};

/// Something that can answer a registration request.
#[async_trait]
pub trait RegistrationTransport: Send + Sync {
    /// Submit one request and return the parsed response.
    async fn submit(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ClientError>;

    /// Short label for logs and reports.
    fn describe(&self) -> String;
}

/// Answers requests by evaluating the contract in-process.
#[derive(Debug, Clone, Default)]
pub struct LocalContract {
    rules: ValidationRules,
}

impl LocalContract {
    pub fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ValidationRules {
        &self.rules
    }
}

#[async_trait]
impl RegistrationTransport for LocalContract {
    async fn submit(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ClientError> {
        Ok(evaluate(&self.rules, request))
    }

    fn describe(&self) -> String {
        "local contract".into()
    }
}
