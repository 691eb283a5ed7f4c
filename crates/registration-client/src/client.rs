//! TCP registration client.

use crate::error::ClientError;
use crate::transport::RegistrationTransport;
use async_trait::async_trait;
use registration_contract::{RegistrationRequest, RegistrationResponse, REGISTER_RESPONSE_TYPE};
use std::io::ErrorKind;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tracing::{debug, instrument, warn};

/// Default bound on a whole request/response exchange.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default bound on a listening probe.
pub const DEFAULT_PROBE_TIMEOUT: Duration = Duration::from_secs(1);

/// Sends one registration request per connection.
#[derive(Debug, Clone)]
pub struct RegistrationClient {
    addr: String,
    timeout: Duration,
    probe_timeout: Duration,
}

impl RegistrationClient {
    /// Create a new client for `host:port`.
    pub fn new(addr: impl Into<String>, timeout: Duration) -> Self {
        Self {
            addr: addr.into(),
            timeout,
            probe_timeout: DEFAULT_PROBE_TIMEOUT,
        }
    }

    pub fn with_probe_timeout(mut self, probe_timeout: Duration) -> Self {
        self.probe_timeout = probe_timeout;
        self
    }

    pub fn addr(&self) -> &str {
        &self.addr
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Check whether anything accepts connections at the address.
    pub async fn is_listening(&self) -> bool {
        matches!(
            timeout(self.probe_timeout, TcpStream::connect(&self.addr)).await,
            Ok(Ok(_))
        )
    }

    /// Send a request and wait for the server to answer and close.
    #[instrument(skip(self, request), fields(addr = %self.addr, username = %request.username))]
    pub async fn submit(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ClientError> {
        let payload = serde_json::to_vec(request)?;
        debug!(bytes = payload.len(), "Sending registration request");

        let body = timeout(self.timeout, self.exchange(&payload))
            .await
            .map_err(|_| {
                warn!(timeout = ?self.timeout, "Registration exchange timed out");
                ClientError::Timeout(self.timeout)
            })??;

        if body.is_empty() {
            return Err(ClientError::EmptyResponse);
        }

        let response = RegistrationResponse::from_json_slice(&body)?;
        if response.kind != REGISTER_RESPONSE_TYPE {
            return Err(ClientError::UnexpectedType(response.kind));
        }

        debug!(status = %response.status, "Received registration response");
        Ok(response)
    }

    async fn exchange(&self, payload: &[u8]) -> Result<Vec<u8>, ClientError> {
        let mut stream = TcpStream::connect(&self.addr)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::ConnectionRefused => ClientError::ConnectionRefused(self.addr.clone()),
                _ => ClientError::Io(e),
            })?;

        stream.write_all(payload).await?;
        stream.flush().await?;

        let mut body = Vec::new();
        stream.read_to_end(&mut body).await?;
        Ok(body)
    }
}

#[async_trait]
impl RegistrationTransport for RegistrationClient {
    async fn submit(
        &self,
        request: &RegistrationRequest,
    ) -> Result<RegistrationResponse, ClientError> {
        RegistrationClient::submit(self, request).await
    }

    fn describe(&self) -> String {
        format!("tcp://{}", self.addr)
    }
}
