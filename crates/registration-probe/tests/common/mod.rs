//! Common test utilities for integration tests.

use registration_client::{ClientError, RegistrationTransport};
use registration_contract::{
    evaluate_default, parse_request, RegistrationRequest, RegistrationResponse,
};
use registration_probe::config::Config;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

mockall::mock! {
    pub Transport {}

    #[async_trait::async_trait]
    impl RegistrationTransport for Transport {
        async fn submit(
            &self,
            request: &RegistrationRequest,
        ) -> Result<RegistrationResponse, ClientError>;

        fn describe(&self) -> String;
    }
}

/// Start a server that answers `connections` requests using the contract.
pub async fn start_contract_server(connections: usize) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap().to_string();

    let handle = tokio::spawn(async move {
        for _ in 0..connections {
            let (mut stream, _) = listener.accept().await.unwrap();

            let mut buf = Vec::new();
            let mut chunk = [0u8; 1024];
            let request = loop {
                let n = stream.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break None;
                }
                buf.extend_from_slice(&chunk[..n]);
                if let Ok(request) = parse_request(&buf) {
                    break Some(request);
                }
            };

            // Probe connections close without sending anything
            if let Some(request) = request {
                let body = evaluate_default(&request).to_json_bytes().unwrap();
                stream.write_all(&body).await.unwrap();
            }
        }
    });

    (addr, handle)
}

/// Configuration pointing at `addr` with no pauses between cases.
pub fn test_config(addr: &str, mode: &str) -> Config {
    let (host, port) = addr.rsplit_once(':').unwrap();
    let builder = config::Config::builder()
        .set_override("server.host", host)
        .unwrap()
        .set_override("server.port", port)
        .unwrap()
        .set_override("server.timeout", "2s")
        .unwrap()
        .set_override("probe.mode", mode)
        .unwrap()
        .set_override("probe.pause", "0s")
        .unwrap();

    Config::from_builder(builder).unwrap()
}
