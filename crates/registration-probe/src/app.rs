//! Wires configuration, transport and scenarios into a run.

use crate::config::{Config, ProbeMode};
use crate::error::{AppError, AppResult};
use crate::runner::{RunSummary, SuiteRunner};
use crate::scenarios::{full_suite, quick_case, quick_suffix, suite_suffix, Scenario};
use chrono::{DateTime, Utc};
use registration_client::{LocalContract, RegistrationClient, RegistrationTransport};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

/// Scenarios a mode runs, with usernames derived from `now`.
pub fn scenarios_for(mode: ProbeMode, now: DateTime<Utc>) -> Vec<Scenario> {
    match mode {
        ProbeMode::Full | ProbeMode::Offline => full_suite(suite_suffix(now)),
        ProbeMode::Quick => vec![quick_case(quick_suffix(now))],
    }
}

/// Pick the transport for the configured mode.
///
/// Network modes fail fast when nothing listens at the server address.
pub async fn connect(config: &Config) -> AppResult<Arc<dyn RegistrationTransport>> {
    if config.probe.mode == ProbeMode::Offline {
        info!("Offline mode, evaluating the contract in-process");
        return Ok(Arc::new(LocalContract::new(config.probe.rules())));
    }

    let addr = config.server.addr();
    let client = RegistrationClient::new(&addr, config.server.timeout)
        .with_probe_timeout(config.server.probe_timeout);

    info!(%addr, "Checking registration server");
    if !client.is_listening().await {
        error!(%addr, "Registration server is not listening");
        return Err(AppError::ServerUnavailable(addr));
    }
    info!(%addr, "Registration server is listening");

    Ok(Arc::new(client))
}

/// Run the configured mode to completion.
pub async fn run(config: &Config) -> AppResult<RunSummary> {
    let transport = connect(config).await?;

    let pause = match config.probe.mode {
        ProbeMode::Full => config.probe.pause,
        ProbeMode::Quick | ProbeMode::Offline => Duration::ZERO,
    };

    let scenarios = scenarios_for(config.probe.mode, Utc::now());
    let runner = SuiteRunner::new(transport, pause);

    Ok(runner.run(&scenarios).await)
}
