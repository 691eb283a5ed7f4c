//! Sequential scenario runner.

use crate::scenarios::Scenario;
use registration_client::{ClientError, RegistrationTransport};
use registration_contract::{RegistrationResponse, ResponseStatus};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

/// Result of running one scenario.
#[derive(Debug)]
pub struct CaseOutcome {
    pub name: String,
    pub expected: ResponseStatus,
    pub result: Result<RegistrationResponse, ClientError>,
}

impl CaseOutcome {
    /// A case passes when a response arrived with the expected status.
    pub fn passed(&self) -> bool {
        matches!(&self.result, Ok(response) if response.status == self.expected)
    }
}

/// Outcomes of a whole run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<CaseOutcome>,
}

impl RunSummary {
    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// Process exit code: 0 only if nothing failed.
    pub fn exit_code(&self) -> i32 {
        if self.failed() == 0 {
            0
        } else {
            1
        }
    }
}

/// Runs scenarios one after another over a transport.
pub struct SuiteRunner {
    transport: Arc<dyn RegistrationTransport>,
    pause: Duration,
}

impl SuiteRunner {
    pub fn new(transport: Arc<dyn RegistrationTransport>, pause: Duration) -> Self {
        Self { transport, pause }
    }

    /// Run a single scenario.
    pub async fn run_one(&self, scenario: &Scenario) -> CaseOutcome {
        info!(case = %scenario.name, expected = %scenario.expected, "Running case");

        let result = self.transport.submit(&scenario.request).await;
        let outcome = CaseOutcome {
            name: scenario.name.clone(),
            expected: scenario.expected,
            result,
        };

        match &outcome.result {
            Ok(response) if outcome.passed() => {
                info!(case = %outcome.name, message = %response.message, "Case passed");
            }
            Ok(response) => {
                warn!(
                    case = %outcome.name,
                    expected = %outcome.expected,
                    actual = %response.status,
                    "Case failed: status mismatch"
                );
            }
            Err(e) => {
                warn!(case = %outcome.name, error = %e, "Case failed: no response");
            }
        }

        outcome
    }

    /// Run every scenario in order, pausing before each one.
    pub async fn run(&self, scenarios: &[Scenario]) -> RunSummary {
        info!(
            cases = scenarios.len(),
            transport = %self.transport.describe(),
            "Starting run"
        );

        let mut summary = RunSummary::default();
        for scenario in scenarios {
            if !self.pause.is_zero() {
                sleep(self.pause).await;
            }
            summary.outcomes.push(self.run_one(scenario).await);
        }

        info!(
            passed = summary.passed(),
            failed = summary.failed(),
            "Run complete"
        );
        summary
    }
}
