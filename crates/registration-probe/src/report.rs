//! Console report for a finished run.

use crate::runner::{CaseOutcome, RunSummary};
use registration_contract::RegistrationResponse;

const RULE: &str = "============================================================";

/// Banner printed before a run.
pub fn render_banner(title: &str, target: &str) -> String {
    format!("{RULE}\n  {title}\n  target: {target}\n{RULE}")
}

/// One block per case.
pub fn render_case(index: usize, outcome: &CaseOutcome) -> String {
    let mut out = format!("\n[{}] {}\n", index + 1, outcome.name);

    match &outcome.result {
        Ok(response) => {
            out.push_str(&format!(
                "    response: status={} code={} message={:?}\n",
                response.status, response.error_code, response.message
            ));
            if outcome.passed() {
                out.push_str(&format!("    PASS - {}", response.message));
            } else {
                out.push_str(&format!(
                    "    FAIL - expected status {}, got {}",
                    outcome.expected, response.status
                ));
            }
        }
        Err(e) => {
            out.push_str(&format!("    FAIL - no response: {}", e));
        }
    }

    out
}

/// Closing tally line.
pub fn render_summary(summary: &RunSummary) -> String {
    format!(
        "\n{RULE}\n  Done: {} passed | {} failed\n{RULE}",
        summary.passed(),
        summary.failed()
    )
}

/// Pretty JSON of a single response, as the quick probe shows it.
pub fn render_response(response: &RegistrationResponse) -> String {
    serde_json::to_string_pretty(response).unwrap_or_else(|_| format!("{:?}", response))
}

/// Print every case followed by the tally.
pub fn print_summary(summary: &RunSummary) {
    for (i, outcome) in summary.outcomes.iter().enumerate() {
        println!("{}", render_case(i, outcome));
    }
    println!("{}", render_summary(summary));
}
