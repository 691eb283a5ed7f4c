//! Registration probe - checks a registration server against the contract.
//!
//! Runs a fixed set of registration scenarios over TCP (or in-process,
//! offline) and reports which ones got the expected status back.

pub mod app;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod scenarios;

pub use config::{Config, ProbeMode};
pub use error::{AppError, AppResult};
pub use runner::{CaseOutcome, RunSummary, SuiteRunner};
pub use scenarios::Scenario;
