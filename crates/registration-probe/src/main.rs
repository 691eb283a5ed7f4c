//! Registration probe - Entry point.

use registration_probe::{
    app,
    config::{Config, ProbeMode},
    report, AppError,
};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log.level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!(mode = ?config.probe.mode, "Starting registration probe");

    let target = match config.probe.mode {
        ProbeMode::Offline => "local contract".to_string(),
        _ => config.server.addr(),
    };
    let title = match config.probe.mode {
        ProbeMode::Full => "Registration scenario suite",
        ProbeMode::Quick => "Quick registration check",
        ProbeMode::Offline => "Registration scenario suite (offline)",
    };
    println!("{}", report::render_banner(title, &target));

    let summary = match app::run(&config).await {
        Ok(s) => s,
        Err(AppError::ServerUnavailable(addr)) => {
            error!(%addr, "Registration server is not listening");
            eprintln!("Start the registration server on {} and try again.", addr);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Probe failed: {}", e);
            std::process::exit(1);
        }
    };

    report::print_summary(&summary);

    if config.probe.mode == ProbeMode::Quick {
        if let Some(Ok(response)) = summary.outcomes.first().map(|o| &o.result) {
            println!("{}", report::render_response(response));
        }
    }

    std::process::exit(summary.exit_code());
}
