use std::io;
use std::process::ExitCode;

use preflight_lib::checks::{Reporter, Validator};
use preflight_lib::config::{self, constants};
use preflight_lib::providers::HttpProviderFactory;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(constants::log_level())
        .init();

    match run().await {
        Ok(code) => code,
        Err(e) => {
            error!("Connection test aborted: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<ExitCode> {
    let settings = config::load_settings();
    info!("Loaded settings, starting connection test");

    let validator = Validator::new(settings, Box::new(HttpProviderFactory::new()));
    let mut reporter = Reporter::new(io::stdout());
    let summary = validator
        .run(&mut reporter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to write report: {}", e))?;

    Ok(ExitCode::from(summary.exit_code()))
}
