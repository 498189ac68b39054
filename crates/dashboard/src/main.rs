use std::process::ExitCode;

use stocktrack_dashboard::{DashboardConfig, JsonFileSource, MockInventorySource, Screen, run_cycle};

fn main() -> ExitCode {
    stocktrack_observability::init(DashboardConfig::log_format_from_env());

    match run() {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "dashboard failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<String> {
    let mut config = DashboardConfig::from_env();

    // First CLI argument overrides the configured screen.
    if let Some(arg) = std::env::args().nth(1) {
        config.screen = arg.parse::<Screen>()?;
    }

    let output = match &config.data_file {
        Some(path) => {
            tracing::info!(path = %path.display(), "using inventory file");
            run_cycle(&config, &JsonFileSource::new(path))?
        }
        None => run_cycle(&config, &MockInventorySource)?,
    };
    Ok(output)
}
