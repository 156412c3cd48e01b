use anyhow::Result;
use log::{error, info};

use std::process;

use petstore_suite::{run_suite, scenarios, Config, Harness};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();
    let harness = Harness::new(config)?;
    let report = run_suite(&harness, &scenarios::suite(harness.config())).await;

    info!("results:\n{}", report);
    if !report.is_success() {
        error!(
            "{} of {} scenarios did not pass",
            report.failed() + report.errored(),
            report.scenarios.len()
        );
        process::exit(1);
    }
    Ok(())
}
