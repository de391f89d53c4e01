use std::process::ExitCode;

use issuebot::{ActionContext, Config, Outcome, logger};
use tracing as log;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let action = ActionContext::from_env();
    if let Err(e) = logger::init(action.ci) {
        eprintln!("failed to set up logging: {e}");
    }
    let config = Config::from_env();
    log::debug!(
        "running for {:?} in {:?}",
        action.repository,
        action.workspace
    );

    match issuebot::run(action, &config).await {
        Ok(Outcome::Skipped(reason)) => {
            log::debug!("skipped: {:?}", reason);
            ExitCode::SUCCESS
        }
        Ok(Outcome::Handled(reaction)) => {
            log::trace!("handled: {:?}", reaction);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
