//! Action entrypoint: detect the trigger phrase and acknowledge it.

use std::env;
use std::process::ExitCode;

use ortho_config::OrthoConfig;
use pr_trigger::action::{self, report_failure};
use pr_trigger::{
    ActionError, InvocationContext, OctocrabGateway, RunnerEnvironment, RunnerOutputs,
    TriggerConfig,
};

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(error) = pr_trigger::logging::init() {
        report_failure(&error);
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_failure(&error);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), ActionError> {
    let settings = load_config()?.resolve()?;

    let runner = RunnerEnvironment::from_env()?;
    let context = InvocationContext::from_runner(&runner)?;
    let outputs = RunnerOutputs::from_env();

    action::run(&settings, &context, &outputs, OctocrabGateway::for_token).await?;
    Ok(())
}

/// Loads configuration from CLI, environment, files, and action inputs.
///
/// # Errors
///
/// Returns [`ActionError::Configuration`] when ortho-config fails to parse
/// arguments or load configuration files.
fn load_config() -> Result<TriggerConfig, ActionError> {
    TriggerConfig::load()
        .map(|config| config.with_action_inputs(|name| env::var(name).ok()))
        .map_err(|error| ActionError::Configuration {
            message: error.to_string(),
        })
}
