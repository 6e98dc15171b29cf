//! One complete run of the action: evaluate, record outputs, acknowledge.

use tracing::{error, info};

use crate::config::TriggerSettings;
use crate::event::InvocationContext;
use crate::github::{ActionError, NotificationGateway, PersonalAccessToken, RepositoryLocator};
use crate::notify::Notifier;
use crate::outputs::{self, OutputSink};
use crate::trigger::{Outcome, evaluate};

/// Output carrying the lower-cased body.
pub const COMMENT_BODY_OUTPUT: &str = "comment_body";
/// Output carrying `"true"` or `"false"`.
pub const TRIGGERED_OUTPUT: &str = "triggered";

/// Evaluates the trigger, writes both outputs, and posts the
/// acknowledgement when the trigger fires.
///
/// `connect` is only called once the trigger has fired, so runs that stop
/// early never touch the network.
///
/// # Errors
///
/// Returns [`ActionError::MissingToken`] when the trigger fires without a
/// credential, any error from `connect`, and the first failure from the
/// notification calls. Outputs written before a failure stay written.
pub async fn run<Sink, Gateway, Connect>(
    settings: &TriggerSettings,
    context: &InvocationContext,
    outputs: &Sink,
    connect: Connect,
) -> Result<Outcome, ActionError>
where
    Sink: OutputSink + ?Sized,
    Gateway: NotificationGateway,
    Connect: FnOnce(&PersonalAccessToken, &RepositoryLocator) -> Result<Gateway, ActionError>,
{
    let evaluation = evaluate(context, &settings.trigger, settings.match_mode);
    let outcome = evaluation.outcome;

    outputs.set_output(COMMENT_BODY_OUTPUT, &outcome.comment_body)?;
    outputs.set_output(TRIGGERED_OUTPUT, outcome.triggered_output())?;
    info!(
        event = %context.kind(),
        triggered = outcome.triggered,
        "trigger evaluated"
    );

    let Some(target) = evaluation.target else {
        return Ok(outcome);
    };

    let token = settings.token.as_ref().ok_or(ActionError::MissingToken)?;
    let gateway = connect(token, context.repository())?;
    Notifier::new(&gateway)
        .notify(context, target, settings.reaction)
        .await?;

    Ok(outcome)
}

/// Logs the failure detail and marks the step as failed.
///
/// Configuration errors are shown as-is; anything else is shown as a
/// generic message while the detail only reaches the log.
pub fn report_failure(failure: &ActionError) {
    error!(error = %failure, "action failed");
    if outputs::report_failure(&failure.failure_message()).is_err() {
        error!("failed to write the failure workflow command");
    }
}
