//! Error types surfaced by the action.

use thiserror::Error;

/// User-facing message for every failure that is not a configuration error.
pub const UNEXPECTED_ERROR_MESSAGE: &str = "Unexpected error";

/// Errors surfaced while resolving inputs, reading the event, or calling
/// GitHub.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ActionError {
    /// A required action input was not supplied.
    #[error("input required and not supplied: {name}")]
    MissingInput {
        /// Input name as declared by the action.
        name: String,
    },

    /// The trigger phrase was supplied but is empty.
    #[error("input \"trigger\" must not be empty")]
    EmptyTrigger,

    /// A reaction was requested without a credential to post it with.
    #[error("If \"reaction\" is supplied, GITHUB_TOKEN is required")]
    ReactionRequiresToken,

    /// The trigger fired but no credential is available for the
    /// acknowledgement comment.
    #[error("GITHUB_TOKEN is required to post the acknowledgement comment")]
    MissingToken,

    /// The reaction input is not a token GitHub accepts.
    #[error(
        "input \"reaction\" must be one of +1, -1, laugh, confused, heart, hooray, rocket, \
         eyes; got {value:?}"
    )]
    InvalidReaction {
        /// The rejected value.
        value: String,
    },

    /// Configuration could not be loaded.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// A runner-provided environment variable is missing.
    #[error("environment variable {name} is not set")]
    MissingEnvironment {
        /// Variable name.
        name: String,
    },

    /// The workflow was started by an event this action does not handle.
    #[error("unsupported event: {name}")]
    UnsupportedEvent {
        /// Event name reported by the runner.
        name: String,
    },

    /// The event payload could not be read or does not have the expected
    /// shape.
    #[error("invalid event payload: {message}")]
    InvalidEvent {
        /// Details about the payload failure.
        message: String,
    },

    /// A URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The authentication token was rejected by GitHub.
    #[error("GitHub rejected the token: {message}")]
    Authentication {
        /// GitHub error message returned with the 401/403 response.
        message: String,
    },

    /// GitHub returned a non-authentication API error.
    #[error("GitHub API error: {message}")]
    Api {
        /// Response body from GitHub describing the failure.
        message: String,
    },

    /// Networking failed while calling GitHub.
    #[error("network error talking to GitHub: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ActionError {
    /// Returns true for errors caused by how the action was configured.
    ///
    /// These are reported with their own message; every other error is
    /// reported as [`UNEXPECTED_ERROR_MESSAGE`].
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingInput { .. }
                | Self::EmptyTrigger
                | Self::ReactionRequiresToken
                | Self::InvalidReaction { .. }
                | Self::Configuration { .. }
        )
    }

    /// Message used to mark the run as failed.
    #[must_use]
    pub fn failure_message(&self) -> String {
        if self.is_configuration() {
            self.to_string()
        } else {
            UNEXPECTED_ERROR_MESSAGE.to_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{ActionError, UNEXPECTED_ERROR_MESSAGE};

    #[rstest]
    fn reaction_without_token_keeps_its_message() {
        let error = ActionError::ReactionRequiresToken;

        assert!(error.is_configuration());
        assert_eq!(
            error.failure_message(),
            "If \"reaction\" is supplied, GITHUB_TOKEN is required"
        );
    }

    #[rstest]
    #[case::api(ActionError::Api { message: "boom".to_owned() })]
    #[case::network(ActionError::Network { message: "reset".to_owned() })]
    #[case::auth(ActionError::Authentication { message: "Bad credentials".to_owned() })]
    #[case::event(ActionError::UnsupportedEvent { name: "push".to_owned() })]
    #[case::missing_token(ActionError::MissingToken)]
    fn other_errors_report_generic_message(#[case] error: ActionError) {
        assert!(!error.is_configuration(), "{error:?} should be unexpected");
        assert_eq!(error.failure_message(), UNEXPECTED_ERROR_MESSAGE);
    }
}
