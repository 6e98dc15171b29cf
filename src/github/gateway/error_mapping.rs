//! Maps Octocrab failures onto [`ActionError`] variants.

use http::StatusCode;

use crate::github::error::ActionError;

/// Checks if a GitHub error status indicates an authentication failure.
pub(super) const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
pub(super) const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> ActionError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let status = source.status_code;
        let message = &source.message;
        return if is_auth_failure(status) {
            ActionError::Authentication {
                message: format!("{operation} failed: GitHub returned {status} {message}"),
            }
        } else {
            ActionError::Api {
                message: format!("{operation} failed with status {status}: {message}"),
            }
        };
    }

    if is_network_error(error) {
        return ActionError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    ActionError::Api {
        message: format!("{operation} failed: {error}"),
    }
}
