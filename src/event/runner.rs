//! Values the Actions runner exports into the step environment.

use std::env;

use camino::Utf8PathBuf;

use crate::github::ActionError;

const DEFAULT_SERVER_URL: &str = "https://github.com";
const DEFAULT_API_URL: &str = "https://api.github.com";

/// Snapshot of the `GITHUB_*` variables describing the current run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerEnvironment {
    /// Name of the event that started the workflow (`GITHUB_EVENT_NAME`).
    pub event_name: String,
    /// Path to the JSON webhook payload (`GITHUB_EVENT_PATH`).
    pub event_path: Utf8PathBuf,
    /// `owner/name` of the repository (`GITHUB_REPOSITORY`).
    pub repository: String,
    /// Login of the user that triggered the run (`GITHUB_ACTOR`).
    pub actor: String,
    /// Workflow run identifier (`GITHUB_RUN_ID`).
    pub run_id: String,
    /// Web URL of the GitHub server (`GITHUB_SERVER_URL`).
    pub server_url: String,
    /// REST API base URL (`GITHUB_API_URL`).
    pub api_url: String,
}

impl RunnerEnvironment {
    /// Reads the runner variables from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingEnvironment`] when a required variable is
    /// unset or empty.
    pub fn from_env() -> Result<Self, ActionError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads the runner variables through `lookup`.
    ///
    /// Empty values count as unset. `GITHUB_SERVER_URL` and `GITHUB_API_URL`
    /// fall back to public GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingEnvironment`] naming the first required
    /// variable that is missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ActionError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| lookup(name).filter(|value| !value.is_empty());
        let require = |name: &str| {
            read(name).ok_or_else(|| ActionError::MissingEnvironment {
                name: name.to_owned(),
            })
        };

        Ok(Self {
            event_name: require("GITHUB_EVENT_NAME")?,
            event_path: Utf8PathBuf::from(require("GITHUB_EVENT_PATH")?),
            repository: require("GITHUB_REPOSITORY")?,
            actor: require("GITHUB_ACTOR")?,
            run_id: require("GITHUB_RUN_ID")?,
            server_url: read("GITHUB_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.to_owned()),
            api_url: read("GITHUB_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_owned()),
        })
    }
}
