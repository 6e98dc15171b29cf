//! Action inputs loaded from the runner environment, CLI, and files.
//!
//! The Actions runner exports every `with:` input as an `INPUT_<NAME>`
//! environment variable holding raw text. Those are read verbatim (trimmed,
//! empty meaning unset) and laid over an ortho-config layer so that the
//! binary can also be driven by hand.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – every input unset
//! 2. **Configuration file** – `.pr-trigger.toml` in the current directory,
//!    home directory, or XDG config directory
//! 3. **Environment variables** – `PR_TRIGGER_TRIGGER`, `PR_TRIGGER_REACTION`,
//!    `PR_TRIGGER_PREFIX_ONLY`, `PR_TRIGGER_TOKEN`
//! 4. **Command-line arguments** – `--trigger`, `--reaction`,
//!    `--prefix-only`, `--token`
//! 5. **Action inputs** – `INPUT_TRIGGER`, `INPUT_REACTION`,
//!    `INPUT_PREFIX_ONLY`, `INPUT_TOKEN`
//!
//! The credential additionally falls back to `GITHUB_TOKEN`.

use std::env;

use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};

use crate::github::{ActionError, PersonalAccessToken, Reaction};
use crate::trigger::MatchMode;

/// Raw action inputs.
///
/// Unset inputs reach the step as empty strings, so every accessor treats an
/// empty value the same as a missing one.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use pr_trigger::TriggerConfig;
///
/// let config = TriggerConfig::load()
///     .expect("failed to load configuration")
///     .with_action_inputs(|name| std::env::var(name).ok());
/// let settings = config.resolve().expect("inputs should be valid");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "PR_TRIGGER",
    discovery(
        dotfile_name = ".pr-trigger.toml",
        config_file_name = "pr-trigger.toml",
        app_name = "pr-trigger"
    )
)]
pub struct TriggerConfig {
    /// Phrase that fires the trigger. Required.
    ///
    /// Can be provided via:
    /// - Action input: `trigger` (`INPUT_TRIGGER`)
    /// - CLI: `--trigger <PHRASE>`
    /// - Environment: `PR_TRIGGER_TRIGGER`
    #[ortho_config()]
    pub trigger: Option<String>,

    /// Reaction to attach to the triggering comment or pull request.
    ///
    /// Can be provided via:
    /// - Action input: `reaction` (`INPUT_REACTION`)
    /// - CLI: `--reaction <TOKEN>`
    /// - Environment: `PR_TRIGGER_REACTION`
    #[ortho_config()]
    pub reaction: Option<String>,

    /// `"true"` restricts matching to the start of the body. Any other value
    /// matches anywhere.
    ///
    /// Kept as a string because the runner passes every input as text. Set
    /// it through the action input or a config file; ortho-config reads a
    /// bare `true` from `PR_TRIGGER_PREFIX_ONLY` as a boolean.
    #[ortho_config()]
    pub prefix_only: Option<String>,

    /// Token used to post the acknowledgement.
    ///
    /// Can be provided via:
    /// - Action input: `token` (`INPUT_TOKEN`)
    /// - CLI: `--token <TOKEN>`
    /// - Environment: `PR_TRIGGER_TOKEN`, falling back to `GITHUB_TOKEN`
    #[ortho_config()]
    pub token: Option<String>,
}

/// Validated inputs used for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSettings {
    /// Phrase matched against the lower-cased body, exactly as configured.
    pub trigger: String,
    /// Prefix or substring matching.
    pub match_mode: MatchMode,
    /// Reaction to attach once the acknowledgement is posted.
    pub reaction: Option<Reaction>,
    /// Credential for the notification calls.
    pub token: Option<PersonalAccessToken>,
}

/// Action input names as the workflow spells them in `with:`.
const ACTION_INPUTS: [&str; 4] = ["trigger", "reaction", "prefix_only", "token"];

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.is_empty())
}

/// Environment variable the runner uses for an input name.
fn input_variable(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

impl TriggerConfig {
    /// Lays the runner's `INPUT_*` variables over this configuration.
    ///
    /// Values are trimmed. Inputs the runner left empty do not override
    /// values from other sources.
    #[must_use]
    pub fn with_action_inputs<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for name in ACTION_INPUTS {
            let Some(value) = lookup(&input_variable(name))
                .map(|raw| raw.trim().to_owned())
                .filter(|value| !value.is_empty())
            else {
                continue;
            };
            let slot = match name {
                "trigger" => &mut self.trigger,
                "reaction" => &mut self.reaction,
                "prefix_only" => &mut self.prefix_only,
                _ => &mut self.token,
            };
            *slot = Some(value);
        }
        self
    }

    /// Returns the trigger phrase.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] when the input is absent and
    /// [`ActionError::EmptyTrigger`] when it is an empty string.
    pub fn require_trigger(&self) -> Result<&str, ActionError> {
        match self.trigger.as_deref() {
            None => Err(ActionError::MissingInput {
                name: "trigger".to_owned(),
            }),
            Some("") => Err(ActionError::EmptyTrigger),
            Some(phrase) => Ok(phrase),
        }
    }

    /// Returns the reaction input when it is set and non-empty.
    #[must_use]
    pub fn reaction(&self) -> Option<&str> {
        non_empty(self.reaction.as_deref())
    }

    /// Whether only a prefix match fires the trigger.
    #[must_use]
    pub fn prefix_only(&self) -> bool {
        self.prefix_only.as_deref() == Some("true")
    }

    /// Resolves the token from configuration or the `GITHUB_TOKEN`
    /// environment variable. Blank values count as unset.
    #[must_use]
    pub fn resolve_token(&self) -> Option<String> {
        self.token
            .as_deref()
            .filter(|token| !token.trim().is_empty())
            .map(ToOwned::to_owned)
            .or_else(|| {
                env::var("GITHUB_TOKEN")
                    .ok()
                    .filter(|token| !token.trim().is_empty())
            })
    }

    /// Validates the inputs and produces the settings for a run.
    ///
    /// The reaction/credential check runs before the reaction token itself
    /// is validated.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::MissingInput`] or [`ActionError::EmptyTrigger`]
    /// for a bad trigger, [`ActionError::ReactionRequiresToken`] when a
    /// reaction is requested without a credential, and
    /// [`ActionError::InvalidReaction`] for an unknown reaction token.
    pub fn resolve(&self) -> Result<TriggerSettings, ActionError> {
        let trigger = self.require_trigger()?.to_owned();
        let token = self
            .resolve_token()
            .map(PersonalAccessToken::new)
            .transpose()?;

        let reaction = match self.reaction() {
            Some(_) if token.is_none() => return Err(ActionError::ReactionRequiresToken),
            Some(value) => Some(value.parse::<Reaction>()?),
            None => None,
        };

        let match_mode = if self.prefix_only() {
            MatchMode::Prefix
        } else {
            MatchMode::Substring
        };

        Ok(TriggerSettings {
            trigger,
            match_mode,
            reaction,
            token,
        })
    }
}

#[cfg(test)]
mod tests;
