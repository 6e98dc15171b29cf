//! Trigger-phrase detection for pull request descriptions and comments.
//!
//! The crate reads the event that started a GitHub Actions run, lower-cases
//! the pull request body or comment text, and checks it for a configured
//! trigger phrase. When the phrase is found it posts an acknowledgement
//! comment, and optionally a reaction, through Octocrab.

pub mod action;
pub mod config;
pub mod event;
mod fs;
pub mod github;
pub mod logging;
pub mod notify;
pub mod outputs;
pub mod trigger;

pub use config::{TriggerConfig, TriggerSettings};
pub use event::{EventKind, InvocationContext, RunnerEnvironment};
pub use github::{ActionError, OctocrabGateway, PersonalAccessToken, Reaction};
pub use outputs::{OutputSink, RunnerOutputs};
pub use trigger::{MatchMode, Outcome};
