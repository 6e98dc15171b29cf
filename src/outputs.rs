//! Step outputs and workflow commands.
//!
//! Outputs go to the file named by `GITHUB_OUTPUT` using the multi-line
//! delimiter syntax. Older runners without that file get `::set-output`
//! workflow commands on stdout instead.

use std::io::{self, Write};

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::fs::OpenOptions;

use crate::fs;
use crate::github::ActionError;

/// A destination for step outputs.
pub trait OutputSink: Send + Sync {
    /// Records one output value.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::Io`] when the value cannot be written.
    fn set_output(&self, name: &str, value: &str) -> Result<(), ActionError>;
}

/// Appends outputs to the runner's `GITHUB_OUTPUT` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutputSink {
    path: Utf8PathBuf,
}

impl FileOutputSink {
    /// Creates a sink appending to `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the output file.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }
}

/// Formats one `name<<delimiter` block.
fn delimited_entry(name: &str, value: &str, delimiter: &str) -> Result<String, ActionError> {
    if name.contains(delimiter) || value.contains(delimiter) {
        return Err(ActionError::Io {
            message: format!("output {name:?} contains the delimiter {delimiter:?}"),
        });
    }
    Ok(format!("{name}<<{delimiter}\n{value}\n{delimiter}\n"))
}

impl OutputSink for FileOutputSink {
    fn set_output(&self, name: &str, value: &str) -> Result<(), ActionError> {
        let delimiter = format!("ghadelimiter_{}", uuid::Uuid::new_v4());
        let entry = delimited_entry(name, value, &delimiter)?;

        let (dir, file_name) = fs::open_parent(&self.path, "output file")?;
        let mut options = OpenOptions::new();
        options.append(true).create(true);
        let mut file = dir
            .open_with(file_name, &options)
            .map_err(|error| ActionError::Io {
                message: format!("failed to open output file '{}': {error}", self.path),
            })?;
        file.write_all(entry.as_bytes())
            .map_err(|error| ActionError::Io {
                message: format!("failed to write output {name:?}: {error}"),
            })
    }
}

/// Emits `::set-output` workflow commands on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct CommandOutputSink;

impl OutputSink for CommandOutputSink {
    fn set_output(&self, name: &str, value: &str) -> Result<(), ActionError> {
        let command = format!(
            "::set-output name={}::{}",
            escape_property(name),
            escape_data(value)
        );
        writeln_stdout(&command)
    }
}

/// Output sink chosen from the runner environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerOutputs {
    /// `GITHUB_OUTPUT` is set.
    File(FileOutputSink),
    /// No output file; fall back to workflow commands.
    Commands,
}

impl RunnerOutputs {
    /// Picks the sink from an optional `GITHUB_OUTPUT` value.
    #[must_use]
    pub fn from_output_path(path: Option<String>) -> Self {
        match path.filter(|value| !value.is_empty()) {
            Some(value) => Self::File(FileOutputSink::new(value)),
            None => Self::Commands,
        }
    }

    /// Picks the sink from the process environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_output_path(std::env::var("GITHUB_OUTPUT").ok())
    }
}

impl OutputSink for RunnerOutputs {
    fn set_output(&self, name: &str, value: &str) -> Result<(), ActionError> {
        match self {
            Self::File(sink) => sink.set_output(name, value),
            Self::Commands => CommandOutputSink.set_output(name, value),
        }
    }
}

/// Marks the step as failed with an `::error::` workflow command.
///
/// # Errors
///
/// Returns [`ActionError::Io`] when stdout cannot be written.
pub fn report_failure(message: &str) -> Result<(), ActionError> {
    writeln_stdout(&format!("::error::{}", escape_data(message)))
}

fn escape_data(value: &str) -> String {
    value
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

fn escape_property(value: &str) -> String {
    escape_data(value).replace(':', "%3A").replace(',', "%2C")
}

fn writeln_stdout(line: &str) -> Result<(), ActionError> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{line}").map_err(|error| ActionError::Io {
        message: format!("failed to write workflow command: {error}"),
    })
}
