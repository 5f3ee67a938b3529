//! Error types for the generation pipeline

use std::path::PathBuf;

/// Result alias used throughout the core library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while preparing or running a generation pipeline
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid project name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("failed to launch `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{program}` exited with {}", exit_code_label(.code))]
    ExitStatus { program: String, code: Option<i32> },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create directory {}: {source}", .path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("AI agent is not available")]
    AgentUnavailable { remediation: String },

    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to {step}: {source}")]
    Step {
        step: &'static str,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Wrap an error with the name of the pipeline step that produced it
    pub fn in_step(self, step: &'static str) -> Self {
        Error::Step {
            step,
            source: Box::new(self),
        }
    }

    /// Name of the failing step, if this error came out of the pipeline
    pub fn step(&self) -> Option<&'static str> {
        match self {
            Error::Step { step, .. } => Some(*step),
            _ => None,
        }
    }
}

fn exit_code_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "no exit code (terminated by signal)".to_string(),
    }
}
