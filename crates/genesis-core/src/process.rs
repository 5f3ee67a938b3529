//! External process invocation
//!
//! Delegated tools run with inherited stdio so their output streams straight to
//! the user's terminal. Nothing is captured. A [`Completion`] policy decides
//! whether a finished process counts as a successful step.

use crate::error::{Error, Result};
use async_trait::async_trait;
use std::borrow::Cow;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;

/// A fully described external command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Program name resolved on the search path, or an absolute path
    pub program: PathBuf,
    pub args: Vec<String>,
    pub working_dir: PathBuf,
    /// Variables merged on top of the inherited environment
    pub env: Vec<(String, String)>,
}

impl Invocation {
    pub fn new(program: impl Into<PathBuf>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: working_dir.into(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Program as shown in messages
    pub fn program_name(&self) -> String {
        self.program.display().to_string()
    }

    /// Shell-like rendering for progress output
    pub fn command_line(&self) -> String {
        std::iter::once(self.program.to_string_lossy())
            .chain(self.args.iter().map(|arg| Cow::Borrowed(arg.as_str())))
            .map(|part| {
                if part.is_empty() || part.contains(char::is_whitespace) {
                    format!("\"{}\"", part.replace('"', "\\\""))
                } else {
                    part.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// How a delegated process finished
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitOutcome {
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
}

impl ExitOutcome {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs external commands to completion
#[async_trait]
pub trait ProcessRunner: Send + Sync {
    /// Run `invocation` and wait for it to exit. Only a failure to start the
    /// process is an error; exit codes are reported in the outcome.
    async fn run(&self, invocation: &Invocation) -> Result<ExitOutcome>;
}

/// Runner that spawns real child processes with inherited stdio
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

#[async_trait]
impl ProcessRunner for SystemRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExitOutcome> {
        tracing::debug!(
            command = %invocation.command_line(),
            cwd = %invocation.working_dir.display(),
            "spawning delegate"
        );

        // No timeout: delegates such as the agent may legitimately run for minutes
        let status = Command::new(&invocation.program)
            .args(&invocation.args)
            .current_dir(&invocation.working_dir)
            .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|source| Error::Spawn {
                program: invocation.program_name(),
                source,
            })?;

        tracing::debug!(program = %invocation.program.display(), code = ?status.code(), "delegate exited");
        Ok(ExitOutcome {
            code: status.code(),
        })
    }
}

/// Policy deciding whether a finished delegate counts as a successful step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Non-zero exit (or failure to start) is a failure
    ExitStatus,
    /// The presence of the marker file is ground truth. Some scaffolders exit
    /// non-zero after writing everything because they expected a TTY.
    SuccessIfArtifactPresent(PathBuf),
}

impl Completion {
    pub fn evaluate(&self, invocation: &Invocation, exit: Result<ExitOutcome>) -> Result<()> {
        let failure = match exit {
            Ok(outcome) if outcome.success() => return Ok(()),
            Ok(outcome) => Error::ExitStatus {
                program: invocation.program_name(),
                code: outcome.code,
            },
            Err(err) => err,
        };

        match self {
            Completion::SuccessIfArtifactPresent(marker) if marker.exists() => {
                tracing::warn!(
                    marker = %marker.display(),
                    error = %failure,
                    "delegate reported failure but produced its marker file; treating as success"
                );
                Ok(())
            }
            _ => Err(failure),
        }
    }
}

/// Run a delegate and apply its completion policy
pub async fn run_delegate<R>(
    runner: &R,
    invocation: &Invocation,
    completion: &Completion,
) -> Result<()>
where
    R: ProcessRunner + ?Sized,
{
    let exit = runner.run(invocation).await;
    completion.evaluate(invocation, exit)
}
