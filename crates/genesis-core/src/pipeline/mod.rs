//! The generation pipeline
//!
//! A run detects the environment once, then executes the step list for its
//! [`BuildMode`] strictly in order. A failing mandatory step aborts the run and
//! leaves whatever was already written in place; a failing optional step is
//! reported as a warning and the run carries on.
//!
//! ```text
//! Idle -> DetectingEnvironment -> RunningStep(0) -> ... -> Succeeded
//!                                       \--> Aborted(step, error)
//! ```

pub mod step;
pub mod summary;

use crate::config::{AgentProbe, BuildMode, Settings};
use crate::error::{Error, Result};
use crate::process::{run_delegate, Completion, Invocation, ProcessRunner};
use crate::report::{PipelineEvent, Reporter};
use crate::request::ProjectRequest;
use crate::runtime::{claude_tool, Environment, HostProbe, ToolManager};
use crate::templates;
use std::path::{Path, PathBuf};

pub use step::{steps_for, PipelineStep, StepAction};
pub use summary::{Handoff, RunSummary};

/// Runner for nuxi, the Nuxt scaffolder
const NUXI_RUNNER: &str = "npx";
const NUXI: &str = "nuxi@latest";
/// Written by `nuxi init` once the project exists
const PROJECT_MARKER: &str = "package.json";

/// Runs generation pipelines against a process runner and a host probe
pub struct Orchestrator<R, H> {
    runner: R,
    probe: H,
    agent: ToolManager,
    mode: BuildMode,
    agent_probe: AgentProbe,
}

impl<R: ProcessRunner, H: HostProbe> Orchestrator<R, H> {
    pub fn new(runner: R, probe: H, settings: &Settings) -> Self {
        Self {
            runner,
            probe,
            agent: claude_tool(),
            mode: settings.mode(),
            agent_probe: settings.agent_probe(),
        }
    }

    /// Use a different agent CLI
    pub fn with_agent(mut self, agent: ToolManager) -> Self {
        self.agent = agent;
        self
    }

    pub fn mode(&self) -> BuildMode {
        self.mode
    }

    pub fn steps(&self) -> Vec<PipelineStep> {
        steps_for(self.mode)
    }

    pub fn detect_environment(&self) -> Environment {
        Environment::detect(&self.probe, &self.agent, self.agent_probe)
    }

    /// Generate the project described by `request`.
    ///
    /// On abort the error is [`Error::Step`] naming the failed step.
    pub async fn run(
        &self,
        request: &ProjectRequest,
        reporter: &mut dyn Reporter,
    ) -> Result<RunSummary> {
        let environment = self.detect_environment();
        reporter.report(&PipelineEvent::RunStarted {
            name: request.name().to_string(),
            description: request.description().to_string(),
            package_manager: environment.package_manager.kind,
            mode: self.mode,
        });

        let steps = self.steps();
        let total = steps.len();
        let mut warnings = Vec::new();

        for (index, step) in steps.iter().enumerate() {
            tracing::debug!(index, step = step.name, "running step");
            reporter.report(&PipelineEvent::StepStarted {
                index,
                total,
                progress: step.progress,
            });

            match self.execute(step.action, request, &environment, reporter).await {
                Ok(()) => reporter.report(&PipelineEvent::StepSucceeded { done: step.done }),
                Err(err) if !step.mandatory => {
                    tracing::warn!(step = step.name, error = %err, "optional step failed");
                    let message = err.to_string();
                    reporter.report(&PipelineEvent::StepWarned {
                        step: step.name,
                        message: message.clone(),
                    });
                    warnings.push(format!("Could not {}: {}", step.name, message));
                }
                Err(err) => {
                    tracing::debug!(step = step.name, error = %err, "aborting run");
                    reporter.report(&PipelineEvent::StepFailed {
                        step: step.name,
                        error: err.to_string(),
                    });
                    return Err(err.in_step(step.name));
                }
            }
        }

        let summary = RunSummary {
            name: request.name().to_string(),
            location: cd_location(request),
            mode: self.mode,
            package_manager: environment.package_manager.kind,
            agent: environment.agent.clone(),
            agent_tool: self.agent.config().clone(),
            agent_command: self.agent.manual_build_command(),
            warnings,
        };
        reporter.report(&PipelineEvent::RunSucceeded(summary.clone()));
        Ok(summary)
    }

    async fn execute(
        &self,
        action: StepAction,
        request: &ProjectRequest,
        environment: &Environment,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        let project_dir = request.project_dir();
        let package_manager = &environment.package_manager;

        match action {
            StepAction::CreateProject => {
                let output_dir = request.output_dir();
                tokio::fs::create_dir_all(output_dir)
                    .await
                    .map_err(|source| Error::CreateDir {
                        path: output_dir.to_path_buf(),
                        source,
                    })?;

                // Force non-interactive mode
                let invocation = Invocation::new(NUXI_RUNNER, output_dir)
                    .args([NUXI, "init", request.name()])
                    .args(["--package-manager", package_manager.kind.command_name()])
                    .arg("--git-init")
                    .env("CI", "true")
                    .env("NUXT_TELEMETRY_DISABLED", "1")
                    .env("NODE_ENV", "production");
                let completion =
                    Completion::SuccessIfArtifactPresent(project_dir.join(PROJECT_MARKER));
                self.delegate(&invocation, &completion, reporter).await
            }
            StepAction::InstallDependencies => {
                let invocation =
                    Invocation::new(&package_manager.program, &project_dir)
                        .arg("install");
                self.delegate(&invocation, &Completion::ExitStatus, reporter)
                    .await
            }
            StepAction::AddUiLibrary => {
                let invocation =
                    Invocation::new(NUXI_RUNNER, &project_dir).args([NUXI, "module", "add", "ui"]);
                self.delegate(&invocation, &Completion::ExitStatus, reporter)
                    .await
            }
            StepAction::WriteDocumentation => {
                let artifacts =
                    templates::documentation(request.name(), request.description(), self.mode);
                templates::write_artifacts(&project_dir, &artifacts).await?;
                Ok(())
            }
            StepAction::WriteStarterShell => {
                let artifacts = templates::starter_shell(request.name(), request.description());
                templates::write_artifacts(&project_dir, &artifacts).await?;
                Ok(())
            }
            StepAction::CheckAgent => {
                if environment.agent.available {
                    Ok(())
                } else {
                    Err(Error::AgentUnavailable {
                        remediation: environment.agent.remediation.clone(),
                    })
                }
            }
            StepAction::EnsureAgent => {
                if environment.agent.available {
                    return Ok(());
                }
                reporter.report(&PipelineEvent::Detail(format!(
                    "Installing {}...",
                    self.agent.config().display_name
                )));
                let invocation = self
                    .agent
                    .install_invocation(package_manager, request.output_dir());
                self.delegate(&invocation, &Completion::ExitStatus, reporter)
                    .await
            }
            StepAction::BuildWithAgent => {
                reporter.report(&PipelineEvent::Detail(
                    "This may take a few minutes...".to_string(),
                ));
                let prompt = templates::render_build_prompt(request.description());
                let invocation = self.agent.build_invocation(&prompt, &project_dir);
                self.delegate(&invocation, &Completion::ExitStatus, reporter)
                    .await
            }
        }
    }

    async fn delegate(
        &self,
        invocation: &Invocation,
        completion: &Completion,
        reporter: &mut dyn Reporter,
    ) -> Result<()> {
        reporter.report(&PipelineEvent::Command {
            command_line: invocation.command_line(),
        });
        run_delegate(&self.runner, invocation, completion).await
    }
}

/// Path to show in `cd` instructions: the bare name when generating into the
/// current directory, the full project path otherwise
fn cd_location(request: &ProjectRequest) -> PathBuf {
    if request.output_dir() == Path::new(".") {
        PathBuf::from(request.name())
    } else {
        request.project_dir()
    }
}
