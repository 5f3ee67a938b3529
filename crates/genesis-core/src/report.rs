//! Progress narration
//!
//! The pipeline never prints. It emits [`PipelineEvent`]s to a [`Reporter`];
//! the CLI plugs in [`ConsoleReporter`], tests plug in [`RecordingReporter`].

use crate::config::BuildMode;
use crate::pipeline::summary::{Handoff, RunSummary};
use crate::runtime::PackageManagerKind;
use colored::Colorize;
use std::io::{self, Write};

/// Structured progress of a run, in the order it happens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineEvent {
    RunStarted {
        name: String,
        description: String,
        package_manager: PackageManagerKind,
        mode: BuildMode,
    },
    StepStarted {
        index: usize,
        total: usize,
        progress: &'static str,
    },
    /// A delegate is about to be launched
    Command { command_line: String },
    /// Supplementary information for the running step
    Detail(String),
    StepSucceeded { done: &'static str },
    /// An optional step failed; the run continues
    StepWarned { step: &'static str, message: String },
    /// A mandatory step failed; the run stops
    StepFailed { step: &'static str, error: String },
    RunSucceeded(RunSummary),
}

/// Receives pipeline events
pub trait Reporter: Send {
    fn report(&mut self, event: &PipelineEvent);
}

/// Keeps every event for later inspection
#[derive(Debug, Default)]
pub struct RecordingReporter {
    pub events: Vec<PipelineEvent>,
}

impl Reporter for RecordingReporter {
    fn report(&mut self, event: &PipelineEvent) {
        self.events.push(event.clone());
    }
}

/// Coloured terminal narration
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl ConsoleReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, event: &PipelineEvent) -> io::Result<()> {
        let out = &mut self.out;
        match event {
            PipelineEvent::RunStarted {
                name,
                description,
                package_manager,
                mode,
            } => {
                writeln!(out, "{}", format!("🚀 Creating {}...", name).cyan())?;
                writeln!(out, "{}", format!("Description: {}", description).dimmed())?;
                writeln!(
                    out,
                    "{}",
                    format!("Package Manager: {} ⚡", package_manager).dimmed()
                )?;
                writeln!(out, "{}", format!("Build mode: {}", mode).dimmed())?;
                writeln!(out)?;
            }
            PipelineEvent::StepStarted {
                index,
                total,
                progress,
            } => {
                writeln!(
                    out,
                    "{} {}",
                    format!("[{}/{}]", index + 1, total).dimmed(),
                    format!("{}...", progress).yellow()
                )?;
            }
            PipelineEvent::Command { command_line } => {
                writeln!(out, "{} {}", "Running:".dimmed(), command_line.yellow())?;
            }
            PipelineEvent::Detail(text) => {
                writeln!(out, "{}", text.dimmed())?;
            }
            PipelineEvent::StepSucceeded { done } => {
                writeln!(out, "{}", format!("✓ {}", done).green())?;
            }
            PipelineEvent::StepWarned { step, message } => {
                writeln!(
                    out,
                    "{} {}",
                    "⚠".yellow(),
                    format!("Could not {}: {}", step, message).yellow()
                )?;
            }
            PipelineEvent::StepFailed { step, error } => {
                writeln!(out, "{}", format!("✗ Failed to {}", step).red().bold())?;
                writeln!(out, "  {}", error.red())?;
            }
            PipelineEvent::RunSucceeded(summary) => self.render_summary(summary)?,
        }
        self.out.flush()
    }

    fn render_summary(&mut self, summary: &RunSummary) -> io::Result<()> {
        let out = &mut self.out;
        writeln!(out)?;
        writeln!(out, "{}", summary.banner().green().bold())?;
        writeln!(out)?;
        writeln!(out, "{}", "Your app is ready:".cyan())?;
        for step in summary.next_steps() {
            writeln!(out, "{}", format!("  {}", step).dimmed())?;
        }
        writeln!(out)?;

        let agent = summary.agent_tool.display_name;
        match summary.handoff() {
            Handoff::RunAgent { command } => {
                writeln!(out, "{}", format!("Build with {}:", agent).cyan())?;
                writeln!(out, "{}", format!("  {}", command).dimmed())?;
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    "💡 The README.md contains the perfect AI prompt with all requirements"
                        .yellow()
                )?;
            }
            Handoff::InstallAgent { remediation } => {
                writeln!(out, "{}", format!("⚠️  {} Setup Required:", agent).yellow())?;
                writeln!(out, "{}", remediation)?;
                writeln!(out)?;
                writeln!(
                    out,
                    "{}",
                    format!(
                        "💡 The README.md contains the perfect AI prompt for when you install {}",
                        agent
                    )
                    .yellow()
                )?;
            }
            Handoff::Continue { examples } => {
                writeln!(out, "{}", "Continue development:".cyan())?;
                for example in examples {
                    writeln!(out, "{}", format!("  {}", example).dimmed())?;
                }
            }
        }
        writeln!(out)
    }
}

impl<W: Write + Send> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &PipelineEvent) {
        // Narration is best effort; a closed stdout must not abort generation
        if let Err(e) = self.render(event) {
            tracing::debug!(error = %e, "failed to write progress");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::{claude_tool, AgentStatus, ToolConfig};
    use std::path::PathBuf;

    fn render(events: &[PipelineEvent]) -> String {
        colored::control::set_override(false);
        let mut reporter = ConsoleReporter::new(Vec::new());
        for event in events {
            reporter.report(event);
        }
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn summary(agent: AgentStatus) -> RunSummary {
        RunSummary {
            name: "demo".to_string(),
            location: PathBuf::from("demo"),
            mode: BuildMode::Manual,
            package_manager: PackageManagerKind::Npm,
            agent,
            agent_tool: claude_tool().config().clone(),
            agent_command: "claude \"Read the README.md and build the complete application\""
                .to_string(),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn test_renders_steps() {
        let text = render(&[
            PipelineEvent::StepStarted {
                index: 0,
                total: 6,
                progress: "Creating Nuxt app",
            },
            PipelineEvent::Command {
                command_line: "npx nuxi@latest init demo".to_string(),
            },
            PipelineEvent::StepSucceeded {
                done: "Nuxt app created",
            },
        ]);
        assert_eq!(
            text,
            "[1/6] Creating Nuxt app...\nRunning: npx nuxi@latest init demo\n✓ Nuxt app created\n"
        );
    }

    #[test]
    fn test_renders_install_remediation() {
        let text = render(&[PipelineEvent::RunSucceeded(summary(AgentStatus {
            available: false,
            remediation: "1. Install Claude Code:\n   npm install -g @anthropic-ai/claude-code"
                .to_string(),
        }))]);

        assert!(text.contains("🎉 demo created successfully!"));
        assert!(text.contains("  cd demo\n  npm run dev\n"));
        assert!(text.contains("Claude Code Setup Required"));
        assert!(text.contains("npm install -g @anthropic-ai/claude-code"));
        assert!(!text.contains("Build with Claude Code"));
    }

    #[test]
    fn test_renders_agent_command_when_available() {
        let text = render(&[PipelineEvent::RunSucceeded(summary(AgentStatus {
            available: true,
            remediation: String::new(),
        }))]);
        assert!(text.contains("Build with Claude Code:"));
        assert!(text.contains("  claude \"Read the README.md and build the complete application\""));
    }

    #[test]
    fn test_renders_configured_agent_name() {
        let mut summary = summary(AgentStatus {
            available: false,
            remediation: "pip install aider-chat".to_string(),
        });
        summary.agent_tool = ToolConfig {
            name: "aider",
            display_name: "Aider",
            package: "aider-chat",
            docs_url: "https://aider.chat",
        };

        let text = render(&[PipelineEvent::RunSucceeded(summary)]);
        assert!(text.contains("Aider Setup Required"));
        assert!(text.contains("for when you install Aider"));
        assert!(!text.contains("Claude Code"));
    }

    #[test]
    fn test_recording_reporter_keeps_order() {
        let mut reporter = RecordingReporter::default();
        reporter.report(&PipelineEvent::Detail("a".to_string()));
        reporter.report(&PipelineEvent::Detail("b".to_string()));
        assert_eq!(
            reporter.events,
            vec![
                PipelineEvent::Detail("a".to_string()),
                PipelineEvent::Detail("b".to_string())
            ]
        );
    }
}
