//! What a finished run tells the user

use crate::config::BuildMode;
use crate::runtime::{AgentStatus, PackageManagerKind, ToolConfig};
use std::path::PathBuf;

/// Final state of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub name: String,
    /// Where to `cd` to reach the project
    pub location: PathBuf,
    pub mode: BuildMode,
    pub package_manager: PackageManagerKind,
    pub agent: AgentStatus,
    /// The agent CLI the run was configured with
    pub agent_tool: ToolConfig,
    /// Command that hands the project to the agent manually
    pub agent_command: String,
    /// Messages from optional steps that failed
    pub warnings: Vec<String>,
}

/// How the user continues after the run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handoff {
    /// Manual mode, agent present
    RunAgent { command: String },
    /// Manual mode, agent missing
    InstallAgent { remediation: String },
    /// Autonomous mode: the app is built, keep iterating with the agent
    Continue { examples: Vec<String> },
}

impl RunSummary {
    pub fn banner(&self) -> String {
        match self.mode {
            BuildMode::Manual => format!("🎉 {} created successfully!", self.name),
            BuildMode::Autonomous => format!("🎉 {} created and built!", self.name),
        }
    }

    pub fn next_steps(&self) -> Vec<String> {
        vec![
            format!("cd {}", self.location.display()),
            format!("{} run dev", self.package_manager.command_name()),
        ]
    }

    pub fn handoff(&self) -> Handoff {
        match self.mode {
            BuildMode::Autonomous => Handoff::Continue {
                examples: ["add user authentication", "improve the UI design"]
                    .iter()
                    .map(|prompt| format!("{} \"{}\"", self.agent_tool.name, prompt))
                    .collect(),
            },
            BuildMode::Manual if self.agent.available => Handoff::RunAgent {
                command: self.agent_command.clone(),
            },
            BuildMode::Manual => Handoff::InstallAgent {
                remediation: self.agent.remediation.clone(),
            },
        }
    }
}
