//! AI agent CLI management
//!
//! Checks whether the agent CLI is present, builds the remediation message shown
//! when it is not, and produces the invocations that install or run it.

use crate::config::AgentProbe;
use crate::process::Invocation;
use crate::runtime::check::{HostProbe, PackageManager, PackageManagerKind};
use std::path::Path;

/// Configuration for an agent CLI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    /// Name of the tool binary (e.g., "claude")
    pub name: &'static str,
    /// Display name for user-facing messages
    pub display_name: &'static str,
    /// npm package that provides the binary
    pub package: &'static str,
    /// URL to the documentation
    pub docs_url: &'static str,
}

/// Command the user can run to build the app with the agent themselves
pub const MANUAL_BUILD_PROMPT: &str = "Read the README.md and build the complete application";

/// Result of probing for the agent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentStatus {
    pub available: bool,
    /// Install instructions; empty when the agent is available
    pub remediation: String,
}

/// Manager for checking, installing and invoking the agent CLI
#[derive(Debug, Clone)]
pub struct ToolManager {
    config: ToolConfig,
}

impl ToolManager {
    pub fn new(config: ToolConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    /// Install command string for a given package manager
    pub fn install_command(&self, kind: PackageManagerKind) -> String {
        format!(
            "{} {}",
            kind.command_name(),
            kind.global_install_args(self.config.package).join(" ")
        )
    }

    /// The command users run to hand the project to the agent
    pub fn manual_build_command(&self) -> String {
        format!("{} \"{}\"", self.config.name, MANUAL_BUILD_PROMPT)
    }

    /// Check agent availability with the given policy
    pub fn detect(&self, probe: &dyn HostProbe, policy: AgentProbe) -> AgentStatus {
        let available = match policy {
            AgentProbe::PathLookup => probe.find_program(self.config.name).is_some(),
            AgentProbe::VersionProbe => probe.responds_to_version(self.config.name),
        };
        tracing::debug!(agent = self.config.name, ?policy, available, "probed agent");

        AgentStatus {
            available,
            remediation: if available {
                String::new()
            } else {
                self.remediation()
            },
        }
    }

    /// Instructions shown when the agent is missing
    pub fn remediation(&self) -> String {
        format!(
            "{display} is not installed. To build the app with AI:\n\
             \n\
             1. Install {display}:\n   \
                {npm}\n   \
                # or with bun: {bun}\n   \
                # or with pnpm: {pnpm}\n\
             \n\
             2. Then run:\n   \
                {build}\n\
             \n\
             Alternatively, you can:\n\
             - Use the starter template as-is and develop manually\n\
             - Install {display} later when you're ready for AI assistance\n\
             \n\
             Docs: {docs}",
            display = self.config.display_name,
            npm = self.install_command(PackageManagerKind::Npm),
            bun = self.install_command(PackageManagerKind::Bun),
            pnpm = self.install_command(PackageManagerKind::Pnpm),
            build = self.manual_build_command(),
            docs = self.config.docs_url,
        )
    }

    /// Global install through the detected package manager
    pub fn install_invocation(&self, package_manager: &PackageManager, cwd: &Path) -> Invocation {
        Invocation::new(&package_manager.program, cwd)
            .args(package_manager.kind.global_install_args(self.config.package))
    }

    /// Run the agent non-interactively with a single prompt
    pub fn build_invocation(&self, prompt: &str, project_dir: &Path) -> Invocation {
        Invocation::new(self.config.name, project_dir).arg(prompt)
    }
}

/// Pre-configured tool manager for Claude Code
pub fn claude_tool() -> ToolManager {
    ToolManager::new(ToolConfig {
        name: "claude",
        display_name: "Claude Code",
        package: "@anthropic-ai/claude-code",
        docs_url: "https://docs.anthropic.com/en/docs/claude-code",
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::check::fake::FakeHost;
    use std::path::PathBuf;

    #[test]
    fn test_path_lookup_policy() {
        let tool = claude_tool();
        let host = FakeHost::with_programs(&["claude"]);
        let status = tool.detect(&host, AgentProbe::PathLookup);
        assert!(status.available);
        assert!(status.remediation.is_empty());
    }

    #[test]
    fn test_version_probe_policy_ignores_path() {
        let tool = claude_tool();
        // Resolves on PATH but does not answer --version
        let host = FakeHost::with_programs(&["claude"]);
        let status = tool.detect(&host, AgentProbe::VersionProbe);
        assert!(!status.available);

        let mut host = FakeHost::default();
        host.versioned.insert("claude".to_string());
        assert!(tool.detect(&host, AgentProbe::VersionProbe).available);
    }

    #[test]
    fn test_missing_agent_remediation() {
        let tool = claude_tool();
        let status = tool.detect(&FakeHost::with_programs(&["npm"]), AgentProbe::PathLookup);

        assert!(!status.available);
        assert!(status
            .remediation
            .contains("npm install -g @anthropic-ai/claude-code"));
        assert!(status
            .remediation
            .contains("bun add -g @anthropic-ai/claude-code"));
        assert!(status.remediation.contains(&tool.manual_build_command()));
    }

    #[test]
    fn test_install_invocation_uses_detected_program() {
        let tool = claude_tool();
        let pm = PackageManager {
            kind: PackageManagerKind::Bun,
            program: PathBuf::from("/home/dev/.bun/bin/bun"),
        };
        let inv = tool.install_invocation(&pm, Path::new("/tmp"));
        assert_eq!(inv.program, PathBuf::from("/home/dev/.bun/bin/bun"));
        assert_eq!(inv.args, vec!["add", "-g", "@anthropic-ai/claude-code"]);
    }

    #[test]
    fn test_build_invocation_runs_in_project() {
        let tool = claude_tool();
        let inv = tool.build_invocation("build it", Path::new("/work/demo"));
        assert_eq!(inv.program, PathBuf::from("claude"));
        assert_eq!(inv.args, vec!["build it"]);
        assert_eq!(inv.working_dir, PathBuf::from("/work/demo"));
    }
}
