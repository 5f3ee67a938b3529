//! Environment detection and agent tool management
//!
//! This module provides:
//! - Package manager detection (bun, pnpm, npm)
//! - AI agent CLI detection, installation and invocation

pub mod check;
pub mod tool;

pub use check::{
    detect_package_manager, HostProbe, PackageManager, PackageManagerKind, SystemProbe,
};
pub use tool::{claude_tool, AgentStatus, ToolConfig, ToolManager};

use crate::config::AgentProbe;

/// Facts about the host, gathered once at the start of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    pub package_manager: PackageManager,
    pub agent: AgentStatus,
}

impl Environment {
    pub fn detect(probe: &dyn HostProbe, agent: &ToolManager, policy: AgentProbe) -> Self {
        let package_manager = detect_package_manager(probe);
        tracing::debug!(
            package_manager = %package_manager.kind,
            program = %package_manager.program.display(),
            "detected package manager"
        );
        Self {
            package_manager,
            agent: agent.detect(probe, policy),
        }
    }
}
