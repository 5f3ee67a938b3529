//! Settings for a generation run
//!
//! Values come from three layers, highest priority first: command-line flags
//! (which clap also fills from environment variables), an optional YAML settings
//! file, and built-in defaults.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Whether the run ends with a hand-off to the user or with an automatic AI build
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    /// Scaffold, document and write a starter template; the user runs the agent
    #[default]
    Manual,
    /// Scaffold, document, install the agent if needed and let it build the app
    Autonomous,
}

impl BuildMode {
    pub fn display_name(&self) -> &'static str {
        match self {
            BuildMode::Manual => "manual",
            BuildMode::Autonomous => "autonomous",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// How the presence of the AI agent CLI is established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
pub enum AgentProbe {
    /// The agent binary resolves on the search path
    #[serde(rename = "path")]
    #[value(name = "path")]
    PathLookup,
    /// `<agent> --version` runs and exits successfully
    #[serde(rename = "version")]
    #[value(name = "version")]
    VersionProbe,
}

impl AgentProbe {
    /// Policy used when nothing was configured explicitly
    pub fn default_for(mode: BuildMode) -> Self {
        match mode {
            BuildMode::Manual => AgentProbe::PathLookup,
            BuildMode::Autonomous => AgentProbe::VersionProbe,
        }
    }
}

/// One layer of run settings; unset fields fall through to the next layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub mode: Option<BuildMode>,
    pub agent_probe: Option<AgentProbe>,
    pub output_dir: Option<PathBuf>,
}

impl Settings {
    /// Read a settings layer from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, path)
    }

    fn parse(content: &str, path: &Path) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| Error::ParseConfig {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Layer `overrides` on top of `self`; fields set in `overrides` win
    pub fn overlay(self, overrides: Settings) -> Settings {
        Settings {
            mode: overrides.mode.or(self.mode),
            agent_probe: overrides.agent_probe.or(self.agent_probe),
            output_dir: overrides.output_dir.or(self.output_dir),
        }
    }

    pub fn mode(&self) -> BuildMode {
        self.mode.unwrap_or_default()
    }

    pub fn agent_probe(&self) -> AgentProbe {
        self.agent_probe
            .unwrap_or_else(|| AgentProbe::default_for(self.mode()))
    }

    pub fn output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
