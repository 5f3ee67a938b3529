//! Artifact rendering and writing
//!
//! This module provides:
//! - Pure renderers for every generated file (README, development guide,
//!   starter shell, stylesheet entry, framework config, agent prompt)
//! - Artifact sets per pipeline step
//! - Writing artifacts into the project directory

pub mod guide;
pub mod readme;
pub mod shell;
pub mod writer;

use crate::config::BuildMode;
use std::path::PathBuf;

pub use guide::{render_build_prompt, render_development_guide};
pub use readme::render_readme;
pub use shell::{render_framework_config, render_starter_shell, render_style_entry};
pub use writer::write_artifacts;

pub const README_PATH: &str = "README.md";
pub const DEVELOPMENT_GUIDE_PATH: &str = "DEVELOPMENT.md";
pub const STARTER_SHELL_PATH: &str = "app.vue";
pub const STYLE_ENTRY_PATH: &str = "assets/css/main.css";
pub const FRAMEWORK_CONFIG_PATH: &str = "nuxt.config.ts";

/// A rendered file, relative to the project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    pub relative_path: PathBuf,
    pub content: String,
}

impl GeneratedArtifact {
    fn new(relative_path: &str, content: String) -> Self {
        Self {
            relative_path: PathBuf::from(relative_path),
            content,
        }
    }
}

/// Documentation for the agent: README always, DEVELOPMENT.md in autonomous mode
pub fn documentation(name: &str, description: &str, mode: BuildMode) -> Vec<GeneratedArtifact> {
    let mut artifacts = vec![GeneratedArtifact::new(
        README_PATH,
        render_readme(name, description),
    )];
    if mode == BuildMode::Autonomous {
        artifacts.push(GeneratedArtifact::new(
            DEVELOPMENT_GUIDE_PATH,
            render_development_guide(),
        ));
    }
    artifacts
}

/// Starter UI shell with its stylesheet and framework config
pub fn starter_shell(name: &str, description: &str) -> Vec<GeneratedArtifact> {
    vec![
        GeneratedArtifact::new(STARTER_SHELL_PATH, render_starter_shell(name, description)),
        GeneratedArtifact::new(STYLE_ENTRY_PATH, render_style_entry()),
        GeneratedArtifact::new(FRAMEWORK_CONFIG_PATH, render_framework_config()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(artifacts: &[GeneratedArtifact]) -> Vec<&str> {
        artifacts
            .iter()
            .map(|a| a.relative_path.to_str().unwrap())
            .collect()
    }

    #[test]
    fn test_documentation_per_mode() {
        let manual = documentation("demo", "A todo tracker", BuildMode::Manual);
        assert_eq!(paths(&manual), vec!["README.md"]);

        let autonomous = documentation("demo", "A todo tracker", BuildMode::Autonomous);
        assert_eq!(paths(&autonomous), vec!["README.md", "DEVELOPMENT.md"]);
    }

    #[test]
    fn test_starter_shell_set() {
        let artifacts = starter_shell("demo", "A todo tracker");
        assert_eq!(
            paths(&artifacts),
            vec!["app.vue", "assets/css/main.css", "nuxt.config.ts"]
        );
        assert_eq!(artifacts, starter_shell("demo", "A todo tracker"));
    }
}
