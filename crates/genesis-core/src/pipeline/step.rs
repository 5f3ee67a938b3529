//! Step descriptors and the per-mode step lists

use crate::config::BuildMode;

/// What a step does when it runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepAction {
    /// `npx nuxi@latest init`, accepted when package.json appears
    CreateProject,
    /// `<package manager> install` in the project
    InstallDependencies,
    /// `npx nuxi@latest module add ui`
    AddUiLibrary,
    /// README.md (plus DEVELOPMENT.md in autonomous mode)
    WriteDocumentation,
    /// app.vue, assets/css/main.css, nuxt.config.ts
    WriteStarterShell,
    /// Report whether the agent is available; never installs
    CheckAgent,
    /// Install the agent when it is missing
    EnsureAgent,
    /// Let the agent build the application
    BuildWithAgent,
}

/// One entry of a run's ordered step list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineStep {
    /// Used in errors: "failed to {name}"
    pub name: &'static str,
    /// Shown while the step runs
    pub progress: &'static str,
    /// Shown when the step succeeds
    pub done: &'static str,
    pub action: StepAction,
    /// Failure of a mandatory step aborts the run; others only warn
    pub mandatory: bool,
}

const fn mandatory(
    name: &'static str,
    progress: &'static str,
    done: &'static str,
    action: StepAction,
) -> PipelineStep {
    PipelineStep {
        name,
        progress,
        done,
        action,
        mandatory: true,
    }
}

const CREATE_PROJECT: PipelineStep = mandatory(
    "create Nuxt app",
    "Creating Nuxt app",
    "Nuxt app created",
    StepAction::CreateProject,
);

const INSTALL_DEPENDENCIES: PipelineStep = mandatory(
    "install dependencies",
    "Installing dependencies",
    "Dependencies installed",
    StepAction::InstallDependencies,
);

const ADD_UI_LIBRARY: PipelineStep = mandatory(
    "add Nuxt UI",
    "Adding Nuxt UI",
    "Nuxt UI added",
    StepAction::AddUiLibrary,
);

const WRITE_DOCUMENTATION: PipelineStep = mandatory(
    "generate documentation",
    "Generating AI context",
    "AI context generated",
    StepAction::WriteDocumentation,
);

const WRITE_STARTER_SHELL: PipelineStep = mandatory(
    "create starter template",
    "Creating starter template",
    "Starter template created",
    StepAction::WriteStarterShell,
);

const CHECK_AGENT: PipelineStep = PipelineStep {
    name: "check for Claude Code",
    progress: "Checking for Claude Code",
    done: "Claude Code available",
    action: StepAction::CheckAgent,
    mandatory: false,
};

const ENSURE_AGENT: PipelineStep = mandatory(
    "install Claude Code",
    "Checking for Claude Code",
    "Claude Code ready",
    StepAction::EnsureAgent,
);

const BUILD_WITH_AGENT: PipelineStep = mandatory(
    "build app with Claude Code",
    "Building app with AI",
    "App built successfully",
    StepAction::BuildWithAgent,
);

/// The ordered steps of a run in the given mode
pub fn steps_for(mode: BuildMode) -> Vec<PipelineStep> {
    match mode {
        BuildMode::Manual => vec![
            CREATE_PROJECT,
            INSTALL_DEPENDENCIES,
            ADD_UI_LIBRARY,
            WRITE_DOCUMENTATION,
            WRITE_STARTER_SHELL,
            CHECK_AGENT,
        ],
        BuildMode::Autonomous => vec![
            CREATE_PROJECT,
            INSTALL_DEPENDENCIES,
            ADD_UI_LIBRARY,
            WRITE_DOCUMENTATION,
            ENSURE_AGENT,
            BUILD_WITH_AGENT,
        ],
    }
}
