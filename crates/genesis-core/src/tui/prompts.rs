//! Charm-style CLI prompts using cliclack

use crate::config::{AgentProbe, BuildMode, Settings};
use crate::pipeline::Orchestrator;
use crate::process::SystemRunner;
use crate::report::ConsoleReporter;
use crate::request::{normalize_name, ProjectRequest};
use crate::runtime::{claude_tool, Environment, SystemProbe};
use anyhow::{Context, Result};
use std::path::PathBuf;

/// CLI arguments for the create command
#[derive(Debug, Clone, Default)]
pub struct CreateArgs {
    /// Project name; prompted for when missing
    pub name: Option<String>,

    /// What the app should do; prompted for when missing
    pub description: Option<String>,

    /// Directory the project folder is created in
    pub directory: Option<PathBuf>,

    /// Build mode override
    pub mode: Option<BuildMode>,

    /// Agent detection policy override
    pub agent_probe: Option<AgentProbe>,

    /// YAML settings file
    pub config: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    pub yes: bool,
}

impl CreateArgs {
    /// Settings from the config file with command-line values layered on top
    pub fn settings(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => Settings::load(path)?,
            None => Settings::default(),
        };
        Ok(file.overlay(Settings {
            mode: self.mode,
            agent_probe: self.agent_probe,
            output_dir: self.directory.clone(),
        }))
    }
}

/// Run the CLI with interactive prompts
pub async fn run(args: CreateArgs) -> Result<()> {
    cliclack::intro("Genesis")?;

    let settings = args.settings()?;

    // Step 1: Collect name and description
    let name = resolve_name(&args)?;
    let description = resolve_description(&args)?;
    let request = ProjectRequest::new(&name, description, settings.output_dir())?;

    // Step 2: Check the target directory
    confirm_project_dir(&request, args.yes)?;
    cliclack::log::info(format!("Build mode: {}", settings.mode()))?;

    // Step 3: Generate
    let orchestrator = Orchestrator::new(SystemRunner, SystemProbe, &settings);
    let mut reporter = ConsoleReporter::stdout();

    match orchestrator.run(&request, &mut reporter).await {
        Ok(_) => {
            cliclack::outro("Happy coding!")?;
            Ok(())
        }
        Err(e) => {
            cliclack::outro_cancel("Error creating app")?;
            Err(e).with_context(|| format!("Failed to create {}", request.name()))
        }
    }
}

/// Print what environment detection finds on this host
pub fn detect(settings: &Settings) -> Result<()> {
    cliclack::intro("Genesis environment")?;

    let tool = claude_tool();
    let environment = Environment::detect(&SystemProbe, &tool, settings.agent_probe());
    let package_manager = &environment.package_manager;

    cliclack::log::success(format!(
        "Package manager: {} ({})",
        package_manager.kind,
        package_manager.program.display()
    ))?;

    if environment.agent.available {
        cliclack::log::success(format!("{} installed", tool.config().display_name))?;
    } else {
        cliclack::log::warning(&environment.agent.remediation)?;
    }

    cliclack::outro(format!("Build mode: {}", settings.mode()))?;
    Ok(())
}

fn resolve_name(args: &CreateArgs) -> Result<String> {
    if let Some(name) = &args.name {
        return Ok(name.clone());
    }
    if args.yes {
        anyhow::bail!("A project name is required in non-interactive mode.");
    }

    let input: String = cliclack::input("Project name")
        .placeholder("my-app")
        .validate(|input: &String| normalize_name(input).map(|_| ()).map_err(|e| e.to_string()))
        .interact()?;
    Ok(input)
}

fn resolve_description(args: &CreateArgs) -> Result<String> {
    if let Some(description) = &args.description {
        return Ok(description.clone());
    }
    if args.yes {
        anyhow::bail!("A description is required in non-interactive mode.");
    }

    let input: String = cliclack::input("Describe your application")
        .placeholder("A todo tracker with tags and due dates")
        .validate(|input: &String| {
            if input.trim().is_empty() {
                Err("Please describe what the app should do")
            } else {
                Ok(())
            }
        })
        .interact()?;
    Ok(input)
}

fn confirm_project_dir(request: &ProjectRequest, yes: bool) -> Result<()> {
    let project_dir = request.project_dir();

    // Validate parent directory exists or can be created
    let output_dir = request.output_dir();
    if output_dir.exists() && !output_dir.is_dir() {
        anyhow::bail!("Output path is not a directory: {}", output_dir.display());
    }

    // Warn if directory exists and has files
    if project_dir.is_dir() {
        let count = std::fs::read_dir(&project_dir)
            .with_context(|| format!("Failed to read {}", project_dir.display()))?
            .count();
        if count > 0 {
            cliclack::log::warning(format!(
                "{} already has {} existing items; generated files will be overwritten",
                project_dir.display(),
                count
            ))?;

            // Auto-confirm with --yes flag
            let confirm = if yes {
                true
            } else {
                cliclack::confirm("Continue anyway?")
                    .initial_value(false)
                    .interact()?
            };

            if !confirm {
                anyhow::bail!("Setup cancelled.");
            }
        }
    }

    Ok(())
}
