//! Genesis CLI - Nuxt app scaffolding with AI-driven development

use anyhow::Result;
use clap::{Parser, Subcommand};
use genesis_core::tui::CreateArgs;
use genesis_core::{AgentProbe, BuildMode, Settings};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "genesis")]
#[command(about = "Minimal app generator using Nuxt + AI-driven development")]
#[command(version)]
pub struct Args {
    /// Show debug logs (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create a new app
    Create(CliCreateArgs),
    /// Show the detected package manager and AI agent status
    Detect(DetectArgs),
}

#[derive(Parser, Debug)]
pub struct CliCreateArgs {
    /// Name of the app to create
    pub name: Option<String>,

    /// Description of what the app should do
    pub description: Option<String>,

    /// Output directory
    #[arg(short, long)]
    pub dir: Option<PathBuf>,

    /// Hand off to the agent yourself (manual) or let it build the app (autonomous)
    #[arg(short, long, value_enum, env = "GENESIS_BUILD_MODE")]
    pub mode: Option<BuildMode>,

    /// How to check for the AI agent: search path lookup or `--version` probe
    #[arg(long = "agent-probe", value_enum)]
    pub agent_probe: Option<AgentProbe>,

    /// YAML settings file
    #[arg(short, long, env = "GENESIS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Auto-confirm all prompts (non-interactive mode)
    #[arg(short, long)]
    pub yes: bool,
}

impl From<CliCreateArgs> for CreateArgs {
    fn from(args: CliCreateArgs) -> Self {
        CreateArgs {
            name: args.name,
            description: args.description,
            directory: args.dir,
            mode: args.mode,
            agent_probe: args.agent_probe,
            config: args.config,
            yes: args.yes,
        }
    }
}

#[derive(Parser, Debug)]
pub struct DetectArgs {
    /// Build mode whose agent probe policy to use
    #[arg(short, long, value_enum, env = "GENESIS_BUILD_MODE")]
    pub mode: Option<BuildMode>,

    /// How to check for the AI agent
    #[arg(long = "agent-probe", value_enum)]
    pub agent_probe: Option<AgentProbe>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();
    init_tracing(args.verbose);

    let result = match args.command {
        Some(Command::Create(create_args)) => genesis_core::run(create_args.into()).await,
        Some(Command::Detect(detect_args)) => {
            let settings = Settings {
                mode: detect_args.mode,
                agent_probe: detect_args.agent_probe,
                output_dir: None,
            };
            genesis_core::tui::detect(&settings)
        }
        // No subcommand provided, default to create behavior (interactive mode)
        None => genesis_core::run(CreateArgs::default()).await,
    };

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    result
}
