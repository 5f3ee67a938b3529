//! Genesis Core - scaffold a Nuxt app from a name and a description
//!
//! The library turns a [`ProjectRequest`] into a runnable project skeleton by
//! delegating to external tools (nuxi, the package manager, an AI coding agent)
//! and writing a few generated files.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - Environment detection ([`runtime`]), process
//!   invocation ([`process`]) and pure artifact rendering ([`templates`])
//! - **Layer 2: Workflow Orchestration** - [`Orchestrator`] running the ordered,
//!   fail-fast step list of a [`BuildMode`], narrating through a [`Reporter`]
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use genesis_core::{ConsoleReporter, Orchestrator, ProjectRequest, Settings};
//! use genesis_core::{process::SystemRunner, runtime::SystemProbe};
//!
//! let request = ProjectRequest::new("demo", "A todo tracker", ".")?;
//! let orchestrator = Orchestrator::new(SystemRunner, SystemProbe, &Settings::default());
//! let summary = orchestrator.run(&request, &mut ConsoleReporter::stdout()).await?;
//! ```

pub mod config;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod report;
pub mod request;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::{AgentProbe, BuildMode, Settings};
pub use error::{Error, Result};
pub use pipeline::{Orchestrator, PipelineStep, RunSummary, StepAction};
pub use process::{Completion, Invocation, ProcessRunner};
pub use report::{ConsoleReporter, PipelineEvent, RecordingReporter, Reporter};
pub use request::ProjectRequest;
pub use runtime::{Environment, HostProbe, PackageManager, PackageManagerKind};
pub use templates::GeneratedArtifact;

#[cfg(feature = "tui")]
pub use tui::run;
