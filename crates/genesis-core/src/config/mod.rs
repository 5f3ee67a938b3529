//! Run configuration: build mode, agent probe policy, settings file

pub mod settings;

pub use settings::{AgentProbe, BuildMode, Settings};
