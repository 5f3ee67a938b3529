//! End-to-end run of the manual pipeline against a fake host and fake delegates

use async_trait::async_trait;
use genesis_core::pipeline::Handoff;
use genesis_core::process::ExitOutcome;
use genesis_core::{
    BuildMode, ConsoleReporter, HostProbe, Invocation, Orchestrator, PackageManagerKind,
    PipelineEvent, ProcessRunner, ProjectRequest, RecordingReporter, Reporter, Result, Settings,
};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Host where only npm resolves
struct NpmOnlyHost;

impl HostProbe for NpmOnlyHost {
    fn find_program(&self, name: &str) -> Option<PathBuf> {
        (name == "npm").then(|| PathBuf::from("/usr/bin/npm"))
    }

    fn is_file(&self, _path: &Path) -> bool {
        false
    }

    fn home_dir(&self) -> Option<PathBuf> {
        Some(PathBuf::from("/home/dev"))
    }

    fn responds_to_version(&self, program: &str) -> bool {
        program == "npm"
    }
}

/// Delegates that behave like nuxi: init writes package.json but exits 1,
/// as it does without a TTY
#[derive(Default)]
struct NuxiLikeRunner {
    calls: Mutex<Vec<String>>,
}

#[async_trait]
impl ProcessRunner for NuxiLikeRunner {
    async fn run(&self, invocation: &Invocation) -> Result<ExitOutcome> {
        self.calls.lock().unwrap().push(invocation.command_line());

        if invocation.args.get(1).map(String::as_str) == Some("init") {
            let project = invocation.working_dir.join(&invocation.args[2]);
            std::fs::create_dir_all(&project).unwrap();
            std::fs::write(project.join("package.json"), "{}").unwrap();
            return Ok(ExitOutcome { code: Some(1) });
        }
        Ok(ExitOutcome { code: Some(0) })
    }
}

/// Fans events out to a recorder and a console renderer
struct Tee {
    recorder: RecordingReporter,
    console: ConsoleReporter<Vec<u8>>,
}

impl Reporter for Tee {
    fn report(&mut self, event: &PipelineEvent) {
        self.recorder.report(event);
        self.console.report(event);
    }
}

#[tokio::test]
async fn manual_run_on_npm_only_host_without_agent() {
    colored::control::set_override(false);
    let dir = tempfile::tempdir().unwrap();
    let request = ProjectRequest::new("demo", "A todo tracker", dir.path()).unwrap();
    let settings = Settings {
        mode: Some(BuildMode::Manual),
        ..Settings::default()
    };
    let orchestrator = Orchestrator::new(NuxiLikeRunner::default(), NpmOnlyHost, &settings);
    let mut reporter = Tee {
        recorder: RecordingReporter::default(),
        console: ConsoleReporter::new(Vec::new()),
    };

    let summary = orchestrator.run(&request, &mut reporter).await.unwrap();

    // Generated files
    let project = dir.path().join("demo");
    let readme = std::fs::read_to_string(project.join("README.md")).unwrap();
    assert!(readme.contains("demo"));
    assert!(readme.contains("A todo tracker"));
    let shell = std::fs::read_to_string(project.join("app.vue")).unwrap();
    assert!(shell.contains("A todo tracker"));

    // Outcome
    assert_eq!(summary.package_manager, PackageManagerKind::Npm);
    assert!(!summary.agent.available);
    assert!(matches!(summary.handoff(), Handoff::InstallAgent { .. }));

    // Narration: remediation shown, no build invocation
    let narration = String::from_utf8(reporter.console.into_inner()).unwrap();
    assert!(narration.contains("npm install -g @anthropic-ai/claude-code"));
    assert!(narration.contains("🎉 demo created successfully!"));
    assert!(!narration.contains("Running: claude"));

    let steps_started = reporter
        .recorder
        .events
        .iter()
        .filter(|e| matches!(e, PipelineEvent::StepStarted { .. }))
        .count();
    assert_eq!(steps_started, 6);
}
