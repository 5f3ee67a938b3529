//! Host probing and package manager detection

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

/// Read-only view of the host used for environment detection
pub trait HostProbe: Send + Sync {
    /// Resolve a program on the search path
    fn find_program(&self, name: &str) -> Option<PathBuf>;

    /// Whether a regular file exists at `path`
    fn is_file(&self, path: &Path) -> bool;

    /// The current user's home directory
    fn home_dir(&self) -> Option<PathBuf>;

    /// Whether `<program> --version` runs and exits successfully
    fn responds_to_version(&self, program: &str) -> bool;
}

/// Probe backed by the real host
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl HostProbe for SystemProbe {
    fn find_program(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn responds_to_version(&self, program: &str) -> bool {
        Command::new(program)
            .arg("--version")
            .stdin(Stdio::null())
            .output()
            .is_ok_and(|o| o.status.success())
    }
}

/// Supported package managers, fastest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageManagerKind {
    Bun,
    Pnpm,
    Npm,
}

impl PackageManagerKind {
    /// Name of the executable and of the `--package-manager` value for nuxi
    pub fn command_name(&self) -> &'static str {
        match self {
            PackageManagerKind::Bun => "bun",
            PackageManagerKind::Pnpm => "pnpm",
            PackageManagerKind::Npm => "npm",
        }
    }

    /// Arguments that install a package globally
    pub fn global_install_args(&self, package: &str) -> Vec<String> {
        let verb = match self {
            PackageManagerKind::Bun | PackageManagerKind::Pnpm => "add",
            PackageManagerKind::Npm => "install",
        };
        vec![verb.to_string(), "-g".to_string(), package.to_string()]
    }
}

impl fmt::Display for PackageManagerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_name())
    }
}

/// A detected package manager and the program used to invoke it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageManager {
    pub kind: PackageManagerKind,
    pub program: PathBuf,
}

impl PackageManager {
    /// A package manager invoked by its bare name through the search path
    pub fn on_path(kind: PackageManagerKind) -> Self {
        Self {
            kind,
            program: PathBuf::from(kind.command_name()),
        }
    }
}

/// Location bun's installer uses when it does not touch the search path
pub fn bun_install_location(home: &Path) -> PathBuf {
    home.join(".bun").join("bin").join("bun")
}

/// Pick the fastest available package manager.
///
/// Probe order: bun on the search path, bun at its default install location,
/// pnpm on the search path, then npm unconditionally.
pub fn detect_package_manager(probe: &dyn HostProbe) -> PackageManager {
    if probe.find_program("bun").is_some() {
        return PackageManager::on_path(PackageManagerKind::Bun);
    }

    if let Some(home) = probe.home_dir() {
        let bun = bun_install_location(&home);
        if probe.is_file(&bun) {
            return PackageManager {
                kind: PackageManagerKind::Bun,
                program: bun,
            };
        }
    }

    if probe.find_program("pnpm").is_some() {
        return PackageManager::on_path(PackageManagerKind::Pnpm);
    }

    PackageManager::on_path(PackageManagerKind::Npm)
}

#[cfg(test)]
pub(crate) mod fake {
    use super::*;
    use std::collections::HashSet;

    /// Host with a fixed set of programs and files
    #[derive(Debug, Clone, Default)]
    pub struct FakeHost {
        pub programs: HashSet<String>,
        pub files: HashSet<PathBuf>,
        pub versioned: HashSet<String>,
        pub home: Option<PathBuf>,
    }

    impl FakeHost {
        pub fn with_programs(programs: &[&str]) -> Self {
            Self {
                programs: programs.iter().map(|p| p.to_string()).collect(),
                home: Some(PathBuf::from("/home/dev")),
                ..Self::default()
            }
        }
    }

    impl HostProbe for FakeHost {
        fn find_program(&self, name: &str) -> Option<PathBuf> {
            self.programs
                .contains(name)
                .then(|| PathBuf::from("/usr/bin").join(name))
        }

        fn is_file(&self, path: &Path) -> bool {
            self.files.contains(path)
        }

        fn home_dir(&self) -> Option<PathBuf> {
            self.home.clone()
        }

        fn responds_to_version(&self, program: &str) -> bool {
            self.versioned.contains(program)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeHost;
    use super::*;

    #[test]
    fn test_only_npm_falls_back_to_npm() {
        let host = FakeHost::with_programs(&["npm", "node"]);
        let pm = detect_package_manager(&host);
        assert_eq!(pm.kind, PackageManagerKind::Npm);
        assert_eq!(pm.program, PathBuf::from("npm"));
    }

    #[test]
    fn test_nothing_resolvable_still_returns_npm() {
        let host = FakeHost::default();
        assert_eq!(detect_package_manager(&host).kind, PackageManagerKind::Npm);
    }

    #[test]
    fn test_bun_preferred_over_pnpm() {
        let host = FakeHost::with_programs(&["bun", "pnpm", "npm"]);
        assert_eq!(detect_package_manager(&host).kind, PackageManagerKind::Bun);
    }

    #[test]
    fn test_pnpm_when_bun_missing() {
        let host = FakeHost::with_programs(&["pnpm", "npm"]);
        assert_eq!(detect_package_manager(&host).kind, PackageManagerKind::Pnpm);
    }

    #[test]
    fn test_bun_at_install_location() {
        let mut host = FakeHost::with_programs(&["pnpm", "npm"]);
        host.files
            .insert(PathBuf::from("/home/dev/.bun/bin/bun"));

        let pm = detect_package_manager(&host);
        assert_eq!(pm.kind, PackageManagerKind::Bun);
        assert_eq!(pm.program, PathBuf::from("/home/dev/.bun/bin/bun"));
    }

    #[test]
    fn test_install_location_needs_home() {
        let mut host = FakeHost::with_programs(&["npm"]);
        host.home = None;
        host.files
            .insert(PathBuf::from("/home/dev/.bun/bin/bun"));
        assert_eq!(detect_package_manager(&host).kind, PackageManagerKind::Npm);
    }

    #[test]
    fn test_global_install_args() {
        assert_eq!(
            PackageManagerKind::Npm.global_install_args("@anthropic-ai/claude-code"),
            vec!["install", "-g", "@anthropic-ai/claude-code"]
        );
        assert_eq!(
            PackageManagerKind::Bun.global_install_args("x"),
            vec!["add", "-g", "x"]
        );
        assert_eq!(
            PackageManagerKind::Pnpm.global_install_args("x"),
            vec!["add", "-g", "x"]
        );
    }
}
