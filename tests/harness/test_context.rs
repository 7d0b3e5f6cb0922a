//! Shared testing harness for `rigup` integration tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
///
/// Fake tool binaries installed via [`install_tool`](Self::install_tool) are
/// shell scripts on a prepended `PATH` that append each call to a shared log,
/// so tests can assert the exact invocation order.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
    bin_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        let bin_dir = root.path().join("bin");
        fs::create_dir_all(&bin_dir).expect("Failed to create fake tool directory");

        Self { root, work_dir, bin_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Write a `provision.yml` into the work directory.
    pub(crate) fn write_manifest(&self, content: &str) -> PathBuf {
        let path = self.work_dir.join("provision.yml");
        fs::write(&path, content).expect("Failed to write test manifest");
        path
    }

    /// Path to the shared fake-tool invocation log.
    pub(crate) fn tool_log(&self) -> PathBuf {
        self.root.path().join("tools.log")
    }

    /// Logged fake-tool calls, one `"<tool> <args>"` line per invocation.
    pub(crate) fn logged_calls(&self) -> Vec<String> {
        match fs::read_to_string(self.tool_log()) {
            Ok(content) => content.lines().map(|line| line.trim_end().to_string()).collect(),
            Err(_) => Vec::new(),
        }
    }

    /// Install a fake tool that logs each call and exits 0.
    pub(crate) fn install_tool(&self, name: &str) {
        self.install_tool_with_exit(name, 0);
    }

    /// Install a fake tool that logs each call and exits with `code`.
    pub(crate) fn install_tool_with_exit(&self, name: &str, code: i32) {
        self.install_tool_with_body(name, &format!("exit {}", code));
    }

    /// Install a fake tool that logs each call and then runs `body`.
    pub(crate) fn install_tool_with_body(&self, name: &str, body: &str) {
        let script = format!(
            "#!/bin/sh\necho \"{} $@\" >> \"{}\"\n{}\n",
            name,
            self.tool_log().display(),
            body
        );
        let path = self.bin_dir.join(name);
        fs::write(&path, script).expect("Failed to write fake tool");

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms =
                fs::metadata(&path).expect("Failed to stat fake tool").permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&path, perms).expect("Failed to chmod fake tool");
        }
    }

    /// Initialize a git repository with one commit, for clone-step tests.
    pub(crate) fn init_git_repo(&self, name: &str) -> PathBuf {
        let dir = self.root.path().join(name);
        fs::create_dir_all(&dir).expect("Failed to create git repo directory");

        for args in [
            vec!["init", "--initial-branch=main"],
            vec!["config", "user.name", "Test User"],
            vec!["config", "user.email", "test@example.com"],
        ] {
            let output = std::process::Command::new("git")
                .args(&args)
                .current_dir(&dir)
                .output()
                .expect("Failed to run git");
            assert!(
                output.status.success(),
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        fs::write(dir.join("README.md"), "acquisition scripts").expect("Failed to write README");
        for args in [vec!["add", "README.md"], vec!["commit", "-m", "init"]] {
            let output = std::process::Command::new("git")
                .args(&args)
                .current_dir(&dir)
                .output()
                .expect("Failed to run git");
            assert!(
                output.status.success(),
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        }

        dir
    }

    /// Build a command for invoking the compiled `rigup` binary in the work
    /// directory, with fake tools first on `PATH`.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("rigup").expect("Failed to locate rigup binary");
        let inherited = std::env::var("PATH").unwrap_or_default();
        cmd.current_dir(&self.work_dir)
            .env("PATH", format!("{}:{}", self.bin_dir.display(), inherited));
        cmd
    }
}
