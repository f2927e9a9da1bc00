//! Integration tests for the gitgate binary.
//!
//! These tests run the real binary against real git repositories created in
//! temporary directories, so they exercise the whole path: argument
//! parsing, configuration, context resolution, gating, execution, relay.

use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::Command as BinCommand;
use predicates::prelude::*;
use tempfile::TempDir;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Run a git command and expect success.
fn run_git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("git command failed to execute");

    if !output.status.success() {
        panic!(
            "git {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
    }
    String::from_utf8(output.stdout).unwrap()
}

/// A sandbox with an isolated home directory and a ceiling for repository
/// discovery, so nothing outside it is ever treated as a repository.
struct Sandbox {
    root: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        let root = TempDir::new().expect("failed to create temp dir");
        std::fs::create_dir(root.path().join("home")).unwrap();
        Self { root }
    }

    fn path(&self) -> &Path {
        self.root.path()
    }

    /// Create an empty directory that is not inside any repository.
    fn plain_dir(&self, name: &str) -> PathBuf {
        let dir = self.path().join(name);
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    /// Create a repository with an initial commit on main.
    fn repo(&self, name: &str) -> PathBuf {
        let dir = self.plain_dir(name);
        run_git(&dir, &["init", "-b", "main"]);
        run_git(&dir, &["config", "user.email", "test@example.com"]);
        run_git(&dir, &["config", "user.name", "Test User"]);
        run_git(&dir, &["config", "commit.gpgsign", "false"]);
        std::fs::write(dir.join("README.md"), "# Test Repo\n").unwrap();
        run_git(&dir, &["add", "README.md"]);
        run_git(&dir, &["commit", "-m", "Initial commit"]);
        dir
    }

    /// Write a gitgate config file and return its path.
    fn config(&self, contents: &str) -> PathBuf {
        let path = self.path().join("gitgate.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// The gitgate binary, isolated from the user's environment.
    fn gitgate(&self, cwd: &Path) -> BinCommand {
        let mut cmd = BinCommand::cargo_bin("gitgate").unwrap();
        cmd.current_dir(cwd)
            .env("HOME", self.path().join("home"))
            .env("XDG_CONFIG_HOME", self.path().join("home"))
            .env("GIT_CEILING_DIRECTORIES", self.path())
            .env_remove("GITGATE_CONFIG")
            .env_remove("GITGATE_LOG");
        cmd
    }
}

fn commit_count(repo: &Path) -> String {
    run_git(repo, &["rev-list", "--count", "HEAD"])
        .trim()
        .to_string()
}

// =============================================================================
// Preconditions
// =============================================================================

#[test]
fn no_arguments_is_usage_error() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");

    sandbox
        .gitgate(&repo)
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: gitgate <command>"));
}

#[test]
fn no_arguments_is_usage_error_before_config() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    let config = sandbox.config("protected_branches = \"main\"\n");

    sandbox
        .gitgate(&repo)
        .env("GITGATE_CONFIG", &config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("usage: gitgate <command>"))
        .stderr(predicate::str::contains("configuration").not());
}

#[test]
fn missing_tool_is_fatal() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    let config = sandbox.config("program = \"gitgate-no-such-vcs\"\n");

    sandbox
        .gitgate(&repo)
        .env("GITGATE_CONFIG", &config)
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not installed"));
}

#[test]
fn outside_repository_is_context_error() {
    let sandbox = Sandbox::new();
    let dir = sandbox.plain_dir("empty");

    sandbox
        .gitgate(&dir)
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to get top-level directory"));
}

#[test]
fn malformed_config_is_fatal() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    let config = sandbox.config("protected_branches = \"main\"\n");

    sandbox
        .gitgate(&repo)
        .env("GITGATE_CONFIG", &config)
        .arg("log")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Policy
// =============================================================================

#[test]
fn commit_on_main_is_refused() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    std::fs::write(repo.join("file.txt"), "content\n").unwrap();
    run_git(&repo, &["add", "file.txt"]);

    sandbox
        .gitgate(&repo)
        .args(["commit", "-m", "x"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'commit' is not allowed on protected branch 'main'",
        ));

    assert_eq!(commit_count(&repo), "1");
}

#[test]
fn add_on_main_stages_nothing() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    std::fs::write(repo.join("file.txt"), "content\n").unwrap();

    sandbox
        .gitgate(&repo)
        .args(["a", "file.txt"])
        .assert()
        .failure();

    assert_eq!(run_git(&repo, &["diff", "--cached", "--name-only"]), "");
}

#[test]
fn add_and_commit_on_feature_branch() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    run_git(&repo, &["checkout", "-b", "feature/x"]);
    std::fs::write(repo.join("file.txt"), "content\n").unwrap();

    sandbox
        .gitgate(&repo)
        .args(["add", "file.txt"])
        .assert()
        .success();
    sandbox
        .gitgate(&repo)
        .args(["c", "-m", "Add file"])
        .assert()
        .success();

    assert_eq!(commit_count(&repo), "2");
}

#[test]
fn configured_protected_branches_replace_defaults() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    let config = sandbox.config("protected_branches = [\"release\"]\n");
    std::fs::write(repo.join("file.txt"), "content\n").unwrap();

    sandbox
        .gitgate(&repo)
        .env("GITGATE_CONFIG", &config)
        .args(["add", "file.txt"])
        .assert()
        .success();

    assert_eq!(
        run_git(&repo, &["diff", "--cached", "--name-only"]),
        "file.txt\n"
    );
}

// =============================================================================
// Read-only aliases and passthrough
// =============================================================================

#[test]
fn log_relays_history() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");

    sandbox
        .gitgate(&repo)
        .arg("l")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initial commit"))
        .stdout(predicate::str::starts_with("* "));
}

#[test]
fn hash_prints_head() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    let head = run_git(&repo, &["rev-parse", "HEAD"]);

    sandbox
        .gitgate(&repo)
        .arg("hash")
        .assert()
        .success()
        .stdout(head);
}

#[test]
fn hash_forwards_short_flag() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    let short = run_git(&repo, &["rev-parse", "HEAD", "--short"]);

    sandbox
        .gitgate(&repo)
        .args(["hash", "--short"])
        .assert()
        .success()
        .stdout(short);
}

#[test]
fn check_prints_branch_and_root() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    let root = run_git(&repo, &["rev-parse", "--show-toplevel"]);
    let head = run_git(&repo, &["rev-parse", "HEAD"]);

    sandbox
        .gitgate(&repo)
        .arg("check")
        .assert()
        .success()
        .stdout(format!("main in {}\n{}", root.trim(), head));
}

#[test]
fn unknown_alias_passes_through() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    std::fs::write(repo.join("new.txt"), "new\n").unwrap();

    sandbox
        .gitgate(&repo)
        .args(["status", "-s"])
        .assert()
        .success()
        .stdout(predicate::str::contains("?? new.txt"));
}

#[test]
fn flag_like_alias_passes_through() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");

    sandbox
        .gitgate(&repo)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("git version"));
}

#[test]
fn checkout_switches_branch() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");
    run_git(&repo, &["branch", "topic"]);

    sandbox
        .gitgate(&repo)
        .args(["co", "topic"])
        .assert()
        .success();

    assert_eq!(
        run_git(&repo, &["symbolic-ref", "--short", "HEAD"]).trim(),
        "topic"
    );
}

#[test]
fn failing_command_relays_to_stderr_with_child_code() {
    let sandbox = Sandbox::new();
    let repo = sandbox.repo("repo");

    sandbox
        .gitgate(&repo)
        .args(["rev-parse", "--verify", "no-such-ref"])
        .assert()
        .code(128)
        .stdout("")
        .stderr(predicate::str::contains("fatal:"))
        .stderr(predicate::str::contains("error: failed to run 'git rev-parse"));
}

// =============================================================================
// Clone
// =============================================================================

#[test]
fn clone_outside_repository() {
    let sandbox = Sandbox::new();
    let source = sandbox.repo("source");
    let dest = sandbox.plain_dir("dest");

    sandbox
        .gitgate(&dest)
        .args(["clone", source.to_str().unwrap(), "copy"])
        .assert()
        .success();

    assert!(dest.join("copy/README.md").exists());
}

#[test]
fn clone_inside_repository_is_refused() {
    let sandbox = Sandbox::new();
    let source = sandbox.repo("source");
    let repo = sandbox.repo("repo");

    sandbox
        .gitgate(&repo)
        .args(["clone", source.to_str().unwrap(), "copy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No!"));

    assert!(!repo.join("copy").exists());
}
