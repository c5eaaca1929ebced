// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `repoq` binary.
//!
//! Runs the built executable against temporary repositories and checks
//! stdout and exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn run_git(args: &[&str], cwd: &Path) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .output()
        .expect("failed to run git");
    assert!(output.status.success(), "git {args:?} failed");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn init_repo_with_commit(dir: &Path) -> String {
    run_git(&["init", "-q"], dir);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/main"], dir);
    run_git(&["config", "commit.gpgsign", "false"], dir);
    fs::write(dir.join("README.md"), "# Test").unwrap();
    run_git(&["add", "README.md"], dir);
    run_git(&["commit", "-q", "-m", "init"], dir);
    run_git(&["rev-parse", "HEAD"], dir)
}

/// Run `repoq` from `cwd` with no default config and no inherited overrides.
fn repoq(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_repoq"))
        .arg("--no-default-config")
        .args(args)
        .current_dir(cwd)
        .env_remove("REPOQ_GIT__PROGRAM")
        .env_remove("REPOQ_GIT__WORK_DIR")
        .env_remove("REPOQ_GLOBAL__LOG_LEVEL")
        .env("GIT_CEILING_DIRECTORIES", cwd)
        .output()
        .expect("failed to run repoq")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

// =============================================================================
// Queries
// =============================================================================

#[test]
fn cli_branch_prints_name() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let output = repoq(&["branch"], temp.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "main");
}

#[test]
fn cli_work_dir_flag() {
    let temp = temp_dir();
    let repo = temp.path().join("repo");
    fs::create_dir_all(&repo).unwrap();
    let head = init_repo_with_commit(&repo);

    let output = repoq(
        &["-C", repo.to_str().unwrap(), "hash", "HEAD"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), head);
}

#[test]
fn cli_clean_exit_status() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    assert_eq!(repoq(&["clean"], temp.path()).status.code(), Some(0));

    fs::write(temp.path().join("dirty.txt"), "x").unwrap();
    let output = repoq(&["clean"], temp.path());
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "false");
}

#[test]
fn cli_last_json() {
    let temp = temp_dir();
    let head = init_repo_with_commit(temp.path());

    let output = repoq(&["--json", "last", "-n", "1"], temp.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), format!("[\"{head}\"]"));
}

#[test]
fn cli_error_outside_repository() {
    let temp = temp_dir();

    let output = repoq(&["branch"], temp.path());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read current branch"), "{stderr}");
}

#[test]
fn cli_unknown_git_program() {
    let temp = temp_dir();
    init_repo_with_commit(temp.path());

    let output = repoq(&["--git", "repoq-no-such-git", "branch"], temp.path());
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("repoq-no-such-git"), "{stderr}");
}

#[cfg(not(windows))]
#[test]
fn cli_relative_git_program_follows_work_dir() {
    use std::os::unix::fs::PermissionsExt;

    let temp = temp_dir();
    let repo = temp.path().join("repo");
    fs::create_dir_all(&repo).unwrap();
    let script = repo.join("fake-git");
    fs::write(&script, "#!/bin/sh\necho \"$@\"\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    let output = repoq(
        &["--git", "./fake-git", "-C", repo.to_str().unwrap(), "branch"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "rev-parse --abbrev-ref HEAD");
}

// =============================================================================
// Config commands
// =============================================================================

#[test]
fn cli_configs_without_files() {
    let temp = temp_dir();
    let output = repoq(&["configs"], temp.path());
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "No configuration files loaded");
}

#[test]
fn cli_options_reflect_config_file() {
    let temp = temp_dir();
    let config = temp.path().join("custom.toml");
    fs::write(&config, "[git]\nprogram = \"git\"\nmerge_stderr = true\n").unwrap();

    let output = repoq(
        &["--config", config.to_str().unwrap(), "options"],
        temp.path(),
    );
    assert_eq!(output.status.code(), Some(0));
    let text = stdout(&output);
    assert!(
        text.lines()
            .any(|line| line.starts_with("git.merge_stderr") && line.ends_with("= true")),
        "{text}"
    );
}

#[test]
fn cli_missing_config_file_fails() {
    let temp = temp_dir();
    let output = repoq(&["--config", "missing.toml", "branch"], temp.path());
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn cli_no_command() {
    let temp = temp_dir();
    let output = repoq(&[], temp.path());
    assert_eq!(output.status.code(), Some(2));
}
