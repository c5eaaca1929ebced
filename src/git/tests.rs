// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::error::{GitError, ShellError};
use crate::git::Git;
use crate::shell::{FakeCommand, RunResult, Shell, SpyShell};

const HASH_A: &str = "4f2b8c1d9e0a7b6c5d4e3f2a1b0c9d8e7f6a5b4c";
const HASH_B: &str = "0a1b2c3d4e5f60718293a4b5c6d7e8f901234567";
const HASH_C: &str = "ffeeddccbbaa99887766554433221100ffeeddcc";

fn ok(argv: &[&str], stdout: &str) -> FakeCommand {
    FakeCommand::new(argv.iter().copied(), RunResult::ok(stdout))
}

fn failed(argv: &[&str], exit_code: i32, stderr: &str) -> FakeCommand {
    FakeCommand::new(argv.iter().copied(), RunResult::failed(exit_code, stderr))
}

fn calls(spy: &SpyShell) -> Vec<String> {
    spy.calls().iter().map(|argv| argv.join(" ")).collect()
}

#[test]
fn test_run_prepends_program() {
    let spy = SpyShell::new([ok(&["git", "log", "--oneline"], "abc first\n")]);
    let git = Git::new(&spy);

    let result = git.run(["log", "--oneline"]).unwrap();
    assert_eq!(result.stdout(), b"abc first\n");
    spy.assert_commands_called();
}

#[test]
fn test_run_returns_failures_unchanged() {
    let spy = SpyShell::new([failed(&["git", "frobnicate"], 1, "not a git command")]);
    let result = Git::new(&spy).run(["frobnicate"]).unwrap();
    assert_eq!(result.exit_code(), 1);
    assert_eq!(result.stderr(), b"not a git command");
}

#[test]
fn test_custom_program() {
    let spy = SpyShell::new([ok(&["/usr/local/bin/git", "rev-parse", "HEAD"], HASH_A)]);
    let git = Git::new(&spy).with_program("/usr/local/bin/git");
    assert_eq!(git.program(), "/usr/local/bin/git");
    assert_eq!(git.get_commit_hash("HEAD").unwrap(), HASH_A);
}

#[test]
fn test_branch_is_trimmed() {
    let spy = SpyShell::new([ok(&["git", "rev-parse", "--abbrev-ref", "HEAD"], "  main\n")]);
    assert_eq!(Git::new(&spy).branch().unwrap(), "main");
}

#[test]
fn test_branch_propagates_failure() {
    let spy = SpyShell::new([failed(
        &["git", "rev-parse", "--abbrev-ref", "HEAD"],
        128,
        "fatal: not a git repository",
    )]);
    let err = Git::new(&spy).branch().unwrap_err();
    assert!(matches!(
        err,
        GitError::Shell(ShellError::CommandFailed { exit_code: 128, .. })
    ));
}

#[test]
fn test_get_commit_hash() {
    let spy = SpyShell::new([ok(&["git", "rev-parse", "v1.2.0"], &format!("{HASH_B}\n"))]);
    assert_eq!(Git::new(&spy).get_commit_hash("v1.2.0").unwrap(), HASH_B);
}

#[test]
fn test_invalid_utf8_output() {
    let spy = SpyShell::new([FakeCommand::new(
        ["git", "rev-parse", "HEAD"],
        RunResult::ok(vec![0xff, 0xfe, b'\n']),
    )]);
    let err = Git::new(&spy).get_commit_hash("HEAD").unwrap_err();
    assert!(matches!(err, GitError::InvalidUtf8 { ref command, .. } if command == "git rev-parse HEAD"));
}

#[test]
fn test_last_yields_newest_first() {
    let spy = SpyShell::new([
        ok(&["git", "rev-parse", "HEAD~0"], &format!("{HASH_A}\n")),
        ok(&["git", "rev-parse", "HEAD~1"], &format!("{HASH_B}\n")),
        ok(&["git", "rev-parse", "HEAD~2"], &format!(" {HASH_C} \n")),
    ]);
    let git = Git::new(&spy);

    let hashes: Vec<String> = git.last(3).collect::<Result<_, _>>().unwrap();
    assert_eq!(hashes, vec![HASH_A, HASH_B, HASH_C]);
    spy.assert_commands_called();
}

#[test]
fn test_last_is_lazy() {
    let spy = SpyShell::new([
        ok(&["git", "rev-parse", "HEAD~0"], HASH_A),
        ok(&["git", "rev-parse", "HEAD~1"], HASH_B),
    ]);
    let git = Git::new(&spy);
    let mut commits = git.last(2);

    assert!(spy.calls().is_empty(), "no command before the first next()");
    assert_eq!(commits.next().unwrap().unwrap(), HASH_A);
    assert_eq!(calls(&spy), vec!["git rev-parse HEAD~0"]);
    assert_eq!(commits.next().unwrap().unwrap(), HASH_B);
    assert_eq!(spy.calls().len(), 2);
}

#[test]
fn test_last_is_not_restartable() {
    let spy = SpyShell::new([ok(&["git", "rev-parse", "HEAD~0"], HASH_A)]);
    let git = Git::new(&spy);
    let mut commits = git.last(1);

    assert_eq!(commits.size_hint(), (1, Some(1)));
    assert!(commits.next().is_some());
    assert!(commits.next().is_none());
    assert!(commits.next().is_none());
    assert_eq!(commits.size_hint(), (0, Some(0)));
    assert_eq!(spy.calls().len(), 1);
}

#[test]
fn test_last_zero_runs_nothing() {
    let spy = SpyShell::new(Vec::<FakeCommand>::new());
    assert_eq!(Git::new(&spy).last(0).count(), 0);
    assert!(spy.calls().is_empty());
}

#[test]
fn test_last_stops_after_failure() {
    let spy = SpyShell::new([
        ok(&["git", "rev-parse", "HEAD~0"], HASH_A),
        failed(
            &["git", "rev-parse", "HEAD~1"],
            128,
            "fatal: ambiguous argument 'HEAD~1'",
        ),
    ]);
    let git = Git::new(&spy);
    let results: Vec<_> = git.last(5).collect();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_deref().unwrap(), HASH_A);
    assert!(results[1].is_err());
    spy.assert_commands_called();
}

#[test]
fn test_is_clean_on_empty_status() {
    let spy = SpyShell::new([ok(&["git", "status", "--porcelain"], "\n")]);
    assert!(Git::new(&spy).is_clean().unwrap());
}

#[test]
fn test_is_clean_false_with_changes() {
    let spy = SpyShell::new([ok(
        &["git", "status", "--porcelain"],
        " M src/lib.rs\n?? notes.txt\n",
    )]);
    assert!(!Git::new(&spy).is_clean().unwrap());
}

#[test]
fn test_is_clean_false_when_status_fails() {
    let spy = SpyShell::new([failed(
        &["git", "status", "--porcelain"],
        128,
        "fatal: not a git repository",
    )]);
    assert!(!Git::new(&spy).is_clean().unwrap());
}

#[test]
fn test_is_clean_propagates_spawn_errors() {
    let spy = SpyShell::new([ok(&["git", "status"], "")]);
    let err = Git::new(&spy).is_clean().unwrap_err();
    assert!(matches!(err, GitError::Shell(ShellError::UnexpectedCommand { .. })));
}

#[test]
fn test_get_remote_commit_hash_takes_first_token() {
    let spy = SpyShell::new([ok(
        &["git", "ls-remote", "--heads", "origin", "main"],
        &format!("{HASH_A}\trefs/heads/main\n{HASH_B}\trefs/heads/release/main\n"),
    )]);
    assert_eq!(
        Git::new(&spy)
            .get_remote_commit_hash("origin", "main")
            .unwrap(),
        HASH_A
    );
}

#[test]
fn test_get_remote_commit_hash_missing_ref() {
    let spy = SpyShell::new([ok(
        &["git", "ls-remote", "--heads", "origin", "gone"],
        "",
    )]);
    let err = Git::new(&spy)
        .get_remote_commit_hash("origin", "gone")
        .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"remote origin does not have branch gone");
}

#[test]
fn test_get_remote_commit_hash_wraps_command_failure() {
    let spy = SpyShell::new([failed(
        &["git", "ls-remote", "--heads", "nowhere", "main"],
        128,
        "fatal: 'nowhere' does not appear to be a git repository\n",
    )]);
    let err = Git::new(&spy)
        .get_remote_commit_hash("nowhere", "main")
        .unwrap_err();
    insta::assert_snapshot!(
        err.to_string(),
        @"error fetching remote nowhere branch main: command 'git ls-remote --heads nowhere main' exited with code 128: fatal: 'nowhere' does not appear to be a git repository"
    );
    assert!(matches!(err, GitError::RemoteLookup { .. }));
}

#[test]
fn test_remote_matches_true() {
    let spy = SpyShell::new([
        ok(
            &["git", "ls-remote", "--heads", "origin", "main"],
            &format!("{HASH_A}\trefs/heads/main\n"),
        ),
        ok(&["git", "rev-parse", "main"], &format!("{HASH_A}\n")),
    ]);
    assert!(Git::new(&spy).remote_matches("origin", "main").unwrap());
    assert_eq!(
        calls(&spy),
        vec![
            "git ls-remote --heads origin main",
            "git rev-parse main"
        ]
    );
}

#[test]
fn test_remote_matches_false() {
    let spy = SpyShell::new([
        ok(
            &["git", "ls-remote", "--heads", "origin", "main"],
            &format!("{HASH_A}\trefs/heads/main\n"),
        ),
        ok(&["git", "rev-parse", "main"], HASH_B),
    ]);
    assert!(!Git::new(&spy).remote_matches("origin", "main").unwrap());
}

#[test]
fn test_remote_matches_stops_on_remote_error() {
    let spy = SpyShell::new([ok(
        &["git", "ls-remote", "--heads", "origin", "topic"],
        "",
    )]);
    let err = Git::new(&spy).remote_matches("origin", "topic").unwrap_err();
    assert!(matches!(err, GitError::RemoteRefNotFound { .. }));
    assert_eq!(spy.calls().len(), 1, "local lookup must not run");
}

#[test]
fn test_works_with_trait_objects() {
    let spy = SpyShell::new([ok(&["git", "rev-parse", "--abbrev-ref", "HEAD"], "dev\n")]);
    let shell: &dyn Shell = &spy;
    assert_eq!(Git::new(shell).branch().unwrap(), "dev");
}
