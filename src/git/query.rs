// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! The [`Git`] query façade.

use tracing::{debug, warn};

use super::history::LastCommits;
use crate::error::{GitError, GitResult, ShellResult};
use crate::shell::{RunResult, Shell};

/// Program prepended to every command unless overridden.
pub const DEFAULT_PROGRAM: &str = "git";

/// Answers questions about a working tree by running git through a shell.
///
/// The shell is borrowed; the caller owns it and may share it between
/// several queries.
pub struct Git<'a, S: Shell + ?Sized> {
    shell: &'a S,
    program: String,
}

impl<'a, S: Shell + ?Sized> Git<'a, S> {
    pub fn new(shell: &'a S) -> Self {
        Self {
            shell,
            program: DEFAULT_PROGRAM.to_string(),
        }
    }

    /// Use a different git executable (name or path).
    #[must_use]
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    #[must_use]
    pub const fn shell(&self) -> &'a S {
        self.shell
    }

    /// Run git with `args` and return the raw result.
    ///
    /// # Errors
    ///
    /// Returns whatever the shell returns when the process cannot be run.
    /// A non-zero exit is not an error here.
    pub fn run<I, A>(&self, args: I) -> ShellResult<RunResult>
    where
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let command: Vec<String> = std::iter::once(self.program.clone())
            .chain(args.into_iter().map(Into::into))
            .collect();
        self.shell.run(&command)
    }

    /// Run git and return its trimmed stdout.
    fn run_text(&self, args: &[&str]) -> GitResult<String> {
        let result = self.run(args.iter().copied())?;
        decode(&result)
    }

    /// Commit identifiers of the last `limit` generations, newest first.
    ///
    /// Lazy: each call to `next()` runs exactly one `rev-parse HEAD~N`.
    pub const fn last(&self, limit: usize) -> LastCommits<'_, 'a, S> {
        LastCommits::new(self, limit)
    }

    /// Current symbolic branch name (`HEAD` when detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `rev-parse` fails.
    pub fn branch(&self) -> GitResult<String> {
        self.run_text(&["rev-parse", "--abbrev-ref", "HEAD"])
    }

    /// True iff `status --porcelain` succeeds and reports nothing.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the process cannot be run or its output is not
    /// UTF-8. A status command that exits unsuccessfully yields `Ok(false)`.
    pub fn is_clean(&self) -> GitResult<bool> {
        let result = self.run(["status", "--porcelain"])?;
        if !result.succeeded() {
            warn!(
                exit_code = result.exit_code(),
                stderr = %String::from_utf8_lossy(result.stderr()).trim(),
                "status failed, treating working tree as dirty"
            );
            return Ok(false);
        }
        Ok(decode(&result)?.is_empty())
    }

    /// True iff `reference` resolves to the same commit on `remote` and locally.
    ///
    /// The two lookups are not atomic.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if either lookup fails.
    pub fn remote_matches(&self, remote: &str, reference: &str) -> GitResult<bool> {
        let remote_hash = self.get_remote_commit_hash(remote, reference)?;
        let local_hash = self.get_commit_hash(reference)?;
        debug!(remote, reference, %remote_hash, %local_hash, "compared heads");
        Ok(remote_hash == local_hash)
    }

    /// Commit identifier of head `reference` on `remote`.
    ///
    /// # Errors
    ///
    /// - `GitError::RemoteRefNotFound` if the remote lists no matching head.
    /// - `GitError::RemoteLookup` wrapping any other failure.
    pub fn get_remote_commit_hash(&self, remote: &str, reference: &str) -> GitResult<String> {
        let listing = self
            .run_text(&["ls-remote", "--heads", remote, reference])
            .map_err(|source| GitError::RemoteLookup {
                remote: remote.to_string(),
                reference: reference.to_string(),
                source: Box::new(source),
            })?;

        listing
            .lines()
            .next()
            .and_then(|line| line.split_whitespace().next())
            .map(str::to_string)
            .ok_or_else(|| GitError::RemoteRefNotFound {
                remote: remote.to_string(),
                reference: reference.to_string(),
            })
    }

    /// Full commit identifier `reference` resolves to.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if `rev-parse` fails.
    pub fn get_commit_hash(&self, reference: &str) -> GitResult<String> {
        self.run_text(&["rev-parse", reference])
    }
}

impl<S: Shell + ?Sized> std::fmt::Debug for Git<'_, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("program", &self.program)
            .finish_non_exhaustive()
    }
}

/// Successful stdout as trimmed UTF-8.
fn decode(result: &RunResult) -> GitResult<String> {
    let bytes = result.unwrap_output()?;
    let text = std::str::from_utf8(bytes).map_err(|source| GitError::InvalidUtf8 {
        command: result.command_line(),
        source,
    })?;
    Ok(text.trim().to_string())
}
