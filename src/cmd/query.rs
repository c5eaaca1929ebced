// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Query commands.
//!
//! ```text
//! Config --> build_shell() --> LocalShell
//!                                  |
//!                          Git::new(&shell)
//!                                  |
//!        run_query_command(&Command, &git) --> Answer
//!                                  |
//!              render(json) on stdout, exit_status()
//! ```

use anyhow::{Context, bail};
use serde_json::Value;
use tracing::info;

use crate::cli::Command;
use crate::config::Config;
use crate::error::Result;
use crate::git::Git;
use crate::shell::{LocalShell, Shell, StreamFlags};

/// Result of one query, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Text(String),
    List(Vec<String>),
    Flag(bool),
}

impl Answer {
    /// Plain text, or a JSON value when `json` is set.
    #[must_use]
    pub fn render(&self, json: bool) -> String {
        if json {
            return match self {
                Self::Text(text) => Value::from(text.as_str()),
                Self::List(items) => Value::from(items.clone()),
                Self::Flag(flag) => Value::from(*flag),
            }
            .to_string();
        }

        match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join("\n"),
            Self::Flag(flag) => flag.to_string(),
        }
    }

    /// Process exit status: 1 for a negative yes/no answer, 0 otherwise.
    #[must_use]
    pub const fn exit_status(&self) -> u8 {
        match self {
            Self::Flag(false) => 1,
            _ => 0,
        }
    }
}

/// Build the process-spawning shell described by `[git]`.
#[must_use]
pub fn build_shell(config: &Config) -> LocalShell {
    let mut flags = StreamFlags::FORWARD_TO_LOG;
    if config.git.merge_stderr {
        flags |= StreamFlags::MERGE_STDERR;
    }

    LocalShell::builder()
        .maybe_with_cwd(config.git.work_dir.clone())
        .with_env(config.git.env.clone())
        .with_non_interactive(config.git.non_interactive)
        .with_stream_flags(flags)
        .build()
}

/// Run one query command against `git`.
///
/// # Errors
///
/// Returns an error if the underlying git query fails, or if `command` is
/// not a query.
pub fn run_query_command<S: Shell + ?Sized>(
    command: &Command,
    git: &Git<'_, S>,
) -> Result<Answer> {
    let answer = match command {
        Command::Branch => {
            Answer::Text(git.branch().context("failed to read current branch")?)
        }
        Command::Last(args) => Answer::List(
            git.last(args.count)
                .collect::<std::result::Result<Vec<_>, _>>()
                .context("failed to list recent commits")?,
        ),
        Command::Clean => {
            Answer::Flag(git.is_clean().context("failed to check working tree status")?)
        }
        Command::Hash(args) => Answer::Text(
            git.get_commit_hash(&args.reference)
                .with_context(|| format!("failed to resolve {}", args.reference))?,
        ),
        Command::RemoteHash(args) => {
            Answer::Text(git.get_remote_commit_hash(&args.remote, &args.reference)?)
        }
        Command::RemoteMatches(args) => {
            let matches = git.remote_matches(&args.remote, &args.reference)?;
            info!(
                remote = %args.remote,
                reference = %args.reference,
                matches,
                "compared local and remote"
            );
            Answer::Flag(matches)
        }
        Command::Version | Command::Options | Command::Configs => {
            bail!("not a query command: {command:?}")
        }
    };
    Ok(answer)
}
