// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for repoq using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! repoq [global options] <command>
//! branch
//! last [-n COUNT]
//! clean
//! hash <REF>
//! remote-hash <REMOTE> <REF>
//! remote-matches <REMOTE> <REF>
//! options
//! configs
//! version
//! ```

pub mod global;


use crate::cli::global::GlobalOptions;
use clap::{Args, Parser, Subcommand};

/// Git working-tree queries for test harnesses.
#[derive(Debug, Parser)]
#[command(
    name = "repoq",
    author,
    version,
    about = "Answers questions about a git working tree",
    long_about = "Answers yes/no and lookup questions about a git working tree by\n\
                  running the git command-line tool.\n\n\
                  Yes/no commands (clean, remote-matches) exit with status 0 for\n\
                  yes and 1 for no. Errors exit with status 2.",
    after_help = "CONFIG FILES:\n\n\
                  repoq reads `repoq.toml` from the current directory if present,\n\
                  then every file given with --config, then REPOQ_* environment\n\
                  variables (e.g. REPOQ_GIT__PROGRAM), then command-line flags."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their values.
    Options,

    /// Lists the configuration files that were loaded.
    Configs,

    /// Prints the current branch name.
    Branch,

    /// Prints the most recent commit identifiers, newest first.
    Last(LastArgs),

    /// Succeeds if the working tree has no pending changes.
    Clean,

    /// Prints the commit identifier a ref resolves to.
    Hash(RefArgs),

    /// Prints the commit identifier of a branch on a remote.
    #[command(name = "remote-hash")]
    RemoteHash(RemoteRefArgs),

    /// Succeeds if a branch points at the same commit locally and on a remote.
    #[command(name = "remote-matches")]
    RemoteMatches(RemoteRefArgs),
}

/// Arguments for `last`.
#[derive(Debug, Clone, Args)]
pub struct LastArgs {
    /// Number of generations to list.
    #[arg(short = 'n', long = "count", default_value_t = 1)]
    pub count: usize,
}

/// Arguments for commands taking a single ref.
#[derive(Debug, Clone, Args)]
pub struct RefArgs {
    /// Branch, tag or commit.
    #[arg(value_name = "REF")]
    pub reference: String,
}

/// Arguments for commands comparing against a remote.
#[derive(Debug, Clone, Args)]
pub struct RemoteRefArgs {
    /// Remote name or URL.
    pub remote: String,

    /// Branch name.
    #[arg(value_name = "REF")]
    pub reference: String,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse_from<I, T>(iter: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(iter)
}
