// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   ShellError --#[from]--> GitError --?--> anyhow (cmd / main)
//!   ConfigError ------------------------> anyhow
//!
//!   Git     Shell, InvalidUtf8, RemoteRefNotFound, RemoteLookup
//!   Shell   EmptyCommand, ExecutableNotFound, SpawnFailed, CommandFailed,
//!           UnexpectedCommand, ScriptExhausted
//!   Config  ParseError, InvalidValue
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type for [`crate::shell::Shell`] implementations.
pub type ShellResult<T> = std::result::Result<T, ShellError>;

/// Result type for [`crate::git::Git`] queries.
pub type GitResult<T> = std::result::Result<T, GitError>;

// --- Shell Errors ---

/// Errors raised while running an external command.
#[derive(Debug, Error)]
pub enum ShellError {
    /// An empty argument list was passed to the shell.
    #[error("cannot run an empty command")]
    EmptyCommand,

    /// Executable not found in PATH.
    #[error("executable not found: '{name}' (not in PATH)")]
    ExecutableNotFound { name: String },

    /// Failed to spawn process.
    #[error("failed to spawn process '{command}': {source}")]
    SpawnFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// Process ran but exited unsuccessfully.
    #[error("command '{command}' exited with code {exit_code}: {stderr}")]
    CommandFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// A scripted shell received a command it did not expect.
    #[error("unexpected command: expected '{expected}', got '{actual}'")]
    UnexpectedCommand { expected: String, actual: String },

    /// A scripted shell ran out of prepared results.
    #[error("no scripted result left for command '{command}'")]
    ScriptExhausted { command: String },
}

// --- Git Errors ---

/// Git query errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// The underlying command could not be run or did not succeed.
    #[error(transparent)]
    Shell(#[from] ShellError),

    /// Command output was not valid UTF-8.
    #[error("output of '{command}' is not valid UTF-8: {source}")]
    InvalidUtf8 {
        command: String,
        #[source]
        source: std::str::Utf8Error,
    },

    /// The remote lists no head matching the requested ref.
    #[error("remote {remote} does not have branch {reference}")]
    RemoteRefNotFound { remote: String, reference: String },

    /// Listing the remote failed for another reason.
    #[error("error fetching remote {remote} branch {reference}: {source}")]
    RemoteLookup {
        remote: String,
        reference: String,
        #[source]
        source: Box<Self>,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration.
    #[error("failed to parse config '{path}': {message}")]
    ParseError { path: String, message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}
