// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! External command execution.
//!
//! ```text
//!            Shell::run(&[argv])
//!              /            \
//!             v              v
//!       LocalShell        SpyShell
//!   std::process::Command  scripted FakeCommands
//!   cwd, env, StreamFlags  records every argv
//!             \              /
//!              v            v
//!     RunResult { command, exit_code, stdout, stderr }
//!        .succeeded()  .unwrap_output() -> bytes | CommandFailed
//! ```

pub mod local;
pub mod spy;


use crate::error::{ShellError, ShellResult};

pub use local::{LocalShell, StreamFlags};
pub use spy::{FakeCommand, SpyShell};

/// Runs external commands on behalf of higher-level queries.
pub trait Shell {
    /// Run `command` (program followed by its arguments) to completion.
    ///
    /// A process that runs and exits unsuccessfully is still `Ok`; inspect
    /// [`RunResult::succeeded`] or call [`RunResult::unwrap_output`].
    ///
    /// # Errors
    ///
    /// Returns a `ShellError` if the command could not be run at all.
    fn run(&self, command: &[String]) -> ShellResult<RunResult>;
}

impl<S: Shell + ?Sized> Shell for &S {
    fn run(&self, command: &[String]) -> ShellResult<RunResult> {
        (**self).run(command)
    }
}

impl<S: Shell + ?Sized> Shell for Box<S> {
    fn run(&self, command: &[String]) -> ShellResult<RunResult> {
        (**self).run(command)
    }
}

/// Outcome of one external command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunResult {
    command: Vec<String>,
    exit_code: i32,
    stdout: Vec<u8>,
    stderr: Vec<u8>,
}

impl RunResult {
    #[must_use]
    pub const fn new(command: Vec<String>, exit_code: i32, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        Self {
            command,
            exit_code,
            stdout,
            stderr,
        }
    }

    /// A successful result carrying `stdout`, for scripting a [`SpyShell`].
    #[must_use]
    pub fn ok(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            ..Self::default()
        }
    }

    /// A failed result with the given exit code and `stderr`.
    #[must_use]
    pub fn failed(exit_code: i32, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code,
            stderr: stderr.into(),
            ..Self::default()
        }
    }

    /// Replace the recorded argv.
    #[must_use]
    pub fn with_command(mut self, command: &[String]) -> Self {
        self.command = command.to_vec();
        self
    }

    /// Returns true if the process exited with code 0.
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.exit_code == 0
    }

    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    #[must_use]
    pub fn stdout(&self) -> &[u8] {
        &self.stdout
    }

    #[must_use]
    pub fn stderr(&self) -> &[u8] {
        &self.stderr
    }

    #[must_use]
    pub fn command(&self) -> &[String] {
        &self.command
    }

    /// The argv joined for display, quoting arguments that contain spaces.
    #[must_use]
    pub fn command_line(&self) -> String {
        command_line(&self.command)
    }

    /// Returns the captured stdout, or fails if the command did not succeed.
    ///
    /// # Errors
    ///
    /// Returns `ShellError::CommandFailed` carrying the exit code and the
    /// trimmed stderr when the process exited unsuccessfully.
    pub fn unwrap_output(&self) -> ShellResult<&[u8]> {
        if self.succeeded() {
            Ok(&self.stdout)
        } else {
            Err(ShellError::CommandFailed {
                command: self.command_line(),
                exit_code: self.exit_code,
                stderr: String::from_utf8_lossy(&self.stderr).trim().to_string(),
            })
        }
    }
}

/// Join an argv for logging and error messages.
pub(crate) fn command_line(command: &[String]) -> String {
    use std::fmt::Write as _;

    let mut line = String::new();
    for (i, arg) in command.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        if arg.contains(' ') {
            let _ = write!(line, "\"{arg}\"");
        } else {
            line.push_str(arg);
        }
    }
    line
}
