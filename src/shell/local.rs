// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking process execution on the local machine.
//!
//! ```text
//! LocalShell::run(argv)
//!        |
//!        v
//!   resolve argv[0] via PATH (cached)
//!        |
//!        v
//!   std::process::Command
//!   cwd, env, GIT_TERMINAL_PROMPT=0
//!        |
//!        v
//!   StreamFlags: FORWARD_TO_LOG, MERGE_STDERR
//!        |
//!        v
//!   RunResult
//! ```

use bitflags::bitflags;
use bon::Builder;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::sync::{OnceLock, RwLock};
use tracing::{debug, trace};

use super::{RunResult, Shell, command_line};
use crate::error::{ShellError, ShellResult};

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

bitflags! {
    /// Flags controlling what happens to captured output.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct StreamFlags: u32 {
        /// Log every captured stdout/stderr line at trace level
        const FORWARD_TO_LOG = 0x01;
        /// Append stderr to the captured output
        const MERGE_STDERR = 0x02;
    }
}

impl Default for StreamFlags {
    fn default() -> Self {
        Self::FORWARD_TO_LOG
    }
}

/// Shell that spawns real processes and waits for them.
#[derive(Debug, Clone, Builder)]
pub struct LocalShell {
    /// Working directory for every command
    #[builder(setters(name = with_cwd))]
    cwd: Option<PathBuf>,
    /// Extra environment variables layered over the inherited environment
    #[builder(setters(name = with_env), default)]
    env: BTreeMap<String, String>,
    /// Disable credential prompts from git and its credential managers
    #[builder(setters(name = with_non_interactive), default = true)]
    non_interactive: bool,
    #[builder(setters(name = with_stream_flags), default)]
    stream_flags: StreamFlags,
}

impl Default for LocalShell {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LocalShell {
    #[must_use]
    pub fn cwd(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    #[must_use]
    pub const fn env(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    #[must_use]
    pub const fn non_interactive(&self) -> bool {
        self.non_interactive
    }

    #[must_use]
    pub const fn stream_flags(&self) -> StreamFlags {
        self.stream_flags
    }

    fn build_command(&self, program: &Path, args: &[String]) -> Command {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        if let Some(cwd) = &self.cwd {
            command.current_dir(cwd);
        }

        if self.non_interactive {
            command
                .env("GCM_INTERACTIVE", "never")
                .env("GIT_TERMINAL_PROMPT", "0");
        }

        command.envs(&self.env);
        command
    }

    fn forward_to_log(cmd_line: &str, stdout: &[u8], stderr: &[u8]) {
        for line in String::from_utf8_lossy(stdout).lines() {
            trace!(cmd = %cmd_line, "stdout: {line}");
        }
        for line in String::from_utf8_lossy(stderr).lines() {
            trace!(cmd = %cmd_line, "stderr: {line}");
        }
    }
}

impl Shell for LocalShell {
    fn run(&self, command: &[String]) -> ShellResult<RunResult> {
        let (program, args) = command.split_first().ok_or(ShellError::EmptyCommand)?;
        let program_path = resolve_program(program, self.cwd.as_deref())?;
        let cmd_line = command_line(command);

        if let Some(cwd) = &self.cwd {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let output = self
            .build_command(&program_path, args)
            .output()
            .map_err(|source| ShellError::SpawnFailed {
                command: cmd_line.clone(),
                source,
            })?;

        // Killed by a signal
        let exit_code = output.status.code().unwrap_or(-1);

        if self.stream_flags.contains(StreamFlags::FORWARD_TO_LOG) {
            Self::forward_to_log(&cmd_line, &output.stdout, &output.stderr);
        }

        let mut stdout = output.stdout;
        if self.stream_flags.contains(StreamFlags::MERGE_STDERR) {
            stdout.extend_from_slice(&output.stderr);
        }

        trace!(cmd = %cmd_line, exit_code, "completed");
        Ok(RunResult::new(
            command.to_vec(),
            exit_code,
            stdout,
            output.stderr,
        ))
    }
}

/// Resolve a program name through PATH, caching the result.
///
/// A program given as a path (`./git`, `bin/git`) is not looked up in PATH
/// and is resolved relative to `cwd` when one is set. Such paths are not
/// cached.
///
/// # Errors
///
/// Returns `ShellError::ExecutableNotFound` if `which` cannot find it.
pub fn resolve_program(program: &str, cwd: Option<&Path>) -> ShellResult<PathBuf> {
    let not_found = || ShellError::ExecutableNotFound {
        name: program.to_string(),
    };

    if Path::new(program).components().nth(1).is_some() {
        let found = match cwd {
            Some(dir) => which::which_in(program, None::<&str>, dir),
            None => which::which(program),
        };
        return found.map_err(|_| not_found());
    }

    {
        let cache = exe_cache()
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(path) = cache.get(program) {
            return Ok(path.clone());
        }
    }

    let path = which::which(program).map_err(|_| not_found())?;

    exe_cache()
        .write()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .insert(program.to_string(), path.clone());
    Ok(path)
}
