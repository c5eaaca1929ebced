// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scripted shell for tests.
//!
//! Hands back prepared [`RunResult`]s in order and records every argv it
//! receives, so callers can assert both on returned values and on the exact
//! sequence of commands issued.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::{RunResult, Shell, command_line};
use crate::error::{ShellError, ShellResult};

/// One scripted command and the result to return for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FakeCommand {
    command: Vec<String>,
    result: RunResult,
}

impl FakeCommand {
    pub fn new<I, S>(command: I, result: RunResult) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            command: command.into_iter().map(Into::into).collect(),
            result,
        }
    }

    #[must_use]
    pub fn command(&self) -> &[String] {
        &self.command
    }
}

/// Shell that replays [`FakeCommand`]s instead of spawning processes.
///
/// In strict mode (the default) every received argv must equal the next
/// scripted one. A lenient spy only records what it was asked to run.
#[derive(Debug)]
pub struct SpyShell {
    script: RefCell<VecDeque<FakeCommand>>,
    calls: RefCell<Vec<Vec<String>>>,
    strict: bool,
}

impl SpyShell {
    pub fn new(script: impl IntoIterator<Item = FakeCommand>) -> Self {
        Self {
            script: RefCell::new(script.into_iter().collect()),
            calls: RefCell::new(Vec::new()),
            strict: true,
        }
    }

    /// A spy that does not compare argvs against the script.
    pub fn lenient(script: impl IntoIterator<Item = FakeCommand>) -> Self {
        Self {
            strict: false,
            ..Self::new(script)
        }
    }

    /// Every argv received so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.borrow().clone()
    }

    /// Number of scripted commands not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.borrow().len()
    }

    /// Panics unless every scripted command was run.
    #[track_caller]
    pub fn assert_commands_called(&self) {
        let script = self.script.borrow();
        assert!(
            script.is_empty(),
            "expected commands were never run: {:?}",
            script
                .iter()
                .map(|fake| command_line(&fake.command))
                .collect::<Vec<_>>()
        );
    }
}

impl Shell for SpyShell {
    fn run(&self, command: &[String]) -> ShellResult<RunResult> {
        self.calls.borrow_mut().push(command.to_vec());

        let next = self
            .script
            .borrow_mut()
            .pop_front()
            .ok_or_else(|| ShellError::ScriptExhausted {
                command: command_line(command),
            })?;

        if self.strict && next.command != command {
            return Err(ShellError::UnexpectedCommand {
                expected: command_line(&next.command),
                actual: command_line(command),
            });
        }

        Ok(next.result.with_command(command))
    }
}
