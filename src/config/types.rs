// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration sections.
//!
//! ```text
//! [global]  log_level, file_log_level, log_file
//! [git]     program, work_dir, non_interactive, merge_stderr
//! [git.env] extra environment for every git process
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::git::DEFAULT_PROGRAM;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-5).
    pub log_level: LogLevel,
    /// Log level for file output (0-5), falls back to `log_level`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_log_level: Option<LogLevel>,
    /// Path to log file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

/// How git is invoked.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// Git executable, name or path.
    pub program: String,
    /// Repository to query; defaults to the current directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub work_dir: Option<PathBuf>,
    /// Set `GIT_TERMINAL_PROMPT=0` and `GCM_INTERACTIVE=never`.
    pub non_interactive: bool,
    /// Append git's stderr to the output that gets parsed.
    pub merge_stderr: bool,
    /// Extra environment variables.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub env: BTreeMap<String, String>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            work_dir: None,
            non_interactive: true,
            merge_stderr: false,
            env: BTreeMap::new(),
        }
    }
}
