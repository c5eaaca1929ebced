// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for repoq.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. repoq.toml (cwd, optional)
//! 3. --config FILE (repeatable)
//! 4. REPOQ_* env vars
//! 5. CLI overrides
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! REPOQ_GLOBAL__LOG_LEVEL=4       → global.log_level = 4
//! REPOQ_GIT__PROGRAM=/opt/git/git → git.program = "/opt/git/git"
//! REPOQ_GIT__WORK_DIR=/src/repo   → git.work_dir = "/src/repo"
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig};

/// File name picked up from the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "repoq.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "REPOQ";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Git invocation options.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use repoq::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("repoq.toml")
    ///     .with_env_prefix("REPOQ")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Check values serde cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::InvalidValue` for an empty `git.program` or a
    /// `git.work_dir` that is not a directory.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.git.program.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "program".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(dir) = &self.git.work_dir
            && !dir.is_dir()
        {
            return Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "work_dir".to_string(),
                message: format!("'{}' is not a directory", dir.display()),
            });
        }
        Ok(())
    }

    /// Format configuration options for display, sorted by key.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_git_options(&mut options);

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        let fmt = |p: &Option<PathBuf>| {
            p.as_ref()
                .map_or_else(String::new, |p| p.display().to_string())
        };

        options.insert(
            "global.log_level".into(),
            self.global.log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global
                .file_log_level
                .unwrap_or(self.global.log_level)
                .as_u8()
                .to_string(),
        );
        options.insert("global.log_file".into(), fmt(&self.global.log_file));
    }

    fn format_git_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert("git.program".into(), self.git.program.clone());
        options.insert(
            "git.work_dir".into(),
            self.git
                .work_dir
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "git.non_interactive".into(),
            self.git.non_interactive.to_string(),
        );
        options.insert(
            "git.merge_stderr".into(),
            self.git.merge_stderr.to_string(),
        );
        for (key, value) in &self.git.env {
            options.insert(format!("git.env.{key}"), value.clone());
        }
    }
}
