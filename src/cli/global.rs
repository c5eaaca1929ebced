// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Global CLI options available for all commands.
//!
//! # Option Precedence
//!
//! ```text
//! --config FILE     ← Additional config files (can repeat)
//! -C DIR            ← git.work_dir override
//! --git PROGRAM     ← git.program override
//! -l LEVEL / -v     ← Console verbosity (0-5)
//! --file-log-level  ← File verbosity (overrides --log-level)
//! --log-file FILE   ← global.log_file override
//!
//! Precedence: CLI flags > REPOQ_* env > --config > repoq.toml > defaults
//! ```

use clap::{ArgAction, Args};
use std::path::PathBuf;

use crate::config::loader::ConfigLoader;
use crate::error::Result;

/// Global options available for all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalOptions {
    /// Path to additional TOML configuration file(s).
    /// Can be specified multiple times.
    #[arg(long = "config", value_name = "FILE", action = ArgAction::Append, global = true)]
    pub configs: Vec<PathBuf>,

    /// Disables loading `repoq.toml` from the current directory.
    #[arg(long = "no-default-config", global = true)]
    pub no_default_config: bool,

    /// Run as if started in DIR.
    #[arg(short = 'C', value_name = "DIR", global = true)]
    pub work_dir: Option<PathBuf>,

    /// Git executable to run.
    #[arg(long = "git", value_name = "PROGRAM", global = true)]
    pub git_program: Option<String>,

    /// Console log level (0=silent, 1=errors, 2=warnings, 3=info, 4=debug, 5=trace).
    #[arg(short = 'l', long = "log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5))]
    pub log_level: Option<u8>,

    /// Raise console verbosity by one level per occurrence.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// File log level, overrides --log-level for the log file.
    #[arg(long = "file-log-level", value_name = "LEVEL", global = true,
        value_parser = clap::value_parser!(u8).range(0..=5))]
    pub file_log_level: Option<u8>,

    /// Path to log file.
    #[arg(long = "log-file", value_name = "FILE", global = true)]
    pub log_file: Option<PathBuf>,

    /// Print answers as JSON.
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Layer command-line overrides on top of the loader's sources.
    ///
    /// # Errors
    ///
    /// Returns an error if an override key is rejected by the loader.
    pub fn apply_overrides(&self, mut loader: ConfigLoader) -> Result<ConfigLoader> {
        if let Some(level) = self.log_level {
            loader = loader.set("global.log_level", i64::from(level))?;
        }

        // file_log_level falls back to log_level if not specified
        if let Some(level) = self.file_log_level.or(self.log_level) {
            loader = loader.set("global.file_log_level", i64::from(level))?;
        }

        if let Some(path) = &self.log_file {
            loader = loader.set("global.log_file", path.display().to_string())?;
        }

        if let Some(dir) = &self.work_dir {
            loader = loader.set("git.work_dir", dir.display().to_string())?;
        }

        if let Some(program) = &self.git_program {
            loader = loader.set("git.program", program.clone())?;
        }

        Ok(loader)
    }
}
