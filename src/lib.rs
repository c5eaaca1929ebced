// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |             query / options
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          config           |
//!              |   TOML, env, overrides    |
//!              '-------------+-------------'
//!                            v
//!                    git::Git<'_, S>
//!           branch / last / is_clean / remote
//!                            |
//!                            v
//!              shell::Shell (trait seam)
//!              +-------------+-------------+
//!              v                           v
//!         LocalShell                   SpyShell
//!      std::process, which        scripted, for tests
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging            |
//!   +-----------------------------------------+
//! ```
//!
//! # Example
//!
//! ```
//! use repoq::git::Git;
//! use repoq::shell::{FakeCommand, RunResult, SpyShell};
//!
//! let shell = SpyShell::new([FakeCommand::new(
//!     ["git", "rev-parse", "--abbrev-ref", "HEAD"],
//!     RunResult::ok("main\n"),
//! )]);
//! let git = Git::new(&shell);
//! assert_eq!(git.branch()?, "main");
//! # Ok::<(), repoq::error::GitError>(())
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod logging;
pub mod shell;
