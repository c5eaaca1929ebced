// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git queries over a [`Shell`](crate::shell::Shell).
//!
//! ```text
//!   Git<'a, S: Shell>
//!     .run(args)          "git" + args --> Shell::run --> RunResult
//!     .last(n)            rev-parse HEAD~0 .. HEAD~(n-1), one per next()
//!     .branch()           rev-parse --abbrev-ref HEAD
//!     .is_clean()         status --porcelain
//!     .get_commit_hash    rev-parse <ref>
//!     .get_remote_commit_hash
//!                         ls-remote --heads <remote> <ref>
//!     .remote_matches     remote hash == local hash
//! ```
//!
//! Every query decodes stdout as UTF-8 and trims it. Nothing is retried.

pub mod history;
pub mod query;

#[cfg(test)]
mod tests;

pub use history::LastCommits;
pub use query::{DEFAULT_PROGRAM, Git};
