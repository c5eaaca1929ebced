// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   query  (branch, last, clean, hash, remote-hash, remote-matches)
//!   config (options, configs)
//! ```

pub mod config;
pub mod query;
