// repoq: git working-tree queries for test harnesses
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Lazy walk over recent commit identifiers.

use std::iter::FusedIterator;

use super::query::Git;
use crate::error::GitResult;
use crate::shell::Shell;

/// Iterator returned by [`Git::last`].
///
/// Yields `HEAD~0`, `HEAD~1`, ... up to `limit` items. After an `Err` item or
/// after `limit` items it only returns `None`.
#[derive(Debug)]
pub struct LastCommits<'g, 'a, S: Shell + ?Sized> {
    git: &'g Git<'a, S>,
    generation: usize,
    limit: usize,
}

impl<'g, 'a, S: Shell + ?Sized> LastCommits<'g, 'a, S> {
    pub(super) const fn new(git: &'g Git<'a, S>, limit: usize) -> Self {
        Self {
            git,
            generation: 0,
            limit,
        }
    }
}

impl<S: Shell + ?Sized> Iterator for LastCommits<'_, '_, S> {
    type Item = GitResult<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.generation >= self.limit {
            return None;
        }

        let generation = self.generation;
        let hash = self.git.get_commit_hash(&format!("HEAD~{generation}"));
        self.generation = if hash.is_ok() {
            generation + 1
        } else {
            self.limit
        };
        Some(hash)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.limit - self.generation;
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl<S: Shell + ?Sized> FusedIterator for LastCommits<'_, '_, S> {}
