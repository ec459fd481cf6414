// Copyright 2018 the Kurbo Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounded undo and redo.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::Path;

/// A bounded stack of serialized path states.
///
/// The newest state is at index 0. Undo walks towards older states and redo
/// walks back; committing a new state while walked back discards the states
/// that were undone.
///
/// ```
/// use pathmark::History;
/// let mut history = History::new(10);
/// history.commit_str("M 0 0");
/// history.commit_str("M 0 0 L 1 1");
/// assert_eq!(history.undo(), "M 0 0");
/// assert_eq!(history.redo(), "M 0 0 L 1 1");
/// ```
#[derive(Clone, Debug)]
pub struct History {
    entries: VecDeque<String>,
    cursor: usize,
    max_size: usize,
    /// The last state handed out by undo or redo. Its commit is the host
    /// applying it, and must not be recorded again.
    applied: Option<String>,
}

impl History {
    /// Default number of states kept.
    pub const DEFAULT_SIZE: usize = 50;

    /// Create a history holding at most `max_size` states, at least one.
    ///
    /// It starts with a single empty state, so undoing past the first real
    /// commit yields an empty path.
    pub fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::from([String::new()]),
            cursor: 0,
            max_size: max_size.max(1),
            applied: None,
        }
    }

    /// Record the serialized form of `path`.
    ///
    /// Returns whether a new state was added.
    pub fn commit(&mut self, path: &Path) -> bool {
        self.commit_str(&path.to_string())
    }

    /// Record a serialized path state.
    ///
    /// Nothing is recorded when `d` is the state just produced by
    /// [`undo`](Self::undo) or [`redo`](Self::redo), or when it equals the
    /// current state. Otherwise states ahead of the cursor are discarded,
    /// `d` becomes the newest state, and the oldest state is dropped if the
    /// history is over capacity.
    pub fn commit_str(&mut self, d: &str) -> bool {
        if self.applied.as_deref() == Some(d) {
            trace!("skipping commit of applied history state");
            return false;
        }
        self.applied = None;
        self.entries.drain(..self.cursor);
        self.cursor = 0;
        if self.entries.front().is_some_and(|front| front == d) {
            return false;
        }
        self.entries.push_front(d.to_owned());
        if self.entries.len() > self.max_size {
            self.entries.pop_back();
        }
        debug!(len = self.entries.len(), "committed history state");
        true
    }

    /// Step to the next older state and return it.
    ///
    /// At the oldest state this returns that state again.
    pub fn undo(&mut self) -> &str {
        self.cursor = (self.cursor + 1).min(self.entries.len() - 1);
        self.apply()
    }

    /// Step to the next newer state and return it.
    ///
    /// At the newest state this returns that state again.
    pub fn redo(&mut self) -> &str {
        self.cursor = self.cursor.saturating_sub(1);
        self.apply()
    }

    fn apply(&mut self) -> &str {
        let d = &self.entries[self.cursor];
        self.applied = Some(d.clone());
        d
    }

    /// Forget every state and start again from a single empty one.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.push_back(String::new());
        self.cursor = 0;
        self.applied = None;
    }

    /// The state at the cursor.
    pub fn current(&self) -> &str {
        &self.entries[self.cursor]
    }

    /// Whether [`undo`](Self::undo) would move to another state.
    pub fn can_undo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Whether [`redo`](Self::redo) would move to another state.
    pub fn can_redo(&self) -> bool {
        self.cursor > 0
    }

    /// Number of stored states.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: a history holds at least one state.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of stored states.
    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// How many steps back from the newest state the cursor is.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The stored states, newest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn states(history: &History) -> Vec<&str> {
        history.entries().collect()
    }

    #[test]
    fn starts_with_empty_state() {
        let mut history = History::default();
        assert_eq!(states(&history), [""]);
        assert_eq!(history.undo(), "");
        assert_eq!(history.redo(), "");
        assert!(!history.can_undo());
    }

    #[test]
    fn undo_redo_walk() {
        let mut history = History::new(10);
        for d in ["a", "b", "c"] {
            assert!(history.commit_str(d));
        }
        assert_eq!(history.undo(), "b");
        assert_eq!(history.undo(), "a");
        assert_eq!(history.undo(), "");
        assert_eq!(history.undo(), "");
        assert_eq!(history.redo(), "a");
        assert_eq!(history.redo(), "b");
        assert_eq!(history.redo(), "c");
        assert_eq!(history.redo(), "c");
    }

    #[test]
    fn applied_state_is_not_recommitted() {
        let mut history = History::new(10);
        history.commit_str("a");
        history.commit_str("b");
        let d = history.undo().to_owned();
        assert!(!history.commit_str(&d));
        assert_eq!(history.cursor(), 1);
        assert!(history.can_redo());
    }

    #[test]
    fn commit_discards_redo_states() {
        let mut history = History::new(10);
        history.commit_str("a");
        history.commit_str("b");
        history.undo();
        assert!(history.commit_str("c"));
        assert_eq!(states(&history), ["c", "a", ""]);
        assert!(!history.can_redo());
    }

    #[test]
    fn consecutive_duplicates_collapse() {
        let mut history = History::new(10);
        assert!(history.commit_str("a"));
        assert!(!history.commit_str("a"));
        assert!(history.commit_str("b"));
        assert!(history.commit_str("a"));
        assert_eq!(states(&history), ["a", "b", "a", ""]);
    }

    #[test]
    fn bounded_by_max_size() {
        let mut history = History::new(3);
        for i in 0..10 {
            history.commit_str(&i.to_string());
        }
        assert_eq!(states(&history), ["9", "8", "7"]);
        assert_eq!(history.undo(), "8");
        assert_eq!(history.undo(), "7");
        assert_eq!(history.undo(), "7");
    }

    #[test]
    fn clear_resets() {
        let mut history = History::new(0);
        assert_eq!(history.max_size(), 1);
        history.commit_str("a");
        assert_eq!(states(&history), ["a"]);
        history.clear();
        assert_eq!(states(&history), [""]);
        assert_eq!(history.current(), "");
        assert!(!history.is_empty());
    }
}
