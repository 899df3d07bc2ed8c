//! Bounded history of submitted command lines.

use std::collections::VecDeque;

pub const DEFAULT_CAPACITY: usize = 20;

/// Most-recent-first list of successful submissions with a navigation
/// cursor, like shell history under the up and down keys.
#[derive(Debug, Clone)]
pub struct History {
    entries: VecDeque<String>,
    capacity: usize,
    cursor: Option<usize>,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl History {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            cursor: None,
        }
    }

    /// Record `line` unless it repeats the most recent entry. Resets navigation.
    pub fn push(&mut self, line: &str) {
        self.cursor = None;
        if self.capacity == 0 || self.entries.front().is_some_and(|last| last == line) {
            return;
        }
        self.entries.push_front(line.to_string());
        self.entries.truncate(self.capacity);
    }

    /// Step to an older entry. Stays on the oldest one.
    pub fn previous(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => 0,
            Some(i) => (i + 1).min(self.entries.len() - 1),
        };
        self.cursor = Some(next);
        self.entries.get(next).map(String::as_str)
    }

    /// Step to a newer entry; `None` once past the newest.
    pub fn next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(0) | None => {
                self.cursor = None;
                None
            }
            Some(i) => {
                self.cursor = Some(i - 1);
                self.entries.get(i - 1).map(String::as_str)
            }
        }
    }

    /// Entries, most recent first.
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
