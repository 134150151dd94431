//! Command history with a navigation cursor.
//!
//! Entries are kept most-recent-first. Browsing with the arrow keys moves a
//! separate view pointer and never rewrites the stored entries.

use std::collections::VecDeque;

/// Result of stepping the view pointer toward newer entries.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryStep {
    /// The pointer moved onto this entry.
    Entry(String),
    /// The pointer left the newest entry; the input line should be emptied.
    Cleared,
    /// Nothing is selected, so there is nothing newer.
    Unchanged,
}

#[derive(Clone, Debug)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    limit: usize,
    /// Index into `entries` of the entry currently shown, `None` while the
    /// user is editing a fresh line.
    view: Option<usize>,
}

impl CommandHistory {
    /// Creates an empty history holding at most `limit` entries.
    pub fn new(limit: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            limit: limit.max(1),
            view: None,
        }
    }

    /// Records a command as the most recent entry and ends any browsing.
    ///
    /// The oldest entry is dropped once the limit is exceeded.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push_front(line.into());
        self.entries.truncate(self.limit);
        self.view = None;
    }

    /// Moves the view pointer one entry older.
    ///
    /// Returns the entry now selected, or `None` if already at the oldest
    /// entry (or the history is empty).
    pub fn older(&mut self) -> Option<String> {
        let next = self.view.map_or(0, |i| i + 1);
        if next >= self.entries.len() {
            return None;
        }
        self.view = Some(next);
        self.entries.get(next).cloned()
    }

    /// Moves the view pointer one entry newer.
    pub fn newer(&mut self) -> HistoryStep {
        match self.view {
            None => HistoryStep::Unchanged,
            Some(0) => {
                self.view = None;
                HistoryStep::Cleared
            }
            Some(i) => {
                self.view = Some(i - 1);
                self.entries
                    .get(i - 1)
                    .cloned()
                    .map_or(HistoryStep::Unchanged, HistoryStep::Entry)
            }
        }
    }

    /// Forgets the view pointer without touching the entries.
    pub fn reset_view(&mut self) {
        self.view = None;
    }

    pub fn view(&self) -> Option<usize> {
        self.view
    }

    /// Entry by recency: `0` is the most recent command.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(String::as_str)
    }

    /// Iterates most-recent-first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
