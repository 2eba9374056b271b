//! Bounded action log, newest entry first.
//!
//! Display-only: the state machine writes human-readable lines here and
//! never reads them back.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::display::format_number;

/// Rolling log of action descriptions, capped in length. Once the cap is
/// reached the oldest entry is silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLog {
    /// Entries, newest first.
    entries: VecDeque<String>,
    /// Maximum number of entries to keep.
    max_entries: usize,
}

impl Default for ActionLog {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionLog {
    /// Default maximum log size.
    pub const DEFAULT_MAX_ENTRIES: usize = 10;

    /// Creates an empty log with the default cap.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates an empty log with a custom cap.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Prepends an entry, evicting the oldest once over the cap.
    pub fn push(&mut self, entry: impl Into<String>) {
        self.entries.push_front(entry.into());
        while self.entries.len() > self.max_entries {
            self.entries.pop_back();
        }
    }

    /// Records an evaluated result.
    pub fn record_result(&mut self, value: f64) {
        self.push(format!("Result: {}", format_number(value)));
    }

    /// Records a value added to the sample list.
    pub fn record_added(&mut self, value: f64) {
        self.push(format!("Added: {}", format_number(value)));
    }

    /// Records a clear action.
    pub fn record_cleared(&mut self) {
        self.push("Cleared");
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the cap.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Iterates over the entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn latest(&self) -> Option<&str> {
        self.entries.front().map(String::as_str)
    }

    /// Joins the entries into a newline-separated block, newest first.
    #[must_use]
    pub fn render(&self) -> String {
        self.entries
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Serializes the log to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a log from JSON, re-applying the cap.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut log: Self = serde_json::from_str(json)?;
        while log.entries.len() > log.max_entries {
            log.entries.pop_back();
        }
        Ok(log)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let log = ActionLog::new();
        assert!(log.is_empty());
        assert_eq!(log.len(), 0);
        assert_eq!(log.max_entries(), ActionLog::DEFAULT_MAX_ENTRIES);
    }

    #[test]
    fn test_push_prepends() {
        let mut log = ActionLog::new();
        log.push("first");
        log.push("second");
        assert_eq!(log.latest(), Some("second"));
        let all: Vec<_> = log.iter().collect();
        assert_eq!(all, vec!["second", "first"]);
    }

    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = ActionLog::with_capacity(3);
        for i in 1..=5 {
            log.push(format!("entry {i}"));
        }
        assert_eq!(log.len(), 3);
        let all: Vec<_> = log.iter().collect();
        assert_eq!(all, vec!["entry 5", "entry 4", "entry 3"]);
    }

    #[test]
    fn test_default_cap_is_ten() {
        let mut log = ActionLog::new();
        for i in 0..25 {
            log.push(format!("{i}"));
        }
        assert_eq!(log.len(), 10);
        assert_eq!(log.latest(), Some("24"));
        // Oldest surviving entry is 15.
        assert_eq!(log.iter().last(), Some("15"));
    }

    #[test]
    fn test_record_result_formatting() {
        let mut log = ActionLog::new();
        log.record_result(6.0);
        assert_eq!(log.latest(), Some("Result: 6"));
        log.record_result(2.5);
        assert_eq!(log.latest(), Some("Result: 2.5"));
    }

    #[test]
    fn test_record_added_and_cleared() {
        let mut log = ActionLog::new();
        log.record_added(-3.0);
        assert_eq!(log.latest(), Some("Added: -3"));
        log.record_cleared();
        assert_eq!(log.latest(), Some("Cleared"));
    }

    #[test]
    fn test_render_newest_first() {
        let mut log = ActionLog::new();
        log.record_added(1.0);
        log.record_result(2.0);
        assert_eq!(log.render(), "Result: 2\nAdded: 1");
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(ActionLog::new().render(), "");
    }

    #[test]
    fn test_json_round_trip() {
        let mut log = ActionLog::with_capacity(4);
        log.push("a");
        log.push("b");
        let json = log.to_json().unwrap();
        let restored = ActionLog::from_json(&json).unwrap();
        assert_eq!(restored, log);
    }

    #[test]
    fn test_from_json_invalid() {
        assert!(ActionLog::from_json("not json").is_err());
    }

    #[test]
    fn test_from_json_reapplies_cap() {
        let json = r#"{"entries":["e","d","c","b","a"],"max_entries":2}"#;
        let log = ActionLog::from_json(json).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.latest(), Some("e"));
    }
}
