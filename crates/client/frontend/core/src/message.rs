//! Shared message log primitives for CLI and future UIs.
use std::collections::VecDeque;

/// Category of a UI message, used for styling.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MessageLevel {
    Info,
    Combat,
    Dialogue,
    Warning,
    Error,
}

/// Snapshot of a single message entry.
#[derive(Clone, Debug, PartialEq)]
pub struct MessageEntry {
    pub text: String,
    /// Game clock (ms) when the message was produced.
    pub timestamp: Option<u64>,
    pub level: MessageLevel,
}

impl MessageEntry {
    pub fn new(text: impl Into<String>, timestamp: Option<u64>, level: MessageLevel) -> Self {
        Self {
            text: text.into(),
            timestamp,
            level,
        }
    }
}

/// Circular buffer of messages displayed to the player.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
}

impl MessageLog {
    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
        }
    }

    pub fn push(&mut self, entry: MessageEntry) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        self.push(MessageEntry::new(message, None, MessageLevel::Info));
    }

    /// Newest first.
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&MessageEntry> {
        self.entries.back()
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_entries_fall_off() {
        let mut log = MessageLog::new(2);
        log.push_text("one");
        log.push_text("two");
        log.push_text("three");

        let texts: Vec<&str> = log.iter().map(|e| e.text.as_str()).collect();
        assert_eq!(texts, ["two", "three"]);
        assert_eq!(log.latest().map(|e| e.text.as_str()), Some("three"));
    }

    #[test]
    fn recent_is_newest_first() {
        let mut log = MessageLog::new(8);
        for n in 0..5 {
            log.push(MessageEntry::new(n.to_string(), Some(n), MessageLevel::Combat));
        }
        let recent: Vec<Option<u64>> = log.recent(3).map(|e| e.timestamp).collect();
        assert_eq!(recent, [Some(4), Some(3), Some(2)]);
    }

    #[test]
    fn zero_capacity_still_keeps_one() {
        let mut log = MessageLog::new(0);
        log.push_text("kept");
        assert_eq!(log.capacity(), 1);
        assert_eq!(log.len(), 1);
    }
}
