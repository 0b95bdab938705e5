//! Per-course notification history
//!
//! Notifications are keyed by course id and kept in the order they were
//! sent. The store does not check ids against the catalog, so sending to an
//! unknown course simply starts a separate history.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;
use tracing::{debug, info};

/// A single notification message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    /// Message text as entered
    pub message: String,
    /// When the message was sent
    pub sent_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            sent_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NotificationStore {
    by_course: HashMap<String, Vec<Notification>>,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to the course's history, creating it on first send
    pub fn send(&mut self, course_id: impl Into<String>, message: impl Into<String>) {
        let course_id = course_id.into();
        let history = self.by_course.entry(course_id.clone()).or_default();
        history.push(Notification::new(message));
        info!(course_id = %course_id, count = history.len(), "Notification sent");
    }

    /// Messages for a course in the order they were sent
    ///
    /// Returns an empty list when nothing was ever sent to `course_id`.
    pub fn view(&self, course_id: &str) -> Vec<&str> {
        self.history(course_id)
            .iter()
            .map(|n| n.message.as_str())
            .collect()
    }

    /// Full notification entries for a course, oldest first
    pub fn history(&self, course_id: &str) -> &[Notification] {
        let history = self
            .by_course
            .get(course_id)
            .map(Vec::as_slice)
            .unwrap_or_default();
        debug!(course_id, count = history.len(), "Notification lookup");
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_then_view_in_order() {
        let mut store = NotificationStore::new();
        store.send("CS101", "Midterm moved");
        store.send("CS101", "Room changed");

        assert_eq!(store.view("CS101"), vec!["Midterm moved", "Room changed"]);
    }

    #[test]
    fn test_view_unknown_course_is_empty() {
        let store = NotificationStore::new();
        assert!(store.view("UNKNOWN").is_empty());
        assert!(store.history("UNKNOWN").is_empty());
    }

    #[test]
    fn test_histories_are_independent() {
        let mut store = NotificationStore::new();
        store.send("CS101", "a");
        store.send("MATH201", "b");
        store.send("CS101", "c");

        assert_eq!(store.view("CS101"), vec!["a", "c"]);
        assert_eq!(store.view("MATH201"), vec!["b"]);
    }

    #[test]
    fn test_course_ids_are_case_sensitive() {
        let mut store = NotificationStore::new();
        store.send("CS101", "exam");
        assert!(store.view("cs101").is_empty());
    }

    #[test]
    fn test_empty_message_is_stored() {
        let mut store = NotificationStore::new();
        store.send("NOPE999", "");
        assert_eq!(store.view("NOPE999"), vec![""]);
    }

    #[test]
    fn test_view_does_not_mutate() {
        let mut store = NotificationStore::new();
        store.send("CS101", "one");
        let _ = store.view("CS101");
        let _ = store.view("OTHER");
        assert_eq!(store.view("CS101"), vec!["one"]);
        assert!(store.view("OTHER").is_empty());
    }

    #[test]
    fn test_history_timestamps_are_chronological() {
        let mut store = NotificationStore::new();
        store.send("CS101", "first");
        store.send("CS101", "second");

        let history = store.history("CS101");
        assert_eq!(history.len(), 2);
        assert!(history[0].sent_at <= history[1].sent_at);
    }
}
