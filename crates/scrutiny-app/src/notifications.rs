//! On-screen notification queue.
//!
//! Time is passed in rather than read, so the same queue runs under real and
//! simulated clocks.

use std::time::Duration;

use scrutiny_core::{NotificationRecord, NotificationSink};

#[derive(Debug, Clone, PartialEq, Eq)]
struct Visible {
    record: NotificationRecord,
    remaining: Duration,
}

/// Notifications currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationCenter {
    visible: Vec<Visible>,
}

impl NotificationCenter {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records still on screen.
    pub fn visible(&self) -> impl Iterator<Item = &NotificationRecord> {
        self.visible.iter().map(|v| &v.record)
    }

    /// Number of records on screen.
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// True if nothing is on screen.
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Let `elapsed` pass and drop records whose duration ran out.
    ///
    /// Returns how many were dismissed.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        let before = self.visible.len();
        for entry in &mut self.visible {
            entry.remaining = entry.remaining.saturating_sub(elapsed);
        }
        self.visible.retain(|entry| !entry.remaining.is_zero());
        before - self.visible.len()
    }
}

impl NotificationSink for NotificationCenter {
    fn add_notification(&mut self, record: NotificationRecord) {
        let remaining = record.duration;
        self.visible.push(Visible { record, remaining });
    }
}
