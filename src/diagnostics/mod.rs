// SPDX-License-Identifier: MPL-2.0
//! Activity diagnostics for gallery instances.
//!
//! Each gallery records its state changes into a memory-bounded
//! [`ActivityLog`] that hosts can export as JSON.
//!
//! Once the log is full, recording evicts the oldest entry. Sequence
//! numbers keep counting, so an export shows how much history was lost.

mod events;

use std::collections::VecDeque;

pub use crate::domain::{buffer_capacity_bounds, BufferCapacity};
pub use events::{ActivityEntry, GalleryAction, NavigationSource};

/// Bounded, sequenced history of a gallery's actions.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl ActivityLog {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
            next_sequence: 0,
        }
    }

    pub fn record(&mut self, action: GalleryAction) {
        tracing::trace!(?action, "gallery activity");
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(ActivityEntry {
            sequence: self.next_sequence,
            action,
        });
        self.next_sequence += 1;
    }

    /// Entries still held, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GalleryAction> {
        self.entries.back().map(|entry| &entry.action)
    }

    /// Number of actions recorded over the log's lifetime, evicted ones included.
    #[must_use]
    pub fn total_recorded(&self) -> u64 {
        self.next_sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Held entries as a JSON array.
    pub fn to_json(&self) -> serde_json::Result<String> {
        let entries: Vec<&ActivityEntry> = self.entries.iter().collect();
        serde_json::to_string_pretty(&entries)
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_survives_eviction() {
        let mut log = ActivityLog::new(BufferCapacity::new(buffer_capacity_bounds::MIN));
        for _ in 0..buffer_capacity_bounds::MIN + 5 {
            log.record(GalleryAction::LightboxClosed);
        }

        assert_eq!(log.len(), buffer_capacity_bounds::MIN);
        assert_eq!(log.total_recorded(), (buffer_capacity_bounds::MIN + 5) as u64);
        assert_eq!(log.entries().next().map(|entry| entry.sequence), Some(5));
    }

    #[test]
    fn new_log_is_empty() {
        let log = ActivityLog::default();

        assert!(log.is_empty());
        assert_eq!(log.last(), None);
        assert_eq!(log.capacity(), buffer_capacity_bounds::DEFAULT);
    }

    #[test]
    fn capacity_is_clamped() {
        let log = ActivityLog::new(BufferCapacity::new(0));
        assert_eq!(log.capacity(), buffer_capacity_bounds::MIN);
    }

    #[test]
    fn full_log_keeps_the_newest_entries_in_order() {
        let mut log = ActivityLog::new(BufferCapacity::new(buffer_capacity_bounds::MIN));
        for slide in 0..buffer_capacity_bounds::MIN + 3 {
            log.record(GalleryAction::ZoomToggled {
                slide,
                zoomed: true,
            });
        }

        let sequences: Vec<u64> = log.entries().map(|entry| entry.sequence).collect();
        assert_eq!(sequences.len(), buffer_capacity_bounds::MIN);
        assert!(sequences.windows(2).all(|pair| pair[1] == pair[0] + 1));
        assert_eq!(
            log.last(),
            Some(&GalleryAction::ZoomToggled {
                slide: buffer_capacity_bounds::MIN + 2,
                zoomed: true,
            })
        );
    }

    #[test]
    fn export_is_json_array() {
        let mut log = ActivityLog::default();
        log.record(GalleryAction::ZoomToggled {
            slide: 2,
            zoomed: true,
        });

        let json = log.to_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value[0]["action"], "zoom_toggled");
        assert_eq!(value[0]["slide"], 2);
    }
}
