//! Bounded in-memory log of failed requests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use serde::Serialize;

use crate::services::clock::Clock;

/// A request that ended in a client or server error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    pub at: DateTime<Utc>,
    pub method: String,
    pub path: String,
    pub status: u16,
}

/// Keeps the most recent errors, dropping entries past `retention` or beyond `capacity`.
pub struct ErrorLog {
    clock: Arc<dyn Clock>,
    capacity: usize,
    retention: TimeDelta,
    entries: Mutex<VecDeque<ErrorEntry>>,
}

impl ErrorLog {
    pub fn new(clock: Arc<dyn Clock>, capacity: usize, retention: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            clock,
            capacity,
            retention: TimeDelta::from_std(retention).unwrap_or(TimeDelta::MAX),
            entries: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    pub fn record(&self, method: &str, path: &str, status: u16) {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        self.prune(&mut entries, now);

        if entries.len() >= self.capacity {
            entries.pop_front();
        }
        entries.push_back(ErrorEntry {
            at: now,
            method: method.to_string(),
            path: path.to_string(),
            status,
        });
    }

    /// Entries still within retention, oldest first.
    pub fn recent(&self) -> Vec<ErrorEntry> {
        let now = self.clock.now();
        let mut entries = self.entries.lock().unwrap_or_else(|e| e.into_inner());
        self.prune(&mut entries, now);
        entries.iter().cloned().collect()
    }

    fn prune(&self, entries: &mut VecDeque<ErrorEntry>, now: DateTime<Utc>) {
        while let Some(front) = entries.front() {
            if now - front.at < self.retention {
                break;
            }
            entries.pop_front();
        }
    }
}
