use serde::Serialize;

use crate::models::{Entry, EntryKind};

/// Read-only view of the ledger handed to renderers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub limit: f64,
    pub consumed_total: f64,
    pub burned_total: f64,
    pub net: f64,
    pub remaining: f64,
    pub meals: &'a [Entry],
    pub workouts: &'a [Entry],
}

impl<'a> Snapshot<'a> {
    /// Entries of one kind, in insertion order.
    pub fn entries(&self, kind: EntryKind) -> &'a [Entry] {
        match kind {
            EntryKind::Consumed => self.meals,
            EntryKind::Burned => self.workouts,
        }
    }

    /// Net total as a percentage of the limit, clamped to `0..=100`.
    ///
    /// A zero limit reports a full bar (100).
    pub fn progress_percentage(&self) -> f64 {
        progress_percentage(self.net, self.limit)
    }

    /// True once nothing remains of the daily limit.
    pub fn over_limit(&self) -> bool {
        self.remaining <= 0.0
    }
}

pub fn progress_percentage(net: f64, limit: f64) -> f64 {
    if limit <= 0.0 {
        return 100.0;
    }
    (net / limit * 100.0).clamp(0.0, 100.0)
}
