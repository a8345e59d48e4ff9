use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::models::{Entry, EntryId, EntryKind, IdGenerator, Snapshot};
use crate::state::LedgerObserver;

/// Daily limit a fresh ledger starts with.
pub const DEFAULT_CALORIE_LIMIT: f64 = 2000.0;

/// Tracks meals and workouts against a daily calorie limit.
///
/// Totals are refolded from the entry lists after every mutation, so they
/// always match the entries currently held.
pub struct Ledger {
    limit: f64,
    meals: Vec<Entry>,
    workouts: Vec<Entry>,
    consumed_total: f64,
    burned_total: f64,
    ids: IdGenerator,
    observers: Vec<Box<dyn LedgerObserver>>,
}

impl Ledger {
    /// Create an empty ledger with the default limit.
    pub fn new() -> Self {
        Self::with_ids(IdGenerator::new())
    }

    /// Create an empty ledger that draws ids from the given generator.
    pub fn with_ids(ids: IdGenerator) -> Self {
        Self {
            limit: DEFAULT_CALORIE_LIMIT,
            meals: Vec::new(),
            workouts: Vec::new(),
            consumed_total: 0.0,
            burned_total: 0.0,
            ids,
            observers: Vec::new(),
        }
    }

    /// Create an empty ledger with a custom limit.
    pub fn with_limit(limit: f64) -> Result<Self> {
        let mut ledger = Self::new();
        ledger.limit = validate_limit(limit)?;
        Ok(ledger)
    }

    /// Register an observer. It is not called until the next mutation.
    pub fn subscribe(&mut self, observer: Box<dyn LedgerObserver>) {
        self.observers.push(observer);
    }

    /// Record a meal or workout and return the stored entry.
    ///
    /// The name is taken as-is; callers validate it. Calories must be finite
    /// and non-negative, since the kind alone decides the sign.
    pub fn add_entry(
        &mut self,
        kind: EntryKind,
        name: impl Into<String>,
        calories: f64,
    ) -> Result<Entry> {
        if !calories.is_finite() || calories < 0.0 {
            return Err(TrackerError::InvalidCalories(calories));
        }

        let entry = Entry::new(self.ids.next_id(), kind, name, calories);
        debug!(%kind, id = %entry.id, name = %entry.name, calories, "adding entry");

        self.entries_mut(kind).push(entry.clone());
        self.recompute();
        self.notify();
        Ok(entry)
    }

    /// Remove the entry with `id` from the `kind` list.
    ///
    /// Returns false and changes nothing if no such entry exists.
    pub fn remove_entry(&mut self, kind: EntryKind, id: &EntryId) -> bool {
        let entries = self.entries_mut(kind);
        let Some(index) = entries.iter().position(|e| &e.id == id) else {
            debug!(%kind, %id, "entry not found, nothing removed");
            return false;
        };

        let removed = entries.remove(index);
        debug!(%kind, %id, name = %removed.name, "removed entry");
        self.recompute();
        self.notify();
        true
    }

    /// Clear all entries. The limit is kept.
    pub fn reset(&mut self) {
        info!(
            meals = self.meals.len(),
            workouts = self.workouts.len(),
            "resetting ledger"
        );
        self.meals.clear();
        self.workouts.clear();
        self.recompute();
        self.notify();
    }

    /// Replace the daily limit. Entries and totals are untouched.
    pub fn set_limit(&mut self, limit: f64) -> Result<()> {
        self.limit = validate_limit(limit)?;
        info!(limit, "daily limit set");
        self.notify();
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        view(
            self.limit,
            self.consumed_total,
            self.burned_total,
            &self.meals,
            &self.workouts,
        )
    }

    pub fn limit(&self) -> f64 {
        self.limit
    }

    pub fn consumed_total(&self) -> f64 {
        self.consumed_total
    }

    pub fn burned_total(&self) -> f64 {
        self.burned_total
    }

    /// Consumed minus burned.
    pub fn net(&self) -> f64 {
        self.snapshot().net
    }

    /// Limit minus net; zero or below means over the limit.
    pub fn remaining(&self) -> f64 {
        self.snapshot().remaining
    }

    pub fn over_limit(&self) -> bool {
        self.snapshot().over_limit()
    }

    /// Entries of one kind, in insertion order.
    pub fn entries(&self, kind: EntryKind) -> &[Entry] {
        match kind {
            EntryKind::Consumed => &self.meals,
            EntryKind::Burned => &self.workouts,
        }
    }

    pub fn find(&self, kind: EntryKind, id: &EntryId) -> Option<&Entry> {
        self.entries(kind).iter().find(|e| &e.id == id)
    }

    /// Entries of one kind whose name contains `text`, ignoring case.
    pub fn filter(&self, kind: EntryKind, text: &str) -> Vec<&Entry> {
        self.entries(kind)
            .iter()
            .filter(|e| e.matches(text))
            .collect()
    }

    /// Total number of entries of both kinds.
    pub fn len(&self) -> usize {
        self.meals.len() + self.workouts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meals.is_empty() && self.workouts.is_empty()
    }

    fn entries_mut(&mut self, kind: EntryKind) -> &mut Vec<Entry> {
        match kind {
            EntryKind::Consumed => &mut self.meals,
            EntryKind::Burned => &mut self.workouts,
        }
    }

    fn recompute(&mut self) {
        self.consumed_total = self.meals.iter().map(|e| e.calories).sum();
        self.burned_total = self.workouts.iter().map(|e| e.calories).sum();
    }

    fn notify(&mut self) {
        let snapshot = view(
            self.limit,
            self.consumed_total,
            self.burned_total,
            &self.meals,
            &self.workouts,
        );
        for observer in &mut self.observers {
            observer.on_change(&snapshot);
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive net and remaining from the stored totals.
fn view<'a>(
    limit: f64,
    consumed_total: f64,
    burned_total: f64,
    meals: &'a [Entry],
    workouts: &'a [Entry],
) -> Snapshot<'a> {
    let net = consumed_total - burned_total;
    Snapshot {
        limit,
        consumed_total,
        burned_total,
        net,
        remaining: limit - net,
        meals,
        workouts,
    }
}

fn validate_limit(limit: f64) -> Result<f64> {
    if !limit.is_finite() || limit < 0.0 {
        return Err(TrackerError::InvalidLimit(limit));
    }
    Ok(limit)
}
