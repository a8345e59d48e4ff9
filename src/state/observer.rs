use crate::models::Snapshot;

/// Post-mutation hook for anything that projects the ledger onto a display.
///
/// Called once after every successful add, remove, reset, or limit change,
/// with aggregates already recomputed.
pub trait LedgerObserver {
    fn on_change(&mut self, snapshot: &Snapshot<'_>);
}
