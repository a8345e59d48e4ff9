pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use error::{Result, TrackerError};
pub use models::{Entry, EntryId, EntryKind, Snapshot};
pub use state::{Ledger, LedgerObserver};
