mod entry;
mod snapshot;

pub use entry::{Entry, EntryId, EntryKind, IdGenerator};
pub use snapshot::{progress_percentage, Snapshot};
