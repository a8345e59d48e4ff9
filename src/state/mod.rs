mod ledger;
mod observer;

pub use ledger::{Ledger, DEFAULT_CALORIE_LIMIT};
pub use observer::LedgerObserver;
