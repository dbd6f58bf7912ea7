//! Ledger domain model: entries, the aggregate root, and derived totals.

pub mod entry;
#[allow(clippy::module_inception)]
pub mod ledger;

pub use entry::{Category, Entry};
pub use ledger::{Aggregates, Ledger};
