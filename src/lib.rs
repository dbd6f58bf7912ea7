#![doc(test(attr(deny(warnings))))]

//! Budgeter keeps an in-memory income/expense ledger with derived budget
//! aggregates, plus the interactive shell that drives it.

pub mod cli;
pub mod errors;
pub mod format;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Budgeter tracing initialized.");
    });
}
