use thiserror::Error;

/// Error type for ledger validation failures.
///
/// The ledger is deliberately tolerant elsewhere: deleting an absent id is a
/// no-op, and percentage math with zero income resolves to the undefined
/// sentinel rather than an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("invalid entry: {reason}")]
    InvalidEntry { reason: String },
}

impl LedgerError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidEntry {
            reason: reason.into(),
        }
    }
}
