// Error taxonomy for the ledger
// Every failure leaves the store exactly as it was before the call.

use thiserror::Error;

// ============================================================================
// HARD FAILURES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    #[error("Empty account number")]
    EmptyAccountNumber,

    #[error("Account number already exists: {0}")]
    DuplicateAccountNumber(String),

    #[error("Account not found: {0}")]
    NotFound(String),

    #[error("Amount must be positive (got {0})")]
    NonPositiveAmount(f64),

    #[error("Insufficient funds: requested {requested:.2}, available {available:.2}")]
    InsufficientFunds { requested: f64, available: f64 },

    #[error("Name cannot be empty")]
    EmptyName,
}

pub type Result<T> = std::result::Result<T, LedgerError>;

// ============================================================================
// WARNINGS (operation still succeeds)
// ============================================================================

/// Condition reported alongside a successful creation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LedgerWarning {
    /// Initial balance was below zero and has been clamped to 0
    NegativeInitialBalance { requested: f64 },
}

impl std::fmt::Display for LedgerWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerWarning::NegativeInitialBalance { requested } => {
                write!(f, "Initial balance cannot be negative ({}), set to 0", requested)
            }
        }
    }
}
