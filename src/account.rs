// 💳 Account Record - one bank account held by the store
//
// "Account number is IDENTITY (never changes), name and balance are VALUES (can change)"
//
// - Equality is by account number only
// - Ordering is by balance only (see `compare_balance`)
// - Balance is never negative; it only moves through deposit/withdraw

use crate::error::{LedgerError, LedgerWarning, Result};
use serde::Serialize;
use std::cmp::Ordering;

// ============================================================================
// ACCOUNT RECORD
// ============================================================================

/// A single account. Cloning yields a fully independent value.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    // ========================================================================
    // IDENTITY (never changes)
    // ========================================================================
    /// Account number, unique within a store
    account_number: String,

    // ========================================================================
    // VALUES (can change)
    // ========================================================================
    /// Holder name, never empty after a rename
    holder_name: String,

    /// Current balance, always >= 0
    balance: f64,
}

impl Account {
    /// Open a new account.
    ///
    /// A negative (or NaN) initial balance is clamped to 0 and reported as
    /// `LedgerWarning::NegativeInitialBalance`; the account is still created.
    /// Negative zero is stored as plain 0 without a warning.
    pub fn open(
        account_number: impl Into<String>,
        holder_name: impl Into<String>,
        initial_balance: f64,
    ) -> (Self, Option<LedgerWarning>) {
        let (balance, warning) = if initial_balance > 0.0 {
            (initial_balance, None)
        } else if initial_balance == 0.0 {
            (0.0, None)
        } else {
            (
                0.0,
                Some(LedgerWarning::NegativeInitialBalance {
                    requested: initial_balance,
                }),
            )
        };

        let account = Account {
            account_number: account_number.into(),
            holder_name: holder_name.into(),
            balance,
        };

        (account, warning)
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn holder_name(&self) -> &str {
        &self.holder_name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Add `amount` to the balance. Fails on `amount <= 0`.
    pub fn deposit(&mut self, amount: f64) -> Result<f64> {
        if !(amount > 0.0) {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        self.balance += amount;
        Ok(self.balance)
    }

    /// Take `amount` from the balance. Requires `0 < amount <= balance`.
    pub fn withdraw(&mut self, amount: f64) -> Result<f64> {
        if !(amount > 0.0) {
            return Err(LedgerError::NonPositiveAmount(amount));
        }
        if amount > self.balance {
            return Err(LedgerError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        Ok(self.balance)
    }

    /// Change the holder name. Empty names are rejected.
    pub fn rename(&mut self, new_name: impl Into<String>) -> Result<()> {
        let new_name = new_name.into();
        if new_name.is_empty() {
            return Err(LedgerError::EmptyName);
        }
        self.holder_name = new_name;
        Ok(())
    }

    /// Order two accounts by balance alone.
    ///
    /// This is deliberately unrelated to `==`: two accounts with different
    /// numbers can compare `Equal` here while `==` is false.
    pub fn compare_balance(&self, other: &Account) -> Ordering {
        // Balances are never NaN
        self.balance
            .partial_cmp(&other.balance)
            .unwrap_or(Ordering::Equal)
    }
}

/// Identity by key: same account number means same account.
impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.account_number == other.account_number
    }
}

impl Eq for Account {}

// ============================================================================
// TESTS
// ============================================================================
