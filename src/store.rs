// 🗂️ Account Store - ordered, in-memory collection of accounts
//
// Accounts are kept in insertion order and addressed by account number.
// Invariants held across every call, success or failure:
// - no two accounts share an account number
// - no balance is negative

use crate::account::Account;
use crate::error::{LedgerError, LedgerWarning, Result};
use std::cmp::Ordering;
use tracing::{debug, warn};

// ============================================================================
// COMPARISON RESULT
// ============================================================================

/// Outcome of comparing two stored accounts
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub first: String,
    pub second: String,

    /// Both numbers refer to the same account
    pub same_account_number: bool,

    /// First account's balance relative to the second's
    pub balance_order: Ordering,
}

impl Comparison {
    pub fn balances_equal(&self) -> bool {
        self.balance_order == Ordering::Equal
    }

    /// Account number holding the larger balance, `None` when balances are equal
    pub fn larger_balance(&self) -> Option<&str> {
        match self.balance_order {
            Ordering::Greater => Some(&self.first),
            Ordering::Less => Some(&self.second),
            Ordering::Equal => None,
        }
    }
}

// ============================================================================
// ACCOUNT STORE
// ============================================================================

/// Exclusive owner of every account for the lifetime of a session
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: Vec<Account>,
}

impl AccountStore {
    /// Create new empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: Vec::new(),
        }
    }

    /// Position of the account with this number (first match in insertion order)
    pub fn find_index(&self, account_number: &str) -> Option<usize> {
        self.accounts
            .iter()
            .position(|a| a.account_number() == account_number)
    }

    /// Open and append a new account.
    ///
    /// Returns `Ok(Some(warning))` when the initial balance had to be clamped.
    pub fn create(
        &mut self,
        account_number: &str,
        holder_name: &str,
        initial_balance: f64,
    ) -> Result<Option<LedgerWarning>> {
        if account_number.is_empty() {
            return Err(LedgerError::EmptyAccountNumber);
        }
        if self.find_index(account_number).is_some() {
            return Err(LedgerError::DuplicateAccountNumber(account_number.to_string()));
        }

        let (account, warning) = Account::open(account_number, holder_name, initial_balance);
        if let Some(w) = &warning {
            warn!(account = account_number, "{}", w);
        }

        debug!(
            account = account_number,
            balance = account.balance(),
            "account created"
        );
        self.accounts.push(account);

        Ok(warning)
    }

    /// All accounts in insertion order
    pub fn list(&self) -> impl ExactSizeIterator<Item = &Account> + '_ {
        self.accounts.iter()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn get(&self, account_number: &str) -> Result<&Account> {
        self.accounts
            .iter()
            .find(|a| a.account_number() == account_number)
            .ok_or_else(|| LedgerError::NotFound(account_number.to_string()))
    }

    fn get_mut(&mut self, account_number: &str) -> Result<&mut Account> {
        self.accounts
            .iter_mut()
            .find(|a| a.account_number() == account_number)
            .ok_or_else(|| LedgerError::NotFound(account_number.to_string()))
    }

    /// Deposit into an account, returning the new balance
    pub fn deposit(&mut self, account_number: &str, amount: f64) -> Result<f64> {
        let balance = self.get_mut(account_number)?.deposit(amount)?;
        debug!(account = account_number, amount, balance, "deposit");
        Ok(balance)
    }

    /// Withdraw from an account, returning the new balance
    pub fn withdraw(&mut self, account_number: &str, amount: f64) -> Result<f64> {
        let balance = self.get_mut(account_number)?.withdraw(amount)?;
        debug!(account = account_number, amount, balance, "withdrawal");
        Ok(balance)
    }

    pub fn rename(&mut self, account_number: &str, new_name: &str) -> Result<()> {
        self.get_mut(account_number)?.rename(new_name)?;
        debug!(account = account_number, holder = new_name, "holder renamed");
        Ok(())
    }

    /// Remove an account; later accounts keep their relative order.
    /// Ownership of the removed record moves to the caller.
    pub fn delete(&mut self, account_number: &str) -> Result<Account> {
        let index = self
            .find_index(account_number)
            .ok_or_else(|| LedgerError::NotFound(account_number.to_string()))?;

        let removed = self.accounts.remove(index);
        debug!(account = account_number, "account deleted");
        Ok(removed)
    }

    /// Compare two accounts by identity and by balance.
    ///
    /// The store sets no minimum account count; that policy is the caller's.
    pub fn compare(&self, first: &str, second: &str) -> Result<Comparison> {
        let a = self.get(first)?;
        let b = self.get(second)?;

        Ok(Comparison {
            first: a.account_number().to_string(),
            second: b.account_number().to_string(),
            same_account_number: a == b,
            balance_order: a.compare_balance(b),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
