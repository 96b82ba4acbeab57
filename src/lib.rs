// Account Ledger - Core Library
// Exposes the record store and the interactive shell for the CLI and tests

pub mod error;
pub mod account;
pub mod store;
pub mod config;
pub mod shell;

// Re-export commonly used types
pub use error::{LedgerError, LedgerWarning, Result};
pub use account::Account;
pub use store::{AccountStore, Comparison};
pub use config::ShellConfig;
pub use shell::{MenuChoice, Shell, parse_amount};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
