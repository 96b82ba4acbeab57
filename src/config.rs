use serde::{Deserialize, Serialize};

/// Settings for the interactive shell
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ShellConfig {
    /// Symbol printed in front of balances
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Accounts required before the compare action will run
    #[serde(default = "default_min_accounts_to_compare")]
    pub min_accounts_to_compare: usize,

    /// Default tracing filter when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

fn default_min_accounts_to_compare() -> usize {
    2
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
            min_accounts_to_compare: default_min_accounts_to_compare(),
            log_level: default_log_level(),
        }
    }
}
