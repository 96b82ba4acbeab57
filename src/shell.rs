// 🖥️ Interactive Shell - numbered text menu over an AccountStore
//
// Generic over input/output so sessions can be driven from memory in tests.
// Domain failures are printed and the session continues; only Quit (or the
// input running dry) ends it.

use crate::account::Account;
use crate::config::ShellConfig;
use crate::error::LedgerError;
use crate::store::AccountStore;
use anyhow::Result;
use std::cmp::Ordering;
use std::io::{BufRead, Write};

// ============================================================================
// MENU
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Create,
    List,
    Show,
    Deposit,
    Withdraw,
    Rename,
    Compare,
    Delete,
    Quit,
}

impl MenuChoice {
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::Create,
        MenuChoice::List,
        MenuChoice::Show,
        MenuChoice::Deposit,
        MenuChoice::Withdraw,
        MenuChoice::Rename,
        MenuChoice::Compare,
        MenuChoice::Delete,
        MenuChoice::Quit,
    ];

    /// Parse a menu line ("1" through "9", surrounding whitespace ignored)
    pub fn parse(line: &str) -> Option<Self> {
        let n: usize = line.trim().parse().ok()?;
        if n == 0 {
            return None;
        }
        Self::ALL.get(n - 1).copied()
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Create => "Create account",
            MenuChoice::List => "List accounts",
            MenuChoice::Show => "Show account",
            MenuChoice::Deposit => "Deposit",
            MenuChoice::Withdraw => "Withdraw",
            MenuChoice::Rename => "Rename account holder",
            MenuChoice::Compare => "Compare two accounts",
            MenuChoice::Delete => "Delete account",
            MenuChoice::Quit => "Quit",
        }
    }
}

/// Parse a monetary amount; non-numeric and non-finite input is rejected
pub fn parse_amount(line: &str) -> Option<f64> {
    line.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Render one account as a framed block
fn write_account<W: Write>(out: &mut W, config: &ShellConfig, account: &Account) -> Result<()> {
    writeln!(out, "====================")?;
    writeln!(out, "Account #: {}", account.account_number())?;
    writeln!(out, "Holder  : {}", account.holder_name())?;
    writeln!(
        out,
        "Balance : {}{:.2}",
        config.currency_symbol,
        account.balance()
    )?;
    writeln!(out, "====================")?;
    Ok(())
}

// ============================================================================
// SHELL
// ============================================================================

pub struct Shell<R, W> {
    input: R,
    output: W,
    store: AccountStore,
    config: ShellConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self {
            input,
            output,
            store: AccountStore::new(),
            config,
        }
    }

    pub fn store(&self) -> &AccountStore {
        &self.store
    }

    /// Consume the shell, handing back the output sink
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until Quit or end of input
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.print_menu()?;

            let Some(choice) = self.read_choice()? else {
                tracing::debug!("input closed, ending session");
                return Ok(());
            };

            match choice {
                MenuChoice::Create => self.action_create()?,
                MenuChoice::List => self.action_list()?,
                MenuChoice::Show => self.action_show()?,
                MenuChoice::Deposit => self.action_deposit()?,
                MenuChoice::Withdraw => self.action_withdraw()?,
                MenuChoice::Rename => self.action_rename()?,
                MenuChoice::Compare => self.action_compare()?,
                MenuChoice::Delete => self.action_delete()?,
                MenuChoice::Quit => {
                    writeln!(self.output, "Exiting program.")?;
                    return Ok(());
                }
            }
        }
    }

    // ========================================================================
    // INPUT
    // ========================================================================

    /// Next line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    fn read_choice(&mut self) -> Result<Option<MenuChoice>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(choice) = MenuChoice::parse(&line) {
                return Ok(Some(choice));
            }
            write!(self.output, "Invalid choice. Enter 1-9: ")?;
            self.output.flush()?;
        }
    }

    // ========================================================================
    // OUTPUT
    // ========================================================================

    fn print_menu(&mut self) -> Result<()> {
        writeln!(self.output, "\nBank Account Manager")?;
        for (i, choice) in MenuChoice::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, choice.label())?;
        }
        write!(self.output, "Enter your choice: ")?;
        self.output.flush()?;
        Ok(())
    }

    fn print_error(&mut self, err: &LedgerError) -> Result<()> {
        match err {
            LedgerError::NotFound(number) => {
                tracing::debug!(account = number.as_str(), "lookup failed");
                writeln!(self.output, "[Error] Not found.")?;
            }
            _ => writeln!(self.output, "[Error] {}", err)?,
        }
        Ok(())
    }

    fn print_balance(&mut self, account_number: &str) -> Result<()> {
        if let Ok(account) = self.store.get(account_number) {
            let balance = account.balance();
            writeln!(
                self.output,
                "Balance: {}{:.2}",
                self.config.currency_symbol, balance
            )?;
        }
        Ok(())
    }

    /// Prompt for an account number and confirm it exists
    fn prompt_existing(&mut self, text: &str) -> Result<Option<String>> {
        let Some(number) = self.prompt(text)? else {
            return Ok(None);
        };
        let lookup = self.store.get(&number).map(|_| ());
        if let Err(err) = lookup {
            self.print_error(&err)?;
            return Ok(None);
        }
        Ok(Some(number))
    }

    // ========================================================================
    // ACTIONS
    // ========================================================================

    fn action_create(&mut self) -> Result<()> {
        let Some(number) = self.prompt("Enter new account number: ")? else {
            return Ok(());
        };
        let Some(holder) = self.prompt("Enter account holder name: ")? else {
            return Ok(());
        };
        let Some(raw_balance) = self.prompt("Enter initial balance (>= 0): ")? else {
            return Ok(());
        };

        let initial = match parse_amount(&raw_balance) {
            Some(v) => v,
            None => {
                writeln!(self.output, "[Error] Invalid number.")?;
                0.0
            }
        };

        match self.store.create(&number, &holder, initial) {
            Ok(warning) => {
                if let Some(w) = warning {
                    writeln!(self.output, "[Warning] {}", w)?;
                }
                writeln!(self.output, "[Complete] Account created.")?;
            }
            Err(err) => self.print_error(&err)?,
        }
        Ok(())
    }

    fn action_list(&mut self) -> Result<()> {
        if self.store.is_empty() {
            writeln!(self.output, "(No accounts)")?;
            return Ok(());
        }
        for account in self.store.list() {
            write_account(&mut self.output, &self.config, account)?;
        }
        Ok(())
    }

    fn action_show(&mut self) -> Result<()> {
        let Some(number) = self.prompt("Enter account number: ")? else {
            return Ok(());
        };
        match self.store.get(&number) {
            Ok(account) => write_account(&mut self.output, &self.config, account)?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(())
    }

    fn action_deposit(&mut self) -> Result<()> {
        let Some(number) = self.prompt_existing("Enter account number: ")? else {
            return Ok(());
        };
        let Some(raw) = self.prompt("Enter deposit amount: ")? else {
            return Ok(());
        };
        let Some(amount) = parse_amount(&raw) else {
            writeln!(self.output, "[Error] Invalid amount.")?;
            return Ok(());
        };

        if let Err(err) = self.store.deposit(&number, amount) {
            self.print_error(&err)?;
        }
        self.print_balance(&number)
    }

    fn action_withdraw(&mut self) -> Result<()> {
        let Some(number) = self.prompt_existing("Enter account number: ")? else {
            return Ok(());
        };
        let Some(raw) = self.prompt("Enter withdrawal amount: ")? else {
            return Ok(());
        };
        let Some(amount) = parse_amount(&raw) else {
            writeln!(self.output, "[Error] Invalid amount.")?;
            return Ok(());
        };

        if let Err(err) = self.store.withdraw(&number, amount) {
            self.print_error(&err)?;
        }
        self.print_balance(&number)
    }

    fn action_rename(&mut self) -> Result<()> {
        let Some(number) = self.prompt_existing("Enter account number: ")? else {
            return Ok(());
        };
        let Some(new_name) = self.prompt("Enter new holder name: ")? else {
            return Ok(());
        };

        match self.store.rename(&number, &new_name) {
            Ok(()) => writeln!(self.output, "Holder renamed.")?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(())
    }

    fn action_compare(&mut self) -> Result<()> {
        if self.store.len() < self.config.min_accounts_to_compare {
            writeln!(
                self.output,
                "[Error] You need at least {} accounts to compare.",
                self.config.min_accounts_to_compare
            )?;
            return Ok(());
        }

        let Some(first) = self.prompt("Enter the first account number: ")? else {
            return Ok(());
        };
        let Some(second) = self.prompt("Enter the second account number: ")? else {
            return Ok(());
        };

        let cmp = match self.store.compare(&first, &second) {
            Ok(cmp) => cmp,
            Err(err) => {
                tracing::debug!(error = %err, "compare lookup failed");
                writeln!(
                    self.output,
                    "[Error] One or both of those accounts were not found."
                )?;
                return Ok(());
            }
        };

        writeln!(self.output, "\n=== Account Comparison ===")?;
        writeln!(
            self.output,
            "Comparing Account #{} and Account #{}...",
            cmp.first, cmp.second
        )?;
        if cmp.same_account_number {
            writeln!(self.output, " Both accounts have the same account number.")?;
        }
        match cmp.balance_order {
            Ordering::Equal => {
                writeln!(self.output, " Both accounts have the same balance.")?;
            }
            Ordering::Less => writeln!(
                self.output,
                " Account #{} has a smaller balance than Account #{}.",
                cmp.first, cmp.second
            )?,
            Ordering::Greater => writeln!(
                self.output,
                " Account #{} has a larger balance than Account #{}.",
                cmp.first, cmp.second
            )?,
        }
        writeln!(self.output, "===========================")?;
        Ok(())
    }

    fn action_delete(&mut self) -> Result<()> {
        let Some(number) = self.prompt("Enter account number to delete: ")? else {
            return Ok(());
        };
        match self.store.delete(&number) {
            Ok(_) => writeln!(self.output, "Account deleted.")?,
            Err(err) => self.print_error(&err)?,
        }
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Run a full session over `script`, returning the transcript and the finished shell
    fn run_session(script: &str) -> (String, Shell<Cursor<Vec<u8>>, Vec<u8>>) {
        let input = Cursor::new(script.as_bytes().to_vec());
        let mut shell = Shell::new(input, Vec::new(), ShellConfig::default());
        shell.run().unwrap();
        let transcript = String::from_utf8(shell.output.clone()).unwrap();
        (transcript, shell)
    }

    #[test]
    fn test_menu_choice_parse() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Create));
        assert_eq!(MenuChoice::parse(" 9 \n"), Some(MenuChoice::Quit));
        assert_eq!(MenuChoice::parse("0"), None);
        assert_eq!(MenuChoice::parse("10"), None);
        assert_eq!(MenuChoice::parse("abc"), None);
        assert_eq!(MenuChoice::parse("-1"), None);
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount("  -3 "), Some(-3.0));
        assert_eq!(parse_amount("ten"), None);
        assert_eq!(parse_amount("inf"), None);
        assert_eq!(parse_amount("NaN"), None);
    }

    #[test]
    fn test_quit_immediately() {
        let (out, shell) = run_session("9\n");
        assert!(out.contains("Bank Account Manager"));
        assert!(out.ends_with("Exiting program.\n"));
        assert!(shell.store().is_empty());
    }

    #[test]
    fn test_invalid_choice_reprompts() {
        let (out, _) = run_session("x\n42\n0\n9\n");
        assert_eq!(out.matches("Invalid choice. Enter 1-9: ").count(), 3);
        assert!(out.contains("Exiting program."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (out, _) = run_session("2\n");
        assert!(out.contains("(No accounts)"));
        assert!(!out.contains("Exiting program."));
    }

    #[test]
    fn test_create_deposit_withdraw_session() {
        let script = "1\nA1\nAlice Smith\n100\n4\nA1\n50\n5\nA1\n500\n9\n";
        let (out, shell) = run_session(script);

        assert!(out.contains("[Complete] Account created."));
        assert!(out.contains("Balance: $150.00"));
        assert!(out.contains("[Error] Insufficient funds"));

        let account = shell.store().get("A1").unwrap();
        assert_eq!(account.holder_name(), "Alice Smith");
        assert_eq!(account.balance(), 150.0);
    }

    #[test]
    fn test_create_negative_balance_warns() {
        let (out, shell) = run_session("1\nA1\nAlice\n-20\n9\n");
        assert!(out.contains("[Warning] Initial balance cannot be negative"));
        assert!(out.contains("[Complete] Account created."));
        assert_eq!(shell.store().get("A1").unwrap().balance(), 0.0);
    }

    #[test]
    fn test_create_invalid_balance_defaults_to_zero() {
        let (out, shell) = run_session("1\nA1\nAlice\nlots\n9\n");
        assert!(out.contains("[Error] Invalid number."));
        assert_eq!(shell.store().get("A1").unwrap().balance(), 0.0);
    }

    #[test]
    fn test_create_empty_and_duplicate() {
        let script = "1\n\nBob\n10\n1\nA1\nAlice\n1\n1\nA1\nAgain\n2\n9\n";
        let (out, shell) = run_session(script);

        assert!(out.contains("[Error] Empty account number"));
        assert!(out.contains("[Error] Account number already exists: A1"));
        assert_eq!(shell.store().len(), 1);
        assert_eq!(shell.store().get("A1").unwrap().holder_name(), "Alice");
    }

    #[test]
    fn test_invalid_amount_is_noop() {
        let (out, shell) = run_session("1\nA1\nAlice\n10\n4\nA1\nabc\n5\nA1\n\n9\n");
        assert_eq!(out.matches("[Error] Invalid amount.").count(), 2);
        assert_eq!(shell.store().get("A1").unwrap().balance(), 10.0);
    }

    #[test]
    fn test_missing_account_reports_not_found() {
        let (out, _) = run_session("3\nZZ\n4\nZZ\n6\nZZ\n8\nZZ\n9\n");
        assert_eq!(out.matches("[Error] Not found.").count(), 4);
        assert!(!out.contains("ZZ"));
        // No amount prompt once the account is missing
        assert!(!out.contains("Enter deposit amount"));
    }

    #[test]
    fn test_list_and_show() {
        let script = "1\nA1\nAlice\n10\n1\nB2\nBob\n20.5\n2\n3\nB2\n9\n";
        let (out, _) = run_session(script);

        let a1 = out.find("Account #: A1").unwrap();
        let b2 = out.find("Account #: B2").unwrap();
        assert!(a1 < b2);
        assert_eq!(out.matches("Account #: B2").count(), 2);
        assert!(out.contains("Balance : $20.50"));
    }

    #[test]
    fn test_rename_session() {
        let (out, shell) = run_session("1\nA1\nAlice\n0\n6\nA1\n\n6\nA1\nAlicia\n9\n");
        assert!(out.contains("[Error] Name cannot be empty"));
        assert!(out.contains("Holder renamed."));
        assert_eq!(shell.store().get("A1").unwrap().holder_name(), "Alicia");
    }

    #[test]
    fn test_compare_requires_two_accounts() {
        let (out, _) = run_session("1\nA1\nAlice\n10\n7\n9\n");
        assert!(out.contains("[Error] You need at least 2 accounts to compare."));
        assert!(!out.contains("Enter the first account number"));
    }

    #[test]
    fn test_compare_report() {
        let script = "1\nA1\nAlice\n75\n1\nA2\nBob\n75\n7\nA1\nA2\n4\nA2\n5\n7\nA1\nA2\n7\nA1\nZZ\n9\n";
        let (out, _) = run_session(script);

        assert!(out.contains("Comparing Account #A1 and Account #A2..."));
        assert!(out.contains(" Both accounts have the same balance."));
        assert!(!out.contains("same account number"));
        assert!(out.contains(" Account #A1 has a smaller balance than Account #A2."));
        assert!(out.contains("[Error] One or both of those accounts were not found."));
    }

    #[test]
    fn test_negative_zero_balance_shows_as_zero() {
        let script = "1\nA1\nAlice\n-0\n1\nA2\nBob\n0\n2\n7\nA1\nA2\n9\n";
        let (out, shell) = run_session(script);

        assert!(!out.contains("[Warning]"));
        assert!(!out.contains("-0.00"));
        assert_eq!(out.matches("Balance : $0.00").count(), 2);
        assert!(out.contains(" Both accounts have the same balance."));
        assert!(shell.store().get("A1").unwrap().balance().is_sign_positive());
    }

    #[test]
    fn test_delete_session() {
        let (out, shell) = run_session("1\nA1\nAlice\n10\n8\nA1\n3\nA1\n9\n");
        assert!(out.contains("Account deleted."));
        assert!(out.contains("[Error] Not found."));
        assert!(shell.store().is_empty());
    }

    #[test]
    fn test_currency_symbol_from_config() {
        let config = ShellConfig {
            currency_symbol: "€".to_string(),
            ..ShellConfig::default()
        };
        let input = Cursor::new(b"1\nA1\nAlice\n5\n2\n9\n".to_vec());
        let mut shell = Shell::new(input, Vec::new(), config);
        shell.run().unwrap();

        let out = String::from_utf8(shell.into_output()).unwrap();
        assert!(out.contains("Balance : €5.00"));
    }
}
