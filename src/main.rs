use anyhow::Result;
use std::io;
use tracing_subscriber::EnvFilter;

use account_ledger::{Shell, ShellConfig};

fn main() -> Result<()> {
    let config = ShellConfig::default();

    // Logs go to stderr so they never mix with the menu on stdout
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(version = account_ledger::VERSION, "starting account ledger");

    let stdin = io::stdin();
    let mut shell = Shell::new(stdin.lock(), io::stdout(), config);
    shell.run()?;

    tracing::info!(accounts = shell.store().len(), "session ended");

    Ok(())
}
