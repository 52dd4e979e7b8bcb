use std::fs::File;
use std::io;

use anyhow::{Context, Result};
use tracing::error;

use personal_ledger::prelude::*;
use personal_ledger::statement;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<_> = std::env::args().skip(1).collect();
    let as_csv = args.iter().any(|arg| arg == "--csv");
    let mut positional = args.iter().filter(|arg| !arg.starts_with("--"));

    let first_name = positional
        .next()
        .context("Expected the holder first name as first argument. Exiting...")?;
    let last_name = positional
        .next()
        .context("Expected the holder last name as second argument. Exiting...")?;
    let file_path = positional
        .next()
        .context("Expected the operations file path as third argument. Exiting...")?;

    let file = File::open(file_path)
        .with_context(|| format!("Failed to open file with path: {}. Exiting", file_path))?;

    let mut csv_decoder = CsvDecoder::new(file);
    let mut account = Account::new(first_name.as_str(), last_name.as_str());

    for op in csv_decoder.decode_ops() {
        let res = match &op {
            Operation::Deposit { amount, date } => account.deposit(*amount, date),
            Operation::Withdrawal { amount, date } => account.withdraw(*amount, date),
        };

        if let Err(err) = res {
            error!("Failed to apply operation: {op:?}: {err:?}");
        }
    }

    if as_csv {
        CsvEncoder::encode_statement(io::stdout(), &account)
            .context("Failed to encode the statement as Csv")?;
    } else {
        statement::print(&account).context("Failed to print the bank statement")?;
    }

    Ok(())
}
